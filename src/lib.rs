// ============================================================================
// PHARMA STORE PWA - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod validation;
mod viewmodels;
mod views;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::App;
use crate::state::session_state::WebTokenStore;
use crate::state::{AppState, Route};
use crate::utils::SESSION_TOKEN_KEY;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 Pharma Store PWA - Rust Puro + MVVM");

    // Crear y renderizar app (proveedor de sesión real, sobre Web Storage)
    let state = AppState::new(Rc::new(WebTokenStore::new()));
    let mut app = App::new(state.clone())?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listener global de hashchange: se registra UNA sola vez aquí
    {
        let state_nav = state.clone();
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            dispatch_current_route(&state_nav);
        }) as Box<dyn FnMut(web_sys::Event)>);
        if let Some(window) = web_sys::window() {
            window.add_event_listener_with_callback(
                "hashchange",
                closure.as_ref().unchecked_ref(),
            )?;
        }
        closure.forget();
    }

    // Listener global de storage: sincroniza la sesión entre pestañas
    // (last-write-wins, el valor del evento es el más reciente)
    {
        let state_sync = state.clone();
        let closure = Closure::wrap(Box::new(move |e: web_sys::StorageEvent| {
            if e.key().as_deref() == Some(SESSION_TOKEN_KEY) {
                log::info!("🔐 [SYNC] Cambio de sesión en otra pestaña");
                state_sync.session.apply_external_change(e.new_value());
                state_sync.notify_subscribers();
            }
        }) as Box<dyn FnMut(web_sys::StorageEvent)>);
        if let Some(window) = web_sys::window() {
            window.add_event_listener_with_callback(
                "storage",
                closure.as_ref().unchecked_ref(),
            )?;
        }
        closure.forget();
    }

    // Resolver la ruta inicial desde el hash actual (deep-link / recarga)
    dispatch_current_route(&state);

    Ok(())
}

/// Leer el hash actual, actualizar la ruta y disparar las cargas de datos.
/// El secuenciador de checkout corre solo al ENTRAR al flujo, no al navegar
/// entre sus pasos.
fn dispatch_current_route(state: &AppState) {
    let hash = web_sys::window()
        .map(|w| w.location().hash().unwrap_or_default())
        .unwrap_or_default();
    let route = Route::parse(&hash);

    let was_checkout = state.current_route().is_checkout();
    state.set_route(route.clone());
    app::load_route_data(state, &route);

    if route.is_checkout() && !was_checkout {
        crate::viewmodels::CheckoutViewModel::new().enter(state);
    }
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
