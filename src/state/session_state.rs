// ============================================================================
// SESSION STATE - Proveedor de sesión inyectable (token bearer)
// ============================================================================
// El backend de storage se inyecta (trait TokenStore) y los cambios de
// sesión se publican por la interfaz de suscripción explícita, de modo que
// los tests usan un store en memoria sin tocar el storage real.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::reactivity::{Subscribers, SubscriptionId};

/// Backend de persistencia del token de sesión
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Store real: escribe la clave única del token en localStorage (durable)
/// Y sessionStorage (por pestaña)
pub struct WebTokenStore;

impl WebTokenStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for WebTokenStore {
    fn load(&self) -> Option<String> {
        use gloo_storage::{LocalStorage, SessionStorage, Storage};
        // Hidratar primero desde el storage de la pestaña; si no hay,
        // caer al durable
        SessionStorage::get::<String>(crate::utils::SESSION_TOKEN_KEY)
            .ok()
            .or_else(|| LocalStorage::get::<String>(crate::utils::SESSION_TOKEN_KEY).ok())
    }

    fn save(&self, token: &str) {
        use gloo_storage::{LocalStorage, SessionStorage, Storage};
        if let Err(e) = LocalStorage::set(crate::utils::SESSION_TOKEN_KEY, token) {
            log::error!("❌ Error guardando token en localStorage: {:?}", e);
        }
        if let Err(e) = SessionStorage::set(crate::utils::SESSION_TOKEN_KEY, token) {
            log::error!("❌ Error guardando token en sessionStorage: {:?}", e);
        }
    }

    fn clear(&self) {
        use gloo_storage::{LocalStorage, SessionStorage, Storage};
        LocalStorage::delete(crate::utils::SESSION_TOKEN_KEY);
        SessionStorage::delete(crate::utils::SESSION_TOKEN_KEY);
    }
}

/// Store en memoria para tests
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Estado de sesión. La ausencia de token NO es un error: es el estado por
/// defecto, y las vistas protegidas redirigen a login.
#[derive(Clone)]
pub struct SessionState {
    token: Rc<RefCell<Option<String>>>,
    store: Rc<dyn TokenStore>,
    subscribers: Subscribers,
}

impl SessionState {
    /// Crear el estado hidratando el token desde el store inyectado
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        let token = store.load();
        if token.is_some() {
            log::info!("💾 [SESSION] Token encontrado en storage, sesión restaurada");
        }
        Self {
            token: Rc::new(RefCell::new(token)),
            store,
            subscribers: Subscribers::new(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Login: persiste el token y notifica. La navegación a home la hace
    /// el viewmodel que invoca
    pub fn login(&self, token: String) {
        self.store.save(&token);
        *self.token.borrow_mut() = Some(token);
        log::info!("🔐 [SESSION] Login completado");
        self.subscribers.notify();
    }

    /// Logout: limpia storage durable y de pestaña, y notifica
    pub fn logout(&self) {
        self.store.clear();
        *self.token.borrow_mut() = None;
        log::info!("👋 [SESSION] Logout completado");
        self.subscribers.notify();
    }

    /// Aplicar un token escrito externamente (otra pestaña). Last-write-wins,
    /// sin resolución de conflictos: el valor recibido pisa el local.
    pub fn apply_external_change(&self, token: Option<String>) {
        let changed = *self.token.borrow() != token;
        if changed {
            log::info!("🔄 [SESSION] Cambio de sesión externo aplicado (last-write-wins)");
            *self.token.borrow_mut() = token;
            self.subscribers.notify();
        }
    }

    /// Suscribirse a cambios de sesión (login/logout/cambio externo)
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidrata_desde_store() {
        let session = SessionState::new(Rc::new(MemoryTokenStore::with_token("tok-1")));
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("tok-1".to_string()));
    }

    #[test]
    fn test_sin_token_es_estado_por_defecto() {
        let session = SessionState::new(Rc::new(MemoryTokenStore::new()));
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_persiste_y_notifica() {
        let store = Rc::new(MemoryTokenStore::new());
        let session = SessionState::new(store.clone());

        let notified = Rc::new(RefCell::new(0));
        let n = notified.clone();
        session.subscribe(move || *n.borrow_mut() += 1);

        session.login("tok-abc".to_string());
        assert_eq!(store.load(), Some("tok-abc".to_string()));
        assert_eq!(*notified.borrow(), 1);
    }

    #[test]
    fn test_logout_limpia_store() {
        let store = Rc::new(MemoryTokenStore::with_token("tok-1"));
        let session = SessionState::new(store.clone());

        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_cambio_externo_last_write_wins() {
        let session = SessionState::new(Rc::new(MemoryTokenStore::with_token("local")));

        let notified = Rc::new(RefCell::new(0));
        let n = notified.clone();
        session.subscribe(move || *n.borrow_mut() += 1);

        session.apply_external_change(Some("remoto".to_string()));
        assert_eq!(session.token(), Some("remoto".to_string()));
        assert_eq!(*notified.borrow(), 1);

        // Aplicar el mismo valor no re-notifica
        session.apply_external_change(Some("remoto".to_string()));
        assert_eq!(*notified.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let session = SessionState::new(Rc::new(MemoryTokenStore::new()));
        let notified = Rc::new(RefCell::new(0));
        let n = notified.clone();
        let id = session.subscribe(move || *n.borrow_mut() += 1);
        session.unsubscribe(id);
        session.login("tok".to_string());
        assert_eq!(*notified.borrow(), 0);
    }
}
