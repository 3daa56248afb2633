// ============================================================================
// SESSION VIEWMODEL - Login / registro / logout
// ============================================================================

use crate::models::auth::RegisterRequest;
use crate::services::ApiClient;
use crate::state::{AppState, Route};
use crate::validation::{validate_register, RegisterForm, ValidationErrors};

pub struct SessionViewModel {
    api_client: ApiClient,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Login: al tener token lo persiste en el proveedor de sesión y navega
    /// a home
    pub async fn login(&self, state: AppState, email: String, password: String) {
        state.set_loading(true);
        let result = self.api_client.login(&email, &password).await;
        state.set_loading(false);

        match result {
            Ok(response) if response.success => match response.token {
                Some(token) => {
                    state.session.login(token);
                    crate::app::navigate(&Route::Home);
                }
                None => {
                    log::error!("❌ [AUTH] Respuesta de login sin token");
                    state.set_error(Some(crate::utils::t("error_generico", &state.language())));
                }
            },
            Ok(response) => {
                log::warn!("⚠️ [AUTH] Login rechazado: {:?}", response.error);
                state.set_error(response.error.or_else(|| {
                    Some(crate::utils::t("error_generico", &state.language()))
                }));
            }
            Err(e) => {
                log::error!("❌ [AUTH] Error de login: {}", e);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
        }
    }

    /// Registro: valida el esquema localmente y luego delega al backend.
    /// Si el backend devuelve token, inicia sesión directamente.
    pub async fn register(
        &self,
        state: AppState,
        form: RegisterForm,
    ) -> Result<(), ValidationErrors> {
        validate_register(&form, &state.language())?;

        let request = RegisterRequest {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            birth_date: form.birth_date.trim().to_string(),
            password: form.password.clone(),
        };

        state.set_loading(true);
        let result = self.api_client.register(&request).await;
        state.set_loading(false);

        match result {
            Ok(response) if response.success => {
                if let Some(token) = response.token {
                    state.session.login(token);
                }
                crate::app::navigate(&Route::Home);
            }
            Ok(response) => {
                log::warn!("⚠️ [AUTH] Registro rechazado: {:?}", response.error);
                state.set_error(response.error.or_else(|| {
                    Some(crate::utils::t("error_generico", &state.language()))
                }));
            }
            Err(e) => {
                log::error!("❌ [AUTH] Error de registro: {}", e);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
        }
        Ok(())
    }

    /// Logout: limpia la sesión (storage durable y de pestaña) y navega a
    /// home
    pub fn logout(&self, state: &AppState) {
        state.session.logout();
        state.cart.set_cart(None);
        crate::app::navigate(&Route::Home);
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
