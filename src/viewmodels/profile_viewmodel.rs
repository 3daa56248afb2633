// ============================================================================
// PROFILE VIEWMODEL - Perfil, direcciones y cambio de contraseña
// ============================================================================

use crate::models::auth::ChangePasswordRequest;
use crate::models::user::UpdateProfileRequest;
use crate::services::{ApiClient, FetchGuard};
use crate::state::{AppState, Route};
use crate::validation::{
    validate_password_change, validate_profile_edit, PasswordChangeForm, ProfileEditForm,
    ValidationErrors,
};

pub struct ProfileViewModel {
    api_client: ApiClient,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar el perfil del usuario autenticado
    pub async fn load_profile(&self, state: AppState) {
        let Some(token) = state.session.token() else {
            crate::app::navigate(&Route::Login);
            return;
        };

        let guard = FetchGuard::new();
        let signal = guard.signal();
        state.track_fetch(guard);

        state.set_loading(true);
        let result = self.api_client.get_profile(&token, signal.as_ref()).await;
        state.set_loading(false);

        match result {
            Ok(response) if response.success => {
                *state.profile.borrow_mut() = response.profile;
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ Error cargando perfil: {:?}", response.error);
                *state.profile.borrow_mut() = None;
                state.notify_subscribers();
            }
            Err(e) => {
                log::warn!("⚠️ Fetch de perfil terminó con error: {}", e);
            }
        }
    }

    /// Guardar la edición del perfil (valida el esquema con umbral de 14
    /// años antes de delegar al backend)
    pub async fn save_profile(
        &self,
        state: AppState,
        form: ProfileEditForm,
    ) -> Result<(), ValidationErrors> {
        validate_profile_edit(&form, &state.language())?;

        let Some(token) = state.session.token() else {
            crate::app::navigate(&Route::Login);
            return Ok(());
        };

        let request = UpdateProfileRequest {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            phone: if form.phone.trim().is_empty() {
                None
            } else {
                Some(form.phone.trim().to_string())
            },
            birth_date: Some(form.birth_date.trim().to_string()),
        };

        state.set_loading(true);
        let result = self.api_client.update_profile(&token, &request).await;
        state.set_loading(false);

        match result {
            Ok(response) if response.success => {
                log::info!("✅ Perfil actualizado");
                *state.profile.borrow_mut() = response.profile;
                state.notify_subscribers();
            }
            Ok(response) => {
                log::error!("❌ Backend rechazó la edición: {:?}", response.error);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
            Err(e) => {
                log::error!("❌ Error guardando perfil: {}", e);
                state.set_error(Some(crate::utils::t("error_generico", &state.language())));
            }
        }
        Ok(())
    }

    /// Cambiar contraseña (validación local primero)
    pub async fn change_password(
        &self,
        state: AppState,
        form: PasswordChangeForm,
    ) -> Result<(), ValidationErrors> {
        validate_password_change(&form, &state.language())?;

        let Some(token) = state.session.token() else {
            crate::app::navigate(&Route::Login);
            return Ok(());
        };

        let request = ChangePasswordRequest {
            current_password: form.current_password.clone(),
            new_password: form.new_password.clone(),
        };

        state.set_loading(true);
        let result = self.api_client.change_password(&token, &request).await;
        state.set_loading(false);

        if let Err(e) = result {
            log::error!("❌ Error cambiando contraseña: {}", e);
            state.set_error(Some(crate::utils::t("error_generico", &state.language())));
        } else {
            log::info!("✅ Contraseña cambiada");
        }
        Ok(())
    }
}

impl Default for ProfileViewModel {
    fn default() -> Self {
        Self::new()
    }
}
