// ============================================================================
// FETCH GUARD - Cancelación de requests ligada a la vida de la vista
// ============================================================================
// El guard envuelve un AbortController: la vista activa posee el guard y al
// navegar se dropea, abortando la request en vuelo. Así una respuesta tardía
// nunca escribe estado sobre una vista muerta.
// ============================================================================

use web_sys::{AbortController, AbortSignal};

pub struct FetchGuard {
    controller: Option<AbortController>,
}

impl FetchGuard {
    pub fn new() -> Self {
        match AbortController::new() {
            Ok(controller) => Self {
                controller: Some(controller),
            },
            Err(e) => {
                // Entorno sin AbortController: el guard queda inerte
                log::warn!("⚠️ AbortController no disponible: {:?}", e);
                Self { controller: None }
            }
        }
    }

    /// Guard inerte, sin controller. No aborta nada al dropearse.
    pub fn noop() -> Self {
        Self { controller: None }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }

    /// Abortar explícitamente (también ocurre al dropear el guard)
    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}
