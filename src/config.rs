use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub checkout_config: CheckoutConfig,
    pub catalog_config: CatalogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.pharma-store.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            checkout_config: CheckoutConfig::default(),
            catalog_config: CatalogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Delay fijo antes de re-verificar un carrito vacío al entrar al checkout.
    /// Es un debounce contra estados vacíos transitorios durante la hidratación
    /// del carrito, no un retry.
    pub empty_cart_recheck_ms: u32,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            empty_cart_recheck_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.pharma-store.app").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            checkout_config: CheckoutConfig {
                empty_cart_recheck_ms: option_env!("EMPTY_CART_RECHECK_MS")
                    .unwrap_or("1500").parse().unwrap_or(1500),
            },
            catalog_config: CatalogConfig {
                page_size: option_env!("CATALOG_PAGE_SIZE")
                    .unwrap_or("20").parse().unwrap_or(20),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_segun_entorno() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), config.backend_url_development);
        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), config.backend_url_production);
    }
}
