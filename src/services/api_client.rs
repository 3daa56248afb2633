// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend.
// El bearer token y la señal de aborto se pasan por llamada.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use web_sys::AbortSignal;

use crate::models::auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use crate::models::cart::CartResponse;
use crate::models::checkout::{CreateOrderRequest, CreateOrderResponse};
use crate::models::notification::NotificationsResponse;
use crate::models::order::{Order, OrdersResponse};
use crate::models::product::{ProductQuery, ProductsResponse};
use crate::models::user::{BranchesResponse, ProfileResponse, UpdateProfileRequest};
use crate::config::CONFIG;
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Login con email y contraseña
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        let url = format!("{}/v1/auth/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Iniciando sesión para: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<LoginResponse>().await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Registrar un usuario nuevo
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, String> {
        let url = format!("{}/v1/auth/register", self.base_url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<RegisterResponse>().await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Listar productos del catálogo (búsqueda + filtro + paginación)
    pub async fn get_products(
        &self,
        query: &ProductQuery,
        signal: Option<&AbortSignal>,
    ) -> Result<ProductsResponse, String> {
        let qs = query.to_query_string(CONFIG.catalog_config.page_size);
        let url = format!("{}/v1/products?{}", self.base_url, qs);

        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<ProductsResponse>().await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Listar sucursales (para retiro en tienda)
    pub async fn get_branches(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<BranchesResponse, String> {
        let url = format!("{}/v1/branches", self.base_url);

        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<BranchesResponse>().await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Obtener el snapshot del carrito del usuario
    pub async fn get_cart(
        &self,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<CartResponse, String> {
        let url = format!("{}/v1/cart", self.base_url);

        let response = with_auth(Request::get(&url), Some(token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<CartResponse>().await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Agregar un producto al carrito
    pub async fn add_to_cart(
        &self,
        token: &str,
        product_id: &str,
        quantity: u32,
    ) -> Result<CartResponse, String> {
        let url = format!("{}/v1/cart/items", self.base_url);

        let response = with_auth(Request::post(&url), Some(token))
            .json(&serde_json::json!({
                "product_id": product_id,
                "quantity": quantity,
            }))
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<CartResponse>().await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Quitar un producto del carrito
    pub async fn remove_from_cart(
        &self,
        token: &str,
        product_id: &str,
    ) -> Result<CartResponse, String> {
        let url = format!("{}/v1/cart/items/{}", self.base_url, product_id);

        let response = with_auth(Request::delete(&url), Some(token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<CartResponse>().await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Crear pedido con el borrador acumulado + items del carrito
    pub async fn create_order(
        &self,
        token: &str,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, String> {
        let url = format!("{}/v1/orders", self.base_url);

        log::info!("🧾 Creando pedido ({} items)", request.items.len());

        let response = with_auth(Request::post(&url), Some(token))
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            let data = response.json::<CreateOrderResponse>().await
                .map_err(|e| format!("Parse error: {}", e))?;
            if data.success {
                log::info!("✅ Pedido creado: {:?}", data.order_id);
            } else {
                log::error!("❌ Error creando pedido: {:?}", data.error);
            }
            Ok(data)
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Historial de pedidos del usuario
    pub async fn get_orders(
        &self,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<OrdersResponse, String> {
        let url = format!("{}/v1/orders", self.base_url);

        let response = with_auth(Request::get(&url), Some(token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<OrdersResponse>().await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Obtener un pedido por id
    pub async fn get_order(
        &self,
        token: &str,
        order_id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<Order, String> {
        let url = format!("{}/v1/orders/{}", self.base_url, order_id);

        let response = with_auth(Request::get(&url), Some(token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {}: {}", status, error_text));
        }
        response.json::<Order>().await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Perfil del usuario autenticado
    pub async fn get_profile(
        &self,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<ProfileResponse, String> {
        let url = format!("{}/v1/profile", self.base_url);

        let response = with_auth(Request::get(&url), Some(token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<ProfileResponse>().await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Actualizar datos del perfil
    pub async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> Result<ProfileResponse, String> {
        let url = format!("{}/v1/profile", self.base_url);

        let response = with_auth(Request::put(&url), Some(token))
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response.json::<ProfileResponse>().await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Cambiar la contraseña del usuario
    pub async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<(), String> {
        let url = format!("{}/v1/profile/password", self.base_url);

        let response = with_auth(Request::post(&url), Some(token))
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(format!("HTTP error {}: {}", status, error_text))
        }
    }

    /// Notificaciones del usuario
    pub async fn get_notifications(
        &self,
        token: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<NotificationsResponse, String> {
        let url = format!("{}/v1/notifications", self.base_url);

        let response = with_auth(Request::get(&url), Some(token))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<NotificationsResponse>().await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Marcar una notificación como leída
    pub async fn mark_notification_read(
        &self,
        token: &str,
        notification_id: &str,
    ) -> Result<(), String> {
        let url = format!("{}/v1/notifications/{}/read", self.base_url, notification_id);

        let response = with_auth(Request::post(&url), Some(token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
