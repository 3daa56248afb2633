// ============================================================================
// ORDER MODELS - Pedidos remotos y mapeo de estado para UI
// ============================================================================
// El backend es la fuente de verdad: status y order_type se consumen como
// strings opacos y se mapean en cada render, sin estado propio.
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::cart::CartItem;

/// Pedido tal como lo devuelve el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// `requested`, `paid`, `delivered`, `approved`, `ready_for_pickup`,
    /// `in_progress`, `completed`, `canceled`
    pub status: String,
    /// `pickup` o `delivery`
    pub order_type: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<Order>,
    pub error: Option<String>,
}

/// Clasificación UI derivada del par (status, type) de un pedido remoto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatusView {
    WaitingApproval,
    WaitingPaymentApproval,
    Rejected,
    Completed,
    ReadyForPickup,
    InTransit,
    Delivered,
    StatusUpdate,
}

impl OrderStatusView {
    /// Clave i18n del texto a mostrar
    pub fn label_key(&self) -> &'static str {
        match self {
            OrderStatusView::WaitingApproval => "esperando_aprobacion",
            OrderStatusView::WaitingPaymentApproval => "esperando_aprobacion_pago",
            OrderStatusView::Rejected => "pedido_rechazado",
            OrderStatusView::Completed => "pedido_completado",
            OrderStatusView::ReadyForPickup => "listo_para_retirar",
            OrderStatusView::InTransit => "en_camino",
            OrderStatusView::Delivered => "entregado",
            OrderStatusView::StatusUpdate => "estado_actualizado",
        }
    }

    /// Clase CSS del badge de estado
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatusView::Rejected => "status-rejected",
            OrderStatusView::Completed | OrderStatusView::Delivered => "status-completed",
            OrderStatusView::WaitingApproval | OrderStatusView::WaitingPaymentApproval => "status-waiting",
            _ => "status-progress",
        }
    }
}

/// Mapear (status, type) a la vista de estado.
/// Función total: cualquier par fuera del dominio enumerado cae en
/// StatusUpdate. `canceled` gana siempre, independiente del tipo.
pub fn order_status_view(status: &str, order_type: &str) -> OrderStatusView {
    if status == "canceled" {
        return OrderStatusView::Rejected;
    }

    match status {
        "requested" => OrderStatusView::WaitingApproval,
        "paid" => OrderStatusView::WaitingPaymentApproval,
        "approved" => {
            if order_type == "pickup" {
                OrderStatusView::Completed
            } else {
                OrderStatusView::StatusUpdate
            }
        }
        "ready_for_pickup" => OrderStatusView::ReadyForPickup,
        "in_progress" => OrderStatusView::InTransit,
        "completed" => OrderStatusView::Delivered,
        _ => OrderStatusView::StatusUpdate,
    }
}

impl Order {
    pub fn status_view(&self) -> OrderStatusView {
        order_status_view(&self.status, &self.order_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canceled_gana_siempre() {
        assert_eq!(order_status_view("canceled", "pickup"), OrderStatusView::Rejected);
        assert_eq!(order_status_view("canceled", "delivery"), OrderStatusView::Rejected);
        assert_eq!(order_status_view("canceled", "otro"), OrderStatusView::Rejected);
    }

    #[test]
    fn test_approved_depende_del_tipo() {
        assert_eq!(order_status_view("approved", "pickup"), OrderStatusView::Completed);
        assert_eq!(order_status_view("approved", "delivery"), OrderStatusView::StatusUpdate);
    }

    #[test]
    fn test_mapeo_es_total() {
        // Todo par del dominio enumerado mapea a exactamente una vista
        let statuses = [
            "requested", "paid", "delivered", "approved",
            "ready_for_pickup", "in_progress", "completed", "canceled",
        ];
        let types = ["pickup", "delivery"];
        for status in statuses {
            for order_type in types {
                // No debe entrar en pánico y devuelve una variante
                let _ = order_status_view(status, order_type);
            }
        }
        // Fuera del dominio cae en la vista genérica
        assert_eq!(order_status_view("desconocido", "pickup"), OrderStatusView::StatusUpdate);
        assert_eq!(order_status_view("", ""), OrderStatusView::StatusUpdate);
    }

    #[test]
    fn test_estados_de_transito() {
        assert_eq!(order_status_view("ready_for_pickup", "pickup"), OrderStatusView::ReadyForPickup);
        assert_eq!(order_status_view("in_progress", "delivery"), OrderStatusView::InTransit);
        assert_eq!(order_status_view("completed", "delivery"), OrderStatusView::Delivered);
    }

    #[test]
    fn test_estados_de_espera() {
        assert_eq!(order_status_view("requested", "delivery"), OrderStatusView::WaitingApproval);
        assert_eq!(order_status_view("paid", "pickup"), OrderStatusView::WaitingPaymentApproval);
    }
}
