// ============================================================================
// CART MODELS - Carrito (propiedad del backend, solo lectura en checkout)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Snapshot ordenado del carrito. El carrito pertenece al backend; el flujo
/// de checkout solo lo lee y su vacuidad decide si el checkout es alcanzable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.subtotal()).sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartResponse {
    pub success: bool,
    pub cart: Option<CartSnapshot>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, qty: u32) -> CartItem {
        CartItem {
            product_id: id.to_string(),
            name: format!("Producto {}", id),
            unit_price: price,
            quantity: qty,
        }
    }

    #[test]
    fn test_total_del_carrito() {
        let cart = CartSnapshot {
            items: vec![item("a", 2.5, 2), item("b", 10.0, 1)],
        };
        assert_eq!(cart.total(), 15.0);
        assert_eq!(cart.len(), 2);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_carrito_vacio() {
        assert!(CartSnapshot::default().is_empty());
        assert_eq!(CartSnapshot::default().total(), 0.0);
    }
}
