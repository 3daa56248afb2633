// ============================================================================
// CART STATE - Snapshot local del carrito remoto
// ============================================================================
// El carrito pertenece al backend; aquí solo se cachea el último snapshot
// junto con los flags de loading/error de su fetch.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::cart::CartSnapshot;

#[derive(Clone)]
pub struct CartState {
    cart: Rc<RefCell<Option<CartSnapshot>>>,
    loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
}

impl CartState {
    pub fn new() -> Self {
        Self {
            cart: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_cart(&self, cart: Option<CartSnapshot>) {
        *self.cart.borrow_mut() = cart;
    }

    pub fn get_cart(&self) -> Option<CartSnapshot> {
        self.cart.borrow().clone()
    }

    /// Cantidad de líneas del snapshot actual (0 si aún no se hidrató)
    pub fn item_count(&self) -> usize {
        self.cart.borrow().as_ref().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_de_fetch_del_snapshot() {
        let cart = CartState::new();
        assert!(!cart.is_loading());
        assert!(cart.get_error().is_none());

        cart.set_loading(true);
        cart.set_error(Some("HTTP 500".to_string()));
        assert!(cart.is_loading());
        assert_eq!(cart.get_error(), Some("HTTP 500".to_string()));

        // Un fetch exitoso limpia el error
        cart.set_loading(false);
        cart.set_error(None);
        assert!(cart.get_error().is_none());
    }
}
