// ============================================================================
// CHECKOUT STATE - Store del borrador de pedido en curso
// ============================================================================
// Con scope al subtree del checkout: se crea vacío al montar el layout y se
// descarta al navegar fuera. No se persiste entre recargas: una recarga
// reinicia el flujo desde el paso de envío (simplificación deliberada; el
// carrito, que es del backend, sí persiste).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::checkout::{CheckoutDraft, PaymentMethod, ShippingMethod};
use crate::state::reactivity::Subscribers;

#[derive(Clone)]
pub struct CheckoutState {
    draft: Rc<RefCell<CheckoutDraft>>,
    /// Id del pedido creado al confirmar (transición de una sola vía)
    submitted_order_id: Rc<RefCell<Option<String>>>,
    subscribers: Subscribers,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self {
            draft: Rc::new(RefCell::new(CheckoutDraft::new())),
            submitted_order_id: Rc::new(RefCell::new(None)),
            subscribers: Subscribers::new(),
        }
    }

    pub fn get_draft(&self) -> CheckoutDraft {
        self.draft.borrow().clone()
    }

    pub fn set_shipping_method(&self, method: ShippingMethod) {
        self.draft.borrow_mut().shipping_method = Some(method);
        self.subscribers.notify();
    }

    pub fn set_branch_or_address(&self, id: String) {
        self.draft.borrow_mut().branch_or_address_id = id;
        self.subscribers.notify();
    }

    pub fn set_payment_method(&self, method: PaymentMethod) {
        self.draft.borrow_mut().payment_method = Some(method);
        self.subscribers.notify();
    }

    /// Descartar el borrador (al abandonar el flujo o tras confirmar)
    pub fn reset(&self) {
        *self.draft.borrow_mut() = CheckoutDraft::new();
        *self.submitted_order_id.borrow_mut() = None;
        self.subscribers.notify();
    }

    /// Marcar el pedido como enviado. Después de esto el flujo no permite
    /// volver a mutar pasos ya confirmados.
    pub fn mark_submitted(&self, order_id: String) {
        *self.submitted_order_id.borrow_mut() = Some(order_id);
        self.subscribers.notify();
    }

    pub fn submitted_order_id(&self) -> Option<String> {
        self.submitted_order_id.borrow().clone()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_order_id.borrow().is_some()
    }

    pub fn subscribe<F>(&self, callback: F) -> crate::state::reactivity::SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback)
    }
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrador_se_construye_incrementalmente() {
        let state = CheckoutState::new();
        assert!(!state.get_draft().is_submit_ready());

        state.set_shipping_method(ShippingMethod::Pickup);
        state.set_branch_or_address("branch-42".to_string());
        assert!(!state.get_draft().is_submit_ready());

        state.set_payment_method(PaymentMethod::Mobile);
        assert!(state.get_draft().is_submit_ready());
    }

    #[test]
    fn test_reset_descarta_todo() {
        let state = CheckoutState::new();
        state.set_shipping_method(ShippingMethod::Delivery);
        state.mark_submitted("order-1".to_string());

        state.reset();
        assert_eq!(state.get_draft(), CheckoutDraft::new());
        assert!(!state.is_submitted());
    }

    #[test]
    fn test_mutaciones_notifican() {
        let state = CheckoutState::new();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        state.subscribe(move || *c.borrow_mut() += 1);

        state.set_shipping_method(ShippingMethod::Pickup);
        state.set_branch_or_address("b".to_string());
        state.set_payment_method(PaymentMethod::Cash);
        assert_eq!(*count.borrow(), 3);
    }
}
