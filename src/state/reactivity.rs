// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Identificador de una suscripción, para poder darse de baja
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Callback = Rc<dyn Fn()>;

/// Lista de subscribers con alta/baja explícita. Es la interfaz de
/// publicación/suscripción que usan los estados compartidos.
#[derive(Clone)]
pub struct Subscribers {
    entries: Rc<RefCell<Vec<(SubscriptionId, Callback)>>>,
    next_id: Rc<RefCell<usize>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(RefCell::new(0)),
        }
    }

    /// Suscribirse a cambios; devuelve el id para `unsubscribe`
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let mut next = self.next_id.borrow_mut();
        let id = SubscriptionId(*next);
        *next += 1;
        self.entries.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Darse de baja de una suscripción
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.entries.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Clonar los callbacks para no mantener el borrow durante la llamada
        let callbacks: Vec<Callback> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl Default for Subscribers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notificacion_llega_a_todos() {
        let subs = Subscribers::new();
        let counter = Rc::new(RefCell::new(0));

        let c1 = counter.clone();
        subs.subscribe(move || *c1.borrow_mut() += 1);
        let c2 = counter.clone();
        subs.subscribe(move || *c2.borrow_mut() += 10);

        subs.notify();
        assert_eq!(*counter.borrow(), 11);
    }

    #[test]
    fn test_unsubscribe_deja_de_notificar() {
        let subs = Subscribers::new();
        let counter = Rc::new(RefCell::new(0));

        let c1 = counter.clone();
        let id = subs.subscribe(move || *c1.borrow_mut() += 1);

        subs.notify();
        subs.unsubscribe(id);
        subs.notify();

        assert_eq!(*counter.borrow(), 1);
        assert_eq!(subs.len(), 0);
    }

    #[test]
    fn test_subscriber_puede_resuscribir_durante_notify() {
        // notify no debe entrar en pánico por borrow si un callback consulta
        // la propia lista
        let subs = Subscribers::new();
        let subs_clone = subs.clone();
        subs.subscribe(move || {
            let _ = subs_clone.len();
        });
        subs.notify();
    }
}
