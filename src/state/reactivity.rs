// ============================================================================
// REACTIVITY - Contenedor observable para re-renderizar al cambiar el estado
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Box<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Leer el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    // El borrow del valor ya se soltó: los subscribers pueden leerlo
    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn update_notifies_every_subscriber() {
        let state = ReactiveState::new(0u32);
        let calls = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1));
        }

        state.update(|v| *v += 5);
        state.set(7);

        assert_eq!(calls.get(), 4);
        assert_eq!(state.snapshot(), 7);
    }

    #[test]
    fn subscribers_can_read_the_new_value() {
        let state = Rc::new(ReactiveState::new(String::from("a")));
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let reader = Rc::downgrade(&state);
            let seen = seen.clone();
            state.subscribe(move || {
                if let Some(state) = reader.upgrade() {
                    *seen.borrow_mut() = state.snapshot();
                }
            });
        }

        state.update(|v| v.push('b'));
        assert_eq!(*seen.borrow(), "ab");
    }
}
