use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A shared state cell that notifies subscribers when its value changes.
///
/// Writes that leave the value unchanged are dropped, which makes `set` and
/// `update` idempotent from the DOM's point of view.
pub struct Signal<T: 'static + Clone + PartialEq> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: 'static + Clone + PartialEq> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T: 'static + Clone + PartialEq> Signal<T> {
    /// Create a signal holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replace the value. Returns whether it changed.
    pub fn set(&self, new_value: T) -> bool {
        {
            let mut value = self.value.borrow_mut();
            if *value == new_value {
                return false;
            }
            *value = new_value;
        }

        self.notify();
        true
    }

    /// Mutate the value in place. Subscribers run only if it changed.
    pub fn update<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> R {
        let (result, changed) = {
            let mut value = self.value.borrow_mut();
            let before = value.clone();
            let result = f(&mut *value);
            (result, *value != before)
        };

        if changed {
            self.notify();
        }

        result
    }

    /// Run `f` on every change from now on.
    pub fn subscribe<F: Fn(&T) + 'static>(&self, f: F) {
        self.subscribers.borrow_mut().push(Rc::new(f));
    }

    /// Run `f` once with the current value, then on every change.
    pub fn effect<F: Fn(&T) + 'static>(&self, f: F) {
        let current = self.get();
        f(&current);
        self.subscribe(f);
    }

    fn notify(&self) {
        // Subscribers may read or write the signal, so neither cell stays borrowed.
        let value = self.get();
        let subscribers = self.subscribers.borrow().clone();

        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

impl<T: 'static + Clone + PartialEq + fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

/// Shorthand for `Signal::new`: `signal!(value)`.
#[macro_export]
macro_rules! signal {
    ($val:expr) => {
        $crate::signal::Signal::new($val)
    };
}
