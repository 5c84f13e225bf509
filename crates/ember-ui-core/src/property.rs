//! Reactive properties for Ember UI.
//!
//! A [`Property<T>`] wraps a value and detects whether a write actually
//! changed it. The property itself never notifies anyone - the owning
//! object emits its change [`Signal`](crate::Signal) when `set` reports a
//! change, which keeps notification order under the owner's control (a
//! widget can finish recomputing derived state before any observer runs).
//!
//! # Example
//!
//! ```
//! use ember_ui_core::{Property, Signal};
//!
//! struct Dial {
//!     angle: Property<f32>,
//!     angle_changed: Signal<f32>,
//! }
//!
//! impl Dial {
//!     fn set_angle(&self, angle: f32) {
//!         if self.angle.set(angle) {
//!             self.angle_changed.emit(angle);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A change-detecting value cell.
///
/// Writes through [`set`](Self::set) compare against the stored value with
/// `PartialEq`; equal writes are dropped so the owner can skip redundant
/// notifications. Interior mutability lets setters take `&self`, which is
/// what allows change handlers to call back into the same object while the
/// original mutating call is still on the stack.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, use [`with`](Self::with).
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    ///
    /// Useful during construction or batch updates where notifications are
    /// deferred.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the stored value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`. The lock is released before this returns, so the
    /// emission runs with the new value already visible to re-entrant
    /// readers.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property").field("value", &self.get()).finish()
    }
}

static_assertions::assert_impl_all!(Property<f64>: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_get_initial_value() {
        let prop = Property::new(42);
        assert_eq!(prop.get(), 42);
    }

    #[test]
    fn test_set_detects_change() {
        let prop = Property::new(10);

        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_set_silent() {
        let prop = Property::new(1);
        prop.set_silent(2);
        assert_eq!(prop.get(), 2);
    }

    #[test]
    fn test_replace_returns_old_value() {
        let prop = Property::new("hello".to_string());

        assert!(prop.replace("hello".to_string()).is_none());

        let old = prop.replace("world".to_string());
        assert_eq!(old, Some("hello".to_string()));
        assert_eq!(prop.get(), "world");
    }

    #[test]
    fn test_with_avoids_clone() {
        let prop = Property::new(vec![1, 2, 3]);
        let sum: i32 = prop.with(|v| v.iter().sum());
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_optional_bound_semantics() {
        // Unset bounds are modelled as None; setting and clearing both
        // count as changes.
        let bound: Property<Option<f64>> = Property::new(None);

        assert!(bound.set(Some(10.0)));
        assert!(!bound.set(Some(10.0)));
        assert!(bound.set(None));
    }

    #[test]
    fn test_shared_across_threads() {
        let prop = Arc::new(Property::new(0));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let prop = prop.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        prop.set_silent(i);
                        let _ = prop.get();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
    }
}
