//! Bounds-enforcing numeric value.
//!
//! [`BoundedValue`] is the state object behind every range-driven widget
//! (sliders, scroll bars, spin boxes): a numeric presentation value plus
//! optional bounds, step hints, and an enforcement policy that decides what
//! happens to out-of-range writes.
//!
//! # Example
//!
//! ```
//! use ember_ui::widget::widgets::{BoundedValue, RangeEnforcement};
//!
//! let scroll = BoundedValue::new()
//!     .with_range(Some(0.0), Some(100.0))
//!     .with_enforcement(RangeEnforcement::Clamp);
//!
//! scroll.value_changed.connect(|&v| println!("scrolled to {v}"));
//!
//! // A pointer drag past the end degrades gracefully under Clamp.
//! scroll.set_value(140.0).unwrap();
//! assert_eq!(scroll.value(), 100.0);
//! ```

use ember_ui_core::{Property, Signal};

use crate::error::RangeError;

/// Policy applied to writes that fall outside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeEnforcement {
    /// Reject out-of-range writes with a [`RangeError`]; the stored value
    /// is left unchanged. Fail-fast semantics for programmatic use.
    #[default]
    Strict,
    /// Silently coerce out-of-range writes into the bounds. Interactive
    /// widgets use this so pointer input degrades gracefully.
    Clamp,
}

/// A numeric presentation value with optional bounds and step metadata.
///
/// All mutators take `&self`, so a `value_changed` handler may call back
/// into the same object while the original write is still on the stack;
/// the equality no-op in [`set_value`](Self::set_value) bounds such
/// recursion.
///
/// # Signals
///
/// - `value_changed(f64)`: emitted after the stored value actually changed
/// - `property_changed(&str)`: generic channel carrying the property name
pub struct BoundedValue {
    /// Lower bound; `None` means unbounded below.
    minimum: Property<Option<f64>>,

    /// Upper bound; `None` means unbounded above.
    maximum: Property<Option<f64>>,

    /// The current presentation value.
    value: Property<f64>,

    /// Step hint for fine adjustment (arrow keys, wheel notches).
    small_step: Property<f64>,

    /// Step hint for coarse adjustment (page keys, track clicks).
    large_step: Property<f64>,

    /// What to do with out-of-range writes.
    enforcement: Property<RangeEnforcement>,

    /// Signal emitted when the value changes.
    pub value_changed: Signal<f64>,

    /// Generic property-change channel carrying the property name.
    pub property_changed: Signal<&'static str>,
}

impl BoundedValue {
    /// Create an unbounded value of `0.0` under strict enforcement.
    pub fn new() -> Self {
        Self {
            minimum: Property::new(None),
            maximum: Property::new(None),
            value: Property::new(0.0),
            small_step: Property::new(1.0),
            large_step: Property::new(10.0),
            enforcement: Property::new(RangeEnforcement::Strict),
            value_changed: Signal::new(),
            property_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Get the current value.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Attempt to set the current value.
    ///
    /// Writing the current value back is a no-op: no notification, no
    /// event, `Ok`.
    ///
    /// Under [`RangeEnforcement::Strict`], a write above a set maximum or
    /// below a set minimum fails and the stored value is untouched. Under
    /// [`RangeEnforcement::Clamp`], the write is coerced into whichever
    /// bounds are set; if coercion lands on the current value, nothing is
    /// emitted.
    ///
    /// On an actual change, `value_changed` and `property_changed("value")`
    /// are emitted synchronously, exactly once, before this returns.
    pub fn set_value(&self, value: f64) -> Result<(), RangeError> {
        if value == self.value.get() {
            return Ok(());
        }

        let stored = match self.enforcement.get() {
            RangeEnforcement::Strict => {
                if let Some(maximum) = self.maximum.get() {
                    if value > maximum {
                        return Err(RangeError::AboveMaximum { value, maximum });
                    }
                }
                if let Some(minimum) = self.minimum.get() {
                    if value < minimum {
                        return Err(RangeError::BelowMinimum { value, minimum });
                    }
                }
                value
            }
            RangeEnforcement::Clamp => self.clamp_to_bounds(value),
        };

        if self.value.set(stored) {
            tracing::trace!(target: "ember_ui::range", value = stored, "value changed");
            self.value_changed.emit(stored);
            self.property_changed.emit("value");
        }
        Ok(())
    }

    /// Coerce a value into the currently set bounds.
    ///
    /// An unset bound behaves as unbounded on that side.
    fn clamp_to_bounds(&self, value: f64) -> f64 {
        let mut coerced = value;
        if let Some(maximum) = self.maximum.get() {
            coerced = coerced.min(maximum);
        }
        if let Some(minimum) = self.minimum.get() {
            coerced = coerced.max(minimum);
        }
        coerced
    }

    // =========================================================================
    // Bounds
    // =========================================================================

    /// Get the lower bound.
    pub fn minimum(&self) -> Option<f64> {
        self.minimum.get()
    }

    /// Set or clear the lower bound.
    ///
    /// Bound writes never move the stored value; a value now outside the
    /// bounds is corrected on the next [`set_value`](Self::set_value) call.
    pub fn set_minimum(&self, minimum: Option<f64>) {
        if self.minimum.set(minimum) {
            self.property_changed.emit("minimum");
        }
    }

    /// Get the upper bound.
    pub fn maximum(&self) -> Option<f64> {
        self.maximum.get()
    }

    /// Set or clear the upper bound.
    ///
    /// Bound writes never move the stored value; a value now outside the
    /// bounds is corrected on the next [`set_value`](Self::set_value) call.
    pub fn set_maximum(&self, maximum: Option<f64>) {
        if self.maximum.set(maximum) {
            self.property_changed.emit("maximum");
        }
    }

    /// Set both bounds using builder pattern.
    pub fn with_range(self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.set_minimum(minimum);
        self.set_maximum(maximum);
        self
    }

    /// Set the value using builder pattern.
    ///
    /// Enforcement applies; an out-of-range strict write leaves the initial
    /// value in place.
    pub fn with_value(self, value: f64) -> Self {
        let _ = self.set_value(value);
        self
    }

    // =========================================================================
    // Steps
    // =========================================================================

    /// Get the small step hint.
    pub fn small_step(&self) -> f64 {
        self.small_step.get()
    }

    /// Set the small step hint. No invariant is enforced on it.
    pub fn set_small_step(&self, step: f64) {
        if self.small_step.set(step) {
            self.property_changed.emit("small_step");
        }
    }

    /// Get the large step hint.
    pub fn large_step(&self) -> f64 {
        self.large_step.get()
    }

    /// Set the large step hint. No invariant is enforced on it.
    pub fn set_large_step(&self, step: f64) {
        if self.large_step.set(step) {
            self.property_changed.emit("large_step");
        }
    }

    /// Set both step hints using builder pattern.
    pub fn with_steps(self, small: f64, large: f64) -> Self {
        self.set_small_step(small);
        self.set_large_step(large);
        self
    }

    /// Increase the value by the small step.
    pub fn step_up(&self) -> Result<(), RangeError> {
        self.set_value(self.value.get() + self.small_step.get())
    }

    /// Decrease the value by the small step.
    pub fn step_down(&self) -> Result<(), RangeError> {
        self.set_value(self.value.get() - self.small_step.get())
    }

    /// Increase the value by the large step.
    pub fn page_up(&self) -> Result<(), RangeError> {
        self.set_value(self.value.get() + self.large_step.get())
    }

    /// Decrease the value by the large step.
    pub fn page_down(&self) -> Result<(), RangeError> {
        self.set_value(self.value.get() - self.large_step.get())
    }

    // =========================================================================
    // Enforcement
    // =========================================================================

    /// Get the enforcement policy.
    pub fn enforcement(&self) -> RangeEnforcement {
        self.enforcement.get()
    }

    /// Set the enforcement policy.
    ///
    /// Like bound writes, this does not re-validate the stored value.
    pub fn set_enforcement(&self, enforcement: RangeEnforcement) {
        if self.enforcement.set(enforcement) {
            self.property_changed.emit("enforcement");
        }
    }

    /// Set the enforcement policy using builder pattern.
    pub fn with_enforcement(self, enforcement: RangeEnforcement) -> Self {
        self.set_enforcement(enforcement);
        self
    }
}

impl Default for BoundedValue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BoundedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedValue")
            .field("value", &self.value())
            .field("minimum", &self.minimum())
            .field("maximum", &self.maximum())
            .field("enforcement", &self.enforcement())
            .finish()
    }
}

static_assertions::assert_impl_all!(BoundedValue: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn change_counter(value: &BoundedValue) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        value.value_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_defaults() {
        let value = BoundedValue::new();
        assert_eq!(value.value(), 0.0);
        assert_eq!(value.minimum(), None);
        assert_eq!(value.maximum(), None);
        assert_eq!(value.enforcement(), RangeEnforcement::Strict);
    }

    #[test]
    fn test_clamp_formula() {
        let value = BoundedValue::new()
            .with_range(Some(-3.0), Some(7.0))
            .with_enforcement(RangeEnforcement::Clamp);

        for (written, expected) in [(-10.0, -3.0), (-3.0, -3.0), (0.5, 0.5), (7.0, 7.0), (99.0, 7.0)] {
            value.set_value(written).unwrap();
            assert_eq!(value.value(), expected, "writing {written}");
        }
    }

    #[test]
    fn test_strict_rejects_above_maximum() {
        let value = BoundedValue::new().with_range(Some(0.0), Some(10.0));
        value.set_value(5.0).unwrap();

        let err = value.set_value(11.0).unwrap_err();
        assert_eq!(
            err,
            RangeError::AboveMaximum {
                value: 11.0,
                maximum: 10.0
            }
        );
        assert_eq!(value.value(), 5.0);
    }

    #[test]
    fn test_strict_rejects_below_minimum() {
        let value = BoundedValue::new().with_range(Some(0.0), Some(10.0));
        value.set_value(5.0).unwrap();

        let err = value.set_value(-1.0).unwrap_err();
        assert_eq!(
            err,
            RangeError::BelowMinimum {
                value: -1.0,
                minimum: 0.0
            }
        );
        assert_eq!(value.value(), 5.0);
    }

    #[test]
    fn test_unset_bound_is_unbounded() {
        let value = BoundedValue::new().with_range(Some(0.0), None);
        value.set_value(1e12).unwrap();
        assert_eq!(value.value(), 1e12);

        let clamped = BoundedValue::new()
            .with_range(None, Some(10.0))
            .with_enforcement(RangeEnforcement::Clamp);
        clamped.set_value(-1e12).unwrap();
        assert_eq!(clamped.value(), -1e12);
    }

    #[test]
    fn test_equal_write_emits_nothing() {
        let value = BoundedValue::new();
        let count = change_counter(&value);

        value.set_value(0.0).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);

        value.set_value(3.0).unwrap();
        value.set_value(3.0).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clamp_scenario_zero_to_ten() {
        // Bounds [0,10], Clamp, initial 0: 15 -> 10 (one event),
        // -5 -> 0 (one event), 0 -> no event.
        let value = BoundedValue::new()
            .with_range(Some(0.0), Some(10.0))
            .with_enforcement(RangeEnforcement::Clamp);
        let count = change_counter(&value);

        value.set_value(15.0).unwrap();
        assert_eq!(value.value(), 10.0);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        value.set_value(-5.0).unwrap();
        assert_eq!(value.value(), 0.0);
        assert_eq!(count.load(Ordering::SeqCst), 2);

        value.set_value(0.0).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clamp_landing_on_current_emits_nothing() {
        let value = BoundedValue::new()
            .with_range(Some(0.0), Some(10.0))
            .with_enforcement(RangeEnforcement::Clamp)
            .with_value(10.0);
        let count = change_counter(&value);

        value.set_value(25.0).unwrap();
        assert_eq!(value.value(), 10.0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_bound_writes_defer_correction() {
        let value = BoundedValue::new()
            .with_enforcement(RangeEnforcement::Clamp)
            .with_value(50.0);

        // Tightening the bounds leaves the stored value outside them.
        value.set_maximum(Some(10.0));
        assert_eq!(value.value(), 50.0);

        // The next value write applies the current bounds.
        value.set_value(49.0).unwrap();
        assert_eq!(value.value(), 10.0);
    }

    #[test]
    fn test_property_changed_names() {
        let value = BoundedValue::new();
        let names = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let names_clone = names.clone();
        value.property_changed.connect(move |&name| {
            names_clone.lock().push(name);
        });

        value.set_minimum(Some(0.0));
        value.set_maximum(Some(10.0));
        value.set_value(5.0).unwrap();
        value.set_enforcement(RangeEnforcement::Clamp);

        assert_eq!(*names.lock(), vec!["minimum", "maximum", "value", "enforcement"]);
    }

    #[test]
    fn test_step_helpers_route_through_enforcement() {
        let value = BoundedValue::new()
            .with_range(Some(0.0), Some(10.0))
            .with_steps(1.0, 4.0)
            .with_enforcement(RangeEnforcement::Clamp)
            .with_value(9.5);

        value.step_up().unwrap();
        assert_eq!(value.value(), 10.0);

        value.page_down().unwrap();
        assert_eq!(value.value(), 6.0);

        let strict = BoundedValue::new().with_range(Some(0.0), Some(10.0)).with_value(10.0);
        assert!(strict.step_up().is_err());
        assert_eq!(strict.value(), 10.0);
    }

    #[test]
    fn test_reentrant_handler_terminates() {
        // A handler that writes the previous value back re-enters
        // set_value while the first write is still on the stack; the
        // equality no-op ends the recursion.
        let value = Arc::new(BoundedValue::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let value_clone = value.clone();
        let calls_clone = calls.clone();
        value.value_changed.connect(move |&v| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            if v != 0.0 {
                value_clone.set_value(0.0).unwrap();
            }
        });

        value.set_value(5.0).unwrap();
        assert_eq!(value.value(), 0.0);
        // Once for 5.0, once for the handler's write back to 0.0.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
