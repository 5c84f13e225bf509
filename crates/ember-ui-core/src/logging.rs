//! Logging facilities for Ember UI.
//!
//! Ember UI instruments itself with the `tracing` crate. Install a
//! subscriber in the embedding application to see output:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Errors that surface to callers through `Result` are never additionally
//! logged by the toolkit; the trace stream reports state changes, not
//! failures.

/// Target names for log filtering.
///
/// Use these with `tracing` directives, e.g.
/// `RUST_LOG=ember_ui_core::signal=trace`.
pub mod targets {
    /// Core infrastructure target.
    pub const CORE: &str = "ember_ui_core";
    /// Signal/slot dispatch target.
    pub const SIGNAL: &str = "ember_ui_core::signal";
    /// Bounded-value writes target.
    pub const RANGE: &str = "ember_ui::range";
    /// Content resolution target.
    pub const CONTENT: &str = "ember_ui::content";
    /// Text input and re-encoding target.
    pub const INPUT: &str = "ember_ui::input";
}
