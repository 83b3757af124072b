//! Legacy flexible-box binder and layout engine for the Heron shim.
//!
//! # Scope
//!
//! This crate implements the core of a retrofit for the
//! [2009 CSS Flexible Box draft](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/)
//! — the `box-orient` / `box-align` / `box-direction` / `box-pack` /
//! `box-flex` property family — as manual pixel positioning over a live
//! element tree:
//!
//! - **Layout parameters** — keyword enums with the draft's defaults
//!   table
//! - **Declarations** — parsed box/flex-child rules and the bound
//!   [`LayoutInstruction`]
//! - **Selector capability** — an injected [`SelectorQuery`] trait plus
//!   a small compound-selector engine
//! - **Measurement capability** — an injected [`Measure`] trait plus an
//!   intrinsic-metrics table
//! - **Binder** — declaration-to-element resolution (first-match
//!   targets, parent-equality children)
//! - **Layout Engine** — the six ordered passes with an observable
//!   mutation log
//!
//! # Out of scope
//!
//! Stylesheet discovery and parsing, selector-engine detection, DOM
//! change polling, and anything beyond the single-axis legacy property
//! set (no wrapping, no multi-axis layout, no `box-ordinal-group`).

/// Declaration-to-element resolution.
pub mod binder;
/// Parsed rules and bound layout instructions.
pub mod declarations;
/// The layout error taxonomy.
pub mod error;
/// The six-pass Box Layout Engine.
pub mod layout;
/// The computed-style measurement capability.
pub mod measure;
/// The legacy flexible-box keyword parameters.
pub mod params;
/// The selector-query capability and bundled engine.
pub mod selector;

// Re-exports for convenience
pub use binder::bind;
pub use declarations::{BoxDeclaration, FlexChildDeclaration, FlexMatch, LayoutInstruction};
pub use error::LayoutError;
pub use layout::{StyleMutation, compute_layout};
pub use measure::{BoxMetrics, Dimension, EdgeSizes, Measure, MetricsTable, StyleProperty};
pub use params::{Align, BoxParams, Direction, Orient, Pack};
pub use selector::{SelectorQuery, SimpleSelectorEngine};

/// Failure semantics for the binder and engine.
///
/// Replaces the original shim's process-wide singletons with an
/// explicit value passed into every entry point. The default is the
/// legacy-compatible lenient mode: degenerate conditions warn once and
/// no-op instead of erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Surface degenerate conditions as [`LayoutError`] instead of
    /// degrading with a warning.
    pub strict: bool,
}

impl LayoutConfig {
    /// The error-surfacing configuration.
    #[must_use]
    pub const fn strict() -> Self {
        LayoutConfig { strict: true }
    }
}
