//! Layout error taxonomy.
//!
//! The legacy shim had none — every failure degenerated silently. The
//! reimplementation names the three conditions worth surfacing and lets
//! [`LayoutConfig`](crate::LayoutConfig) decide whether they error
//! (strict) or warn-and-degrade (lenient, the compatibility default).

use thiserror::Error;

/// An error from binding or running a layout instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A box declaration's selector resolved to no element, so no
    /// instruction can be built.
    #[error("no element matched flex container selector `{0}`")]
    UnresolvedTarget(String),

    /// A bound container has no element children to lay out.
    #[error("flex container `{0}` has no element children")]
    EmptyChildList(String),

    /// `box-pack: justify` with a single child divides the leftover
    /// space by zero. The original produced a silent NaN offset; the
    /// reimplementation guards it.
    #[error("box-pack: justify is undefined for a single child")]
    DegenerateJustify,
}
