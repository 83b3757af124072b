//! The Box Layout Engine.
//!
//! [CSS Flexible Box (2009 WD)](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/)
//!
//! One [`LayoutInstruction`] is realized in up to six ordered passes —
//! model, orient, align, direction, pack, flex — each mutating the
//! matched elements' inline styles (and, for `box-direction: reverse`,
//! their tree order). Every mutation is also recorded in an ordered
//! log, so callers and tests can observe what each pass decided even
//! when a later pass overwrites it.
//!
//! The passes never panic and never read anything but the injected
//! [`Measure`] capability; missing measurements degrade to zero.

use heron_dom::{ElementTree, NodeId};

use crate::LayoutConfig;
use crate::declarations::LayoutInstruction;
use crate::error::LayoutError;
use crate::measure::{Measure, StyleProperty};

pub mod axis;
mod engine;

/// One observable change made by a layout pass.
///
/// The engine applies mutations to the tree as it goes; the returned
/// log is the same sequence in application order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleMutation {
    /// A pixel property was set on an element's inline style.
    Set {
        /// The mutated element.
        node: NodeId,
        /// The property written.
        prop: StyleProperty,
        /// The pixel value written.
        px: f32,
    },
    /// A pixel property was removed from an element's inline style
    /// (the empty-string write of the original shim).
    Clear {
        /// The mutated element.
        node: NodeId,
        /// The property cleared.
        prop: StyleProperty,
    },
    /// `float: left` was applied (horizontal orientation).
    FloatLeft {
        /// The mutated element.
        node: NodeId,
    },
    /// The float declaration was removed (vertical orientation).
    ClearFloat {
        /// The mutated element.
        node: NodeId,
    },
    /// `overflow: hidden` was applied to the container.
    ClipOverflow {
        /// The container element.
        node: NodeId,
    },
    /// A child was re-appended to its container (direction reverse).
    Reappend {
        /// The container element.
        parent: NodeId,
        /// The child moved to the end of the child list.
        child: NodeId,
    },
}

/// Run every pass of one instruction against the tree.
///
/// Returns the ordered mutation log. In lenient mode degenerate
/// conditions warn once and no-op; in strict mode they surface as
/// [`LayoutError`].
///
/// # Errors
///
/// Strict mode only: [`LayoutError::EmptyChildList`] when the
/// instruction has no children, [`LayoutError::DegenerateJustify`] for
/// single-child `box-pack: justify`.
pub fn compute_layout(
    tree: &mut ElementTree,
    instruction: &LayoutInstruction,
    measure: &dyn Measure,
    config: LayoutConfig,
) -> Result<Vec<StyleMutation>, LayoutError> {
    engine::run(tree, instruction, measure, config)
}
