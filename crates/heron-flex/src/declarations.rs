//! Parsed stylesheet declarations and the bound unit of layout work.
//!
//! Stylesheet discovery and CSS tokenizing happen outside this crate;
//! what arrives here is the already-parsed rule set: one
//! [`BoxDeclaration`] per `display: box` rule and one
//! [`FlexChildDeclaration`] per `box-flex` rule. The binder resolves
//! them against live elements into [`LayoutInstruction`]s.

use heron_dom::NodeId;

use crate::params::{Align, BoxParams, Direction, Orient, Pack};

/// One flex-container rule found in a stylesheet.
///
/// [§ The box display type](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#displaybox)
///
/// Each optional field holds the rule's explicit value for the matching
/// property, or `None` when the stylesheet leaves it unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxDeclaration {
    /// The rule's selector text, as written.
    pub selector: String,
    /// Explicit `box-orient`, if declared.
    pub orient: Option<Orient>,
    /// Explicit `box-align`, if declared.
    pub align: Option<Align>,
    /// Explicit `box-direction`, if declared.
    pub direction: Option<Direction>,
    /// Explicit `box-pack`, if declared.
    pub pack: Option<Pack>,
}

impl BoxDeclaration {
    /// A declaration with no explicit parameters.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        BoxDeclaration {
            selector: selector.into(),
            orient: None,
            align: None,
            direction: None,
            pack: None,
        }
    }

    /// True when at least one parameter is explicitly declared.
    ///
    /// Purely default-valued containers get structural treatment from
    /// the browser alone; the binder builds no instruction for them.
    #[must_use]
    pub fn has_explicit_params(&self) -> bool {
        self.orient.is_some()
            || self.align.is_some()
            || self.direction.is_some()
            || self.pack.is_some()
    }

    /// Fill unspecified parameters from the defaults table.
    #[must_use]
    pub fn resolved_params(&self) -> BoxParams {
        let defaults = BoxParams::default();
        BoxParams {
            orient: self.orient.unwrap_or(defaults.orient),
            align: self.align.unwrap_or(defaults.align),
            direction: self.direction.unwrap_or(defaults.direction),
            pack: self.pack.unwrap_or(defaults.pack),
        }
    }
}

/// One flex-item rule found in a stylesheet.
///
/// [`box-flex`](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#flexibility)
///
/// "A box with box-flex greater than 0 is flexible." The ratio is a
/// positive integer weight; [`FlexChildDeclaration::new`] refuses zero,
/// so a constructed declaration always participates in distribution
/// once matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexChildDeclaration {
    /// The rule's selector text, as written.
    pub selector: String,
    /// The positive flex ratio.
    pub ratio: u32,
}

impl FlexChildDeclaration {
    /// Build a declaration; a zero ratio yields `None` (an inflexible
    /// child is simply not declared).
    #[must_use]
    pub fn new(selector: impl Into<String>, ratio: u32) -> Option<Self> {
        if ratio == 0 {
            return None;
        }
        Some(FlexChildDeclaration {
            selector: selector.into(),
            ratio,
        })
    }
}

/// A flex-child declaration resolved against a live element.
///
/// Produced by the binder only when the declaration's selector matched
/// an element whose parent is the bound container (parent-equality, not
/// descendant matching).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexMatch {
    /// The matched child element.
    pub node: NodeId,
    /// The declaration's positive flex ratio.
    pub ratio: u32,
}

/// The fully resolved unit of work handed to the layout engine.
///
/// `children` is the ordered element-child list of `target` captured at
/// build time; order matters for the direction and pack passes. The
/// instruction is built once per qualifying container and survives
/// re-layout (the controller refreshes `children` when the container's
/// content changes).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutInstruction {
    /// Selector of the originating box declaration, kept for
    /// diagnostics.
    pub selector: String,
    /// The container element.
    pub target: NodeId,
    /// Ordered element children of `target` at instruction-build time.
    pub children: Vec<NodeId>,
    /// Resolved orientation/alignment/direction/pack parameters.
    pub params: BoxParams,
    /// Flex-child declarations resolved to direct children of `target`.
    pub flex_matches: Vec<FlexMatch>,
}
