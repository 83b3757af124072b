//! The computed-style measurement capability.
//!
//! Inside a browser the shim reads `getComputedStyle` (resolving `auto`
//! sizes with a clone-measure-discard trick); headless, the same
//! contract is an injected [`Measure`] capability backed by a table of
//! intrinsic box metrics. Either way the engine only ever asks two
//! questions: the used value of one style property in pixels, and an
//! element's client extent on one dimension.

use std::collections::HashMap;

use heron_dom::{ElementTree, NodeId};
use serde::{Deserialize, Serialize};

/// A layout axis dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    /// The horizontal extent.
    Width,
    /// The vertical extent.
    Height,
}

impl Dimension {
    /// The style property holding this dimension's content-box size.
    #[must_use]
    pub const fn size_property(self) -> StyleProperty {
        match self {
            Dimension::Width => StyleProperty::Width,
            Dimension::Height => StyleProperty::Height,
        }
    }
}

/// The measurable style property set.
///
/// [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/)
///
/// Exactly the longhands the legacy passes read or write: the two
/// content-box sizes, the four margins, the four border widths, and the
/// four paddings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StyleProperty {
    /// `width`
    Width,
    /// `height`
    Height,
    /// `margin-left`
    MarginLeft,
    /// `margin-right`
    MarginRight,
    /// `margin-top`
    MarginTop,
    /// `margin-bottom`
    MarginBottom,
    /// `border-left-width`
    BorderLeftWidth,
    /// `border-right-width`
    BorderRightWidth,
    /// `border-top-width`
    BorderTopWidth,
    /// `border-bottom-width`
    BorderBottomWidth,
    /// `padding-left`
    PaddingLeft,
    /// `padding-right`
    PaddingRight,
    /// `padding-top`
    PaddingTop,
    /// `padding-bottom`
    PaddingBottom,
}

impl StyleProperty {
    /// The property's CSS name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::MarginLeft => "margin-left",
            StyleProperty::MarginRight => "margin-right",
            StyleProperty::MarginTop => "margin-top",
            StyleProperty::MarginBottom => "margin-bottom",
            StyleProperty::BorderLeftWidth => "border-left-width",
            StyleProperty::BorderRightWidth => "border-right-width",
            StyleProperty::BorderTopWidth => "border-top-width",
            StyleProperty::BorderBottomWidth => "border-bottom-width",
            StyleProperty::PaddingLeft => "padding-left",
            StyleProperty::PaddingRight => "padding-right",
            StyleProperty::PaddingTop => "padding-top",
            StyleProperty::PaddingBottom => "padding-bottom",
        }
    }
}

/// Computed-style retrieval, abstracted over its source.
///
/// Missing or unmeasurable values degrade to `0.0` — the original
/// shim's `parseInt`-of-nothing behavior; measurement is never an
/// error.
pub trait Measure {
    /// The used value of `prop` on `node`, in CSS pixels.
    ///
    /// The node's inline style overlay wins where it carries the
    /// property; otherwise the intrinsic metric is the computed value
    /// (headless `auto` resolution).
    fn style_px(&self, tree: &ElementTree, node: NodeId, prop: StyleProperty) -> f32;

    /// The node's client extent on `dim`: content size plus both
    /// paddings.
    ///
    /// [CSSOM View § 7.3](https://drafts.csswg.org/cssom-view/#dom-element-clientwidth)
    /// "...return the width of the padding edge..."
    fn client_extent(&self, tree: &ElementTree, node: NodeId, dim: Dimension) -> f32 {
        let content = self.style_px(tree, node, dim.size_property());
        match dim {
            Dimension::Width => {
                content
                    + self.style_px(tree, node, StyleProperty::PaddingLeft)
                    + self.style_px(tree, node, StyleProperty::PaddingRight)
            }
            Dimension::Height => {
                content
                    + self.style_px(tree, node, StyleProperty::PaddingTop)
                    + self.style_px(tree, node, StyleProperty::PaddingBottom)
            }
        }
    }
}

/// Edge sizes for margin, border, or padding.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

/// An element's intrinsic geometry, the headless stand-in for what a
/// browser's style resolution would compute.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding,
/// border, and margin areas." The content sizes double as the resolved
/// value of `auto` (the clone-measure-discard technique collapses to a
/// table lookup headless).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxMetrics {
    /// Content-box width.
    pub content_width: f32,
    /// Content-box height.
    pub content_height: f32,
    /// Margin edge sizes.
    pub margin: EdgeSizes,
    /// Border edge sizes.
    pub border: EdgeSizes,
    /// Padding edge sizes.
    pub padding: EdgeSizes,
}

/// The intrinsic-metrics implementation of [`Measure`].
///
/// Elements absent from the table measure as all-zero, matching the
/// silent degradation of a browser returning an empty computed style.
#[derive(Debug, Clone, Default)]
pub struct MetricsTable {
    metrics: HashMap<NodeId, BoxMetrics>,
}

impl MetricsTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        MetricsTable {
            metrics: HashMap::new(),
        }
    }

    /// Record an element's intrinsic metrics, replacing any previous
    /// entry.
    pub fn insert(&mut self, node: NodeId, metrics: BoxMetrics) {
        let _ = self.metrics.insert(node, metrics);
    }

    /// Look up an element's intrinsic metrics.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&BoxMetrics> {
        self.metrics.get(&node)
    }
}

impl Measure for MetricsTable {
    fn style_px(&self, tree: &ElementTree, node: NodeId, prop: StyleProperty) -> f32 {
        // Inline overlay first: a property the engine has written is the
        // computed value from then on.
        if let Some(style) = tree.style(node) {
            let inline = match prop {
                StyleProperty::Width => style.width,
                StyleProperty::Height => style.height,
                StyleProperty::MarginLeft => style.margin_left,
                StyleProperty::MarginTop => style.margin_top,
                _ => None,
            };
            if let Some(px) = inline {
                return px;
            }
        }

        let Some(metrics) = self.metrics.get(&node) else {
            return 0.0;
        };
        match prop {
            StyleProperty::Width => metrics.content_width,
            StyleProperty::Height => metrics.content_height,
            StyleProperty::MarginLeft => metrics.margin.left,
            StyleProperty::MarginRight => metrics.margin.right,
            StyleProperty::MarginTop => metrics.margin.top,
            StyleProperty::MarginBottom => metrics.margin.bottom,
            StyleProperty::BorderLeftWidth => metrics.border.left,
            StyleProperty::BorderRightWidth => metrics.border.right,
            StyleProperty::BorderTopWidth => metrics.border.top,
            StyleProperty::BorderBottomWidth => metrics.border.bottom,
            StyleProperty::PaddingLeft => metrics.padding.left,
            StyleProperty::PaddingRight => metrics.padding.right,
            StyleProperty::PaddingTop => metrics.padding.top,
            StyleProperty::PaddingBottom => metrics.padding.bottom,
        }
    }
}
