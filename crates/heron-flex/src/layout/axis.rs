//! Axis descriptors.
//!
//! [§ Orientation](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#orientation)
//!
//! Every pass is written once, against "the main axis" and "the cross
//! axis"; an [`AxisDescriptor`] says which concrete CSS properties and
//! which client dimension an axis means. Orientation alone decides the
//! pairing, exhaustively and mutually exclusively: one of the two fixed
//! descriptors is main, the other is cross.

use crate::measure::{Dimension, StyleProperty};
use crate::params::Orient;

/// One layout axis described in terms of concrete style properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisDescriptor {
    /// The position-offset property the passes write (the leading
    /// margin on this axis).
    pub pos: StyleProperty,
    /// The trailing margin and the two border widths folded into an
    /// element's "occupied" extent on this axis.
    pub add: [StyleProperty; 3],
    /// The client dimension measured along this axis.
    pub dim: Dimension,
}

/// The wide axis: offsets through `margin-left`, extent through client
/// width.
pub const HORIZONTAL_AXIS: AxisDescriptor = AxisDescriptor {
    pos: StyleProperty::MarginLeft,
    add: [
        StyleProperty::MarginRight,
        StyleProperty::BorderLeftWidth,
        StyleProperty::BorderRightWidth,
    ],
    dim: Dimension::Width,
};

/// The tall axis: offsets through `margin-top`, extent through client
/// height.
pub const VERTICAL_AXIS: AxisDescriptor = AxisDescriptor {
    pos: StyleProperty::MarginTop,
    add: [
        StyleProperty::MarginBottom,
        StyleProperty::BorderTopWidth,
        StyleProperty::BorderBottomWidth,
    ],
    dim: Dimension::Height,
};

/// Resolve an orientation to its `(main, cross)` descriptor pair.
///
/// `horizontal`/`inline-axis` → main is the wide axis;
/// `vertical`/`block-axis` → main is the tall axis.
#[must_use]
pub const fn main_and_cross(orient: Orient) -> (AxisDescriptor, AxisDescriptor) {
    if orient.is_vertical() {
        (VERTICAL_AXIS, HORIZONTAL_AXIS)
    } else {
        (HORIZONTAL_AXIS, VERTICAL_AXIS)
    }
}
