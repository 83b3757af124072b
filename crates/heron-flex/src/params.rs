//! Legacy flexible-box layout parameters.
//!
//! [CSS Flexible Box (2009 WD)](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/)
//!
//! The 2009 draft governs a single axis per container through four
//! container properties — `box-orient`, `box-align`, `box-direction`,
//! `box-pack` — and one child property, `box-flex`. Each keyword enum
//! below carries its parser; unrecognized keywords parse to `None` and
//! fall back to the defaults table, never to an error.

use serde::Serialize;

/// [`box-orient`](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#orientation)
///
/// "The box-orient property specifies whether a box lays out its contents
/// horizontally or vertically." `inline-axis`/`block-axis` are the
/// writing-mode-relative spellings; without vertical writing modes they
/// coincide with `horizontal`/`vertical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orient {
    /// "The box lays out its contents horizontally."
    Horizontal,
    /// "The box displays its children along the inline axis."
    InlineAxis,
    /// "The box lays out its contents vertically."
    Vertical,
    /// "The box displays its children along the block axis."
    BlockAxis,
}

impl Orient {
    /// Parse a `box-orient` keyword.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "horizontal" => Some(Orient::Horizontal),
            "inline-axis" => Some(Orient::InlineAxis),
            "vertical" => Some(Orient::Vertical),
            "block-axis" => Some(Orient::BlockAxis),
            _ => None,
        }
    }

    /// True when the main axis runs down the block direction.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Orient::Vertical | Orient::BlockAxis)
    }

    /// The CSS keyword for this value.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Orient::Horizontal => "horizontal",
            Orient::InlineAxis => "inline-axis",
            Orient::Vertical => "vertical",
            Orient::BlockAxis => "block-axis",
        }
    }
}

/// [`box-align`](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#alignment)
///
/// "Specifies how a box aligns its contents in the perpendicular
/// (cross) axis."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    /// "The height of each child is adjusted to that of the containing
    /// block."
    Stretch,
    /// "The top edge of each child is placed along the top of the box."
    Start,
    /// "The bottom edge of each child is placed along the bottom of the
    /// box."
    End,
    /// "Any extra space is divided evenly, with half placed above the
    /// child and the other half placed after the child."
    Center,
    /// "If a child has a baseline, align it with the other baselines."
    /// Deliberately unimplemented in the legacy shim: the pass is a
    /// no-op, not a failure.
    Baseline,
}

impl Align {
    /// Parse a `box-align` keyword.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "stretch" => Some(Align::Stretch),
            "start" => Some(Align::Start),
            "end" => Some(Align::End),
            "center" => Some(Align::Center),
            "baseline" => Some(Align::Baseline),
            _ => None,
        }
    }

    /// The CSS keyword for this value.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Align::Stretch => "stretch",
            Align::Start => "start",
            Align::End => "end",
            Align::Center => "center",
            Align::Baseline => "baseline",
        }
    }
}

/// [`box-direction`](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#displayorder)
///
/// "If box-direction is reverse, the box displays its children in the
/// reverse direction."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// "The box displays its children from the first child ... in order."
    Normal,
    /// "The box displays its children in the reverse direction."
    Reverse,
}

impl Direction {
    /// Parse a `box-direction` keyword.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "normal" => Some(Direction::Normal),
            "reverse" => Some(Direction::Reverse),
            _ => None,
        }
    }

    /// The CSS keyword for this value.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Direction::Normal => "normal",
            Direction::Reverse => "reverse",
        }
    }
}

/// [`box-pack`](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#packing)
///
/// "Specifies how a box packs its contents in the direction of its
/// orientation, once all flexible lengths have reached their maximum."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pack {
    /// "All extra space is placed after the last child."
    Start,
    /// "All extra space is placed before the first child."
    End,
    /// "Extra space is divided evenly, with half placed before the
    /// first child and the other half placed after the last child."
    Center,
    /// "Space is divided evenly in-between each child."
    Justify,
}

impl Pack {
    /// Parse a `box-pack` keyword.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "start" => Some(Pack::Start),
            "end" => Some(Pack::End),
            "center" => Some(Pack::Center),
            "justify" => Some(Pack::Justify),
            _ => None,
        }
    }

    /// The CSS keyword for this value.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Pack::Start => "start",
            Pack::End => "end",
            Pack::Center => "center",
            Pack::Justify => "justify",
        }
    }
}

/// The fully resolved parameter set of one flex container.
///
/// [§ Flexible Box Model properties](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#flexbox-properties)
///
/// Unspecified declarations resolve through [`BoxParams::default`], the
/// fixed defaults table of the 2009 draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxParams {
    /// Resolved `box-orient`.
    pub orient: Orient,
    /// Resolved `box-align`.
    pub align: Align,
    /// Resolved `box-direction`.
    pub direction: Direction,
    /// Resolved `box-pack`.
    pub pack: Pack,
}

impl Default for BoxParams {
    /// The defaults table: `horizontal` / `stretch` / `normal` / `start`.
    fn default() -> Self {
        BoxParams {
            orient: Orient::Horizontal,
            align: Align::Stretch,
            direction: Direction::Normal,
            pack: Pack::Start,
        }
    }
}
