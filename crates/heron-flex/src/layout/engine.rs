//! The six layout passes.
//!
//! [CSS Flexible Box (2009 WD)](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/)
//!
//! Pass order is fixed: model, orient, align, direction, pack, flex.
//! The pack pass therefore always computes with pre-flex extents, and
//! the flex pass clears the main-axis offsets pack wrote — both are
//! deliberate, inherited behaviors; the mutation log keeps the earlier
//! arithmetic observable.

use std::collections::BTreeMap;

use heron_common::warning::warn_once;
use heron_dom::{ElementTree, FloatSide, NodeId};

use crate::LayoutConfig;
use crate::declarations::LayoutInstruction;
use crate::error::LayoutError;
use crate::layout::StyleMutation;
use crate::layout::axis::{AxisDescriptor, main_and_cross};
use crate::measure::{Measure, StyleProperty};
use crate::params::{Align, Direction, Pack};

/// Run the passes in order, collecting the mutation log.
pub(crate) fn run(
    tree: &mut ElementTree,
    instruction: &LayoutInstruction,
    measure: &dyn Measure,
    config: LayoutConfig,
) -> Result<Vec<StyleMutation>, LayoutError> {
    if instruction.children.is_empty() {
        if config.strict {
            return Err(LayoutError::EmptyChildList(instruction.selector.clone()));
        }
        warn_once(
            "Engine",
            &format!(
                "container `{}` has no element children; layout skipped",
                instruction.selector
            ),
        );
        return Ok(Vec::new());
    }

    let (main, cross) = main_and_cross(instruction.params.orient);
    let mut log = Vec::new();

    box_model(tree, &mut log, instruction.target);
    box_orient(tree, measure, &mut log, instruction, cross);
    box_align(tree, measure, &mut log, instruction, cross);
    box_direction(tree, &mut log, instruction);
    box_pack(tree, measure, &mut log, instruction, main, config)?;
    box_flex(tree, measure, &mut log, instruction, main, cross);

    Ok(log)
}

/// Pass 1 — model.
///
/// Clip the container so the children's offset arithmetic has a
/// containing box to be meaningful against.
fn box_model(tree: &mut ElementTree, log: &mut Vec<StyleMutation>, target: NodeId) {
    if let Some(style) = tree.style_mut(target) {
        style.overflow_hidden = true;
    }
    log.push(StyleMutation::ClipOverflow { node: target });
}

/// Pass 2 — orient.
///
/// [§ Orientation](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#orientation)
///
/// Horizontal boxes pack their children onto one line by floating each
/// child left; vertical boxes clear the float and rely on block flow.
/// Each child's cross-axis size is frozen to its currently computed
/// value so later passes mutate a stable box.
fn box_orient(
    tree: &mut ElementTree,
    measure: &dyn Measure,
    log: &mut Vec<StyleMutation>,
    instruction: &LayoutInstruction,
    cross: AxisDescriptor,
) {
    let vertical = instruction.params.orient.is_vertical();
    for &kid in &instruction.children {
        if vertical {
            if let Some(style) = tree.style_mut(kid) {
                style.float = None;
            }
            log.push(StyleMutation::ClearFloat { node: kid });
        } else {
            if let Some(style) = tree.style_mut(kid) {
                style.float = Some(FloatSide::Left);
            }
            log.push(StyleMutation::FloatLeft { node: kid });
        }

        let frozen = measure.style_px(tree, kid, cross.dim.size_property());
        set_px(tree, log, kid, cross.dim.size_property(), frozen);
    }
}

/// Pass 3 — align (cross-axis distribution).
///
/// [§ Alignment](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#alignment)
///
/// `start` is default flow; `baseline` is deliberately unsupported and
/// falls through. Note the inherited asymmetry: `end` folds the child's
/// trailing margin and borders into its extent, `center` does not.
fn box_align(
    tree: &mut ElementTree,
    measure: &dyn Measure,
    log: &mut Vec<StyleMutation>,
    instruction: &LayoutInstruction,
    cross: AxisDescriptor,
) {
    let target_extent = measure.client_extent(tree, instruction.target, cross.dim);

    match instruction.params.align {
        Align::Stretch => {
            for &kid in &instruction.children {
                set_px(tree, log, kid, cross.dim.size_property(), target_extent);
            }
        }

        Align::Start | Align::Baseline => {}

        Align::End => {
            for &kid in &instruction.children {
                let mut kid_extent = measure.client_extent(tree, kid, cross.dim);
                for &prop in &cross.add {
                    kid_extent += measure.style_px(tree, kid, prop);
                }
                set_px(tree, log, kid, cross.pos, target_extent - kid_extent);
            }
        }

        Align::Center => {
            for &kid in &instruction.children {
                let kid_extent = measure.client_extent(tree, kid, cross.dim);
                set_px(
                    tree,
                    log,
                    kid,
                    cross.pos,
                    target_extent / 2.0 - kid_extent / 2.0,
                );
            }
        }
    }
}

/// Pass 4 — direction (display order).
///
/// [§ Display order](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#displayorder)
///
/// `reverse` physically re-appends the captured children back to front,
/// mutating tree order. The instruction's captured sequence is left
/// alone, so running the pass twice restores the original order.
fn box_direction(
    tree: &mut ElementTree,
    log: &mut Vec<StyleMutation>,
    instruction: &LayoutInstruction,
) {
    match instruction.params.direction {
        Direction::Normal => {}
        Direction::Reverse => {
            for &kid in instruction.children.iter().rev() {
                tree.append_child(instruction.target, kid);
                log.push(StyleMutation::Reappend {
                    parent: instruction.target,
                    child: kid,
                });
            }
        }
    }
}

/// Pass 5 — pack (main-axis distribution).
///
/// [§ Packing](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#packing)
///
/// The group of children is moved as a block: because the children are
/// packed contiguously in flow, offsetting the first child is enough
/// for `end` and `center`. `justify` gives every child but the first
/// the same floored inter-child gap.
fn box_pack(
    tree: &mut ElementTree,
    measure: &dyn Measure,
    log: &mut Vec<StyleMutation>,
    instruction: &LayoutInstruction,
    main: AxisDescriptor,
    config: LayoutConfig,
) -> Result<(), LayoutError> {
    let children = &instruction.children;
    let mut group_extent = 0.0_f32;
    for &kid in children {
        group_extent += measure.client_extent(tree, kid, main.dim);
    }
    let total_extent = measure.client_extent(tree, instruction.target, main.dim) - group_extent;

    match instruction.params.pack {
        Pack::Start => {}

        Pack::End => {
            set_px(tree, log, children[0], main.pos, total_extent);
        }

        Pack::Center => {
            set_px(tree, log, children[0], main.pos, total_extent / 2.0);
        }

        Pack::Justify => {
            // One child leaves zero inter-child gaps to divide; the
            // original shim divided by zero here.
            if children.len() < 2 {
                if config.strict {
                    return Err(LayoutError::DegenerateJustify);
                }
                warn_once(
                    "Engine",
                    &format!(
                        "container `{}`: box-pack justify needs two children; pass skipped",
                        instruction.selector
                    ),
                );
                return Ok(());
            }

            #[allow(clippy::cast_precision_loss)]
            let fraction = (total_extent / (children.len() - 1) as f32).floor();
            for &kid in children {
                set_px(tree, log, kid, main.pos, fraction);
            }
            clear_px(tree, log, children[0], main.pos);
        }
    }

    Ok(())
}

/// Pass 6 — flex (ratio-based main-axis size distribution).
///
/// [§ Flexibility](https://www.w3.org/TR/2009/WD-css3-flexbox-20090723/#flexibility)
///
/// "Any extra space is divided among the flexible boxes in proportion
/// to their flex ratio." Children are grouped into buckets by literal
/// ratio; every member of a ratio-k bucket receives the full
/// `unit × k` increment — the increment is not split across bucket
/// members. Unmatched children sit in bucket 0 and are never resized.
///
/// The pass only runs when the instruction carries at least one match:
/// its pre-step clears every main-axis offset (erasing the pack pass's
/// output, as the original shim did), and a flex-less container must
/// keep its packing observable.
fn box_flex(
    tree: &mut ElementTree,
    measure: &dyn Measure,
    log: &mut Vec<StyleMutation>,
    instruction: &LayoutInstruction,
    main: AxisDescriptor,
    cross: AxisDescriptor,
) {
    if instruction.flex_matches.is_empty() {
        return;
    }

    // Zero out any defined positioning.
    for &kid in &instruction.children {
        clear_px(tree, log, kid, main.pos);
    }

    // Match matrix: walk the children in order; every match naming a
    // child contributes its ratio to the running total and joins that
    // ratio's bucket. A child no declaration names falls into bucket 0.
    let mut total_ratio: u32 = 0;
    let mut buckets: BTreeMap<u32, Vec<NodeId>> = BTreeMap::new();
    for &kid in &instruction.children {
        let mut matched = false;
        for flex_match in &instruction.flex_matches {
            if flex_match.node == kid {
                matched = true;
                total_ratio += flex_match.ratio;
                buckets.entry(flex_match.ratio).or_default().push(kid);
            }
        }
        if !matched {
            buckets.entry(0).or_default().push(kid);
        }
    }

    if total_ratio == 0 {
        // Unreachable through the binder (ratios are positive), but a
        // hand-built instruction must not divide by zero.
        warn_once(
            "Engine",
            &format!(
                "container `{}`: no matched flex child carries a ratio; distribution skipped",
                instruction.selector
            ),
        );
        return;
    }

    // Total occupied extent: each child's main client extent plus its
    // trailing margins and borders on both axes.
    let mut occupied = 0.0_f32;
    for &kid in &instruction.children {
        occupied += measure.client_extent(tree, kid, main.dim);
        for &prop in &main.add {
            occupied += measure.style_px(tree, kid, prop);
        }
        for &prop in &cross.add {
            occupied += measure.style_px(tree, kid, prop);
        }
    }

    let whitespace = measure.client_extent(tree, instruction.target, main.dim) - occupied;
    #[allow(clippy::cast_precision_loss)]
    let unit = whitespace / total_ratio as f32;

    // Larger ratios first; bucket 0 is excluded from distribution.
    for (&ratio, members) in buckets.iter().rev() {
        if ratio == 0 {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let increment = unit * ratio as f32;
        for &kid in members {
            let current = measure.style_px(tree, kid, main.dim.size_property());
            set_px(tree, log, kid, main.dim.size_property(), current + increment);
        }
    }
}

/// Write one pixel property into a node's inline style and record it.
fn set_px(
    tree: &mut ElementTree,
    log: &mut Vec<StyleMutation>,
    node: NodeId,
    prop: StyleProperty,
    px: f32,
) {
    let Some(style) = tree.style_mut(node) else {
        return;
    };
    // The passes only ever write the overlay-backed longhands.
    match prop {
        StyleProperty::Width => style.width = Some(px),
        StyleProperty::Height => style.height = Some(px),
        StyleProperty::MarginLeft => style.margin_left = Some(px),
        StyleProperty::MarginTop => style.margin_top = Some(px),
        _ => return,
    }
    log.push(StyleMutation::Set { node, prop, px });
}

/// Remove one pixel property from a node's inline style and record it.
fn clear_px(
    tree: &mut ElementTree,
    log: &mut Vec<StyleMutation>,
    node: NodeId,
    prop: StyleProperty,
) {
    let Some(style) = tree.style_mut(node) else {
        return;
    };
    match prop {
        StyleProperty::Width => style.width = None,
        StyleProperty::Height => style.height = None,
        StyleProperty::MarginLeft => style.margin_left = None,
        StyleProperty::MarginTop => style.margin_top = None,
        _ => return,
    }
    log.push(StyleMutation::Clear { node, prop });
}
