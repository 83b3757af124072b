//! The Selector-to-Layout Binder.
//!
//! Matches parsed box and flex-child declarations against live elements
//! through an injected [`SelectorQuery`] capability, producing one
//! [`LayoutInstruction`] per qualifying container.
//!
//! Policies, all inherited from the legacy shim:
//! - a box declaration with no explicit parameter builds no instruction
//!   (purely default containers get structural treatment only);
//! - multiple target matches are not supported — the first match in
//!   document order is authoritative;
//! - a flex-child candidate counts only when its parent IS the bound
//!   container (parent-equality, not descendant matching).

use heron_common::warning::warn_once;
use heron_dom::{ElementTree, NodeId};

use crate::LayoutConfig;
use crate::declarations::{BoxDeclaration, FlexChildDeclaration, FlexMatch, LayoutInstruction};
use crate::error::LayoutError;
use crate::selector::SelectorQuery;

/// Resolve every declaration into layout instructions.
///
/// In lenient mode, unresolvable or childless containers warn once and
/// drop out of the result; in strict mode they error.
///
/// # Errors
///
/// Strict mode only: [`LayoutError::UnresolvedTarget`] when a box
/// declaration's selector matches nothing, [`LayoutError::EmptyChildList`]
/// when a bound container has no element children.
pub fn bind(
    boxes: &[BoxDeclaration],
    flex_children: &[FlexChildDeclaration],
    query: &dyn SelectorQuery,
    tree: &ElementTree,
    config: LayoutConfig,
) -> Result<Vec<LayoutInstruction>, LayoutError> {
    let mut instructions = Vec::new();

    for declaration in boxes {
        // All-default containers get no instruction — explicit policy,
        // not an oversight.
        if !declaration.has_explicit_params() {
            continue;
        }

        // First match wins.
        let candidates = query.query(tree, &declaration.selector);
        let Some(&target) = candidates.first() else {
            if config.strict {
                return Err(LayoutError::UnresolvedTarget(declaration.selector.clone()));
            }
            warn_once(
                "Binder",
                &format!(
                    "selector `{}` matched no element; declaration dropped",
                    declaration.selector
                ),
            );
            continue;
        };

        let children = tree.element_children(target);
        if children.is_empty() {
            if config.strict {
                return Err(LayoutError::EmptyChildList(declaration.selector.clone()));
            }
            warn_once(
                "Binder",
                &format!(
                    "container `{}` has no element children; declaration dropped",
                    declaration.selector
                ),
            );
            continue;
        }

        let flex_matches = match_flex_children(flex_children, query, tree, target);

        instructions.push(LayoutInstruction {
            selector: declaration.selector.clone(),
            target,
            children,
            params: declaration.resolved_params(),
            flex_matches,
        });
    }

    Ok(instructions)
}

/// Resolve the flex-child declarations against one container.
///
/// Every candidate element a declaration's selector matches yields one
/// [`FlexMatch`] iff its parent is `target`.
fn match_flex_children(
    flex_children: &[FlexChildDeclaration],
    query: &dyn SelectorQuery,
    tree: &ElementTree,
    target: NodeId,
) -> Vec<FlexMatch> {
    let mut matches = Vec::new();

    for declaration in flex_children {
        for candidate in query.query(tree, &declaration.selector) {
            if tree.parent(candidate) == Some(target) {
                matches.push(FlexMatch {
                    node: candidate,
                    ratio: declaration.ratio,
                });
            }
        }
    }

    matches
}
