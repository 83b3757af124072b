//! Re-layout controller for the Heron layout shim.
//!
//! # Scope
//!
//! This crate ties the binder and the layout engine into a document
//! pipeline:
//! - **Layout Controller** — owns the bound instructions, runs the
//!   initial render, and re-runs layout on explicit triggers
//! - **Dirty checking** — coarse content fingerprints (the headless
//!   `innerHTML` comparison) decide which containers re-lay on a
//!   content-change trigger
//! - **Scene format** — a serde model of a headless document plus its
//!   parsed declarations, shared by the CLI and the integration tests
//!
//! Scheduling stays outside: whoever owns the event loop (a 250ms
//! poll, a resize observer, a test) calls [`LayoutController`]'s
//! trigger methods. Everything is single-threaded; a run always
//! completes before the next trigger can fire.

pub mod scene;

pub use heron_flex as flex;

use std::collections::HashMap;

use heron_dom::{ElementTree, NodeId, serialize_subtree};
use heron_flex::{
    BoxDeclaration, FlexChildDeclaration, LayoutConfig, LayoutError, LayoutInstruction, Measure,
    SelectorQuery, StyleMutation, compute_layout,
};

/// Drives layout over a set of bound instructions.
///
/// Built once from the parsed declarations; thereafter the caller
/// invokes [`render_model`](Self::render_model) for the initial pass
/// and the two trigger methods on content change and resize.
#[derive(Debug, Clone)]
pub struct LayoutController {
    instructions: Vec<LayoutInstruction>,
    fingerprints: HashMap<NodeId, String>,
    config: LayoutConfig,
}

impl LayoutController {
    /// Bind the declarations and build a controller.
    ///
    /// # Errors
    ///
    /// Strict mode only: propagates [`LayoutError`] from the binder.
    pub fn bind(
        boxes: &[BoxDeclaration],
        flex_children: &[FlexChildDeclaration],
        query: &dyn SelectorQuery,
        tree: &ElementTree,
        config: LayoutConfig,
    ) -> Result<Self, LayoutError> {
        let instructions = heron_flex::bind(boxes, flex_children, query, tree, config)?;
        Ok(LayoutController {
            instructions,
            fingerprints: HashMap::new(),
            config,
        })
    }

    /// The bound instructions, in declaration order.
    #[must_use]
    pub fn instructions(&self) -> &[LayoutInstruction] {
        &self.instructions
    }

    /// Initial render of every bound container.
    ///
    /// Non-element children of each container are removed first (text
    /// between flex children would break float packing), then the full
    /// pass sequence runs and the content fingerprint is taken.
    ///
    /// # Errors
    ///
    /// Strict mode only: propagates [`LayoutError`] from the engine.
    pub fn render_model(
        &mut self,
        tree: &mut ElementTree,
        measure: &dyn Measure,
    ) -> Result<Vec<StyleMutation>, LayoutError> {
        let mut log = Vec::new();
        for index in 0..self.instructions.len() {
            let target = self.instructions[index].target;
            prune_non_element_children(tree, target);
            self.instructions[index].children = tree.element_children(target);
            log.extend(compute_layout(
                tree,
                &self.instructions[index],
                measure,
                self.config,
            )?);
            let _ = self
                .fingerprints
                .insert(target, serialize_subtree(tree, target));
        }
        Ok(log)
    }

    /// Re-lay one bound container, by index into
    /// [`instructions`](Self::instructions).
    ///
    /// The captured child list is refreshed from the live tree and
    /// every child's inline style is cleared before the passes run —
    /// the reset is what makes repeated layout a fixed point for
    /// styles.
    ///
    /// # Errors
    ///
    /// Strict mode only: propagates [`LayoutError`] from the engine.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for
    /// [`instructions`](Self::instructions).
    pub fn update_model(
        &mut self,
        tree: &mut ElementTree,
        index: usize,
        measure: &dyn Measure,
    ) -> Result<Vec<StyleMutation>, LayoutError> {
        let target = self.instructions[index].target;
        let children = tree.element_children(target);
        for &child in &children {
            if let Some(style) = tree.style_mut(child) {
                style.clear();
            }
        }
        self.instructions[index].children = children;

        let log = compute_layout(tree, &self.instructions[index], measure, self.config)?;
        let _ = self
            .fingerprints
            .insert(target, serialize_subtree(tree, target));
        Ok(log)
    }

    /// Content-change trigger: re-lay every container whose content
    /// fingerprint moved since last layout.
    ///
    /// The snapshot is the whole serialized subtree, not a diff.
    /// Returns the targets that were re-laid.
    ///
    /// # Errors
    ///
    /// Strict mode only: propagates [`LayoutError`] from the engine.
    pub fn on_content_changed(
        &mut self,
        tree: &mut ElementTree,
        measure: &dyn Measure,
    ) -> Result<Vec<NodeId>, LayoutError> {
        let mut relaid = Vec::new();
        for index in 0..self.instructions.len() {
            let target = self.instructions[index].target;
            let snapshot = serialize_subtree(tree, target);
            if self.fingerprints.get(&target) != Some(&snapshot) {
                let _ = self.update_model(tree, index, measure)?;
                relaid.push(target);
            }
        }
        Ok(relaid)
    }

    /// Resize trigger: re-lay every bound container unconditionally.
    ///
    /// # Errors
    ///
    /// Strict mode only: propagates [`LayoutError`] from the engine.
    pub fn on_container_resized(
        &mut self,
        tree: &mut ElementTree,
        measure: &dyn Measure,
    ) -> Result<Vec<StyleMutation>, LayoutError> {
        let mut log = Vec::new();
        for index in 0..self.instructions.len() {
            log.extend(self.update_model(tree, index, measure)?);
        }
        Ok(log)
    }
}

/// Remove a container's non-element children.
///
/// Whitespace text nodes between flex children participate in inline
/// flow and would shift the packed group; the original shim strips
/// them before the first layout.
fn prune_non_element_children(tree: &mut ElementTree, target: NodeId) {
    let doomed: Vec<NodeId> = tree
        .children(target)
        .iter()
        .copied()
        .filter(|&child| tree.as_element(child).is_none())
        .collect();
    for child in doomed {
        tree.remove_child(target, child);
    }
}
