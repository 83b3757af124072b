//! Headless scene format.
//!
//! A scene is the serde model of everything the out-of-scope
//! collaborators would normally supply: the element tree with each
//! element's intrinsic box metrics (standing in for browser style
//! resolution), plus the already-parsed box and flex-child declaration
//! lists. The CLI loads scenes from JSON; the integration tests build
//! them inline.

use std::collections::HashMap;

use heron_common::warning::warn_once;
use heron_dom::{ElementData, ElementTree, NodeId, NodeType};
use heron_flex::{
    Align, BoxDeclaration, BoxMetrics, Direction, FlexChildDeclaration, MetricsTable, Orient, Pack,
};
use serde::{Deserialize, Serialize};

/// A complete headless document plus its parsed declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// The document's root element.
    pub root: SceneNode,
    /// Parsed `display: box` rules.
    #[serde(default)]
    pub boxes: Vec<SceneBoxRule>,
    /// Parsed `box-flex` rules.
    #[serde(default)]
    pub flex_children: Vec<SceneFlexRule>,
}

/// One element in a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    /// The element's tag name.
    pub tag: String,
    /// The element's attributes (`id`, `class`, ...).
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    /// The element's intrinsic box metrics.
    #[serde(default)]
    pub metrics: BoxMetrics,
    /// Child nodes in document order.
    #[serde(default)]
    pub children: Vec<SceneChild>,
}

/// A scene child: either a text run or a nested element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SceneChild {
    /// A text node.
    Text(String),
    /// A nested element.
    Element(SceneNode),
}

/// One flex-container rule, keywords as written in the stylesheet.
///
/// Unrecognized keywords degrade to "unspecified" with a warning, so a
/// typo never drops the whole rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneBoxRule {
    /// The rule's selector text.
    pub selector: String,
    /// `box-orient` keyword, if declared.
    #[serde(default)]
    pub orient: Option<String>,
    /// `box-align` keyword, if declared.
    #[serde(default)]
    pub align: Option<String>,
    /// `box-direction` keyword, if declared.
    #[serde(default)]
    pub direction: Option<String>,
    /// `box-pack` keyword, if declared.
    #[serde(default)]
    pub pack: Option<String>,
}

/// One `box-flex` rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFlexRule {
    /// The rule's selector text.
    pub selector: String,
    /// The flex ratio; zero is rejected at build time.
    pub flex: u32,
}

/// A scene realized into live inputs for the binder.
#[derive(Debug, Clone)]
pub struct BuiltScene {
    /// The element tree.
    pub tree: ElementTree,
    /// Intrinsic metrics for every element.
    pub metrics: MetricsTable,
    /// Box declarations with parsed keywords.
    pub boxes: Vec<BoxDeclaration>,
    /// Flex-child declarations with validated ratios.
    pub flex_children: Vec<FlexChildDeclaration>,
}

impl Scene {
    /// Realize the scene: build the tree and metrics table, parse the
    /// declaration keywords.
    #[must_use]
    pub fn build(&self) -> BuiltScene {
        let mut tree = ElementTree::new();
        let mut metrics = MetricsTable::new();
        let root = tree.root();
        build_node(&mut tree, &mut metrics, root, &self.root);

        let boxes = self.boxes.iter().map(parse_box_rule).collect();

        let mut flex_children = Vec::new();
        for rule in &self.flex_children {
            match FlexChildDeclaration::new(rule.selector.clone(), rule.flex) {
                Some(declaration) => flex_children.push(declaration),
                None => warn_once(
                    "Scene",
                    &format!(
                        "`{}`: box-flex ratio must be a positive integer; rule dropped",
                        rule.selector
                    ),
                ),
            }
        }

        BuiltScene {
            tree,
            metrics,
            boxes,
            flex_children,
        }
    }
}

/// Recursively allocate one scene element and its children.
fn build_node(
    tree: &mut ElementTree,
    metrics: &mut MetricsTable,
    parent: NodeId,
    scene_node: &SceneNode,
) {
    let element = tree.alloc(NodeType::Element(ElementData {
        tag_name: scene_node.tag.clone(),
        attrs: scene_node.attrs.clone(),
    }));
    metrics.insert(element, scene_node.metrics);
    tree.append_child(parent, element);

    for child in &scene_node.children {
        match child {
            SceneChild::Text(text) => {
                let text_node = tree.alloc(NodeType::Text(text.clone()));
                tree.append_child(element, text_node);
            }
            SceneChild::Element(nested) => build_node(tree, metrics, element, nested),
        }
    }
}

/// Parse one box rule's keywords into a declaration.
fn parse_box_rule(rule: &SceneBoxRule) -> BoxDeclaration {
    let mut declaration = BoxDeclaration::new(rule.selector.clone());
    declaration.orient = parse_keyword(&rule.selector, "box-orient", &rule.orient, Orient::parse);
    declaration.align = parse_keyword(&rule.selector, "box-align", &rule.align, Align::parse);
    declaration.direction = parse_keyword(
        &rule.selector,
        "box-direction",
        &rule.direction,
        Direction::parse,
    );
    declaration.pack = parse_keyword(&rule.selector, "box-pack", &rule.pack, Pack::parse);
    declaration
}

/// Parse one optional keyword, warning (once) on values outside the
/// property's grammar.
fn parse_keyword<T>(
    selector: &str,
    property: &str,
    keyword: &Option<String>,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let keyword = keyword.as_deref()?;
    let parsed = parse(keyword);
    if parsed.is_none() {
        warn_once(
            "Scene",
            &format!("`{selector}`: unrecognized {property} keyword `{keyword}`; ignored"),
        );
    }
    parsed
}
