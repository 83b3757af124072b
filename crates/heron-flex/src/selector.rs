//! The selector-query capability and a small built-in engine.
//!
//! The binder never chooses a selector engine itself (the original shim
//! probed half a dozen global libraries at runtime); it receives one
//! through [`SelectorQuery`]. The bundled [`SimpleSelectorEngine`]
//! covers the compound subset of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) that legacy
//! flexbox stylesheets actually use — type, class, ID, and universal
//! selectors — and is all the tests and the CLI need.

use heron_dom::{ElementData, ElementTree, NodeId};

/// A selector-resolution capability.
///
/// Implementations return every matching element in document order; the
/// binder applies its own first-match and parent-equality policies on
/// top. An unparseable or unknown selector matches nothing — dropping
/// the declaration is the caller's decision.
pub trait SelectorQuery {
    /// Resolve `selector` against the tree, in document order.
    fn query(&self, tree: &ElementTree, selector: &str) -> Vec<NodeId>;
}

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
///
/// A simple selector is a single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `ul`, `section`
    Type(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E)
    /// immediately followed by an identifier."
    ///
    /// Examples: `.stage`, `.item`
    Class(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by
    /// the ID value."
    ///
    /// Examples: `#main`, `#sidebar`
    Id(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    ///
    /// Example: `*`
    Universal,
}

impl SimpleSelector {
    /// [§ 5.1, § 6.6, § 6.7](https://www.w3.org/TR/selectors-4/)
    ///
    /// Test this condition against one element.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            SimpleSelector::Type(name) => element.tag_name.eq_ignore_ascii_case(name),
            SimpleSelector::Class(name) => element.classes().contains(name.as_str()),
            SimpleSelector::Id(name) => element.id() == Some(name),
            SimpleSelector::Universal => true,
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator." Every condition must hold on the same
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    /// The conditions, all of which must match.
    pub parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Test every condition against one element.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        self.parts.iter().all(|part| part.matches(element))
    }
}

/// Parse a compound selector.
///
/// Returns `None` for anything outside the supported subset —
/// combinators, pseudo-classes, attribute selectors — so unsupported
/// selectors match nothing rather than matching wrongly.
#[must_use]
pub fn parse_compound(selector: &str) -> Option<CompoundSelector> {
    let text = selector.trim();
    if text.is_empty() || text.contains(char::is_whitespace) {
        return None;
    }

    let mut parts = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let (marker, after) = match rest.chars().next() {
            Some('.') => ('.', &rest[1..]),
            Some('#') => ('#', &rest[1..]),
            Some('*') => {
                parts.push(SimpleSelector::Universal);
                rest = &rest[1..];
                continue;
            }
            _ => ('\0', rest),
        };

        let end = after
            .find(['.', '#', '*', ':', '[', '>', '+', '~'])
            .unwrap_or(after.len());
        let name = &after[..end];
        if name.is_empty() || !name.chars().all(is_ident_char) {
            return None;
        }

        parts.push(match marker {
            '.' => SimpleSelector::Class(name.to_string()),
            '#' => SimpleSelector::Id(name.to_string()),
            _ => SimpleSelector::Type(name.to_string()),
        });
        rest = &after[end..];

        // A combinator or pseudo marker left over means the selector is
        // outside the compound subset.
        if rest.starts_with([':', '[', '>', '+', '~']) {
            return None;
        }
    }

    if parts.is_empty() {
        return None;
    }
    Some(CompoundSelector { parts })
}

/// [§ 2.3.1 Identifiers](https://www.w3.org/TR/css-syntax-3/#ident-token-diagram)
///
/// The identifier characters the subset grammar accepts.
fn is_ident_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '-' || character == '_'
}

/// The bundled compound-selector engine.
///
/// Walks the tree depth-first so results come back in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSelectorEngine;

impl SelectorQuery for SimpleSelectorEngine {
    fn query(&self, tree: &ElementTree, selector: &str) -> Vec<NodeId> {
        let Some(compound) = parse_compound(selector) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        collect_matches(tree, tree.root(), &compound, &mut matches);
        matches
    }
}

/// Depth-first document-order traversal collecting matching elements.
fn collect_matches(
    tree: &ElementTree,
    id: NodeId,
    compound: &CompoundSelector,
    matches: &mut Vec<NodeId>,
) {
    if let Some(element) = tree.as_element(id) {
        if compound.matches(element) {
            matches.push(id);
        }
    }
    for &child in tree.children(id) {
        collect_matches(tree, child, compound, matches);
    }
}
