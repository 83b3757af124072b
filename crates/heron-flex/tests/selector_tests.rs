//! Tests for the compound-selector subset and the bundled engine.

use std::collections::HashMap;

use heron_dom::{ElementData, ElementTree, NodeId, NodeType};
use heron_flex::selector::{CompoundSelector, SimpleSelector, parse_compound};
use heron_flex::{SelectorQuery, SimpleSelectorEngine};

fn element(tag: &str, attrs: &[(&str, &str)]) -> ElementData {
    let mut map = HashMap::new();
    for &(key, value) in attrs {
        let _ = map.insert(key.to_string(), value.to_string());
    }
    ElementData {
        tag_name: tag.to_string(),
        attrs: map,
    }
}

// ========== parse_compound ==========

#[test]
fn test_parse_simple_selectors() {
    assert_eq!(
        parse_compound("div"),
        Some(CompoundSelector {
            parts: vec![SimpleSelector::Type("div".to_string())]
        })
    );
    assert_eq!(
        parse_compound(".item"),
        Some(CompoundSelector {
            parts: vec![SimpleSelector::Class("item".to_string())]
        })
    );
    assert_eq!(
        parse_compound("#stage"),
        Some(CompoundSelector {
            parts: vec![SimpleSelector::Id("stage".to_string())]
        })
    );
    assert_eq!(
        parse_compound("*"),
        Some(CompoundSelector {
            parts: vec![SimpleSelector::Universal]
        })
    );
}

#[test]
fn test_parse_compound_sequence() {
    assert_eq!(
        parse_compound("div.item#main"),
        Some(CompoundSelector {
            parts: vec![
                SimpleSelector::Type("div".to_string()),
                SimpleSelector::Class("item".to_string()),
                SimpleSelector::Id("main".to_string()),
            ]
        })
    );
}

#[test]
fn test_parse_rejects_combinators_and_pseudos() {
    // Outside the compound subset: match nothing, never match wrongly.
    assert_eq!(parse_compound("div p"), None);
    assert_eq!(parse_compound("ul > li"), None);
    assert_eq!(parse_compound("a:hover"), None);
    assert_eq!(parse_compound("input[type=text]"), None);
    assert_eq!(parse_compound("div + p"), None);
    assert_eq!(parse_compound(""), None);
    assert_eq!(parse_compound("."), None);
}

// ========== matching ==========

#[test]
fn test_class_matching_is_token_based() {
    let data = element("div", &[("class", "stage wide")]);
    assert!(SimpleSelector::Class("stage".to_string()).matches(&data));
    assert!(SimpleSelector::Class("wide".to_string()).matches(&data));
    // "sta" is a substring of a token, not a token
    assert!(!SimpleSelector::Class("sta".to_string()).matches(&data));
}

#[test]
fn test_type_matching_is_case_insensitive() {
    let data = element("DIV", &[]);
    assert!(SimpleSelector::Type("div".to_string()).matches(&data));
}

#[test]
fn test_compound_requires_every_part() {
    let data = element("div", &[("class", "item"), ("id", "main")]);
    let selector = parse_compound("div.item#main").unwrap();
    assert!(selector.matches(&data));

    let wrong_id = element("div", &[("class", "item"), ("id", "other")]);
    assert!(!selector.matches(&wrong_id));
}

// ========== engine ==========

#[test]
fn test_engine_returns_document_order() {
    let mut tree = ElementTree::new();
    let outer = tree.alloc(NodeType::Element(element("div", &[("class", "item")])));
    tree.append_child(NodeId::ROOT, outer);
    let inner = tree.alloc(NodeType::Element(element("span", &[("class", "item")])));
    tree.append_child(outer, inner);
    let sibling = tree.alloc(NodeType::Element(element("div", &[("class", "item")])));
    tree.append_child(NodeId::ROOT, sibling);

    let matches = SimpleSelectorEngine.query(&tree, ".item");

    // Depth-first: outer before its descendant, descendant before the
    // later sibling.
    assert_eq!(matches, vec![outer, inner, sibling]);
}

#[test]
fn test_engine_unsupported_selector_matches_nothing() {
    let mut tree = ElementTree::new();
    let node = tree.alloc(NodeType::Element(element("div", &[])));
    tree.append_child(NodeId::ROOT, node);

    assert!(SimpleSelectorEngine.query(&tree, "div > span").is_empty());
    assert!(SimpleSelectorEngine.query(&tree, ":root").is_empty());
}

#[test]
fn test_engine_skips_text_nodes() {
    let mut tree = ElementTree::new();
    let node = tree.alloc(NodeType::Element(element("div", &[])));
    tree.append_child(NodeId::ROOT, node);
    let text = tree.alloc(NodeType::Text("div".to_string()));
    tree.append_child(node, text);

    assert_eq!(SimpleSelectorEngine.query(&tree, "*"), vec![node]);
}
