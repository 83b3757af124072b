//! Tests for tree mutation methods: append_child, remove_child,
//! re-append move semantics, and the content fingerprint.

use heron_dom::{ElementData, ElementTree, NodeId, NodeType, serialize_subtree};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut ElementTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData {
        tag_name: tag.to_string(),
        attrs: Default::default(),
    }))
}

// ========== append_child ==========

#[test]
fn test_append_child_links_siblings() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(b), None);
}

#[test]
fn test_append_existing_child_moves_to_end() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    // appendChild of an attached node moves it, never duplicates it
    tree.append_child(parent, a);

    assert_eq!(tree.children(parent), &[b, c, a]);
    assert_eq!(tree.prev_sibling(b), None);
    assert_eq!(tree.next_sibling(c), Some(a));
    assert_eq!(tree.prev_sibling(a), Some(c));
    assert_eq!(tree.next_sibling(a), None);
}

#[test]
fn test_append_child_across_parents() {
    let mut tree = ElementTree::new();
    let first = alloc_element(&mut tree, "div");
    let second = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, first);
    tree.append_child(NodeId::ROOT, second);

    let child = alloc_element(&mut tree, "p");
    tree.append_child(first, child);
    tree.append_child(second, child);

    assert_eq!(tree.children(first).len(), 0);
    assert_eq!(tree.children(second), &[child]);
    assert_eq!(tree.parent(child), Some(second));
}

// ========== remove_child ==========

#[test]
fn test_remove_child_detaches_fully() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, b);

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
    assert_eq!(tree.parent(b), None);
    assert_eq!(tree.prev_sibling(b), None);
    assert_eq!(tree.next_sibling(b), None);
}

#[test]
fn test_remove_child_not_a_child_is_noop() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    let stranger = alloc_element(&mut tree, "p");
    tree.append_child(NodeId::ROOT, parent);

    tree.remove_child(parent, stranger);

    assert_eq!(tree.children(parent).len(), 0);
}

#[test]
fn test_removed_child_can_be_reappended() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    // The direction-reverse pass detaches and re-appends in reverse.
    tree.remove_child(parent, a);
    tree.append_child(parent, a);

    assert_eq!(tree.children(parent), &[b, a]);
}

// ========== element_children ==========

#[test]
fn test_element_children_skips_text_nodes() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let text = tree.alloc(NodeType::Text("  ".to_string()));
    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, a);
    tree.append_child(parent, text);
    tree.append_child(parent, b);

    assert_eq!(tree.children(parent).len(), 3);
    assert_eq!(tree.element_children(parent), vec![a, b]);
}

// ========== serialize_subtree ==========

#[test]
fn test_fingerprint_stable_across_runs() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);
    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    let first = serialize_subtree(&tree, parent);
    let second = serialize_subtree(&tree, parent);
    assert_eq!(first, second);
}

#[test]
fn test_fingerprint_changes_on_structure_change() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);
    let a = alloc_element(&mut tree, "a");
    tree.append_child(parent, a);

    let before = serialize_subtree(&tree, parent);

    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, b);

    assert_ne!(before, serialize_subtree(&tree, parent));
}

#[test]
fn test_fingerprint_ignores_inline_style() {
    let mut tree = ElementTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);
    let child = alloc_element(&mut tree, "p");
    tree.append_child(parent, child);

    let before = serialize_subtree(&tree, parent);

    // Engine writes must not look like content changes.
    tree.style_mut(child).unwrap().width = Some(120.0);
    tree.style_mut(child).unwrap().overflow_hidden = true;

    assert_eq!(before, serialize_subtree(&tree, parent));
}

#[test]
fn test_fingerprint_attribute_order_independent() {
    let mut build = |pairs: &[(&str, &str)]| {
        let mut tree = ElementTree::new();
        let mut data = ElementData {
            tag_name: "div".to_string(),
            attrs: Default::default(),
        };
        for &(key, value) in pairs {
            let _ = data.attrs.insert(key.to_string(), value.to_string());
        }
        let node = tree.alloc(NodeType::Element(data));
        tree.append_child(NodeId::ROOT, node);
        serialize_subtree(&tree, NodeId::ROOT)
    };

    let forwards = build(&[("id", "x"), ("class", "item")]);
    let backwards = build(&[("class", "item"), ("id", "x")]);
    assert_eq!(forwards, backwards);
}
