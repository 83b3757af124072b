//! Tests for the headless scene format: JSON deserialization, tree
//! realization, and keyword degradation.

use heron_dom::NodeId;
use heron_flex::{Align, Orient, Pack};
use heron_shim::scene::Scene;

const JUSTIFY_SCENE: &str = r##"{
  "root": {
    "tag": "body",
    "children": [
      {
        "tag": "div",
        "attrs": { "id": "stage" },
        "metrics": { "content_width": 300, "content_height": 60 },
        "children": [
          "some text",
          {
            "tag": "div",
            "attrs": { "class": "item" },
            "metrics": { "content_width": 50, "content_height": 40 }
          },
          {
            "tag": "div",
            "attrs": { "class": "item" },
            "metrics": { "content_width": 50, "content_height": 40 }
          }
        ]
      }
    ]
  },
  "boxes": [
    { "selector": "#stage", "orient": "horizontal", "pack": "justify" }
  ],
  "flex_children": [
    { "selector": ".item", "flex": 1 }
  ]
}"##;

#[test]
fn test_scene_round_trips_through_json() {
    let scene: Scene = serde_json::from_str(JUSTIFY_SCENE).unwrap();
    let json = serde_json::to_string(&scene).unwrap();
    let again: Scene = serde_json::from_str(&json).unwrap();

    assert_eq!(again.boxes.len(), 1);
    assert_eq!(again.flex_children.len(), 1);
    assert_eq!(again.root.children.len(), 1);
}

#[test]
fn test_build_realizes_tree_and_metrics() {
    let scene: Scene = serde_json::from_str(JUSTIFY_SCENE).unwrap();
    let built = scene.build();

    // body under the document root
    let body = built.tree.element_children(NodeId::ROOT)[0];
    assert_eq!(built.tree.as_element(body).unwrap().tag_name, "body");

    let stage = built.tree.element_children(body)[0];
    assert_eq!(
        built.tree.as_element(stage).unwrap().id(),
        Some(&"stage".to_string())
    );
    assert_eq!(built.metrics.get(stage).unwrap().content_width, 300.0);

    // The text run became a real text node.
    let stage_children = built.tree.children(stage);
    assert_eq!(stage_children.len(), 3);
    assert_eq!(built.tree.as_text(stage_children[0]), Some("some text"));
    assert_eq!(built.tree.element_children(stage).len(), 2);
}

#[test]
fn test_build_parses_keywords() {
    let scene: Scene = serde_json::from_str(JUSTIFY_SCENE).unwrap();
    let built = scene.build();

    assert_eq!(built.boxes[0].orient, Some(Orient::Horizontal));
    assert_eq!(built.boxes[0].pack, Some(Pack::Justify));
    assert_eq!(built.boxes[0].align, None);
    assert_eq!(built.flex_children[0].ratio, 1);
}

#[test]
fn test_unrecognized_keyword_degrades_to_unspecified() {
    let json = r##"{
      "root": { "tag": "body" },
      "boxes": [
        { "selector": "#stage", "orient": "sideways", "align": "stretch" }
      ]
    }"##;
    let scene: Scene = serde_json::from_str(json).unwrap();
    let built = scene.build();

    // The bad keyword drops, the good one in the same rule survives.
    assert_eq!(built.boxes[0].orient, None);
    assert_eq!(built.boxes[0].align, Some(Align::Stretch));
}

#[test]
fn test_zero_flex_rule_is_dropped() {
    let json = r##"{
      "root": { "tag": "body" },
      "flex_children": [
        { "selector": ".a", "flex": 0 },
        { "selector": ".b", "flex": 3 }
      ]
    }"##;
    let scene: Scene = serde_json::from_str(json).unwrap();
    let built = scene.build();

    assert_eq!(built.flex_children.len(), 1);
    assert_eq!(built.flex_children[0].selector, ".b");
    assert_eq!(built.flex_children[0].ratio, 3);
}

#[test]
fn test_inline_axis_keywords_parse() {
    let json = r##"{
      "root": { "tag": "body" },
      "boxes": [
        { "selector": "#a", "orient": "inline-axis" },
        { "selector": "#b", "orient": "block-axis" }
      ]
    }"##;
    let scene: Scene = serde_json::from_str(json).unwrap();
    let built = scene.build();

    assert_eq!(built.boxes[0].orient, Some(Orient::InlineAxis));
    assert!(!built.boxes[0].orient.unwrap().is_vertical());
    assert_eq!(built.boxes[1].orient, Some(Orient::BlockAxis));
    assert!(built.boxes[1].orient.unwrap().is_vertical());
}
