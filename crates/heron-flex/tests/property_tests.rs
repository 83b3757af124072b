//! Property tests over the layout passes.

use heron_dom::{ElementData, ElementTree, NodeId, NodeType};
use heron_flex::{
    Align, BoxMetrics, BoxParams, Direction, FlexMatch, LayoutConfig, MetricsTable, Pack,
    compute_layout, LayoutInstruction,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Helper: a horizontal container sized to `width` with one child per
/// entry in `child_widths`, every child 20px tall.
fn fixture(width: f32, child_widths: &[f32]) -> (ElementTree, MetricsTable, NodeId, Vec<NodeId>) {
    let mut tree = ElementTree::new();
    let mut metrics = MetricsTable::new();

    let container = tree.alloc(NodeType::Element(ElementData {
        tag_name: "div".to_string(),
        attrs: Default::default(),
    }));
    tree.append_child(NodeId::ROOT, container);
    metrics.insert(
        container,
        BoxMetrics {
            content_width: width,
            content_height: 50.0,
            ..Default::default()
        },
    );

    let mut children = Vec::new();
    for &child_width in child_widths {
        let child = tree.alloc(NodeType::Element(ElementData {
            tag_name: "div".to_string(),
            attrs: Default::default(),
        }));
        tree.append_child(container, child);
        metrics.insert(
            child,
            BoxMetrics {
                content_width: child_width,
                content_height: 20.0,
                ..Default::default()
            },
        );
        children.push(child);
    }

    (tree, metrics, container, children)
}

fn instruction_for(
    tree: &ElementTree,
    container: NodeId,
    params: BoxParams,
    flex_matches: Vec<FlexMatch>,
) -> LayoutInstruction {
    LayoutInstruction {
        selector: "#stage".to_string(),
        target: container,
        children: tree.element_children(container),
        params,
        flex_matches,
    }
}

/// Stretch gives every child the same cross size whatever its
/// intrinsic height was.
#[quickcheck]
fn prop_stretch_equalizes_cross_sizes(child_widths: Vec<u16>) -> TestResult {
    if child_widths.is_empty() || child_widths.len() > 32 {
        return TestResult::discard();
    }
    let widths: Vec<f32> = child_widths.iter().map(|&w| f32::from(w)).collect();
    let (mut tree, metrics, container, children) = fixture(500.0, &widths);
    let instruction = instruction_for(&tree, container, BoxParams::default(), Vec::new());

    let _ = compute_layout(&mut tree, &instruction, &metrics, LayoutConfig::default()).unwrap();

    TestResult::from_bool(
        children
            .iter()
            .all(|&kid| tree.style(kid).unwrap().height == Some(50.0)),
    )
}

/// Reversing twice restores document order, for any child count.
#[quickcheck]
fn prop_reverse_round_trips(child_count: u8) -> TestResult {
    if child_count == 0 || child_count > 32 {
        return TestResult::discard();
    }
    let widths = vec![10.0; usize::from(child_count)];
    let (mut tree, metrics, container, children) = fixture(500.0, &widths);
    let params = BoxParams {
        direction: Direction::Reverse,
        ..Default::default()
    };

    for _ in 0..2 {
        let instruction = instruction_for(&tree, container, params, Vec::new());
        let _ =
            compute_layout(&mut tree, &instruction, &metrics, LayoutConfig::default()).unwrap();
    }

    TestResult::from_bool(tree.element_children(container) == children)
}

/// When every child flexes, the final main sizes absorb exactly the
/// container's free space.
#[quickcheck]
fn prop_flex_conserves_container_extent(
    child_widths: Vec<u8>,
    ratios: Vec<u8>,
) -> TestResult {
    if child_widths.is_empty() || child_widths.len() > 16 {
        return TestResult::discard();
    }
    if ratios.len() < child_widths.len() || ratios.iter().take(child_widths.len()).any(|&r| r == 0)
    {
        return TestResult::discard();
    }

    let widths: Vec<f32> = child_widths.iter().map(|&w| f32::from(w)).collect();
    let (mut tree, metrics, container, children) = fixture(1000.0, &widths);
    let flex_matches: Vec<FlexMatch> = children
        .iter()
        .zip(&ratios)
        .map(|(&node, &ratio)| FlexMatch {
            node,
            ratio: u32::from(ratio),
        })
        .collect();
    let instruction = instruction_for(&tree, container, BoxParams::default(), flex_matches);

    let _ = compute_layout(&mut tree, &instruction, &metrics, LayoutConfig::default()).unwrap();

    let total: f32 = children
        .iter()
        .map(|&kid| tree.style(kid).unwrap().width.unwrap())
        .sum();
    TestResult::from_bool((total - 1000.0).abs() < 0.05)
}

/// Justify gaps are whole pixels.
#[quickcheck]
fn prop_justify_gap_is_integral(container_width: u16, child_count: u8) -> TestResult {
    if child_count < 2 || child_count > 16 {
        return TestResult::discard();
    }
    let widths = vec![5.0; usize::from(child_count)];
    let (mut tree, metrics, container, children) =
        fixture(f32::from(container_width), &widths);
    let params = BoxParams {
        align: Align::Start,
        pack: Pack::Justify,
        ..Default::default()
    };
    let instruction = instruction_for(&tree, container, params, Vec::new());

    let _ = compute_layout(&mut tree, &instruction, &metrics, LayoutConfig::default()).unwrap();

    let gap = tree.style(children[1]).unwrap().margin_left.unwrap();
    TestResult::from_bool(gap.fract() == 0.0)
}
