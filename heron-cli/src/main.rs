//! Heron layout CLI
//!
//! Loads a headless scene, binds its legacy flexible-box declarations,
//! runs the layout passes, and prints the resulting geometry.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use heron_dom::{ElementTree, NodeId};
use heron_flex::{LayoutConfig, SimpleSelectorEngine, StyleMutation};
use heron_shim::LayoutController;
use heron_shim::scene::Scene;
use owo_colors::OwoColorize;

/// Legacy flexible-box layout runner for headless scenes.
#[derive(Debug, Parser)]
#[command(name = "heron", version, about)]
struct Args {
    /// Path to a scene JSON file.
    scene: PathBuf,

    /// Surface degenerate conditions as errors instead of warnings.
    #[arg(long)]
    strict: bool,

    /// Print the ordered style-mutation log.
    #[arg(long)]
    mutations: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let json = fs::read_to_string(&args.scene)
        .with_context(|| format!("failed to read scene file {}", args.scene.display()))?;
    let scene: Scene = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse scene file {}", args.scene.display()))?;

    let built = scene.build();
    let mut tree = built.tree;

    let config = if args.strict {
        LayoutConfig::strict()
    } else {
        LayoutConfig::default()
    };

    let engine = SimpleSelectorEngine;
    let mut controller = LayoutController::bind(
        &built.boxes,
        &built.flex_children,
        &engine,
        &tree,
        config,
    )
    .context("declaration binding failed")?;

    let log = controller
        .render_model(&mut tree, &built.metrics)
        .context("layout failed")?;

    println!("{}", "=== Flex Containers ===".bold());
    for instruction in controller.instructions() {
        let params = &instruction.params;
        println!(
            "{} {} (orient: {}, align: {}, direction: {}, pack: {})",
            node_label(&tree, instruction.target).green(),
            format_args!("[{} children]", instruction.children.len()),
            params.orient.keyword(),
            params.align.keyword(),
            params.direction.keyword(),
            params.pack.keyword(),
        );
        for &child in &instruction.children {
            println!("  {} {}", node_label(&tree, child), inline_summary(&tree, child));
        }
    }

    if args.mutations {
        println!("\n{}", "=== Style Mutations ===".bold());
        for mutation in &log {
            print_mutation(&tree, mutation);
        }
    }

    Ok(())
}

/// A short human-readable element label, `tag#id` when an id exists.
fn node_label(tree: &ElementTree, node: NodeId) -> String {
    match tree.as_element(node) {
        Some(element) => match element.id() {
            Some(id) => format!("{}#{id}", element.tag_name),
            None => element.tag_name.clone(),
        },
        None => format!("node{}", node.0),
    }
}

/// Render an element's final inline style in declaration form.
fn inline_summary(tree: &ElementTree, node: NodeId) -> String {
    let Some(style) = tree.style(node) else {
        return String::new();
    };
    let mut parts = Vec::new();
    if let Some(px) = style.width {
        parts.push(format!("width: {px}px"));
    }
    if let Some(px) = style.height {
        parts.push(format!("height: {px}px"));
    }
    if let Some(px) = style.margin_left {
        parts.push(format!("margin-left: {px}px"));
    }
    if let Some(px) = style.margin_top {
        parts.push(format!("margin-top: {px}px"));
    }
    if style.float.is_some() {
        parts.push("float: left".to_string());
    }
    if style.overflow_hidden {
        parts.push("overflow: hidden".to_string());
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("{{ {} }}", parts.join("; "))
    }
}

fn print_mutation(tree: &ElementTree, mutation: &StyleMutation) {
    match mutation {
        StyleMutation::Set { node, prop, px } => {
            println!(
                "  {} {}: {}px",
                node_label(tree, *node).cyan(),
                prop.css_name(),
                px
            );
        }
        StyleMutation::Clear { node, prop } => {
            println!(
                "  {} {}: {}",
                node_label(tree, *node).cyan(),
                prop.css_name(),
                "(cleared)".dimmed()
            );
        }
        StyleMutation::FloatLeft { node } => {
            println!("  {} float: left", node_label(tree, *node).cyan());
        }
        StyleMutation::ClearFloat { node } => {
            println!(
                "  {} float: {}",
                node_label(tree, *node).cyan(),
                "(cleared)".dimmed()
            );
        }
        StyleMutation::ClipOverflow { node } => {
            println!("  {} overflow: hidden", node_label(tree, *node).cyan());
        }
        StyleMutation::Reappend { parent, child } => {
            println!(
                "  {} reappended under {}",
                node_label(tree, *child).cyan(),
                node_label(tree, *parent)
            );
        }
    }
}
