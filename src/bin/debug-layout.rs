/// Diagnostic tool to verify tree → layout → draw-command pipeline
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use slicemap::input;
use slicemap::layout::{compute_layout, Axis, Rect};
use slicemap::render;
use slicemap::render::colors::ColorSettings;
use slicemap::tree::{leaf_count, total_weight, WeightTree};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("slicemap=debug".parse().unwrap()),
        )
        .init();

    let tree = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            println!("Loading: {}", path.display());
            input::load_tree(BufReader::new(File::open(&path)?))?
        }
        None => {
            println!("No input given, using built-in sample tree");
            sample_tree()
        }
    };

    println!("=== DIAGNOSTIC: Tree → Layout Pipeline ===");

    let root_node = tree.get(tree.root);
    println!(
        "\n[1] Tree built: {} nodes, {} leaves",
        tree.len(),
        leaf_count(&tree, tree.root)
    );
    println!(
        "    Root: '{}' (total weight {:.2})",
        root_node.name,
        total_weight(&tree, tree.root)
    );

    println!("\n[2] Children of root (layout order):");
    for (i, child_id) in tree.children(tree.root).enumerate() {
        let child = tree.get(child_id);
        println!(
            "    [{}] '{}' - weight {:.2} (leaf={}, children={})",
            i,
            child.name,
            total_weight(&tree, child_id),
            child.is_leaf(),
            tree.children(child_id).count()
        );
    }

    let bounds = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let layout = compute_layout(&tree, tree.root, bounds, Axis::Horizontal);
    println!("\n[3] Layout computed: {} rectangles", layout.rects.len());

    println!("\n[4] Top 10 largest rectangles by area:");
    let mut sorted_rects = layout.rects.clone();
    sorted_rects.sort_by(|a, b| b.rect.area().partial_cmp(&a.rect.area()).unwrap());

    for (i, lr) in sorted_rects.iter().take(10).enumerate() {
        let node = tree.get(lr.node);
        println!(
            "    [{}] '{}' - rect: {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1}) - depth {} axis {:?}",
            i,
            node.name,
            lr.rect.w,
            lr.rect.h,
            lr.rect.area(),
            lr.rect.x,
            lr.rect.y,
            lr.depth,
            lr.axis
        );
    }

    println!("\n[5] Checking leaf area coverage:");
    let leaf_area: f64 = layout
        .rects
        .iter()
        .filter(|lr| tree.get(lr.node).is_leaf())
        .map(|lr| lr.rect.area() as f64)
        .sum();
    let viewport_area = bounds.area() as f64;
    println!("    Total leaf area: {:.0}px²", leaf_area);
    println!("    Viewport area:   {:.0}px²", viewport_area);
    println!("    Coverage: {:.2}%", (leaf_area / viewport_area) * 100.0);

    let commands = render::build_commands(&tree, &layout, &ColorSettings::default());
    let labeled = commands.iter().filter(|c| c.label.is_some()).count();
    println!(
        "\n[6] Draw commands: {} ({} labeled)",
        commands.len(),
        labeled
    );

    Ok(())
}

fn sample_tree() -> WeightTree {
    let mut tree = WeightTree::new("sample");
    let docs = tree.add_group(tree.root, "docs");
    tree.add_leaf(docs, "thesis.pdf", 48.0).unwrap();
    tree.add_leaf(docs, "notes.md", 6.0).unwrap();
    let src = tree.add_group(tree.root, "src");
    tree.add_leaf(src, "main.rs", 14.0).unwrap();
    tree.add_leaf(src, "lib.rs", 22.0).unwrap();
    tree.add_leaf(src, "tests.rs", 10.0).unwrap();
    tree.add_leaf(tree.root, "README", 4.0).unwrap();
    tree
}
