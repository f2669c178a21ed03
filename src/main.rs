mod input;
mod layout;
mod render;
mod tree;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use layout::{compute_layout, Axis, Rect};
use render::colors::ColorSettings;

#[derive(Parser, Debug)]
#[command(name = "slicemap")]
#[command(author, version, about = "Render a weighted tree as a slice-and-dice treemap SVG")]
struct Cli {
    /// JSON tree description
    #[arg(short, long)]
    input: PathBuf,

    /// Output SVG path
    #[arg(short, long, default_value = "treemap.svg")]
    output: PathBuf,

    /// Layout width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Layout height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Split the root vertically instead of horizontally
    #[arg(long)]
    vertical_first: bool,

    /// Saturation multiplier for leaf fills
    #[arg(long, default_value_t = 1.20)]
    vibrancy: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("slicemap=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let tree = input::load_tree(BufReader::new(file))
        .with_context(|| format!("invalid tree description in {}", cli.input.display()))?;

    tracing::info!(
        "loaded '{}': {} nodes, {} leaves",
        tree.get(tree.root).name,
        tree.len(),
        tree::leaf_count(&tree, tree.root)
    );

    let first_axis = if cli.vertical_first {
        Axis::Vertical
    } else {
        Axis::Horizontal
    };
    let bounds = Rect::new(0.0, 0.0, cli.width, cli.height);
    let layout = compute_layout(&tree, tree.root, bounds, first_axis);

    let settings = ColorSettings {
        vibrancy: cli.vibrancy,
    };
    let commands = render::build_commands(&tree, &layout, &settings);

    render::svg::write_svg(&cli.output, &commands, bounds)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(
        "wrote {} rectangles to {}",
        commands.len(),
        cli.output.display()
    );

    Ok(())
}
