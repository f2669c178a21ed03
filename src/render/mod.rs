pub mod colors;
pub mod svg;

use crate::layout::{Layout, Rect};
use crate::tree::WeightTree;
use colors::{leaf_color, Color, ColorSettings};

/// Minimum rectangle size (px) before a label is attached.
/// Below this, text would not fit and renderers would clip it anyway.
const MIN_LABEL_W: f32 = 40.0;
const MIN_LABEL_H: f32 = 14.0;

/// One drawing primitive for an external rendering surface.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub rect: Rect,
    pub fill: Color,
    pub stroke: Color,
    /// Leaf name, present when the rectangle is large enough to carry text
    pub label: Option<String>,
}

/// Lower a layout into draw commands, one per visible leaf.
///
/// Group rectangles are structural and not drawn; zero-area rectangles
/// (zero-weight leaves) are skipped here.
pub fn build_commands(tree: &WeightTree, layout: &Layout, settings: &ColorSettings) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    for lr in &layout.rects {
        let node = tree.get(lr.node);
        if !node.is_leaf() {
            continue;
        }
        if lr.rect.area() <= 0.0 {
            continue;
        }

        let fill = leaf_color(&node.name, settings);
        let label = if lr.rect.w >= MIN_LABEL_W && lr.rect.h >= MIN_LABEL_H {
            Some(node.name.to_string())
        } else {
            None
        };

        commands.push(DrawCommand {
            rect: lr.rect,
            fill,
            stroke: fill.darken(0.25),
            label,
        });
    }

    tracing::debug!(
        "lowered layout: {} rects -> {} draw commands",
        layout.rects.len(),
        commands.len()
    );

    commands
}
