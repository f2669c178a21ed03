use std::path::Path;

use svg::node::element::{Rectangle, Text};
use svg::Document;

use super::DrawCommand;
use crate::layout::Rect;

/// Write draw commands into an SVG document.
///
/// The viewBox is the layout bounds, so rectangle coordinates map 1:1.
pub fn write_svg(
    filepath: impl AsRef<Path>,
    commands: &[DrawCommand],
    bounds: Rect,
) -> Result<(), std::io::Error> {
    let mut doc = Document::new().set(
        "viewBox",
        (bounds.x, bounds.y, bounds.w, bounds.h),
    );

    for cmd in commands {
        let rect = Rectangle::new()
            .set("x", cmd.rect.x)
            .set("y", cmd.rect.y)
            .set("width", cmd.rect.w)
            .set("height", cmd.rect.h)
            .set("fill", cmd.fill.to_hex())
            .set("stroke", cmd.stroke.to_hex())
            .set("stroke-width", 1);
        doc = doc.add(rect);
    }

    // Labels after all rectangles so text never sits under a neighbor fill
    for cmd in commands {
        let Some(label) = &cmd.label else {
            continue;
        };
        let font_size = (cmd.rect.h * 0.25).clamp(8.0, 16.0);
        let text = Text::new(label.as_str())
            .set("x", cmd.rect.x + 4.0)
            .set("y", cmd.rect.y + font_size + 2.0)
            .set("font-size", font_size)
            .set("font-family", "sans-serif")
            .set("fill", "#1a1a1a");
        doc = doc.add(text);
    }

    svg::save(filepath, &doc)
}
