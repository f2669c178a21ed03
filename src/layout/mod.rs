pub mod slice;

pub use slice::{compute_layout, Axis, Layout, LayoutRect, Rect};
