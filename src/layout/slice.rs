use std::collections::HashMap;

use crate::tree::{total_weight, NodeId, WeightTree};

/// Axis-aligned rectangle in layout space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }
}

/// Split direction for one level of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children are placed side by side, consuming width.
    Horizontal,
    /// Children are stacked, consuming height.
    Vertical,
}

impl Axis {
    /// Slice-and-dice alternates the split axis at every level.
    pub fn flip(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A positioned rectangle in the treemap layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRect {
    pub node: NodeId,
    pub rect: Rect,
    pub depth: u16,
    /// Axis this node's children are sliced along
    pub axis: Axis,
}

/// The full layout result (rects + fast lookup).
#[derive(Debug)]
pub struct Layout {
    /// All positioned rectangles (leaves + groups; renderers consume the leaves)
    pub rects: Vec<LayoutRect>,
    /// node → index into `rects` (O(1) hit-testing and diagnostics)
    pub node_to_rect: HashMap<NodeId, usize>,
}

/// Compute a slice-and-dice layout for any subtree within the given bounds.
///
/// Children split the current axis in proportion to their recomputed subtree
/// weights and recurse with the opposite axis. Every reachable node gets a
/// rectangle; a zero-weight child gets a degenerate one and its own children
/// are left out entirely.
pub fn compute_layout(tree: &WeightTree, root: NodeId, bounds: Rect, first_axis: Axis) -> Layout {
    let mut rects = Vec::with_capacity(tree.len());
    let mut node_to_rect = HashMap::with_capacity(tree.len());

    rects.push(LayoutRect {
        node: root,
        rect: bounds,
        depth: 0,
        axis: first_axis,
    });
    node_to_rect.insert(root, 0);

    if !tree.get(root).is_leaf() {
        slice_children(
            tree,
            root,
            bounds,
            0,
            first_axis,
            &mut rects,
            &mut node_to_rect,
        );
    }

    Layout { rects, node_to_rect }
}

/// Recursively slice a group's bounds among its children.
fn slice_children(
    tree: &WeightTree,
    parent: NodeId,
    bounds: Rect,
    depth: u16,
    axis: Axis,
    rects: &mut Vec<LayoutRect>,
    node_to_rect: &mut HashMap<NodeId, usize>,
) {
    let parent_weight = total_weight(tree, parent);
    if parent_weight <= 0.0 {
        tracing::debug!(
            "skipping layout for '{}' with zero total weight at depth {}",
            tree.get(parent).name,
            depth
        );
        return;
    }

    let extent = match axis {
        Axis::Horizontal => bounds.w as f64,
        Axis::Vertical => bounds.h as f64,
    };

    // Offsets come from the weight prefix sum so sibling spans telescope to
    // exactly the parent extent instead of accumulating rounding drift.
    let mut cumulative = 0.0f64;
    let mut offset = 0.0f64;

    for child_id in tree.children(parent) {
        let child_weight = total_weight(tree, child_id);
        cumulative += child_weight;
        let end = extent * (cumulative / parent_weight);
        let span = end - offset;

        let child_rect = match axis {
            Axis::Horizontal => Rect::new(
                bounds.x + offset as f32,
                bounds.y,
                span as f32,
                bounds.h,
            ),
            Axis::Vertical => Rect::new(
                bounds.x,
                bounds.y + offset as f32,
                bounds.w,
                span as f32,
            ),
        };
        offset = end;

        let child_depth = depth + 1;
        let child_axis = axis.flip();

        let idx = rects.len();
        rects.push(LayoutRect {
            node: child_id,
            rect: child_rect,
            depth: child_depth,
            axis: child_axis,
        });
        node_to_rect.insert(child_id, idx);

        // Recurse into groups with the opposite split axis; a zero-weight
        // group is caught by the guard above and contributes no descendants.
        if !tree.get(child_id).is_leaf() {
            slice_children(
                tree,
                child_id,
                child_rect,
                child_depth,
                child_axis,
                rects,
                node_to_rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::WeightTree;

    fn leaf_area_sum(tree: &WeightTree, layout: &Layout) -> f64 {
        layout
            .rects
            .iter()
            .filter(|r| tree.get(r.node).is_leaf())
            .map(|r| r.rect.area() as f64)
            .sum()
    }

    #[test]
    fn single_leaf_fills_bounds() {
        let mut tree = WeightTree::new("root");
        let leaf = tree.add_leaf(tree.root, "only", 42.0).unwrap();

        let bounds = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let layout = compute_layout(&tree, tree.root, bounds, Axis::Horizontal);

        let idx = layout.node_to_rect[&leaf];
        let r = layout.rects[idx].rect;
        assert!((r.x - bounds.x).abs() < 1e-3);
        assert!((r.y - bounds.y).abs() < 1e-3);
        assert!((r.w - bounds.w).abs() < 1e-3);
        assert!((r.h - bounds.h).abs() < 1e-3);
    }

    #[test]
    fn equal_weights_split_into_equal_halves() {
        let mut tree = WeightTree::new("root");
        let a = tree.add_leaf(tree.root, "a", 5.0).unwrap();
        let b = tree.add_leaf(tree.root, "b", 5.0).unwrap();

        let layout = compute_layout(
            &tree,
            tree.root,
            Rect::new(0.0, 0.0, 100.0, 60.0),
            Axis::Horizontal,
        );

        let ra = layout.rects[layout.node_to_rect[&a]].rect;
        let rb = layout.rects[layout.node_to_rect[&b]].rect;
        // Split along x: same height, half width each, b starts where a ends
        assert!((ra.w - 50.0).abs() < 1e-3);
        assert!((rb.w - 50.0).abs() < 1e-3);
        assert!((ra.h - 60.0).abs() < 1e-3);
        assert!((rb.x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn axis_alternates_per_level() {
        let mut tree = WeightTree::new("root");
        let group = tree.add_group(tree.root, "group");
        let inner_a = tree.add_leaf(group, "ia", 1.0).unwrap();
        let inner_b = tree.add_leaf(group, "ib", 1.0).unwrap();
        tree.add_leaf(tree.root, "sibling", 2.0).unwrap();

        let layout = compute_layout(
            &tree,
            tree.root,
            Rect::new(0.0, 0.0, 100.0, 80.0),
            Axis::Horizontal,
        );

        // Root splits along x, so the group gets a 50x80 strip; its children
        // split along y into two 50x40 rects.
        let ra = layout.rects[layout.node_to_rect[&inner_a]].rect;
        let rb = layout.rects[layout.node_to_rect[&inner_b]].rect;
        assert!((ra.w - 50.0).abs() < 1e-3);
        assert!((ra.h - 40.0).abs() < 1e-3);
        assert!((rb.y - (ra.y + ra.h)).abs() < 1e-3);
    }

    #[test]
    fn leaf_areas_sum_to_bounds_area() {
        let mut tree = WeightTree::new("root");
        let g1 = tree.add_group(tree.root, "g1");
        tree.add_leaf(g1, "a", 3.0).unwrap();
        tree.add_leaf(g1, "b", 1.0).unwrap();
        let g2 = tree.add_group(tree.root, "g2");
        tree.add_leaf(g2, "c", 2.0).unwrap();
        let g3 = tree.add_group(g2, "g3");
        tree.add_leaf(g3, "d", 0.5).unwrap();
        tree.add_leaf(g3, "e", 1.5).unwrap();
        tree.add_leaf(tree.root, "f", 2.0).unwrap();

        let bounds = Rect::new(10.0, 20.0, 640.0, 480.0);
        let layout = compute_layout(&tree, tree.root, bounds, Axis::Vertical);

        let total = leaf_area_sum(&tree, &layout);
        let expected = bounds.area() as f64;
        assert!(
            (total - expected).abs() / expected < 1e-4,
            "leaf areas {} != bounds area {}",
            total,
            expected
        );
    }

    #[test]
    fn zero_weight_child_gets_zero_area_rect() {
        let mut tree = WeightTree::new("root");
        tree.add_leaf(tree.root, "big", 10.0).unwrap();
        let empty = tree.add_leaf(tree.root, "empty", 0.0).unwrap();

        let layout = compute_layout(
            &tree,
            tree.root,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Axis::Horizontal,
        );

        let r = layout.rects[layout.node_to_rect[&empty]].rect;
        assert_eq!(r.area(), 0.0);
    }

    #[test]
    fn zero_weight_group_contributes_no_descendants() {
        let mut tree = WeightTree::new("root");
        tree.add_leaf(tree.root, "solid", 1.0).unwrap();
        let hollow = tree.add_group(tree.root, "hollow");
        let ghost = tree.add_leaf(hollow, "ghost", 0.0).unwrap();

        let layout = compute_layout(
            &tree,
            tree.root,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Axis::Horizontal,
        );

        // The hollow group itself is positioned (degenerate), its subtree is not
        assert!(layout.node_to_rect.contains_key(&hollow));
        assert!(!layout.node_to_rect.contains_key(&ghost));
    }

    #[test]
    fn zero_total_weight_root_yields_only_root_rect() {
        let mut tree = WeightTree::new("root");
        tree.add_leaf(tree.root, "a", 0.0).unwrap();

        let layout = compute_layout(
            &tree,
            tree.root,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Axis::Horizontal,
        );
        assert_eq!(layout.rects.len(), 1);
        assert_eq!(layout.rects[0].node, tree.root);
    }
}
