pub mod arena;
pub mod weight;

use thiserror::Error;

pub use arena::{Node, NodeId, NodeKind, WeightTree};
pub use weight::{leaf_count, total_weight};

/// Errors surfaced while building or validating a weighted tree.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid weight {weight} for node '{name}': weights must be finite and >= 0")]
    InvalidWeight { name: String, weight: f64 },

    #[error("tree '{name}' has zero total weight: nothing to lay out")]
    ZeroTotalWeight { name: String },

    #[error("failed to parse tree description: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Check that a constructed tree can be laid out at all.
/// Individual zero-weight nodes are fine (they become zero-area rectangles);
/// a root that aggregates to zero is not.
pub fn validate(tree: &WeightTree) -> Result<(), TreeError> {
    if total_weight(tree, tree.root) <= 0.0 {
        return Err(TreeError::ZeroTotalWeight {
            name: tree.get(tree.root).name.to_string(),
        });
    }
    Ok(())
}
