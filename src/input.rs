use std::io::Read;

use serde::Deserialize;

use crate::tree::{self, NodeId, TreeError, WeightTree};

/// External tree description, deserialized from JSON.
///
/// A node with children is a group (any stored `weight` is ignored; group
/// weights are always recomputed from leaves). A node without children is a
/// leaf; a missing weight reads as 0.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Read a JSON tree description and build a validated tree from it.
pub fn load_tree(reader: impl Read) -> Result<WeightTree, TreeError> {
    let spec: NodeSpec = serde_json::from_reader(reader)?;
    build_tree(&spec)
}

/// Build an arena tree from a parsed description.
///
/// The description root always becomes the tree's group root; a leaf-only
/// description hangs its single leaf under it, which still fills the whole
/// bounds at layout time. Rejects negative weights node-by-node and a
/// description whose total weight is zero.
pub fn build_tree(spec: &NodeSpec) -> Result<WeightTree, TreeError> {
    let mut tree = WeightTree::new(&spec.name);

    if spec.is_leaf() {
        tree.add_leaf(tree.root, &spec.name, spec.weight.unwrap_or(0.0))?;
    } else {
        let root = tree.root;
        for child in &spec.children {
            add_spec(&mut tree, root, child)?;
        }
    }

    tree::validate(&tree)?;

    tracing::debug!(
        "built tree '{}': {} nodes, {} leaves, total weight {}",
        spec.name,
        tree.len(),
        tree::leaf_count(&tree, tree.root),
        tree::total_weight(&tree, tree.root)
    );

    Ok(tree)
}

fn add_spec(tree: &mut WeightTree, parent: NodeId, spec: &NodeSpec) -> Result<(), TreeError> {
    if spec.is_leaf() {
        tree.add_leaf(parent, &spec.name, spec.weight.unwrap_or(0.0))?;
        return Ok(());
    }

    let group = tree.add_group(parent, &spec.name);
    for child in &spec.children {
        add_spec(tree, group, child)?;
    }
    Ok(())
}
