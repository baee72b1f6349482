//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;

use crate::classifier::Classifier;
use crate::sample::Query;

/// Enumeration of the branch and leaf nodes of an induced tree.
///
/// Every node stores the majority label of the training examples that
/// reached it during induction.
/// For a leaf that label is the prediction;
/// for a branch it is the fallback returned when a query carries a
/// value for the split attribute that no child covers,
/// or no value at all.
///
/// The children of a branch are keyed by the observed attribute value
/// and kept in a `BTreeMap`, so iteration, `Debug` output, DOT export,
/// and serialization are deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on one attribute,
    /// with one child per observed value.
    Branch {
        /// The attribute this node splits on.
        attribute: String,
        /// The children, keyed by observed attribute value.
        /// Never empty.
        children: BTreeMap<String, Node>,
        /// The majority label of the examples that reached this node.
        prediction: String,
    },

    /// A node that has no child.
    Leaf {
        /// The label this node predicts.
        prediction: String,
    },
}

impl Node {
    /// Construct a branch node from the given components.
    pub(crate) fn branch(
        attribute: &str,
        children: BTreeMap<String, Node>,
        prediction: String,
    ) -> Self
    {
        debug_assert!(!children.is_empty(), "a branch node must have a child");
        let attribute = attribute.to_string();
        Self::Branch { attribute, children, prediction, }
    }

    /// Construct a leaf node that predicts `prediction`.
    pub(crate) fn leaf(prediction: String) -> Self {
        Self::Leaf { prediction, }
    }

    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Returns the majority label stored at this node.
    pub fn prediction(&self) -> &str {
        match self {
            Self::Branch { prediction, .. } => prediction,
            Self::Leaf { prediction } => prediction,
        }
    }

    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.values().map(Node::leaves).sum()
            },
            Self::Leaf { .. } => 1_usize,
        }
    }

    /// Returns the depth of this sub-tree.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0_usize,
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { attribute, children, .. } => {
                let head = format!(
                    "\tnode_{id} [ label = \"{attribute} ?\" ];\n",
                );

                let mut info = vec![head];
                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut sub, return_id) = child.to_dot_info(child_id);
                    info.append(&mut sub);

                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    );
                    info.push(edge);

                    next_id = return_id;
                }

                (info, next_id)
            },
            Node::Leaf { prediction } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{prediction}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}

impl Classifier for Node {
    fn predict<'a>(&'a self, query: &Query) -> &'a str {
        match self {
            Self::Branch { attribute, children, prediction } => {
                query.get(attribute)
                    .and_then(|value| children.get(value))
                    .map_or(
                        prediction.as_str(),
                        |child| child.predict(query),
                    )
            },
            Self::Leaf { prediction } => prediction,
        }
    }
}
