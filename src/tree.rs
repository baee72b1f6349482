//! A simple decision tree algorithm.

/// Defines the decision tree and the ID3 induction.
pub mod dtree;

/// Defines the inner representation of a decision tree.
pub mod node;

mod criterion;


pub use dtree::DecisionTree;
pub use node::Node;
