//! Exports the sample types, the decision tree, and the traits.
//!
pub use crate::sample::{
    // Training data
    Sample,
    SampleReader,
    Example,

    // Classification requests
    Query,
};


pub use crate::tree::{
    // The induced model
    DecisionTree,
    Node,
};


pub use crate::classifier::Classifier;

pub use crate::errors::TreeError;


pub use crate::research::{
    CrossValidation,
    zero_one_error,
    zero_one_loss,
};
