//! This directory provides some features for evaluating trained trees
//! - Train/test folds for cross validation
//! - Loss functions over categorical labels

/// Provides a train/test fold generator.
pub mod cross_validation;

/// Defines loss functions (e.g., zero-one loss).
pub mod loss_functions;

pub use cross_validation::CrossValidation;

pub use loss_functions::{
    zero_one_loss,
    zero_one_error,
};
