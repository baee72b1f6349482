//! Errors
//!
//! Custom error types used throughout the `minitrees` crate.
use thiserror::Error;

/// Errors that can occur while assembling a sample or inducing a tree.
/// Classification never returns an error:
/// a query that misses a branch falls back to the stored majority label.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Induction was requested over a sample without examples.
    #[error("the training sample is empty")]
    EmptyTrainingSet,

    /// An example lacks a value for one of the sample's attributes.
    #[error("example {index} does not expose attribute `{attribute}`")]
    MissingAttribute {
        /// Position of the offending example in the sample.
        index: usize,
        /// The attribute the example does not expose.
        attribute: String,
    },

    /// An example exposes a different number of attributes
    /// than the sample declares.
    #[error("example {index} exposes {found} attributes, expected {expected}")]
    AttributeCountMismatch {
        /// Position of the offending example in the sample.
        index: usize,
        /// Number of attributes the sample declares.
        expected: usize,
        /// Number of attributes the example exposes.
        found: usize,
    },

    /// A row of a CSV file holds the wrong number of cells.
    #[error("row {row}: expected {expected} cells, found {found}")]
    MalformedRow {
        /// One-based row number within the file.
        row: usize,
        /// Number of cells the header declares.
        expected: usize,
        /// Number of cells the row holds.
        found: usize,
    },

    /// The requested column does not exist.
    #[error("no column named `{0}` exists")]
    UnknownColumn(String),

    /// A dataframe column does not hold categorical (string) values.
    #[error("column `{0}` is not a categorical (string) column")]
    NotCategorical(String),

    /// The target column length does not match the number of examples.
    #[error("the target column holds {found} labels, expected {expected}")]
    LengthMismatch {
        /// Number of examples in the sample.
        expected: usize,
        /// Number of labels the target column holds.
        found: usize,
    },

    /// Induction reached a partition without examples.
    /// Partitions are only formed from non-empty value groups,
    /// so this is unreachable through [`DecisionTree::fit`].
    ///
    /// [`DecisionTree::fit`]: crate::DecisionTree::fit
    #[error("tree induction reached an empty partition")]
    EmptyPartition,

    /// The attribute selector was called without candidate attributes.
    /// The tree builder turns an exhausted candidate set into a leaf
    /// before selecting, so this is unreachable through
    /// [`DecisionTree::fit`].
    ///
    /// [`DecisionTree::fit`]: crate::DecisionTree::fit
    #[error("the attribute selector was called without candidate attributes")]
    NoCandidates,

    /// Unable to write a tree to a file.
    #[error("unable to write the tree to a file: {0}")]
    UnableToWrite(String),

    /// Unable to read a tree from a file.
    #[error("unable to read a tree from a file: {0}")]
    UnableToRead(String),

    /// An I/O error surfaced by the ingestion layer, unmodified.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
