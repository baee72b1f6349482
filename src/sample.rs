//! Struct `Sample` represents a batch of labeled categorical examples.

// Provides example and query structs.
pub(crate) mod example;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use example::{Example, Query};
pub use reader::SampleReader;
pub use sample_struct::Sample;
