//! The prediction seam of this crate.
//!
//! A classifier maps a query — an attribute-name to value mapping —
//! to a class label.
//! Every node of an induced tree is a classifier,
//! and so is the tree itself.
//!
//! Classification is total:
//! a query that names an attribute value the training sample never
//! exhibited falls back to the majority label stored at the branch
//! where the lookup missed, so `predict` never fails.
use crate::sample::Query;

/// A trait that defines the prediction function
/// of the decision trees in this crate.
pub trait Classifier {
    /// Predicts the label of the given query.
    fn predict<'a>(&'a self, query: &Query) -> &'a str;

    /// Predicts the labels of the given queries.
    fn predict_all<'a>(&'a self, queries: &[Query]) -> Vec<&'a str> {
        queries.iter()
            .map(|query| self.predict(query))
            .collect()
    }
}
