//! Defines the decision tree and the ID3 induction algorithm.
use log::{debug, info};
use serde::{Serialize, Deserialize};

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::classifier::Classifier;
use crate::errors::TreeError;
use crate::sample::{Query, Sample};
use super::criterion::{best_attribute, partition_by};
use super::node::Node;

/// A decision tree induced from a sample of labeled categorical
/// examples by the ID3 algorithm:
/// at every node the attribute with the greatest information gain
/// splits the examples by observed value,
/// until a partition is pure or no attribute is left,
/// at which point the majority label becomes a leaf.
///
/// Induction is greedy with no backtracking;
/// the split chosen at a node is locally optimal,
/// not part of a globally optimal tree.
/// The recursion consumes one attribute per level,
/// so its depth never exceeds the number of attributes.
///
/// A tree is immutable once built.
/// Retraining produces a new tree;
/// callers may hold any number of independently trained trees and may
/// share one tree across threads for classification.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::default()
///     .file(file)
///     .has_header(true)
///     .target_feature("PlayTennis")
///     .read()
///     .unwrap();
///
/// // Induce a tree from the sample.
/// let tree = DecisionTree::fit(&sample).unwrap();
///
/// // Classify a new case.
/// let query = Query::new()
///     .set("Outlook", "Sunny")
///     .set("Humidity", "Normal");
/// println!("predicted: {}", tree.predict(&query));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
    attributes: Vec<String>,
}

impl DecisionTree {
    /// Induce a [`DecisionTree`] from the given sample.
    ///
    /// Candidate attributes are scanned in the sample's attribute
    /// order and information-gain ties go to the earliest candidate,
    /// so fitting the same sample twice yields the same tree.
    ///
    /// # Errors
    /// Returns a data error if the sample is empty or its examples do
    /// not share a consistent attribute set.
    pub fn fit(sample: &Sample) -> Result<Self, TreeError> {
        sample.validate()?;

        let (n_sample, _) = sample.shape();
        let indices = (0..n_sample).collect::<Vec<_>>();
        let available = sample.attributes()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();

        let root = grow(sample, indices, available)?;
        info!(
            "induced a decision tree over {n_sample} examples: \
             {} leaves, depth {}",
            root.leaves(),
            root.depth(),
        );

        let attributes = sample.attributes().to_vec();
        Ok(Self { root, attributes })
    }

    /// Returns the root node of this tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the attribute names this tree was trained on,
    /// in the order the sample supplied them.
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }

    /// Returns the number of leaves of this tree.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }

    /// Returns the depth of this tree.
    /// A tree that is a single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Write the current decision tree to a dot file.
    /// Each branch is drawn with one edge per observed value.
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }

    /// Write the current decision tree to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> Result<(), TreeError>
        where P: AsRef<Path>
    {
        let json = serde_json::to_string(self)
            .map_err(|e| TreeError::UnableToWrite(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a decision tree from a JSON file
    /// written by [`DecisionTree::to_json_file`].
    pub fn from_json_file<P>(path: P) -> Result<Self, TreeError>
        where P: AsRef<Path>
    {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| TreeError::UnableToRead(e.to_string()))
    }
}

impl Classifier for DecisionTree {
    fn predict<'a>(&'a self, query: &Query) -> &'a str {
        self.root.predict(query)
    }
}

/// Recursively grow a tree over the examples indexed by `indices`,
/// splitting on attributes from `available` only.
///
/// A pure partition, or one with no attribute left to split on,
/// becomes a leaf carrying the majority label.
/// Otherwise the gain-maximizing attribute splits the partition by
/// observed value and each group is grown with that attribute removed,
/// so no attribute repeats along a root-to-leaf path.
fn grow<'a>(
    sample: &'a Sample,
    indices: Vec<usize>,
    available: Vec<&'a str>,
) -> Result<Node, TreeError>
{
    if indices.is_empty() {
        return Err(TreeError::EmptyPartition);
    }

    let prediction = majority_label(sample, &indices);

    let first = sample.at(indices[0]).label();
    let pure = indices.iter().all(|&i| sample.at(i).label() == first);
    if pure || available.is_empty() {
        return Ok(Node::leaf(prediction));
    }

    let (best, gain) = best_attribute(sample, &indices, &available)?;
    let attribute = available[best];
    debug!(
        "splitting {} examples on `{attribute}` (gain {gain:.4})",
        indices.len(),
    );

    let remaining = available.iter()
        .copied()
        .filter(|&name| name != attribute)
        .collect::<Vec<_>>();

    let mut children = BTreeMap::new();
    for (value, subset) in partition_by(sample, &indices, attribute) {
        let child = grow(sample, subset, remaining.clone())?;
        children.insert(value.to_string(), child);
    }

    Ok(Node::branch(attribute, children, prediction))
}

/// Returns the most frequent class label among the examples indexed
/// by `indices`.
/// Ties are broken towards the lexicographically smallest label,
/// so repeated runs over the same sample resolve the same way.
fn majority_label(sample: &Sample, indices: &[usize]) -> String {
    assert_ne!(indices.len(), 0, "majority vote over an empty partition");

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &i in indices {
        *counts.entry(sample.at(i).label()).or_insert(0) += 1;
    }

    counts.into_iter()
        .max_by(|(x, cx), (y, cy)| cx.cmp(cy).then_with(|| y.cmp(x)))
        .map(|(label, _)| label.to_string())
        .expect("the counter holds at least one label")
}
