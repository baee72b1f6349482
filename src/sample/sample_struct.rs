use std::collections::HashMap;

use polars::prelude::*;

use crate::errors::TreeError;
use super::example::Example;

/// Struct `Sample` holds a batch of labeled categorical examples
/// together with the ordered list of attribute names they expose.
///
/// The attribute order matters:
/// the tree builder scans candidate attributes in this order and breaks
/// information-gain ties towards the earliest position,
/// so a fixed order makes induction fully deterministic.
/// [`SampleReader`](super::SampleReader) uses the CSV header order;
/// [`Sample::from_examples`] sorts the names lexicographically.
#[derive(Clone, Debug)]
pub struct Sample {
    pub(super) attributes: Vec<String>,
    pub(super) examples: Vec<Example>,
}

impl Sample {
    /// Construct a [`Sample`] from an ordered attribute list
    /// and a set of examples.
    /// Every example must expose exactly the given attributes;
    /// otherwise this method returns a data error naming the
    /// offending example.
    pub fn from_parts(attributes: Vec<String>, examples: Vec<Example>)
        -> Result<Self, TreeError>
    {
        let sample = Self { attributes, examples };
        sample.check_attribute_sets()?;
        Ok(sample)
    }

    /// Construct a [`Sample`] from a set of examples alone.
    /// The attribute order is derived from the first example and
    /// sorted lexicographically, so repeated calls over the same
    /// examples produce the same sample.
    pub fn from_examples(examples: Vec<Example>) -> Result<Self, TreeError> {
        let mut attributes = examples.first()
            .map(|example| {
                example.attribute_names()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        attributes.sort();

        Self::from_parts(attributes, examples)
    }

    /// Convert a `polars::DataFrame` and a `polars::Series` into a
    /// [`Sample`].
    /// This method takes the ownership of the given pair
    /// `data` and `target`.
    /// Every column must hold string (utf8) values;
    /// a column of any other dtype or a null cell is a data error.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> Result<Self, TreeError>
    {
        let (n_sample, _) = data.shape();
        if target.len() != n_sample {
            return Err(TreeError::LengthMismatch {
                expected: n_sample,
                found: target.len(),
            });
        }

        let mut columns = Vec::new();
        for series in data.get_columns() {
            let name = series.name().to_string();
            let values = series.utf8()
                .map_err(|_| TreeError::NotCategorical(name.clone()))?
                .into_iter()
                .collect::<Vec<_>>();
            columns.push((name, values));
        }

        let labels = target.utf8()
            .map_err(|_| TreeError::NotCategorical(target.name().to_string()))?
            .into_iter()
            .collect::<Vec<_>>();

        let attributes = columns.iter()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>();

        let mut examples = Vec::with_capacity(n_sample);
        for index in 0..n_sample {
            let mut row = HashMap::with_capacity(attributes.len());
            for (name, values) in &columns {
                let value = values[index]
                    .ok_or_else(|| TreeError::MissingAttribute {
                        index,
                        attribute: name.clone(),
                    })?;
                row.insert(name.clone(), value.to_string());
            }
            let label = labels[index]
                .ok_or_else(|| TreeError::MissingAttribute {
                    index,
                    attribute: target.name().to_string(),
                })?;
            examples.push(Example::new(row, label));
        }

        Ok(Self { attributes, examples })
    }

    /// Returns the pair of the number of examples and
    /// the number of attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.attributes.len())
    }

    /// Returns the ordered attribute names of this sample.
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }

    /// Returns a slice of the examples in this sample.
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }

    /// Returns the `idx`-th example.
    pub fn at(&self, idx: usize) -> &Example {
        &self.examples[idx]
    }

    /// Split `self` into two samples.
    /// The examples indexed by `ix[start..end]` form the second
    /// (test) sample; the rest form the first (training) sample.
    pub fn split<T>(&self, ix: T, start: usize, end: usize)
        -> (Sample, Sample)
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        let test_size = end - start;
        let mut train = Vec::with_capacity(ix.len().saturating_sub(test_size));
        let mut test = Vec::with_capacity(test_size);

        for (k, &i) in ix.iter().enumerate() {
            if (start..end).contains(&k) {
                test.push(self.examples[i].clone());
            } else {
                train.push(self.examples[i].clone());
            }
        }

        let train = Self {
            attributes: self.attributes.clone(),
            examples: train,
        };
        let test = Self {
            attributes: self.attributes.clone(),
            examples: test,
        };

        (train, test)
    }

    /// Check whether `self` is a valid training set:
    /// non-empty, with a consistent attribute set across examples.
    /// [`DecisionTree::fit`](crate::DecisionTree::fit) calls this
    /// before growing a tree.
    pub(crate) fn validate(&self) -> Result<(), TreeError> {
        if self.examples.is_empty() {
            return Err(TreeError::EmptyTrainingSet);
        }
        self.check_attribute_sets()
    }

    fn check_attribute_sets(&self) -> Result<(), TreeError> {
        let expected = self.attributes.len();
        for (index, example) in self.examples.iter().enumerate() {
            let found = example.len();
            if found != expected {
                return Err(TreeError::AttributeCountMismatch {
                    index, expected, found,
                });
            }
            for attribute in &self.attributes {
                if example.value(attribute).is_none() {
                    return Err(TreeError::MissingAttribute {
                        index,
                        attribute: attribute.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
