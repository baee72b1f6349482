//! Defines the splitting criterion for growing a decision tree:
//! class-distribution entropy, information gain, and the
//! gain-maximizing attribute selection.
use rayon::prelude::*;

use std::collections::{BTreeMap, HashMap};

use crate::errors::TreeError;
use crate::sample::Sample;

/// Returns the entropy `-Σ p log2(p)` of the class distribution
/// over the examples indexed by `indices`.
/// The entropy of an empty set is defined as `0`.
/// A pure set yields `0`; a uniform binary split yields `1`.
pub(crate) fn entropy(sample: &Sample, indices: &[usize]) -> f64 {
    if indices.is_empty() { return 0f64; }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &i in indices {
        *counts.entry(sample.at(i).label()).or_insert(0) += 1;
    }

    let total = indices.len() as f64;
    counts.values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}

/// Returns the reduction in entropy obtained by partitioning the
/// examples indexed by `indices` on their value of `attribute`.
/// The result is non-negative;
/// an attribute with a single observed value yields `0`,
/// which is still a valid, if useless, candidate.
pub(crate) fn information_gain(
    sample: &Sample,
    indices: &[usize],
    attribute: &str,
) -> f64
{
    let parent = entropy(sample, indices);

    let total = indices.len() as f64;
    let children = partition_by(sample, indices, attribute)
        .values()
        .map(|subset| (subset.len() as f64 / total) * entropy(sample, subset))
        .sum::<f64>();

    parent - children
}

/// Returns the position (within `available`) and the gain of the
/// attribute with the greatest information gain over the examples
/// indexed by `indices`.
///
/// Candidates are evaluated in parallel; ties are broken towards the
/// earliest position in `available`, so the outcome is identical to a
/// sequential scan that keeps the first strictly-better candidate.
pub(crate) fn best_attribute(
    sample: &Sample,
    indices: &[usize],
    available: &[&str],
) -> Result<(usize, f64), TreeError>
{
    if available.is_empty() {
        return Err(TreeError::NoCandidates);
    }

    let best = available.par_iter()
        .enumerate()
        .map(|(k, &name)| (k, information_gain(sample, indices, name)))
        .max_by(|(ka, ga), (kb, gb)| {
            ga.partial_cmp(gb)
                .expect("information gain is never NaN")
                .then_with(|| kb.cmp(ka))
        })
        .expect("at least one candidate attribute exists");

    Ok(best)
}

/// Groups the examples indexed by `indices` by their value of
/// `attribute`.
/// The groups are ordered by value so that induction, display, and
/// serialization are deterministic.
pub(crate) fn partition_by<'a>(
    sample: &'a Sample,
    indices: &[usize],
    attribute: &str,
) -> BTreeMap<&'a str, Vec<usize>>
{
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for &i in indices {
        let value = sample.at(i)
            .value(attribute)
            .expect("attribute sets are validated before induction");
        groups.entry(value).or_default().push(i);
    }
    groups
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use std::collections::HashMap;

    use crate::sample::Example;
    use super::*;

    /// Build a single-attribute sample named `Weather`
    /// from `(value, label)` pairs.
    fn weather_sample(rows: &[(&str, &str)]) -> Sample {
        let examples = rows.iter()
            .map(|(value, label)| {
                let attributes = HashMap::from([
                    ("Weather".to_string(), value.to_string()),
                ]);
                Example::new(attributes, *label)
            })
            .collect::<Vec<_>>();
        Sample::from_parts(vec!["Weather".to_string()], examples).unwrap()
    }

    /// Build a two-attribute sample from `(first, second, label)` rows.
    fn two_attribute_sample(rows: &[(&str, &str, &str)]) -> Sample {
        let examples = rows.iter()
            .map(|(first, second, label)| {
                let attributes = HashMap::from([
                    ("First".to_string(), first.to_string()),
                    ("Second".to_string(), second.to_string()),
                ]);
                Example::new(attributes, *label)
            })
            .collect::<Vec<_>>();
        let attributes = vec!["First".to_string(), "Second".to_string()];
        Sample::from_parts(attributes, examples).unwrap()
    }

    #[test]
    fn entropy_of_pure_set_is_zero() {
        let sample = weather_sample(
            &[("Sunny", "Yes"), ("Rainy", "Yes"), ("Cloudy", "Yes")]
        );
        let indices = [0, 1, 2];
        assert_relative_eq!(entropy(&sample, &indices), 0f64);
    }

    #[test]
    fn entropy_of_balanced_binary_set_is_one() {
        let sample = weather_sample(
            &[("Sunny", "Yes"), ("Sunny", "Yes"), ("Rainy", "No"), ("Rainy", "No")]
        );
        let indices = [0, 1, 2, 3];
        assert_relative_eq!(entropy(&sample, &indices), 1f64, epsilon = 1e-12);
    }

    #[test]
    fn entropy_of_empty_set_is_zero() {
        let sample = weather_sample(&[("Sunny", "Yes")]);
        assert_relative_eq!(entropy(&sample, &[]), 0f64);
    }

    #[test]
    fn gain_of_perfect_split_equals_parent_entropy() {
        let sample = weather_sample(
            &[("Sunny", "Yes"), ("Sunny", "Yes"), ("Rainy", "No"), ("Rainy", "No")]
        );
        let indices = [0, 1, 2, 3];
        let gain = information_gain(&sample, &indices, "Weather");
        assert_relative_eq!(gain, 1f64, epsilon = 1e-12);
    }

    #[test]
    fn gain_of_single_valued_attribute_is_zero() {
        let sample = weather_sample(
            &[("Sunny", "Yes"), ("Sunny", "No"), ("Sunny", "Yes")]
        );
        let indices = [0, 1, 2];
        let gain = information_gain(&sample, &indices, "Weather");
        assert_relative_eq!(gain, 0f64, epsilon = 1e-12);
    }

    #[test]
    fn gain_is_non_negative() {
        let sample = two_attribute_sample(&[
            ("a", "x", "Yes"),
            ("a", "y", "No"),
            ("b", "x", "No"),
            ("b", "y", "Yes"),
        ]);
        let indices = [0, 1, 2, 3];
        for attribute in ["First", "Second"] {
            let gain = information_gain(&sample, &indices, attribute);
            assert!(gain >= -1e-12, "gain for `{attribute}` is {gain}");
        }
    }

    #[test]
    fn best_attribute_prefers_higher_gain() {
        // `Second` separates the labels perfectly; `First` is noise.
        let sample = two_attribute_sample(&[
            ("a", "x", "Yes"),
            ("b", "x", "Yes"),
            ("a", "y", "No"),
            ("b", "y", "No"),
        ]);
        let indices = [0, 1, 2, 3];
        let available = ["First", "Second"];
        let (best, gain) = best_attribute(&sample, &indices, &available)
            .unwrap();
        assert_eq!(available[best], "Second");
        assert_relative_eq!(gain, 1f64, epsilon = 1e-12);
    }

    #[test]
    fn best_attribute_breaks_ties_towards_the_first_candidate() {
        // Both attributes carry the same (zero) gain.
        let sample = two_attribute_sample(&[
            ("a", "x", "Yes"),
            ("b", "y", "Yes"),
            ("a", "x", "No"),
            ("b", "y", "No"),
        ]);
        let indices = [0, 1, 2, 3];
        let (best, _) = best_attribute(&sample, &indices, &["First", "Second"])
            .unwrap();
        assert_eq!(best, 0);

        let (best, _) = best_attribute(&sample, &indices, &["Second", "First"])
            .unwrap();
        assert_eq!(best, 0);
    }

    #[test]
    fn best_attribute_without_candidates_is_an_error() {
        let sample = weather_sample(&[("Sunny", "Yes")]);
        let result = best_attribute(&sample, &[0], &[]);
        assert!(matches!(result, Err(TreeError::NoCandidates)));
    }
}
