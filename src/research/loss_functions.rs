use crate::classifier::Classifier;
use crate::sample::{Query, Sample};

/// Zero-one loss for a single prediction.
pub fn zero_one_loss(true_label: &str, prediction: &str) -> f64 {
    if true_label == prediction { 0.0 } else { 1.0 }
}

/// The fraction of examples in `sample` that `f` misclassifies.
/// An empty sample has error `0`.
pub fn zero_one_error<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier
{
    let n_sample = sample.shape().0;
    if n_sample == 0 { return 0.0; }

    sample.examples()
        .iter()
        .map(|example| {
            let query = Query::from(example);
            zero_one_loss(example.label(), f.predict(&query))
        })
        .sum::<f64>()
        / n_sample as f64
}
