use colored::Colorize;
use rand::prelude::*;

use crate::sample::Sample;

const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test sample for cross validation.
///
/// Each fold takes a distinct slice of the (optionally shuffled)
/// example indices as its test sample
/// and the remaining examples as its training sample.
/// Shuffling is seeded, so a fixed seed reproduces the same folds.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let f = DecisionTree::fit(&train).unwrap();
///
///     let train_loss = zero_one_error(&train, &f);
///     let test_loss = zero_one_error(&test, &f);
///     println!("[train: {train_loss}] [test: {test_loss}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    sample: &'a Sample,
    ix: Vec<usize>,
    train_size: usize,
    n_folds: usize,
    current_fold: usize,
    seed: u64,
    verbose: bool,
}

impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let train_size = (n_sample as f64 * 0.8) as usize;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            sample,
            ix,
            train_size,
            n_folds: 5,
            current_fold: 0,
            seed: 1234,
            verbose: false,
        }
    }

    /// Set the ratio of training sample.
    /// Default value is `0.8`.
    #[inline]
    pub fn train_ratio(mut self, ratio: f64) -> Self {
        assert!(
            0f64 < ratio && ratio < 1f64,
            "Training ratio should be in `(0, 1)`."
        );
        let n_sample = self.sample.shape().0 as f64;
        self.train_size = (ratio * n_sample) as usize;
        self
    }

    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 0, "Cross validation needs a fold");
        self.n_folds = n_folds;
        self
    }

    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }

    /// Returns the training/test sample for the `i`-th fold.
    /// The test slice is clamped to the sample size,
    /// so a late fold may hold fewer test examples than the others.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let n_sample = self.sample.shape().0;
        let test_size = n_sample - self.train_size;
        let start = (i * test_size).min(n_sample);
        let end = ((i + 1) * test_size).min(n_sample);
        self.sample.split(&self.ix, start, end)
    }
}

impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let (train, test) = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = train.shape().0;
            let test_size = test.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [fold {: >3}]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some((train, test))
    }
}
