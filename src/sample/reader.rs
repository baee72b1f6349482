use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::TreeError;
use super::example::Example;
use super::sample_struct::Sample;

/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format table to [`Sample`].
/// Other formats are not supported yet.
///
/// Every cell is taken verbatim as a categorical string value.
/// If the file has no header row, the columns are named
/// `Attr. [1]`, `Attr. [2]`, ..., `Attr. [n]`.
///
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minitrees::prelude::*;
///
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("PlayTennis")
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}

impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}

impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}

impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the class label.
    /// The remaining columns become the attributes of the sample,
    /// keeping their order in the file.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}

impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>,
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Sample, TreeError>`.
    /// This method consumes `self.`
    ///
    /// I/O errors are surfaced unmodified;
    /// a row with the wrong number of cells or an unknown target
    /// column is reported as an explicit data error.
    pub fn read(self) -> Result<Sample, TreeError> {
        if self.file.is_none() {
            panic!("The file name for the sample is not set");
        }
        if self.target.is_none() {
            panic!(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`."
            );
        }
        let file = self.file.unwrap();
        let target = self.target.unwrap();

        let file = File::open(file)?;
        let lines = BufReader::new(file).lines();

        let mut header: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut has_header = self.has_header;
        let mut row = 0_usize;

        // For each line of the file
        for line in lines {
            let line = line?;
            row += 1;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',')
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<_>>();

            if has_header {
                header = cells;
                has_header = false;
                continue;
            }

            // If the header does not exist,
            // construct a dummy header from the first row.
            if header.is_empty() {
                header = (1..=cells.len())
                    .map(|k| format!("Attr. [{k}]"))
                    .collect();
            }

            if cells.len() != header.len() {
                return Err(TreeError::MalformedRow {
                    row,
                    expected: header.len(),
                    found: cells.len(),
                });
            }

            rows.push(cells);
        }

        let target = target.as_ref();
        let target_ix = header.iter()
            .position(|name| name == target)
            .ok_or_else(|| TreeError::UnknownColumn(target.to_string()))?;

        let attributes = header.iter()
            .enumerate()
            .filter(|(k, _)| *k != target_ix)
            .map(|(_, name)| name.clone())
            .collect::<Vec<_>>();

        let examples = rows.into_iter()
            .map(|mut cells| {
                let label = cells.remove(target_ix);
                let values = attributes.iter()
                    .cloned()
                    .zip(cells)
                    .collect::<HashMap<_, _>>();
                Example::new(values, label)
            })
            .collect::<Vec<_>>();

        Sample::from_parts(attributes, examples)
    }
}
