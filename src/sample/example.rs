//! Defines a single labeled example and an unlabeled query.
use std::collections::HashMap;

/// One row of the training table:
/// a mapping from attribute name to categorical value,
/// together with the class label.
/// An `Example` is constructed once by the ingestion layer
/// and never mutated afterwards.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use minitrees::Example;
///
/// let attributes = HashMap::from([
///     ("Outlook".to_string(), "Sunny".to_string()),
///     ("Wind".to_string(),    "Weak".to_string()),
/// ]);
/// let example = Example::new(attributes, "Yes");
/// assert_eq!(example.label(), "Yes");
/// assert_eq!(example.value("Outlook"), Some("Sunny"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Example {
    attributes: HashMap<String, String>,
    label: String,
}

impl Example {
    /// Construct a new instance of [`Example`].
    pub fn new<L>(attributes: HashMap<String, String>, label: L) -> Self
        where L: Into<String>
    {
        let label = label.into();
        Self { attributes, label }
    }

    /// Returns the value this example takes for `attribute`,
    /// or `None` if the example does not expose it.
    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    /// Returns the class label of this example.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the names of the attributes this example exposes.
    /// The iteration order is unspecified;
    /// [`Sample`](crate::Sample) keeps the authoritative ordered list.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Returns the number of attributes this example exposes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if this example exposes no attribute.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// An attribute-name to value mapping for one classification request.
/// A query may omit attributes the tree was trained on
/// and may carry attributes the tree never saw; both are handled by
/// the fallback policy of [`Classifier`](crate::Classifier).
///
/// # Example
/// ```
/// use minitrees::Query;
///
/// let query = Query::new()
///     .set("Outlook", "Sunny")
///     .set("Wind", "Weak");
/// assert_eq!(query.get("Outlook"), Some("Sunny"));
/// assert_eq!(query.get("Humidity"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    values: HashMap<String, String>,
}

impl Query {
    /// Construct a new, empty instance of [`Query`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `attribute`.
    /// This method consumes `self`.
    pub fn set<K, V>(mut self, attribute: K, value: V) -> Self
        where K: Into<String>,
              V: Into<String>,
    {
        self.values.insert(attribute.into(), value.into());
        self
    }

    /// Returns the value this query carries for `attribute`, if any.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    /// Returns the number of attributes this query carries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this query carries no attribute.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for Query {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl From<&Example> for Query {
    /// Turns an example into a query by dropping its label.
    fn from(example: &Example) -> Self {
        let values = example.attributes.clone();
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for Query
    where K: Into<String>,
          V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}
