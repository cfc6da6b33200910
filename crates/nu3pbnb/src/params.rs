//! Query-parameter construction.

/// An ordered list of query parameters.
///
/// Parameters render as `key=value` pairs joined by `&`, in insertion order,
/// with **no URL escaping**. Values are trusted to already be URL-safe; this
/// matches the one-to-one passthrough contract of the API and is a known
/// fragility with special characters, not a defect to fix here. Callers that
/// need reserved characters in values must escape them before insertion.
///
/// # Example
///
/// ```
/// use nu3pbnb::Params;
///
/// let params = Params::new().set("location", "Paris").set("maxPrice", 200);
/// assert_eq!(params.render(), "location=Paris&maxPrice=200");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Keys are not deduplicated.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Whether any parameters have been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the parameters as an unescaped query string (no leading `?`).
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the rendered query string to a path, omitting the `?` entirely
    /// when no parameters are set.
    pub(crate) fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.render())
        }
    }
}
