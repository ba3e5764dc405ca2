// src/core/commands/json/path.rs

//! The path value addressing a location inside a stored JSON document.

use std::fmt;

/// A location within a JSON document.
///
/// Two dialects exist, distinguished by the first character of the rendered
/// string. A legacy path (rooted at `.`, or a bare field name) selects exactly
/// one location and yields scalar-shaped replies. A dollar path (rooted at
/// `$`) may select zero, one, or many locations and yields list-shaped
/// replies even for a single match.
///
/// A `JsonPath` is immutable after construction; its only behavior is
/// rendering to its wire string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonPath {
    raw: String,
}

impl JsonPath {
    /// The legacy root path, `.`.
    pub fn root() -> Self {
        JsonPath::new(".")
    }

    /// The dollar root path, `$`.
    pub fn dollar_root() -> Self {
        JsonPath::new("$")
    }

    pub fn new(path: impl Into<String>) -> Self {
        JsonPath { raw: path.into() }
    }

    /// Renders the path to its wire string form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The dialect marker: a path beginning with `$` selects the dollar
    /// dialect, everything else the legacy dialect.
    pub fn is_dollar(&self) -> bool {
        self.raw.starts_with('$')
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

/// The default path is the legacy root.
impl Default for JsonPath {
    fn default() -> Self {
        JsonPath::root()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Conversion into a [`JsonPath`], so call sites may pass either a typed path
/// or a bare string interchangeably.
pub trait IntoJsonPath {
    fn into_json_path(self) -> JsonPath;
}

impl IntoJsonPath for JsonPath {
    fn into_json_path(self) -> JsonPath {
        self
    }
}

impl IntoJsonPath for &JsonPath {
    fn into_json_path(self) -> JsonPath {
        self.clone()
    }
}

impl IntoJsonPath for &str {
    fn into_json_path(self) -> JsonPath {
        JsonPath::new(self)
    }
}

impl IntoJsonPath for String {
    fn into_json_path(self) -> JsonPath {
        JsonPath::new(self)
    }
}
