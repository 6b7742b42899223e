//! Content line and parameter types (RFC 5545 §3.1, §3.2).

/// A property parameter with its decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter value with quoting and caret encoding removed.
    pub value: String,
}

impl Parameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }
}

/// A tokenized content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding, before unescaping).
    pub raw_value: String,
}

impl ContentLine {
    /// Returns the value of the first parameter with the given name.
    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    /// Returns whether the line is `<marker>:<component>`, e.g. `BEGIN:VEVENT`.
    #[must_use]
    pub fn is_marker(&self, marker: &str, component: &str) -> bool {
        self.name == marker && self.raw_value.trim().eq_ignore_ascii_case(component)
    }
}
