use core::fmt;

use serde::Deserialize;

/// An annotation on a method, property or signal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Annotation {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value", default)]
    value: String,
}

impl Annotation {
    /// Creates a new annotation.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The annotation name, e.g. `org.freedesktop.DBus.Deprecated`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The annotation value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} = {}", self.name, self.value)
    }
}
