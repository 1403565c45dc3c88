//! Interface members: methods, properties and signals.

use serde::Deserialize;

use super::{Annotation, Arg};

/// A method of an interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Method {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "arg", default)]
    args: Vec<Arg>,
    #[serde(rename = "annotation", default)]
    annotations: Vec<Annotation>,
}

impl Method {
    /// Creates a new method.
    pub fn new(name: impl Into<String>, args: Vec<Arg>, annotations: Vec<Annotation>) -> Self {
        Self {
            name: name.into(),
            args,
            annotations,
        }
    }

    /// Returns the name of the method.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The arguments as a slice.
    pub fn arg_slice(&self) -> &[Arg] {
        &self.args
    }

    /// Returns the annotations of the method.
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}

/// A signal of an interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Signal {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "arg", default)]
    args: Vec<Arg>,
    #[serde(rename = "annotation", default)]
    annotations: Vec<Annotation>,
}

impl Signal {
    /// Creates a new signal.
    pub fn new(name: impl Into<String>, args: Vec<Arg>, annotations: Vec<Annotation>) -> Self {
        Self {
            name: name.into(),
            args,
            annotations,
        }
    }

    /// Returns the name of the signal.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The arguments as a slice.
    pub fn arg_slice(&self) -> &[Arg] {
        &self.args
    }

    /// Returns the annotations of the signal.
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}

/// A property of an interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Property {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@type")]
    ty: String,
    #[serde(rename = "@access", default)]
    access: String,
    #[serde(rename = "annotation", default)]
    annotations: Vec<Annotation>,
}

impl Property {
    /// Creates a new property.
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        access: impl Into<String>,
        annotations: Vec<Annotation>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: access.into(),
            annotations,
        }
    }

    /// Returns the name of the property.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw type signature.
    pub fn signature(&self) -> &str {
        &self.ty
    }

    /// The access mode: `read`, `write` or `readwrite`.
    pub fn access(&self) -> &str {
        &self.access
    }

    /// Returns the annotations of the property.
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}
