use serde::Deserialize;

use super::{Method, Property, Signal};

/// An interface implemented by an object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Interface {
    /// The name of the interface, e.g. `org.freedesktop.DBus.Peer`.
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "method", default)]
    methods: Vec<Method>,
    #[serde(rename = "property", default)]
    properties: Vec<Property>,
    #[serde(rename = "signal", default)]
    signals: Vec<Signal>,
}

impl Interface {
    /// Creates a new interface.
    pub fn new(
        name: impl Into<String>,
        methods: Vec<Method>,
        properties: Vec<Property>,
        signals: Vec<Signal>,
    ) -> Self {
        Self {
            name: name.into(),
            methods,
            properties,
            signals,
        }
    }

    /// Returns the name of the interface.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns an iterator over the methods in this interface.
    pub fn methods(&self) -> impl ExactSizeIterator<Item = &Method> {
        self.methods.iter()
    }

    /// Returns an iterator over the properties in this interface.
    pub fn properties(&self) -> impl ExactSizeIterator<Item = &Property> {
        self.properties.iter()
    }

    /// Returns an iterator over the signals in this interface.
    pub fn signals(&self) -> impl ExactSizeIterator<Item = &Signal> {
        self.signals.iter()
    }
}
