//! Mock provider implementation for testing.
//!
//! This module provides an in-memory [`Introspectable`] implementation that serves pre-loaded
//! introspection documents, property values and bus names, and records the calls made to it.

use std::collections::HashMap;

use crate::{Error, Introspectable, Node};

/// Mock provider for testing.
///
/// Documents are kept as XML and parsed on every introspection call, like a real bus provider
/// does.
#[derive(Debug, Default)]
#[doc(hidden)]
pub(crate) struct MockProvider {
    nodes: HashMap<String, String>,
    properties: HashMap<(String, String, String), Result<String, String>>,
    names: Vec<String>,
    pids: HashMap<String, u32>,
    introspect_calls: Vec<String>,
    property_calls: Vec<String>,
}

impl MockProvider {
    /// Create an empty mock provider.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serve `xml` for `path`.
    pub(crate) fn with_node(mut self, path: &str, xml: &str) -> Self {
        self.nodes.insert(path.into(), xml.into());
        self
    }

    /// Serve a property value, or fail fetching it with the given message.
    pub(crate) fn with_property(
        mut self,
        path: &str,
        interface: &str,
        property: &str,
        value: Result<&str, &str>,
    ) -> Self {
        self.properties.insert(
            (path.into(), interface.into(), property.into()),
            value.map(Into::into).map_err(Into::into),
        );
        self
    }

    /// Register a bus name, optionally owned by a process.
    pub(crate) fn with_name(mut self, name: &str, pid: Option<u32>) -> Self {
        self.names.push(name.into());
        if let Some(pid) = pid {
            self.pids.insert(name.into(), pid);
        }
        self
    }

    /// The introspected paths, in call order.
    pub(crate) fn introspect_calls(&self) -> &[String] {
        &self.introspect_calls
    }

    /// The fetched properties as `<interface>.<property>`, in call order.
    pub(crate) fn property_calls(&self) -> &[String] {
        &self.property_calls
    }
}

impl Introspectable for MockProvider {
    async fn introspect(&mut self, _destination: &str, path: &str) -> crate::Result<Node> {
        self.introspect_calls.push(path.into());
        let xml = self
            .nodes
            .get(path)
            .ok_or_else(|| Error::provider(format!("no object at {path}")))?;

        Node::from_xml(xml)
    }

    async fn get_property(
        &mut self,
        _destination: &str,
        path: &str,
        interface: &str,
        property: &str,
    ) -> crate::Result<String> {
        self.property_calls.push(format!("{interface}.{property}"));
        let key = (path.to_owned(), interface.to_owned(), property.to_owned());
        match self.properties.get(&key) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(e)) => Err(Error::provider(e.clone())),
            None => Err(Error::provider(format!(
                "no property {interface}.{property} at {path}"
            ))),
        }
    }

    async fn list_names(&mut self) -> crate::Result<Vec<String>> {
        Ok(self.names.clone())
    }

    async fn connection_pid(&mut self, name: &str) -> crate::Result<u32> {
        self.pids
            .get(name)
            .copied()
            .ok_or_else(|| Error::provider(format!("could not get PID of {name}")))
    }
}
