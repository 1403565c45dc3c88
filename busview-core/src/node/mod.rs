//! The introspection data of a single object.
//!
//! These types mirror the D-Bus introspection document: a [`Node`] holds [`Interface`]s and the
//! names of its child nodes, each interface holds [`Method`]s, [`Property`]s and [`Signal`]s.

mod annotation;
pub use annotation::Annotation;

mod arg;
pub use arg::{Arg, Direction};

mod member;
pub use member::{Method, Property, Signal};

mod interface;
pub use interface::Interface;

use serde::Deserialize;

/// An introspected object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Node {
    /// The name of the node, usually only present on the root of a document.
    #[serde(rename = "@name", default)]
    name: Option<String>,
    /// The interfaces implemented by the object.
    #[serde(rename = "interface", default)]
    interfaces: Vec<Interface>,
    /// The child nodes. Only their names are of interest.
    #[serde(rename = "node", default)]
    children: Vec<Child>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Child {
    #[serde(rename = "@name", default)]
    name: String,
}

impl Node {
    /// Creates a new node with the given interfaces and child names.
    pub fn new<C>(interfaces: Vec<Interface>, children: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            name: None,
            interfaces,
            children: children
                .into_iter()
                .map(|name| Child { name: name.into() })
                .collect(),
        }
    }

    /// Parse an introspection XML document.
    #[cfg(feature = "xml")]
    pub fn from_xml(xml: &str) -> crate::Result<Self> {
        quick_xml::de::from_str(xml).map_err(Into::into)
    }

    /// The name attribute of the node, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns an iterator over the interfaces.
    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.iter()
    }

    /// Returns an iterator over the child path segments, in document order.
    pub fn children(&self) -> impl Iterator<Item = &str> {
        self.children
            .iter()
            .map(|child| child.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(feature = "xml")]
impl TryFrom<&str> for Node {
    type Error = crate::Error;

    fn try_from(xml: &str) -> crate::Result<Self> {
        Self::from_xml(xml)
    }
}

/// The full path of the child `segment` of `parent`.
///
/// `/` + `a` gives `/a` and `/a` + `b` gives `/a/b`.
pub fn child_path(parent: &str, segment: &str) -> String {
    let parent = parent.strip_suffix('/').unwrap_or(parent);
    let mut path = String::with_capacity(parent.len() + segment.len() + 1);
    path.push_str(parent);
    path.push('/');
    path.push_str(segment);

    path
}
