//! Decoration of the rendered text.
//!
//! The renderer never emits escape sequences itself. Every piece of text with a distinct meaning
//! goes through [`Style::paint`] together with its [`Role`], so colors (or any other markup) can
//! be plugged in from the outside.

/// The meaning of a piece of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// An object path heading a tree level.
    Path,
    /// A bus name in the name listing.
    BusName,
    /// An interface name.
    Interface,
    /// A section header (`Methods`, `Properties`, `Signals`).
    Section,
    /// An annotation line.
    Annotation,
    /// An argument name.
    ArgName,
    /// A rendered type or signature.
    Type,
    /// The access mode of a property.
    Access,
    /// An inline error marker.
    Error,
    /// A process ID.
    Pid,
    /// A process command line.
    Cmdline,
}

/// A decoration strategy.
pub trait Style: core::fmt::Debug {
    /// Decorate `text` according to its `role`.
    fn paint(&self, text: &str, role: Role) -> String;
}

/// No decoration at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Plain;

impl Style for Plain {
    fn paint(&self, text: &str, _role: Role) -> String {
        text.to_owned()
    }
}

impl<S: Style + ?Sized> Style for Box<S> {
    fn paint(&self, text: &str, role: Role) -> String {
        (**self).paint(text, role)
    }
}
