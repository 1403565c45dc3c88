//! The remote side of introspection.

use core::future::Future;

use crate::Node;

/// A source of introspection data.
///
/// This is the trait that needs to be implemented for a type to be walked and rendered, typically
/// on top of a bus connection. Each method corresponds to one remote call; none of them is retried
/// and calls are always issued one after another.
pub trait Introspectable: core::fmt::Debug {
    /// Introspect the object at `path` of `destination`.
    ///
    /// Transport errors, remote errors and undecodable documents are all reported as errors and end
    /// the walk.
    fn introspect(
        &mut self,
        destination: &str,
        path: &str,
    ) -> impl Future<Output = crate::Result<Node>>;

    /// Get the current value of a property, formatted for display.
    fn get_property(
        &mut self,
        destination: &str,
        path: &str,
        interface: &str,
        property: &str,
    ) -> impl Future<Output = crate::Result<String>>;

    /// List the names currently owned on the bus.
    fn list_names(&mut self) -> impl Future<Output = crate::Result<Vec<String>>>;

    /// The process ID of the connection owning `name`.
    fn connection_pid(&mut self, name: &str) -> impl Future<Output = crate::Result<u32>>;
}
