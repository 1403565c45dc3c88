#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub, clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod log;

mod error;
pub use error::{Error, Result};
pub mod signature;
pub use signature::{Signature, Type};
pub mod node;
pub use node::Node;
pub mod args;
pub mod style;
pub use style::{Role, Style};
pub mod provider;
pub use provider::Introspectable;
pub mod render;
pub use render::{RenderOptions, Renderer};
pub mod walk;
pub use walk::{WalkOptions, Walker};
pub mod names;

#[cfg(all(test, feature = "xml"))]
mod test_utils;
