//! Method and signal arguments.

use core::str::FromStr;

use serde::Deserialize;

use crate::{signature::Signature, Error};

/// An argument of a method or a signal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Arg {
    /// The argument name. Optional in introspection data.
    #[serde(rename = "@name", default)]
    name: Option<String>,
    /// The type signature of the argument.
    #[serde(rename = "@type")]
    ty: String,
    /// The raw direction attribute.
    #[serde(rename = "@direction", default)]
    direction: Option<String>,
}

impl Arg {
    /// Creates a new argument with no explicit direction.
    pub fn new(name: Option<&str>, ty: impl Into<String>) -> Self {
        Self {
            name: name.map(Into::into),
            ty: ty.into(),
            direction: None,
        }
    }

    /// Same as `new` but with an explicit raw direction.
    pub fn with_direction(name: Option<&str>, ty: impl Into<String>, direction: &str) -> Self {
        Self {
            direction: Some(direction.into()),
            ..Self::new(name, ty)
        }
    }

    /// The argument name, if it is set and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The type signature.
    pub fn signature(&self) -> Signature<'_> {
        Signature::new(&self.ty)
    }

    /// The direction of the argument.
    ///
    /// A missing direction attribute means [`Direction::In`]. Any value other than `in` or `out`
    /// is an [`Error::InvalidDirection`].
    pub fn direction(&self) -> crate::Result<Direction> {
        match self.direction.as_deref() {
            None => Ok(Direction::In),
            Some(direction) => direction.parse(),
        }
    }
}

/// The direction of a method argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Passed by the caller.
    In,
    /// Returned to the caller.
    Out,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Direction::In),
            "out" => Ok(Direction::Out),
            _ => Err(Error::InvalidDirection(s.into())),
        }
    }
}
