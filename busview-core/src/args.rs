//! Formatting of argument lists.

use crate::{
    node::{Arg, Direction},
    signature::humanize,
    style::{Role, Style},
};

/// How argument and property types are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeDisplay {
    /// Decoded, readable type names, e.g. `Dict{String, Variant}`.
    #[default]
    Human,
    /// The signature as it appears in the introspection data, e.g. `a{sv}`.
    Raw,
}

/// Formats types and argument lists.
#[derive(Debug, Clone, Copy)]
pub struct ArgFormatter<'s> {
    types: TypeDisplay,
    style: &'s dyn Style,
}

impl<'s> ArgFormatter<'s> {
    /// Create a new formatter.
    pub fn new(types: TypeDisplay, style: &'s dyn Style) -> Self {
        Self { types, style }
    }

    /// Format a type signature.
    pub fn format_type(&self, signature: &str) -> String {
        let text = match self.types {
            TypeDisplay::Human => humanize(signature),
            TypeDisplay::Raw => signature.to_owned(),
        };

        self.style.paint(&text, Role::Type)
    }

    /// Format one argument as `<name> <type>`.
    ///
    /// Unnamed arguments are called `arg_<index>`.
    pub fn format_arg(&self, index: usize, arg: &Arg) -> String {
        let name = match arg.name() {
            Some(name) => self.style.paint(name, Role::ArgName),
            None => self.style.paint(&format!("arg_{index}"), Role::ArgName),
        };

        format!("{name} {}", self.format_type(arg.signature().as_str()))
    }

    /// Format an argument list, separated by `, `.
    pub fn format<'a, I>(&self, args: I) -> String
    where
        I: IntoIterator<Item = &'a Arg>,
    {
        args.into_iter()
            .enumerate()
            .map(|(i, arg)| self.format_arg(i, arg))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Split method arguments into the input and output groups, keeping their order.
///
/// Fails on the first argument with a direction other than `in` or `out`.
pub fn split_directions(args: &[Arg]) -> crate::Result<(Vec<&Arg>, Vec<&Arg>)> {
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();
    for arg in args {
        match arg.direction()? {
            Direction::In => inputs.push(arg),
            Direction::Out => outputs.push(arg),
        }
    }

    Ok((inputs, outputs))
}
