//! D-Bus type signatures and their human-readable form.
//!
//! A signature is a compact string of single-character type codes, e.g. `a{sv}` for a dictionary
//! of strings to variants. [`Signature::decode`] turns it into a sequence of [`Type`]s whose
//! [`Display`](core::fmt::Display) implementation gives the readable names used in the rendered
//! tree.

mod parse;

use core::fmt;

/// A basic type, encoded by a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basic {
    /// `y`: unsigned 8-bit integer.
    Byte,
    /// `b`: boolean.
    Bool,
    /// `n`: signed 16-bit integer.
    Int16,
    /// `q`: unsigned 16-bit integer.
    Uint16,
    /// `i`: signed 32-bit integer.
    Int32,
    /// `u`: unsigned 32-bit integer.
    Uint32,
    /// `x`: signed 64-bit integer.
    Int64,
    /// `t`: unsigned 64-bit integer.
    Uint64,
    /// `d`: IEEE 754 double.
    Double,
    /// `h`: Unix file descriptor.
    UnixFD,
    /// `s`: UTF-8 string.
    String,
    /// `o`: object path.
    Object,
    /// `v`: variant.
    Variant,
    /// `g`: signature.
    Signature,
}

impl Basic {
    /// All basic types.
    pub const ALL: [Basic; 14] = [
        Basic::Byte,
        Basic::Bool,
        Basic::Int16,
        Basic::Uint16,
        Basic::Int32,
        Basic::Uint32,
        Basic::Int64,
        Basic::Uint64,
        Basic::Double,
        Basic::UnixFD,
        Basic::String,
        Basic::Object,
        Basic::Variant,
        Basic::Signature,
    ];

    /// The basic type for the given type code, if any.
    pub const fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'y' => Basic::Byte,
            'b' => Basic::Bool,
            'n' => Basic::Int16,
            'q' => Basic::Uint16,
            'i' => Basic::Int32,
            'u' => Basic::Uint32,
            'x' => Basic::Int64,
            't' => Basic::Uint64,
            'd' => Basic::Double,
            'h' => Basic::UnixFD,
            's' => Basic::String,
            'o' => Basic::Object,
            'v' => Basic::Variant,
            'g' => Basic::Signature,
            _ => return None,
        })
    }

    /// The type code of this type.
    pub const fn code(self) -> char {
        match self {
            Basic::Byte => 'y',
            Basic::Bool => 'b',
            Basic::Int16 => 'n',
            Basic::Uint16 => 'q',
            Basic::Int32 => 'i',
            Basic::Uint32 => 'u',
            Basic::Int64 => 'x',
            Basic::Uint64 => 't',
            Basic::Double => 'd',
            Basic::UnixFD => 'h',
            Basic::String => 's',
            Basic::Object => 'o',
            Basic::Variant => 'v',
            Basic::Signature => 'g',
        }
    }

    /// The readable name of this type.
    pub const fn name(self) -> &'static str {
        match self {
            Basic::Byte => "Byte",
            Basic::Bool => "Bool",
            Basic::Int16 => "Int16",
            Basic::Uint16 => "Uint16",
            Basic::Int32 => "Int32",
            Basic::Uint32 => "Uint32",
            Basic::Int64 => "Int64",
            Basic::Uint64 => "Uint64",
            Basic::Double => "Double",
            Basic::UnixFD => "UnixFD",
            Basic::String => "String",
            Basic::Object => "Object",
            Basic::Variant => "Variant",
            Basic::Signature => "Signature",
        }
    }
}

impl fmt::Display for Basic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single decoded type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A basic type.
    Basic(Basic),
    /// An array of the element type.
    Array(Box<Type>),
    /// A dictionary. Keys are always basic types.
    Dict(Basic, Box<Type>),
    /// A struct with ordered fields.
    Struct(Vec<Type>),
    /// A code we do not know about. It occupies exactly one position.
    Unknown(char),
}

impl From<Basic> for Type {
    fn from(basic: Basic) -> Self {
        Type::Basic(basic)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(basic) => write!(f, "{basic}"),
            Type::Array(element) => write!(f, "Array[{element}]"),
            Type::Dict(key, value) => write!(f, "Dict{{{key}, {value}}}"),
            Type::Struct(fields) => {
                write!(f, "Struct(")?;
                write_list(f, fields)?;
                write!(f, ")")
            }
            Type::Unknown(code) => write!(f, "Unknown({code})"),
        }
    }
}

/// A type signature, borrowed from the introspection data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature<'a>(&'a str);

impl<'a> Signature<'a> {
    /// Wrap a signature string.
    pub const fn new(signature: &'a str) -> Self {
        Self(signature)
    }

    /// The signature as written.
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Decode the signature into its top-level types.
    ///
    /// The empty signature decodes to no types. Unknown codes are kept as [`Type::Unknown`], while
    /// structural errors (a dictionary key that is not basic, a missing dictionary value, an
    /// unclosed struct or dictionary, an array without element type) make the whole signature
    /// [`Malformed`].
    pub fn decode(&self) -> Result<Vec<Type>, Malformed<'a>> {
        parse::parse_signature(self.0)
    }
}

impl fmt::Display for Signature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A signature that could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Malformed<'a>(&'a str);

impl fmt::Display for Malformed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed({})", self.0)
    }
}

impl core::error::Error for Malformed<'_> {}

/// The readable form of `signature`.
///
/// Top-level types are joined with `, `; a malformed signature renders as `Malformed(...)`.
pub fn humanize(signature: &str) -> String {
    match Signature::new(signature).decode() {
        Ok(types) => {
            let mut s = String::new();
            // Writing into a `String` can't fail.
            let _ = write_list(&mut s, &types);
            s
        }
        Err(malformed) => malformed.to_string(),
    }
}

fn write_list<W: fmt::Write>(w: &mut W, types: &[Type]) -> fmt::Result {
    let mut first = true;
    for ty in types {
        if !first {
            w.write_str(", ")?;
        }
        first = false;
        write!(w, "{ty}")?;
    }
    Ok(())
}
