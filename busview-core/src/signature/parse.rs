//! Signature decoder using winnow.
//!
//! The parsers work on a `&str` cursor: every successful parser advances the cursor by exactly the
//! characters its type occupies. Running out of input is a backtrack, so a sequence stops cleanly
//! at the end of the signature, while structural errors are cuts that abort the whole decode.

use winnow::{
    combinator::{cut_err, repeat},
    error::{ErrMode, InputError, ParserError},
    token::{any, literal},
    ModalResult, Parser,
};

use super::{Basic, Malformed, Type};

/// Parse a single complete type.
fn single_type<'a>(input: &mut &'a str) -> ModalResult<Type, InputError<&'a str>> {
    let code = any.parse_next(input)?;
    match code {
        'a' if input.starts_with('{') => dict_entry(input),
        'a' => cut_err(single_type)
            .parse_next(input)
            .map(|element| Type::Array(Box::new(element))),
        '(' => struct_fields(input).map(Type::Struct),
        code => Ok(Basic::from_code(code).map_or(Type::Unknown(code), Type::Basic)),
    }
}

/// Parse a dictionary entry, `{` key value `}`, following the array code.
fn dict_entry<'a>(input: &mut &'a str) -> ModalResult<Type, InputError<&'a str>> {
    literal("{").parse_next(input)?;
    let key = match cut_err(single_type).parse_next(input)? {
        Type::Basic(basic) => basic,
        _ => return Err(ErrMode::Cut(ParserError::from_input(input))),
    };
    let value = cut_err(single_type).parse_next(input)?;
    cut_err(literal("}")).parse_next(input)?;

    Ok(Type::Dict(key, Box::new(value)))
}

/// Parse the fields of a struct, following the opening parenthesis.
///
/// The closing parenthesis is located first by counting nesting depth; the enclosed text is then
/// decoded as a sequence of types.
fn struct_fields<'a>(input: &mut &'a str) -> ModalResult<Vec<Type>, InputError<&'a str>> {
    let rest: &'a str = *input;
    let Some(close) = matching_close(rest) else {
        return Err(ErrMode::Cut(ParserError::from_input(input)));
    };

    let mut fields_input = &rest[..close];
    let fields = types(&mut fields_input)?;
    *input = &rest[close + 1..];

    Ok(fields)
}

/// Byte position of the `)` closing a struct whose `(` was just consumed.
fn matching_close(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (pos, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => (),
        }
    }

    None
}

/// Parse types until the input is exhausted.
fn types<'a>(input: &mut &'a str) -> ModalResult<Vec<Type>, InputError<&'a str>> {
    repeat(0.., single_type).parse_next(input)
}

/// Decode a whole signature.
pub(super) fn parse_signature(signature: &str) -> Result<Vec<Type>, Malformed<'_>> {
    let mut input = signature;
    match types(&mut input) {
        Ok(types) if input.is_empty() => Ok(types),
        _ => {
            trace!("malformed signature {signature:?}, stopped at {input:?}");
            Err(Malformed(signature))
        }
    }
}

#[cfg(test)]
mod tests;
