use super::*;
use Basic::*;

fn decode(signature: &str) -> Result<Vec<Type>, Malformed<'_>> {
    parse_signature(signature)
}

fn array(element: impl Into<Type>) -> Type {
    Type::Array(Box::new(element.into()))
}

fn dict(key: Basic, value: impl Into<Type>) -> Type {
    Type::Dict(key, Box::new(value.into()))
}

#[test]
fn basic_types() {
    for basic in Basic::ALL {
        let signature = basic.code().to_string();
        assert_eq!(decode(&signature), Ok(vec![Type::Basic(basic)]));
    }
}

#[test]
fn empty_signature() {
    assert_eq!(decode(""), Ok(vec![]));
}

#[test]
fn sequence_of_basic_types() {
    assert_eq!(
        decode("nqiuxt"),
        Ok(vec![
            Int16.into(),
            Uint16.into(),
            Int32.into(),
            Uint32.into(),
            Int64.into(),
            Uint64.into(),
        ])
    );
}

#[test]
fn structs() {
    assert_eq!(
        decode("i(iy)"),
        Ok(vec![Int32.into(), Type::Struct(vec![Int32.into(), Byte.into()])])
    );
    assert_eq!(decode("()"), Ok(vec![Type::Struct(vec![])]));
    assert_eq!(
        decode("((s)(s))b"),
        Ok(vec![
            Type::Struct(vec![
                Type::Struct(vec![String.into()]),
                Type::Struct(vec![String.into()]),
            ]),
            Bool.into(),
        ])
    );
}

#[test]
fn arrays() {
    assert_eq!(decode("ai"), Ok(vec![array(Int32)]));
    assert_eq!(decode("aai"), Ok(vec![array(array(Int32))]));
    assert_eq!(
        decode("a(is)"),
        Ok(vec![array(Type::Struct(vec![Int32.into(), String.into()]))])
    );
}

#[test]
fn dicts() {
    assert_eq!(
        decode("a{o(i(uu))}"),
        Ok(vec![dict(
            Object,
            Type::Struct(vec![
                Int32.into(),
                Type::Struct(vec![Uint32.into(), Uint32.into()]),
            ])
        )])
    );
    assert_eq!(decode("aa{yy}"), Ok(vec![array(dict(Byte, Byte))]));
    assert_eq!(
        decode("a{sv}as"),
        Ok(vec![dict(String, Variant), array(String)])
    );
    assert_eq!(
        decode("a{oa{sa{sv}}}"),
        Ok(vec![dict(Object, dict(String, dict(String, Variant)))])
    );
}

#[test]
fn unknown_codes() {
    assert_eq!(decode("?"), Ok(vec![Type::Unknown('?')]));
    assert_eq!(
        decode("n?n"),
        Ok(vec![Int16.into(), Type::Unknown('?'), Int16.into()])
    );
    assert_eq!(
        decode("(z)"),
        Ok(vec![Type::Struct(vec![Type::Unknown('z')])])
    );
    // Stray closing delimiters have no structure to close.
    assert_eq!(decode(")"), Ok(vec![Type::Unknown(')')]));
    assert_eq!(
        decode("s}"),
        Ok(vec![String.into(), Type::Unknown('}')])
    );
    assert_eq!(decode("é"), Ok(vec![Type::Unknown('é')]));
}

#[test]
fn malformed() {
    for signature in [
        "a{(uu)s}",
        "a{ass}",
        "a{?s}",
        "a",
        "ia",
        "a{",
        "a{s",
        "a{si",
        "a{i}",
        "(ii",
        "(a)",
        "a(i",
    ] {
        assert_eq!(decode(signature), Err(Malformed(signature)), "{signature}");
    }
}

#[test]
fn full_consumption() {
    // A well-formed signature is always consumed completely, so decoding and then rendering the
    // codes back gives the input.
    fn codes(ty: &Type, out: &mut std::string::String) {
        match ty {
            Type::Basic(basic) => out.push(basic.code()),
            Type::Array(element) => {
                out.push('a');
                codes(element, out);
            }
            Type::Dict(key, value) => {
                out.push_str("a{");
                out.push(key.code());
                codes(value, out);
                out.push('}');
            }
            Type::Struct(fields) => {
                out.push('(');
                fields.iter().for_each(|field| codes(field, out));
                out.push(')');
            }
            Type::Unknown(code) => out.push(*code),
        }
    }

    for signature in ["a{sa(ix)}(ya{yy}aah)g", "sa{sv}", "(((())))", "aaaa{tv}"] {
        let mut encoded = std::string::String::new();
        for ty in decode(signature).unwrap() {
            codes(&ty, &mut encoded);
        }
        assert_eq!(encoded, signature);
    }
}
