use crate::type_ref::{TypeRef, TypeRefParseError};

fn parse(s: &str) -> TypeRef {
    s.parse().unwrap()
}

#[test]
fn parse_named() {
    assert_eq!(parse("System.String"), TypeRef::named("System.String"));
    assert_eq!(parse("  Widget "), TypeRef::named("Widget"));
}

#[test]
fn parse_nested_name_keeps_plus() {
    assert_eq!(parse("Acme.Outer+Inner"), TypeRef::named("Acme.Outer+Inner"));
}

#[test]
fn parse_generic_param() {
    assert_eq!(parse("!TValue"), TypeRef::param("TValue"));
}

#[test]
fn parse_constructed_generic() {
    let ty = parse("System.Collections.Generic.Dictionary`2<System.String, !TValue>");
    assert_eq!(
        ty,
        TypeRef::generic(
            "System.Collections.Generic.Dictionary`2",
            vec![TypeRef::named("System.String"), TypeRef::param("TValue")],
        )
    );
}

#[test]
fn parse_suffixes_apply_left_to_right() {
    assert_eq!(
        parse("System.Int32[]&"),
        TypeRef::ByRef(Box::new(TypeRef::array_of(TypeRef::named("System.Int32"))))
    );
    assert_eq!(
        parse("System.Byte*"),
        TypeRef::Pointer(Box::new(TypeRef::named("System.Byte")))
    );
}

#[test]
fn parse_multi_dimensional_array() {
    assert_eq!(
        parse("System.Int32[,]"),
        TypeRef::Array {
            element: Box::new(TypeRef::named("System.Int32")),
            rank: 2,
        }
    );
}

#[test]
fn parse_array_of_generic_argument() {
    let ty = parse("System.Collections.Generic.List`1<!T[]>");
    assert_eq!(ty.generic_args(), &[TypeRef::array_of(TypeRef::param("T"))]);
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<TypeRef>(), Err(TypeRefParseError::Empty));
    assert_eq!("   ".parse::<TypeRef>(), Err(TypeRefParseError::Empty));
    assert_eq!(
        "List`1<System.Int32".parse::<TypeRef>(),
        Err(TypeRefParseError::Unclosed('<'))
    );
    assert_eq!(
        "System.Int32[".parse::<TypeRef>(),
        Err(TypeRefParseError::Unclosed('['))
    );
    assert_eq!(
        "Foo>".parse::<TypeRef>(),
        Err(TypeRefParseError::Unexpected {
            found: '>',
            offset: 3
        })
    );
    assert_eq!(
        "List`1<>".parse::<TypeRef>(),
        Err(TypeRefParseError::ExpectedName(7))
    );
    assert_eq!("!".parse::<TypeRef>(), Err(TypeRefParseError::ExpectedName(1)));
}

#[test]
fn display_matches_parse_input() {
    for text in [
        "System.String",
        "!T",
        "System.Int32[]",
        "System.Int32[,,]",
        "System.Int32&",
        "System.Void*",
        "System.Collections.Generic.Dictionary`2<System.String, System.Int32[]>",
    ] {
        assert_eq!(parse(text).to_string(), text);
    }
}

#[test]
fn closed_means_no_generic_parameter() {
    assert!(parse("System.Int32").is_closed());
    assert!(parse("List`1<System.Int32>").is_closed());
    assert!(parse("System.Int32[]").is_closed());
    assert!(!parse("!T").is_closed());
    assert!(!parse("List`1<!T>").is_closed());
    assert!(!parse("Dictionary`2<System.String, !T>").is_closed());
    assert!(!parse("!T[]").is_closed());
}

#[test]
fn shape_queries() {
    assert!(parse("Widget").is_non_generic());
    assert!(!parse("List`1<!T>").is_non_generic());
    assert!(!parse("Widget[]").is_non_generic());
    assert!(parse("Widget[]").is_array());
    assert!(parse("Widget&").is_by_ref());
    assert!(parse("Widget*").is_pointer());
    assert!(parse("!T").is_generic_param());
    assert_eq!(parse("Widget").full_name(), Some("Widget"));
    assert_eq!(parse("Widget[]").full_name(), None);
    assert_eq!(parse("!T").full_name(), None);
}
