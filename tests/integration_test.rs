use enumscan::parser::ast::{BinaryOp, ExprComponent};
use enumscan::parser::lexer::{tokenize, TokenKind};
use enumscan::parser::parse::{parse_enumerations, ParseError, Parser};

#[test]
fn test_scoped_enum_with_base_type() {
    let source = "enum class Color : int { Red = 1, Green = 2, Blue = 4 };";
    let enums = parse_enumerations(source).expect("Parsing failed");

    assert_eq!(enums.len(), 1);
    let e = &enums[0];
    assert!(e.is_scoped);
    assert_eq!(e.name, "Color");
    assert_eq!(e.base_types.len(), 1);
    assert_eq!(e.base_types[0].segments, vec!["int"]);
    assert_eq!(e.members.len(), 3);

    for (member, expected) in e.members.iter().zip(["1", "2", "4"]) {
        assert_eq!(member.value.links.len(), 1);
        assert_eq!(member.value.links[0].op, None);
        match &member.value.links[0].component {
            ExprComponent::Number(text) => assert_eq!(text, expected),
            other => panic!("Expected numeric component, got {:?}", other),
        }
    }
}

#[test]
fn test_member_referencing_member() {
    let source = "enum E { A, B = A + 1 };";
    let enums = parse_enumerations(source).expect("Parsing failed");

    let e = &enums[0];
    assert!(!e.is_scoped);
    assert_eq!(e.members.len(), 2);
    assert!(e.members[0].value.is_empty());

    let chain = &e.members[1].value;
    assert_eq!(chain.links.len(), 2);
    match &chain.links[0].component {
        ExprComponent::Name(name) => assert_eq!(name.segments, vec!["A"]),
        other => panic!("Expected name component, got {:?}", other),
    }
    assert_eq!(chain.links[0].op, Some(BinaryOp::Add));
    match &chain.links[1].component {
        ExprComponent::Number(text) => assert_eq!(text, "1"),
        other => panic!("Expected numeric component, got {:?}", other),
    }
    assert_eq!(chain.links[1].op, None);
}

#[test]
fn test_anonymous_enum_with_bracketed_initializer() {
    let source = "enum { X = (1 + 2) * 3 };";
    let enums = parse_enumerations(source).expect("Parsing failed");

    let e = &enums[0];
    assert_eq!(e.name, "");
    assert_eq!(e.members.len(), 1);

    let chain = &e.members[0].value;
    assert_eq!(chain.links.len(), 2);
    match &chain.links[0].component {
        ExprComponent::Parenthesized(sub) => {
            assert_eq!(sub.links.len(), 2);
            assert_eq!(sub.links[0].op, Some(BinaryOp::Add));
            assert_eq!(sub.links[1].op, None);
        }
        other => panic!("Expected parenthesized component, got {:?}", other),
    }
    assert_eq!(chain.links[0].op, Some(BinaryOp::Mul));
    match &chain.links[1].component {
        ExprComponent::Number(text) => assert_eq!(text, "3"),
        other => panic!("Expected numeric component, got {:?}", other),
    }
}

#[test]
fn test_bad_hex_digit_is_lexical_error() {
    let source = "enum Bad { A = 0xg };";
    let err = parse_enumerations(source).unwrap_err();

    match err {
        // offset of the 'g'
        ParseError::Lex(e) => assert_eq!(e.offset, 17),
        other => panic!("Expected lexical error, got {:?}", other),
    }
}

#[test]
fn test_missing_separator_is_syntax_error() {
    let source = "enum Bad { A = 1 B };";
    let tokens = tokenize(source).expect("Lexing failed");
    let mut parser = Parser::from_tokens(tokens.clone());
    let err = parser.parse_enumerations().unwrap_err();

    match err {
        ParseError::Syntax(e) => {
            assert_eq!(tokens[e.token_index].text, "B");
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("").expect("Lexing failed");
    assert!(tokens.is_empty());

    let enums = parse_enumerations("").expect("Parsing failed");
    assert!(enums.is_empty());
}

#[test]
fn test_tokenize_is_idempotent() {
    let source = "enum E : a::b { X = 0x10 + Y, /* note */ Z };";
    let first = tokenize(source).expect("Lexing failed");
    let second = tokenize(source).expect("Lexing failed");
    assert_eq!(first, second);
}

#[test]
fn test_keywords_stay_identifiers_in_lexer() {
    let tokens = tokenize("enum class struct").expect("Lexing failed");
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Ident));
}

#[test]
fn test_declarations_around_other_tokens_fail_whole_parse() {
    // once any declaration fails, nothing is returned
    let source = "enum A { X }; int not_an_enum;";
    let err = parse_enumerations(source).unwrap_err();
    assert!(matches!(err, ParseError::Syntax(_)));
}

#[test]
fn test_parse_header_like_source() {
    let source = r#"
    // Flags for the renderer
    enum class RenderFlags : std::uint32_t
    {
        None = 0,
        Wireframe = 1,
        Shadows = 2,
        All = Wireframe + Shadows, // combined
    };

    /* legacy, kept for the old pipeline */
    enum Legacy { First, Second = First + 0x1 };
    "#;

    let enums = parse_enumerations(source).expect("Parsing failed");
    assert_eq!(enums.len(), 2);

    assert_eq!(enums[0].name, "RenderFlags");
    assert!(enums[0].is_scoped);
    assert_eq!(enums[0].base_types[0].segments, vec!["std", "uint32_t"]);
    assert_eq!(enums[0].members.len(), 4);
    assert_eq!(enums[0].members[3].value.links.len(), 2);

    assert_eq!(enums[1].name, "Legacy");
    assert!(!enums[1].is_scoped);
}
