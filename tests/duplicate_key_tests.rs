use sfv_codec::{BareItem, FieldKind, KeyContext, Parser};

fn collect_duplicates(input: &[u8], kind: FieldKind) -> Vec<(String, KeyContext)> {
    let mut seen = Vec::new();
    let mut parser = Parser::new().on_duplicate_key(|key, context| {
        seen.push((key.to_string(), context));
        Ok(())
    });
    parser.parse(input, kind).unwrap();
    drop(parser);
    seen
}

#[test]
fn test_dictionary_duplicate_key() {
    assert_eq!(
        collect_duplicates(b"a=1, a=2", FieldKind::Dictionary),
        vec![("a".to_string(), KeyContext::Dictionary)]
    );
}

#[test]
fn test_parameter_duplicate_key() {
    assert_eq!(
        collect_duplicates(b"a;b=1;b=2", FieldKind::Item),
        vec![("b".to_string(), KeyContext::Parameter)]
    );
}

#[test]
fn test_nested_duplicate_keys_in_parse_order() {
    assert_eq!(
        collect_duplicates(b"a;b=1;b=2, a=3", FieldKind::Dictionary),
        vec![
            ("b".to_string(), KeyContext::Parameter),
            ("a".to_string(), KeyContext::Dictionary),
        ]
    );
}

#[test]
fn test_every_repeat_is_reported() {
    assert_eq!(
        collect_duplicates(b"x=1, x=2, x=3", FieldKind::Dictionary),
        vec![
            ("x".to_string(), KeyContext::Dictionary),
            ("x".to_string(), KeyContext::Dictionary),
        ]
    );
}

#[test]
fn test_no_duplicates_no_calls() {
    assert!(collect_duplicates(b"a=1, b=2;a=1", FieldKind::Dictionary).is_empty());
    assert!(collect_duplicates(b"(1;a 2;a)", FieldKind::List).is_empty());
}

#[test]
fn test_hook_runs_before_overwrite() {
    let mut parser = Parser::new().on_duplicate_key(|_, _| Ok(()));
    let dict = parser.parse_dictionary(b"a=1, a=2").unwrap();
    assert_eq!(
        dict.get("a").and_then(|m| m.bare_item()),
        Some(&BareItem::Integer(2))
    );
}

#[test]
fn test_rejecting_hook_aborts_parse() {
    let mut parser = Parser::new().on_duplicate_key(|key, context| {
        if context == KeyContext::Parameter {
            Err(format!("parameter {} may not repeat", key))
        } else {
            Ok(())
        }
    });

    assert!(parser.parse_dictionary(b"a=1, a=2").is_ok());

    let err = parser.parse_item(b"tok;q=1;q=2").unwrap_err();
    assert_eq!(err.message, "Duplicate parameter key rejected: parameter q may not repeat");
    assert_eq!(err.position, 11);
    assert_eq!(err.context.as_deref(), Some("q"));
}

#[test]
fn test_parser_is_reusable_across_calls() {
    let mut count = 0;
    let mut parser = Parser::new().on_duplicate_key(|_, _| {
        count += 1;
        Ok(())
    });
    parser.parse_dictionary(b"a, a").unwrap();
    parser.parse_list(b"1;p;p").unwrap();
    drop(parser);
    assert_eq!(count, 2);
}
