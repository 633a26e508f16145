//! Runs test vectors in the shared cross-implementation JSON format: each case
//! is parsed, compared with its expected value, then serialized and compared
//! with its canonical form.

#![cfg(feature = "json")]

use sfv_codec::json::{load_test_vectors, to_json, TestVector};
use sfv_codec::{parse, serialize, SerializeError};

const SUITE: &str = r#"[
    {"name": "basic integer", "raw": ["42"], "header_type": "item", "expected": [42, []]},
    {"name": "leading zeros", "raw": ["00042"], "header_type": "item", "expected": [42, []], "canonical": ["42"]},
    {"name": "negative zero", "raw": ["-0"], "header_type": "item", "expected": [0, []], "canonical": ["0"]},
    {"name": "too long integer", "raw": ["1234567890123456"], "header_type": "item", "must_fail": true},
    {"name": "decimal", "raw": ["1.5"], "header_type": "item", "expected": [1.5, []]},
    {"name": "decimal trailing zero", "raw": ["1.50"], "header_type": "item", "expected": [1.5, []], "canonical": ["1.5"]},
    {"name": "too many fractional digits", "raw": ["1.5555"], "header_type": "item", "must_fail": true},
    {"name": "basic string", "raw": ["\"foo bar\""], "header_type": "item", "expected": ["foo bar", []]},
    {"name": "escaped string", "raw": ["\"foo \\\"bar\\\"\""], "header_type": "item", "expected": ["foo \"bar\"", []]},
    {"name": "bad escape", "raw": ["\"foo \\,\""], "header_type": "item", "must_fail": true},
    {"name": "basic token", "raw": ["a_b-c.d3:f%00/*"], "header_type": "item",
     "expected": [{"__type": "token", "value": "a_b-c.d3:f%00/*"}, []]},
    {"name": "basic binary", "raw": [":aGVsbG8=:"], "header_type": "item",
     "expected": [{"__type": "binary", "value": "NBSWY3DP"}, []]},
    {"name": "bad padding", "raw": [":aGVsbG8:"], "header_type": "item", "must_fail": true},
    {"name": "true", "raw": ["?1"], "header_type": "item", "expected": [true, []]},
    {"name": "false", "raw": ["?0"], "header_type": "item", "expected": [false, []]},
    {"name": "date", "raw": ["@1659578233"], "header_type": "item",
     "expected": [{"__type": "date", "value": 1659578233}, []]},
    {"name": "decimal date", "raw": ["@1659578233.12"], "header_type": "item", "must_fail": true},
    {"name": "display string", "raw": ["%\"f%c3%bc%c3%bc\""], "header_type": "item",
     "expected": [{"__type": "displaystring", "value": "füü"}, []]},
    {"name": "uppercase percent", "raw": ["%\"f%C3%BC\""], "header_type": "item", "must_fail": true},
    {"name": "empty item", "raw": [""], "header_type": "item", "must_fail": true},
    {"name": "parameterised item", "raw": ["abc;a=1;b=2; cde_456"], "header_type": "item",
     "expected": [{"__type": "token", "value": "abc"}, [["a", 1], ["b", 2], ["cde_456", true]]],
     "canonical": ["abc;a=1;b=2;cde_456"]},
    {"name": "explicit true parameter", "raw": ["1;a=?1"], "header_type": "item",
     "expected": [1, [["a", true]]], "canonical": ["1;a"]},
    {"name": "basic list", "raw": ["1, 42"], "header_type": "list", "expected": [[1, []], [42, []]]},
    {"name": "split list", "raw": ["1", "42"], "header_type": "list",
     "expected": [[1, []], [42, []]], "canonical": ["1, 42"]},
    {"name": "empty list", "raw": [""], "header_type": "list", "expected": [], "canonical": []},
    {"name": "tab separated list", "raw": ["1\t,\t42"], "header_type": "list",
     "expected": [[1, []], [42, []]], "canonical": ["1, 42"]},
    {"name": "trailing comma list", "raw": ["1, 42,"], "header_type": "list", "must_fail": true},
    {"name": "inner lists", "raw": ["(\"foo\" \"bar\"), (\"baz\"), (\"bat\" \"one\"), ()"], "header_type": "list",
     "expected": [[[["foo", []], ["bar", []]], []], [[["baz", []]], []], [[["bat", []], ["one", []]], []], [[], []]]},
    {"name": "parameterised inner list", "raw": ["(abc;a=1 def);b=?0"], "header_type": "list",
     "expected": [[[[{"__type": "token", "value": "abc"}, [["a", 1]]],
                    [{"__type": "token", "value": "def"}, []]], [["b", false]]]]},
    {"name": "tab in inner list", "raw": ["(1\t2)"], "header_type": "list", "must_fail": true},
    {"name": "basic dictionary", "raw": ["en=\"Applepie\", da=:w4ZibGV0w6ZydGU=:"], "header_type": "dictionary",
     "expected": [["en", ["Applepie", []]], ["da", [{"__type": "binary", "value": "YODGE3DFOTB2M4TUMU======"}, []]]]},
    {"name": "empty dictionary", "raw": [""], "header_type": "dictionary", "expected": [], "canonical": []},
    {"name": "missing value", "raw": ["a=1, b, c=3"], "header_type": "dictionary",
     "expected": [["a", [1, []]], ["b", [true, []]], ["c", [3, []]]]},
    {"name": "explicit true member", "raw": ["a=?1;x=2"], "header_type": "dictionary",
     "expected": [["a", [true, [["x", 2]]]]], "canonical": ["a;x=2"]},
    {"name": "duplicate member", "raw": ["a=1,b=2,a=3"], "header_type": "dictionary",
     "expected": [["a", [3, []]], ["b", [2, []]]], "canonical": ["a=3, b=2"]},
    {"name": "dictionary inner list", "raw": ["a=(1 2), b=3"], "header_type": "dictionary",
     "expected": [["a", [[[1, []], [2, []]], []]], ["b", [3, []]]]},
    {"name": "uppercase key", "raw": ["A=1"], "header_type": "dictionary", "must_fail": true},
    {"name": "trailing comma dictionary", "raw": ["a=1,"], "header_type": "dictionary", "must_fail": true}
]"#;

fn check_parse(case: &TestVector) -> Result<(), String> {
    let kind = case.kind().map_err(|e| e.to_string())?;
    let parsed = parse(&case.field_value(), kind);

    if case.must_fail {
        return match parsed {
            Ok(value) => Err(format!("expected failure, got {:?}", value)),
            Err(_) => Ok(()),
        };
    }

    let parsed = match parsed {
        Ok(value) => value,
        Err(_) if case.can_fail => return Ok(()),
        Err(err) => return Err(format!("parse failed: {}", err)),
    };
    let expected = case
        .expected_value()
        .map_err(|e| e.to_string())?
        .ok_or("case has no expected value")?;
    if parsed != expected {
        return Err(format!(
            "expected {}, got {}",
            to_json(&expected).map_err(|e| e.to_string())?,
            to_json(&parsed).map_err(|e| e.to_string())?
        ));
    }
    Ok(())
}

fn check_serialize(case: &TestVector) -> Result<(), String> {
    let Some(expected) = case.expected_value().map_err(|e| e.to_string())? else {
        return Ok(());
    };
    let canonical = case.canonical_lines();
    match serialize(&expected) {
        Ok(text) if canonical == [text.clone()] => Ok(()),
        Ok(text) => Err(format!("expected {:?}, got {:?}", canonical, text)),
        Err(SerializeError::EmptyField) if canonical.is_empty() => Ok(()),
        Err(err) => Err(format!("serialize failed: {}", err)),
    }
}

#[test]
fn test_conformance_suite() {
    let suite = load_test_vectors(SUITE).unwrap();
    let mut failures = Vec::new();

    for case in &suite {
        if let Err(reason) = check_parse(case) {
            failures.push(format!("{}: PARSE FAIL: {}", case.name, reason));
        }
        if !case.must_fail {
            if let Err(reason) = check_serialize(case) {
                failures.push(format!("{}: SERIALIZE FAIL: {}", case.name, reason));
            }
        }
    }

    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn test_parsed_values_encode_back_to_expected_json() {
    let suite = load_test_vectors(SUITE).unwrap();
    for case in suite.iter().filter(|case| !case.must_fail) {
        let kind = case.kind().unwrap();
        let parsed = parse(&case.field_value(), kind).unwrap();
        assert_eq!(Some(to_json(&parsed).unwrap()), case.expected, "{}", case.name);
    }
}
