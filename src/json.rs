//! Conformance test-vector JSON.
//!
//! The shared cross-implementation corpus describes expected values in plain
//! JSON, with a tagged object for the four kinds JSON cannot express:
//!
//! ```json
//! {"__type": "token", "value": "abc"}
//! {"__type": "binary", "value": "MFRGG==="}
//! {"__type": "date", "value": 1659578233}
//! {"__type": "displaystring", "value": "café"}
//! ```
//!
//! Items, inner lists and members are `[value, parameters]` pairs; parameters
//! and dictionaries are arrays of `[key, value]` pairs so that member order
//! survives. Decimals are JSON numbers. Binary content is base32.
//!
//! ## Examples
//!
//! ```rust
//! use serde_json::json;
//! use sfv_codec::json::{from_json, to_json};
//! use sfv_codec::{parse_item, FieldKind, StructuredValue};
//!
//! let item = parse_item(b"abc;q=1.5").unwrap();
//! let encoded = to_json(&StructuredValue::Item(item.clone())).unwrap();
//! assert_eq!(encoded, json!([{"__type": "token", "value": "abc"}, [["q", 1.5]]]));
//!
//! let decoded = from_json(&encoded, FieldKind::Item).unwrap();
//! assert_eq!(decoded, StructuredValue::Item(item));
//! ```

use crate::error::{Error, Result};
use crate::map::{Dictionary, KeyedMap, Parameters};
use crate::options::FieldKind;
use crate::value::{
    BareItem, Decimal, DictMember, DisplayString, InnerList, Item, List, ListEntry, StructuredValue, Token,
};
use data_encoding::BASE32;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::str::FromStr;

const TYPE_TAG: &str = "__type";

fn tagged<S, V>(serializer: S, kind: &str, value: &V) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    V: ?Sized + Serialize,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry(TYPE_TAG, kind)?;
    map.serialize_entry("value", value)?;
    map.end()
}

impl Serialize for BareItem {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BareItem::Integer(i) => serializer.serialize_i64(*i),
            BareItem::Decimal(d) => {
                let float = d
                    .to_f64()
                    .ok_or_else(|| S::Error::custom(format!("decimal {} has no float form", d)))?;
                serializer.serialize_f64(float)
            }
            BareItem::String(s) => serializer.serialize_str(s),
            BareItem::Token(t) => tagged(serializer, "token", t.as_str()),
            BareItem::ByteSequence(bytes) => tagged(serializer, "binary", &BASE32.encode(bytes)),
            BareItem::Boolean(b) => serializer.serialize_bool(*b),
            BareItem::Date(seconds) => tagged(serializer, "date", seconds),
            BareItem::DisplayString(s) => tagged(serializer, "displaystring", s.as_str()),
        }
    }
}

impl<V: Serialize> Serialize for KeyedMap<V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for member in self.iter() {
            seq.serialize_element(&member)?;
        }
        seq.end()
    }
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.bare_item, &self.params).serialize(serializer)
    }
}

impl Serialize for InnerList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.items, &self.params).serialize(serializer)
    }
}

impl Serialize for ListEntry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ListEntry::Item(item) => item.serialize(serializer),
            ListEntry::InnerList(list) => list.serialize(serializer),
        }
    }
}

impl Serialize for DictMember {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DictMember::Item(item) => item.serialize(serializer),
            DictMember::InnerList(list) => list.serialize(serializer),
            DictMember::Flag(params) => (true, params).serialize(serializer),
        }
    }
}

impl Serialize for StructuredValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StructuredValue::Dictionary(dict) => dict.serialize(serializer),
            StructuredValue::List(list) => list.serialize(serializer),
            StructuredValue::Item(item) => item.serialize(serializer),
        }
    }
}

/// Encodes a value in the test-vector JSON shape.
///
/// # Errors
///
/// Returns [`Error::Fixture`] if a decimal has no floating-point form.
pub fn to_json(value: &StructuredValue) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::Fixture(e.to_string()))
}

/// Decodes test-vector JSON describing a value of the given kind.
///
/// # Errors
///
/// Returns [`Error::Fixture`] if the JSON does not have the expected shape.
pub fn from_json(json: &Value, kind: FieldKind) -> Result<StructuredValue> {
    Ok(match kind {
        FieldKind::Dictionary => StructuredValue::Dictionary(dictionary_from_json(json)?),
        FieldKind::List => StructuredValue::List(list_from_json(json)?),
        FieldKind::Item => StructuredValue::Item(item_from_json(json)?),
    })
}

fn fixture(message: impl Into<String>) -> Error {
    Error::Fixture(message.into())
}

fn pair<'a>(json: &'a Value, what: &str) -> Result<(&'a Value, &'a Value)> {
    match json.as_array().map(Vec::as_slice) {
        Some([first, second]) => Ok((first, second)),
        _ => Err(fixture(format!("{} must be a 2-element array, got {}", what, json))),
    }
}

fn array<'a>(json: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    json.as_array()
        .ok_or_else(|| fixture(format!("{} must be an array, got {}", what, json)))
}

fn keyed<V>(json: &Value, what: &str, mut member: impl FnMut(&Value) -> Result<V>) -> Result<KeyedMap<V>> {
    let mut map = KeyedMap::new();
    for entry in array(json, what)? {
        let (key, value) = pair(entry, what)?;
        let key = key
            .as_str()
            .ok_or_else(|| fixture(format!("{} key must be a string, got {}", what, key)))?;
        map.insert(key.to_string(), member(value)?);
    }
    Ok(map)
}

fn dictionary_from_json(json: &Value) -> Result<Dictionary> {
    keyed(json, "dictionary", |member| {
        let (value, params) = pair(member, "dictionary member")?;
        if value.is_array() {
            Ok(DictMember::InnerList(inner_list_from_parts(value, params)?))
        } else {
            Ok(DictMember::Item(item_from_parts(value, params)?))
        }
    })
}

fn list_from_json(json: &Value) -> Result<List> {
    array(json, "list")?
        .iter()
        .map(|member| {
            let (value, params) = pair(member, "list member")?;
            if value.is_array() {
                Ok(ListEntry::InnerList(inner_list_from_parts(value, params)?))
            } else {
                Ok(ListEntry::Item(item_from_parts(value, params)?))
            }
        })
        .collect()
}

fn item_from_json(json: &Value) -> Result<Item> {
    let (value, params) = pair(json, "item")?;
    item_from_parts(value, params)
}

fn item_from_parts(value: &Value, params: &Value) -> Result<Item> {
    Ok(Item::new(bare_item_from_json(value)?).with_params(params_from_json(params)?))
}

fn inner_list_from_parts(items: &Value, params: &Value) -> Result<InnerList> {
    let items = array(items, "inner list")?
        .iter()
        .map(item_from_json)
        .collect::<Result<Vec<_>>>()?;
    Ok(InnerList::new(items).with_params(params_from_json(params)?))
}

fn params_from_json(json: &Value) -> Result<Parameters> {
    keyed(json, "parameters", bare_item_from_json)
}

fn bare_item_from_json(json: &Value) -> Result<BareItem> {
    match json {
        Value::Bool(b) => Ok(BareItem::Boolean(*b)),
        Value::String(s) => Ok(BareItem::String(s.clone())),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(BareItem::Integer(i)),
            None => decimal_from_json(n).map(BareItem::Decimal),
        },
        Value::Object(object) => {
            let kind = object.get(TYPE_TAG).and_then(Value::as_str);
            let value = object
                .get("value")
                .ok_or_else(|| fixture(format!("tagged value without \"value\": {}", json)))?;
            tagged_from_json(kind, value)
        }
        _ => Err(fixture(format!("not a bare item: {}", json))),
    }
}

fn tagged_from_json(kind: Option<&str>, value: &Value) -> Result<BareItem> {
    let text = || {
        value
            .as_str()
            .ok_or_else(|| fixture(format!("tagged value must be a string, got {}", value)))
    };
    match kind {
        Some("token") => Ok(BareItem::Token(Token::new(text()?))),
        Some("displaystring") => Ok(BareItem::DisplayString(DisplayString::new(text()?))),
        Some("binary") => BASE32
            .decode(text()?.as_bytes())
            .map(BareItem::ByteSequence)
            .map_err(|e| fixture(format!("invalid base32: {}", e))),
        Some("date") => value
            .as_i64()
            .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map(BareItem::Date)
            .ok_or_else(|| fixture(format!("date must be whole seconds, got {}", value))),
        other => Err(fixture(format!("unknown __type {:?}", other))),
    }
}

fn decimal_from_json(number: &serde_json::Number) -> Result<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| fixture(format!("decimal {} not representable: {}", text, e)))
}

/// One case of a conformance suite file.
#[derive(Debug, Clone, Deserialize)]
pub struct TestVector {
    pub name: String,
    /// Field lines, combined with `", "` before parsing.
    pub raw: Vec<String>,
    pub header_type: String,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub must_fail: bool,
    /// Failure to parse is tolerated.
    #[serde(default)]
    pub can_fail: bool,
    #[serde(default)]
    pub canonical: Option<Vec<String>>,
}

impl TestVector {
    pub fn kind(&self) -> Result<FieldKind> {
        self.header_type.parse()
    }

    /// The combined field value to parse.
    #[must_use]
    pub fn field_value(&self) -> Vec<u8> {
        self.raw.join(", ").into_bytes()
    }

    /// The decoded expected value, if the case has one.
    pub fn expected_value(&self) -> Result<Option<StructuredValue>> {
        let kind = self.kind()?;
        self.expected.as_ref().map(|json| from_json(json, kind)).transpose()
    }

    /// The serialized lines a round trip should produce. An empty slice means
    /// the field should not be emitted.
    #[must_use]
    pub fn canonical_lines(&self) -> &[String] {
        self.canonical.as_deref().unwrap_or(&self.raw)
    }
}

/// Reads a suite file: a JSON array of [`TestVector`]s.
///
/// # Errors
///
/// Returns [`Error::Fixture`] if the text is not a valid suite.
pub fn load_test_vectors(json: &str) -> Result<Vec<TestVector>> {
    serde_json::from_str(json).map_err(|e| fixture(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tagged_kinds() {
        let item = Item::new(BareItem::ByteSequence(b"hello".to_vec()));
        assert_eq!(
            to_json(&StructuredValue::Item(item)).unwrap(),
            json!([{"__type": "binary", "value": "NBSWY3DP"}, []])
        );

        let item = Item::new(BareItem::Date(1_659_578_233));
        assert_eq!(
            to_json(&StructuredValue::Item(item)).unwrap(),
            json!([{"__type": "date", "value": 1_659_578_233}, []])
        );
    }

    #[test]
    fn test_dictionary_keeps_member_order() {
        let json = json!([
            ["b", [1, []]],
            ["a", [[[true, []], ["x", [["q", 1]]]], []]]
        ]);
        let value = from_json(&json, FieldKind::Dictionary).unwrap();
        let dict = value.as_dictionary().unwrap();
        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(dict.get("a").and_then(|m| m.as_inner_list()).map(|l| l.items.len()), Some(2));
        assert_eq!(to_json(&value).unwrap(), json);
    }

    #[test]
    fn test_flag_encodes_as_true_item() {
        let mut dict = Dictionary::new();
        dict.insert("a".to_string(), DictMember::Flag(Parameters::new()));
        let json = to_json(&StructuredValue::Dictionary(dict)).unwrap();
        assert_eq!(json, json!([["a", [true, []]]]));
    }

    #[test]
    fn test_decimal_from_float() {
        let value = from_json(&json!([-0.125, []]), FieldKind::Item).unwrap();
        assert_eq!(
            value.as_item().map(|i| &i.bare_item),
            Some(&BareItem::Decimal(Decimal::new(-125, 3)))
        );
    }

    #[test]
    fn test_malformed_fixture() {
        assert!(matches!(from_json(&json!([1]), FieldKind::Item), Err(Error::Fixture(_))));
        assert!(matches!(
            from_json(&json!([{"__type": "uuid", "value": "x"}, []]), FieldKind::Item),
            Err(Error::Fixture(_))
        ));
        assert!(load_test_vectors("{").is_err());
    }

    #[test]
    fn test_vector_defaults() {
        let suite = load_test_vectors(
            r#"[{"name": "basic", "raw": ["1", "2"], "header_type": "list",
                 "expected": [[1, []], [2, []]], "canonical": ["1, 2"]}]"#,
        )
        .unwrap();
        let case = &suite[0];
        assert!(!case.must_fail);
        assert_eq!(case.field_value(), b"1, 2".to_vec());
        assert_eq!(case.canonical_lines(), ["1, 2".to_string()]);
        assert_eq!(case.expected_value().unwrap().map(|v| v.kind()), Some(FieldKind::List));
    }
}
