//! Field value serialization.
//!
//! This module provides the [`Serializer`], which writes values in their
//! canonical wire form.
//!
//! ## Overview
//!
//! - **Canonical output**: members are joined by `", "`, inner-list items by a
//!   single space, and Boolean `true` parameters drop their `=?1`
//! - **Validating**: every key, token, string and number is checked against
//!   the grammar before it is written
//! - **All or nothing**: a rejected value leaves the output as it was before
//!   the call
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use sfv_codec::{params, serialize_item, Item};
//!
//! let item = Item::new(5).with_params(params! { "foo" => "bar" });
//! assert_eq!(serialize_item(&item).unwrap(), "5;foo=\"bar\"");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use sfv_codec::{Item, ListEntry, Serializer};
//!
//! let mut serializer = Serializer::new();
//! serializer
//!     .serialize_list(&vec![ListEntry::from(Item::new(1)), ListEntry::from(Item::new(2))])
//!     .unwrap();
//! assert_eq!(serializer.into_inner(), "1, 2");
//! ```

use crate::dictionary::serialize_dictionary;
use crate::error::SerializeError;
use crate::item::serialize_item;
use crate::list::serialize_list;
use crate::map::Dictionary;
use crate::options::FieldKind;
use crate::value::{Item, List, StructuredValue};

/// The field value serializer.
///
/// Appends to an internal buffer; take it with [`Serializer::into_inner`].
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(64),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Serializes a value of any top-level kind.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializeError`] if any part of the value is outside the
    /// grammar, or if a top-level list or dictionary is empty.
    pub fn serialize_value(&mut self, value: &StructuredValue) -> Result<(), SerializeError> {
        match value {
            StructuredValue::Dictionary(dict) => self.serialize_dictionary(dict),
            StructuredValue::List(list) => self.serialize_list(list),
            StructuredValue::Item(item) => self.serialize_item(item),
        }
    }

    pub fn serialize_dictionary(&mut self, dict: &Dictionary) -> Result<(), SerializeError> {
        self.write(FieldKind::Dictionary, |output| serialize_dictionary(dict, output))
    }

    pub fn serialize_list(&mut self, list: &List) -> Result<(), SerializeError> {
        self.write(FieldKind::List, |output| serialize_list(list, output))
    }

    pub fn serialize_item(&mut self, item: &Item) -> Result<(), SerializeError> {
        self.write(FieldKind::Item, |output| serialize_item(item, output))
    }

    fn write(
        &mut self,
        kind: FieldKind,
        write_top: impl FnOnce(&mut String) -> Result<(), SerializeError>,
    ) -> Result<(), SerializeError> {
        let mark = self.output.len();
        let result = write_top(&mut self.output);
        if let Err(err) = &result {
            self.output.truncate(mark);
            tracing::debug!(%kind, "field value not serializable: {}", err);
        }
        result
    }
}
