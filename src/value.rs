//! Typed value tree for Structured Field Values.
//!
//! A parsed field is a [`StructuredValue`]: a dictionary, a list, or a single
//! item. The leaves are [`BareItem`]s, one variant per wire type.
//!
//! ## Core Types
//!
//! - [`BareItem`]: integer, decimal, string, token, byte sequence, boolean,
//!   date or display string
//! - [`Item`]: a bare item plus its parameters
//! - [`InnerList`]: a parenthesized sequence of items plus parameters
//! - [`ListEntry`] / [`DictMember`]: what a list or dictionary can hold
//!
//! ## Building Values
//!
//! ```rust
//! use sfv_codec::{params, BareItem, Item, Token};
//!
//! let item = Item::new(Token::new("text/html")).with_params(params! { "q" => 1 });
//! assert_eq!(item.bare_item.as_token(), Some("text/html"));
//! assert_eq!(item.params.get("q"), Some(&BareItem::Integer(1)));
//! ```
//!
//! Values are plain data: parsing builds them bottom-up and serialization only
//! reads them.

use crate::map::{Dictionary, Parameters};
use crate::options::FieldKind;
use chrono::{DateTime, Utc};
use std::fmt;

pub use rust_decimal::Decimal;

/// Largest magnitude an Integer or Date may have (15 decimal digits).
pub const MAX_INTEGER: i64 = 999_999_999_999_999;
/// Smallest Integer or Date value.
pub const MIN_INTEGER: i64 = -MAX_INTEGER;

/// An unquoted identifier bare item.
///
/// Tokens hold text like strings but compare and serialize differently, so
/// they get their own type. The character set is checked on serialization.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::Token;
///
/// let token = Token::new("gzip");
/// assert_eq!(token.as_str(), "gzip");
/// assert_eq!(token.to_string(), "gzip");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Token(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::new(value)
    }
}

/// A Unicode text bare item, percent-encoded as UTF-8 on the wire.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{serialize_item, DisplayString, Item};
///
/// let item = Item::new(DisplayString::new("café"));
/// assert_eq!(serialize_item(&item).unwrap(), "%\"caf%c3%a9\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayString(String);

impl DisplayString {
    pub fn new(value: impl Into<String>) -> Self {
        DisplayString(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single typed primitive, independent of any parameters.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::BareItem;
///
/// let value = BareItem::from(42);
/// assert!(value.is_integer());
/// assert_eq!(value.as_integer(), Some(42));
/// assert_eq!(value.as_bool(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BareItem {
    /// Within [`MIN_INTEGER`]..=[`MAX_INTEGER`].
    Integer(i64),
    /// At most 12 integer digits and 3 fractional digits.
    Decimal(Decimal),
    /// Printable ASCII only.
    String(String),
    Token(Token),
    ByteSequence(Vec<u8>),
    Boolean(bool),
    /// Seconds since the Unix epoch.
    Date(i64),
    DisplayString(DisplayString),
}

impl BareItem {
    /// Builds a Date from a timestamp, dropping sub-second precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::DateTime;
    /// use sfv_codec::BareItem;
    ///
    /// let when = DateTime::from_timestamp(1_659_578_233, 500_000_000).unwrap();
    /// assert_eq!(BareItem::date(when), BareItem::Date(1_659_578_233));
    /// ```
    #[must_use]
    pub fn date(when: DateTime<Utc>) -> Self {
        BareItem::Date(when.timestamp())
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, BareItem::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, BareItem::Decimal(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, BareItem::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, BareItem::Token(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_byte_sequence(&self) -> bool {
        matches!(self, BareItem::ByteSequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, BareItem::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, BareItem::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_display_string(&self) -> bool {
        matches!(self, BareItem::DisplayString(_))
    }

    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            BareItem::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            BareItem::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// If the value is a String, returns it. Tokens and display strings are
    /// not strings; use [`BareItem::as_token`] or
    /// [`BareItem::as_display_string`].
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BareItem::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_token(&self) -> Option<&str> {
        match self {
            BareItem::Token(t) => Some(t.as_str()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_byte_sequence(&self) -> Option<&[u8]> {
        match self {
            BareItem::ByteSequence(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BareItem::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a Date, returns its seconds since the epoch.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<i64> {
        match self {
            BareItem::Date(seconds) => Some(*seconds),
            _ => None,
        }
    }

    /// If the value is a Date that chrono can represent, returns it.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.as_date()
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }

    #[inline]
    #[must_use]
    pub fn as_display_string(&self) -> Option<&str> {
        match self {
            BareItem::DisplayString(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<i8> for BareItem {
    fn from(value: i8) -> Self {
        BareItem::Integer(value as i64)
    }
}

impl From<i16> for BareItem {
    fn from(value: i16) -> Self {
        BareItem::Integer(value as i64)
    }
}

impl From<i32> for BareItem {
    fn from(value: i32) -> Self {
        BareItem::Integer(value as i64)
    }
}

impl From<i64> for BareItem {
    fn from(value: i64) -> Self {
        BareItem::Integer(value)
    }
}

impl From<u8> for BareItem {
    fn from(value: u8) -> Self {
        BareItem::Integer(value as i64)
    }
}

impl From<u16> for BareItem {
    fn from(value: u16) -> Self {
        BareItem::Integer(value as i64)
    }
}

impl From<u32> for BareItem {
    fn from(value: u32) -> Self {
        BareItem::Integer(value as i64)
    }
}

impl From<Decimal> for BareItem {
    fn from(value: Decimal) -> Self {
        BareItem::Decimal(value)
    }
}

impl From<bool> for BareItem {
    fn from(value: bool) -> Self {
        BareItem::Boolean(value)
    }
}

impl From<&str> for BareItem {
    fn from(value: &str) -> Self {
        BareItem::String(value.to_string())
    }
}

impl From<String> for BareItem {
    fn from(value: String) -> Self {
        BareItem::String(value)
    }
}

impl From<Token> for BareItem {
    fn from(value: Token) -> Self {
        BareItem::Token(value)
    }
}

impl From<DisplayString> for BareItem {
    fn from(value: DisplayString) -> Self {
        BareItem::DisplayString(value)
    }
}

impl From<Vec<u8>> for BareItem {
    fn from(value: Vec<u8>) -> Self {
        BareItem::ByteSequence(value)
    }
}

impl From<&[u8]> for BareItem {
    fn from(value: &[u8]) -> Self {
        BareItem::ByteSequence(value.to_vec())
    }
}

impl From<DateTime<Utc>> for BareItem {
    fn from(value: DateTime<Utc>) -> Self {
        BareItem::date(value)
    }
}

/// A bare item with its parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub bare_item: BareItem,
    pub params: Parameters,
}

impl Item {
    /// Creates an item without parameters.
    pub fn new(bare_item: impl Into<BareItem>) -> Self {
        Item {
            bare_item: bare_item.into(),
            params: Parameters::new(),
        }
    }

    /// Replaces the parameters.
    #[must_use]
    pub fn with_params(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }
}

impl From<BareItem> for Item {
    fn from(bare_item: BareItem) -> Self {
        Item::new(bare_item)
    }
}

/// A parenthesized sequence of items with its own parameters.
///
/// The sequence may be empty: `()` is a valid inner list.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct InnerList {
    pub items: Vec<Item>,
    pub params: Parameters,
}

impl InnerList {
    pub fn new(items: Vec<Item>) -> Self {
        InnerList {
            items,
            params: Parameters::new(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }
}

/// A member of a top-level list.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEntry {
    Item(Item),
    InnerList(InnerList),
}

impl ListEntry {
    #[must_use]
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            ListEntry::Item(item) => Some(item),
            ListEntry::InnerList(_) => None,
        }
    }

    #[must_use]
    pub fn as_inner_list(&self) -> Option<&InnerList> {
        match self {
            ListEntry::InnerList(list) => Some(list),
            ListEntry::Item(_) => None,
        }
    }

    #[must_use]
    pub fn params(&self) -> &Parameters {
        match self {
            ListEntry::Item(item) => &item.params,
            ListEntry::InnerList(list) => &list.params,
        }
    }
}

impl From<Item> for ListEntry {
    fn from(item: Item) -> Self {
        ListEntry::Item(item)
    }
}

impl From<InnerList> for ListEntry {
    fn from(list: InnerList) -> Self {
        ListEntry::InnerList(list)
    }
}

/// A top-level list.
pub type List = Vec<ListEntry>;

static TRUE: BareItem = BareItem::Boolean(true);

/// The value of a dictionary member.
///
/// `Flag` is the bare-key form (`key` or `key;p=1`, without `=`). It means the
/// same as an `Item` whose bare item is Boolean `true`, and compares equal to
/// one, but the parser keeps the shape it saw.
#[derive(Clone, Debug)]
pub enum DictMember {
    Item(Item),
    InnerList(InnerList),
    Flag(Parameters),
}

impl DictMember {
    /// The bare item of an item member; Boolean `true` for a flag.
    #[must_use]
    pub fn bare_item(&self) -> Option<&BareItem> {
        match self {
            DictMember::Item(item) => Some(&item.bare_item),
            DictMember::Flag(_) => Some(&TRUE),
            DictMember::InnerList(_) => None,
        }
    }

    #[must_use]
    pub fn as_inner_list(&self) -> Option<&InnerList> {
        match self {
            DictMember::InnerList(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn params(&self) -> &Parameters {
        match self {
            DictMember::Item(item) => &item.params,
            DictMember::InnerList(list) => &list.params,
            DictMember::Flag(params) => params,
        }
    }

    /// Returns `true` for members that serialize in the bare-key form.
    #[must_use]
    pub fn is_true_flag(&self) -> bool {
        self.bare_item() == Some(&TRUE)
    }

    /// Converts a flag into the equivalent Boolean `true` item.
    #[must_use]
    pub fn normalize(self) -> Self {
        match self {
            DictMember::Flag(params) => DictMember::Item(Item::new(true).with_params(params)),
            other => other,
        }
    }
}

impl PartialEq for DictMember {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DictMember::InnerList(a), DictMember::InnerList(b)) => a == b,
            (DictMember::InnerList(_), _) | (_, DictMember::InnerList(_)) => false,
            _ => self.bare_item() == other.bare_item() && self.params() == other.params(),
        }
    }
}

impl From<Item> for DictMember {
    fn from(item: Item) -> Self {
        DictMember::Item(item)
    }
}

impl From<InnerList> for DictMember {
    fn from(list: InnerList) -> Self {
        DictMember::InnerList(list)
    }
}

/// A complete parsed field value.
#[derive(Clone, Debug, PartialEq)]
pub enum StructuredValue {
    Dictionary(Dictionary),
    List(List),
    Item(Item),
}

impl StructuredValue {
    /// The top-level kind this value parses and serializes as.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            StructuredValue::Dictionary(_) => FieldKind::Dictionary,
            StructuredValue::List(_) => FieldKind::List,
            StructuredValue::Item(_) => FieldKind::Item,
        }
    }

    #[must_use]
    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            StructuredValue::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            StructuredValue::List(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            StructuredValue::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl From<Dictionary> for StructuredValue {
    fn from(dict: Dictionary) -> Self {
        StructuredValue::Dictionary(dict)
    }
}

impl From<List> for StructuredValue {
    fn from(list: List) -> Self {
        StructuredValue::List(list)
    }
}

impl From<Item> for StructuredValue {
    fn from(item: Item) -> Self {
        StructuredValue::Item(item)
    }
}
