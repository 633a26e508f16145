/// Builds [`Parameters`](crate::Parameters) from `key => value` pairs.
///
/// Values go through `BareItem::from`, so integers, booleans, `&str`,
/// [`Token`](crate::Token) and the other convertible types can be mixed.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{params, BareItem, Token};
///
/// let params = params! { "a" => 1, "b" => Token::new("c"), "d" => true };
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.get("b"), Some(&BareItem::Token(Token::new("c"))));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Parameters::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Parameters::new();
        $(
            params.insert(::std::string::ToString::to_string(&$key), $crate::BareItem::from($value));
        )+
        params
    }};
}
