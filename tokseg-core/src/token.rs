//! Token access
//!
//! The segmenter never inspects concrete token types. Everything it needs
//! goes through [`TokenView`]: the token text and three optional annotations.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Read access to a token
pub trait TokenView {
    /// Textual form of the token, or `None` if it has none
    fn text(&self) -> Option<Cow<'_, str>>;

    /// The sentence must end at this token
    fn is_forced_end(&self) -> bool {
        false
    }

    /// No sentence break until a forced end is reached
    fn is_forced_until_end(&self) -> bool {
        false
    }

    /// The token sits inside a multi-token span that must not be split
    fn is_multi_token_interior(&self) -> bool {
        false
    }

    /// Short description of the representation, used in error messages
    fn kind(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

impl TokenView for str {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl TokenView for String {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl TokenView for Cow<'_, str> {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: TokenView + ?Sized> TokenView for &T {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }

    fn is_forced_end(&self) -> bool {
        (**self).is_forced_end()
    }

    fn is_forced_until_end(&self) -> bool {
        (**self).is_forced_until_end()
    }

    fn is_multi_token_interior(&self) -> bool {
        (**self).is_multi_token_interior()
    }

    fn kind(&self) -> Cow<'static, str> {
        (**self).kind()
    }
}

/// An owned token with segmentation annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token text
    pub text: String,
    /// The sentence must end at this token
    #[serde(default)]
    pub forced_end: bool,
    /// No sentence break until a forced end is reached
    #[serde(default)]
    pub forced_until_end: bool,
    /// Inside a multi-token span that must not be split
    #[serde(default)]
    pub multi_token_interior: bool,
}

impl Token {
    /// Create an unannotated token
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Mark this token as the forced end of a sentence
    pub fn forced_end(mut self) -> Self {
        self.forced_end = true;
        self
    }

    /// Mark this token as the start of a forced hold
    pub fn forced_until_end(mut self) -> Self {
        self.forced_until_end = true;
        self
    }

    /// Mark this token as interior to a non-splittable span
    pub fn multi_token_interior(mut self) -> Self {
        self.multi_token_interior = true;
        self
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Token::new(text)
    }
}

impl TokenView for Token {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.text.as_str()))
    }

    fn is_forced_end(&self) -> bool {
        self.forced_end
    }

    fn is_forced_until_end(&self) -> bool {
        self.forced_until_end
    }

    fn is_multi_token_interior(&self) -> bool {
        self.multi_token_interior
    }

    fn kind(&self) -> Cow<'static, str> {
        Cow::Borrowed("Token")
    }
}

/// Object keys tried, in order, for the text of a JSON token
const JSON_TEXT_KEYS: [&str; 3] = ["text", "word", "value"];

fn json_flag(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// JSON tokens: strings, numbers, or objects with a `text`/`word`/`value` key
impl TokenView for Value {
    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Object(map) => JSON_TEXT_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(Cow::Borrowed),
            _ => None,
        }
    }

    fn is_forced_end(&self) -> bool {
        json_flag(self, "forced_end")
    }

    fn is_forced_until_end(&self) -> bool {
        json_flag(self, "forced_until_end")
    }

    fn is_multi_token_interior(&self) -> bool {
        json_flag(self, "multi_token_interior")
    }

    fn kind(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object without a text field",
        })
    }
}
