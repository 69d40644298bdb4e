use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::config::OptionalFieldPolicy;
use crate::errors::{ValidationError, ensure_max_length};
use crate::slack::block_kit::{BlockKitObject, OptionalFields, serialize_as_block_kit};

/// Formatting of a text object, serialized as its `type` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextType {
    #[default]
    PlainText,
    Mrkdwn,
}

impl TextType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::Mrkdwn => "mrkdwn",
        }
    }
}

/// A Block Kit text object whose content never exceeds `max_length` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextObject {
    kind: TextType,
    text: String,
    max_length: usize,
    emoji: Option<bool>,
    verbatim: Option<bool>,
}

impl TextObject {
    /// Create a `plain_text` object.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `text` is longer than `max_length`.
    pub fn new(text: impl Into<String>, max_length: usize) -> Result<Self, ValidationError> {
        Self::with_field("text", TextType::PlainText, text, max_length)
    }

    /// Create a `mrkdwn` object.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `text` is longer than `max_length`.
    pub fn markdown(text: impl Into<String>, max_length: usize) -> Result<Self, ValidationError> {
        Self::with_field("text", TextType::Mrkdwn, text, max_length)
    }

    /// Validate against `max_length`, reporting failures under `field`.
    pub(crate) fn with_field(
        field: &'static str,
        kind: TextType,
        text: impl Into<String>,
        max_length: usize,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        ensure_max_length(field, &text, max_length)?;
        Ok(Self {
            kind,
            text,
            max_length,
            emoji: None,
            verbatim: None,
        })
    }

    /// Build from a literal known to fit, such as a built-in default label.
    pub(crate) fn from_static(kind: TextType, text: &'static str, max_length: usize) -> Self {
        debug_assert!(text.chars().count() <= max_length);
        Self {
            kind,
            text: text.to_string(),
            max_length,
            emoji: None,
            verbatim: None,
        }
    }

    /// Switch the object to `mrkdwn` formatting.
    pub fn mrkdwn(&mut self) -> &mut Self {
        self.kind = TextType::Mrkdwn;
        self
    }

    /// Whether emoji should be escaped into the colon emoji format.
    /// Only emitted for `plain_text`.
    pub fn emoji(&mut self, emoji: bool) -> &mut Self {
        self.emoji = Some(emoji);
        self
    }

    /// Disable Slack's automatic link and mention parsing.
    /// Only emitted for `mrkdwn`.
    pub fn verbatim(&mut self, verbatim: bool) -> &mut Self {
        self.verbatim = Some(verbatim);
        self
    }

    #[must_use]
    pub fn kind(&self) -> TextType {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl BlockKitObject for TextObject {
    fn to_value_with(&self, policy: OptionalFieldPolicy) -> Value {
        let mut object = Map::new();
        object.insert("type".to_string(), Value::from(self.kind.as_str()));
        object.insert("text".to_string(), Value::from(self.text.as_str()));

        let mut optional = OptionalFields::new(policy);
        match self.kind {
            TextType::PlainText => optional.insert("emoji", self.emoji.map(Value::Bool)),
            TextType::Mrkdwn => optional.insert("verbatim", self.verbatim.map(Value::Bool)),
        }
        optional.merge_into(&mut object);

        Value::Object(object)
    }
}

/// A text object that is always `plain_text`.
///
/// Used where Slack rejects `mrkdwn`, such as option descriptions and
/// confirmation dialog buttons. There is no way to switch it to markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTextOnlyTextObject(TextObject);

impl PlainTextOnlyTextObject {
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `text` is longer than `max_length`.
    pub fn new(text: impl Into<String>, max_length: usize) -> Result<Self, ValidationError> {
        Self::with_field("text", text, max_length)
    }

    pub(crate) fn with_field(
        field: &'static str,
        text: impl Into<String>,
        max_length: usize,
    ) -> Result<Self, ValidationError> {
        TextObject::with_field(field, TextType::PlainText, text, max_length).map(Self)
    }

    pub(crate) fn from_static(text: &'static str, max_length: usize) -> Self {
        Self(TextObject::from_static(TextType::PlainText, text, max_length))
    }

    pub fn emoji(&mut self, emoji: bool) -> &mut Self {
        self.0.emoji(emoji);
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.0.text()
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.0.max_length()
    }

    #[must_use]
    pub fn as_text_object(&self) -> &TextObject {
        &self.0
    }
}

impl From<PlainTextOnlyTextObject> for TextObject {
    fn from(object: PlainTextOnlyTextObject) -> Self {
        object.0
    }
}

impl BlockKitObject for PlainTextOnlyTextObject {
    fn to_value_with(&self, policy: OptionalFieldPolicy) -> Value {
        self.0.to_value_with(policy)
    }
}

serialize_as_block_kit!(TextObject, PlainTextOnlyTextObject);
