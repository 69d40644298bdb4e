use serde_json::{Map, Value};

use crate::core::config::OptionalFieldPolicy;
use crate::errors::{ValidationError, ensure_max_length};
use crate::slack::block_kit::{
    BlockKitObject, OptionalFields, PlainTextOnlyTextObject, TextObject, serialize_as_block_kit,
};

pub const MAX_TEXT_LENGTH: usize = 75;
pub const MAX_VALUE_LENGTH: usize = 75;
pub const MAX_DESCRIPTION_LENGTH: usize = 75;
pub const MAX_URL_LENGTH: usize = 3000;

/// A single selectable item in a checkbox group, radio group, select or overflow menu.
///
/// `text` and `value` are required and therefore taken by [`OptionObject::new`];
/// `description` and `url` are emitted only once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionObject {
    text: TextObject,
    value: String,
    description: Option<PlainTextOnlyTextObject>,
    url: Option<String>,
}

impl OptionObject {
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `text` or `value` is
    /// longer than 75 characters.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let text = TextObject::new(text, MAX_TEXT_LENGTH)?;
        let value = value.into();
        ensure_max_length("value", &value, MAX_VALUE_LENGTH)?;
        Ok(Self {
            text,
            value,
            description: None,
            url: None,
        })
    }

    /// Replace the text shown for this option.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `text` is longer than 75 characters.
    pub fn text(&mut self, text: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.text = TextObject::new(text, MAX_TEXT_LENGTH)?;
        Ok(self)
    }

    /// Replace the value sent to the app when this option is chosen.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `value` is longer than 75 characters.
    pub fn value(&mut self, value: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let value = value.into();
        ensure_max_length("value", &value, MAX_VALUE_LENGTH)?;
        self.value = value;
        Ok(self)
    }

    /// Set the line of text shown below the option.
    ///
    /// Unlike the other setters this returns the new description object, so it
    /// can be configured further (e.g. `option.description("...")?.emoji(true)`).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `description` is longer than 75 characters.
    pub fn description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<&mut PlainTextOnlyTextObject, ValidationError> {
        let description = PlainTextOnlyTextObject::with_field(
            "description",
            description,
            MAX_DESCRIPTION_LENGTH,
        )?;
        Ok(self.description.insert(description))
    }

    /// Set the URL loaded in the user's browser when the option is clicked.
    /// Slack only honours this inside overflow menus.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `url` is longer than 3000 characters.
    pub fn url(&mut self, url: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let url = url.into();
        ensure_max_length("url", &url, MAX_URL_LENGTH)?;
        self.url = Some(url);
        Ok(self)
    }

    #[must_use]
    pub fn text_object(&self) -> &TextObject {
        &self.text
    }

    #[must_use]
    pub fn value_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn description_object(&self) -> Option<&PlainTextOnlyTextObject> {
        self.description.as_ref()
    }

    #[must_use]
    pub fn url_str(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Whether this option shows `text` and carries `value`.
    #[must_use]
    pub fn matches(&self, text: &str, value: &str) -> bool {
        self.text.text() == text && self.value == value
    }
}

impl BlockKitObject for OptionObject {
    fn to_value_with(&self, policy: OptionalFieldPolicy) -> Value {
        let mut object = Map::new();
        object.insert("value".to_string(), Value::from(self.value.as_str()));
        object.insert("text".to_string(), self.text.to_value_with(policy));

        let mut optional = OptionalFields::new(policy);
        optional.insert(
            "description",
            self.description.as_ref().map(|d| d.to_value_with(policy)),
        );
        optional.insert("url", self.url.as_deref().map(Value::from));
        optional.merge_into(&mut object);

        Value::Object(object)
    }
}

serialize_as_block_kit!(OptionObject);
