use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::config::OptionalFieldPolicy;
use crate::errors::ValidationError;
use crate::slack::block_kit::{
    BlockKitObject, OptionalFields, PlainTextOnlyTextObject, TextObject, TextType,
    serialize_as_block_kit,
};

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_TEXT_LENGTH: usize = 300;
pub const MAX_BUTTON_LENGTH: usize = 30;

/// Color scheme of the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmStyle {
    Primary,
    Danger,
}

impl ConfirmStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Danger => "danger",
        }
    }
}

/// Confirmation dialog shown before an interactive element's action runs.
///
/// Starts out with generic wording ("Are you sure?" / "Yes" / "No"); each
/// setter replaces one piece and hands back the new text object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmObject {
    title: PlainTextOnlyTextObject,
    text: TextObject,
    confirm: PlainTextOnlyTextObject,
    deny: PlainTextOnlyTextObject,
    style: Option<ConfirmStyle>,
}

impl Default for ConfirmObject {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmObject {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: PlainTextOnlyTextObject::from_static("Are you sure?", MAX_TITLE_LENGTH),
            text: TextObject::from_static(
                TextType::PlainText,
                "Please confirm this action.",
                MAX_TEXT_LENGTH,
            ),
            confirm: PlainTextOnlyTextObject::from_static("Yes", MAX_BUTTON_LENGTH),
            deny: PlainTextOnlyTextObject::from_static("No", MAX_BUTTON_LENGTH),
            style: None,
        }
    }

    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `title` is longer than 100 characters.
    pub fn title(
        &mut self,
        title: impl Into<String>,
    ) -> Result<&mut PlainTextOnlyTextObject, ValidationError> {
        self.title = PlainTextOnlyTextObject::with_field("title", title, MAX_TITLE_LENGTH)?;
        Ok(&mut self.title)
    }

    /// Set the explanatory text. The returned object may be switched to `mrkdwn`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `text` is longer than 300 characters.
    pub fn text(&mut self, text: impl Into<String>) -> Result<&mut TextObject, ValidationError> {
        self.text = TextObject::new(text, MAX_TEXT_LENGTH)?;
        Ok(&mut self.text)
    }

    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `label` is longer than 30 characters.
    pub fn confirm(
        &mut self,
        label: impl Into<String>,
    ) -> Result<&mut PlainTextOnlyTextObject, ValidationError> {
        self.confirm = PlainTextOnlyTextObject::with_field("confirm", label, MAX_BUTTON_LENGTH)?;
        Ok(&mut self.confirm)
    }

    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `label` is longer than 30 characters.
    pub fn deny(
        &mut self,
        label: impl Into<String>,
    ) -> Result<&mut PlainTextOnlyTextObject, ValidationError> {
        self.deny = PlainTextOnlyTextObject::with_field("deny", label, MAX_BUTTON_LENGTH)?;
        Ok(&mut self.deny)
    }

    pub fn style(&mut self, style: ConfirmStyle) -> &mut Self {
        self.style = Some(style);
        self
    }
}

impl BlockKitObject for ConfirmObject {
    fn to_value_with(&self, policy: OptionalFieldPolicy) -> Value {
        let mut object = Map::new();
        object.insert("title".to_string(), self.title.to_value_with(policy));
        object.insert("text".to_string(), self.text.to_value_with(policy));
        object.insert("confirm".to_string(), self.confirm.to_value_with(policy));
        object.insert("deny".to_string(), self.deny.to_value_with(policy));

        let mut optional = OptionalFields::new(policy);
        optional.insert("style", self.style.map(|s| Value::from(s.as_str())));
        optional.merge_into(&mut object);

        Value::Object(object)
    }
}

serialize_as_block_kit!(ConfirmObject);
