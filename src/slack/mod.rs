//! All Slack-specific functionality

pub mod block_kit;

// Re-export main types for convenience
pub use block_kit::{
    BlockKitObject, CheckboxesElement, ConfirmObject, ConfirmStyle, OptionObject,
    PlainTextOnlyTextObject, TextObject, TextType,
};
