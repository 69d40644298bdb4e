//! Composition objects shared by Block Kit elements.

pub mod confirm;
pub mod option;
pub mod text;

pub use confirm::{ConfirmObject, ConfirmStyle};
pub use option::OptionObject;
pub use text::{PlainTextOnlyTextObject, TextObject, TextType};
