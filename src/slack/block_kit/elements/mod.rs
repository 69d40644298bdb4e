//! Interactive elements placed inside blocks.

pub mod checkboxes;

pub use checkboxes::CheckboxesElement;
