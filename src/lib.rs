//! Blockkit - validating builders for Slack Block Kit payloads.
//!
//! This crate builds Block Kit composition objects and elements in memory,
//! checks Slack's field constraints as each value is set, and turns the
//! finished tree into the JSON shape the Slack API expects.
//!
//! # Architecture
//!
//! - `slack::block_kit::composites` holds the reusable values: text, option
//!   and confirmation dialog objects
//! - `slack::block_kit::elements` holds the interactive elements built from them
//! - `core::config` selects how optional fields and initial options are handled
//! - `errors` defines the validation errors raised by every setter
//!
//! # Example
//!
//! ```
//! use blockkit::slack::{BlockKitObject, CheckboxesElement, ConfirmStyle};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     blockkit::setup_logging();
//!
//!     let mut element = CheckboxesElement::new();
//!     element
//!         .action_id("dest_flags")?
//!         .option("DM me the summary", "dm")?
//!         .option("Post publicly in channel", "public_post")?
//!         .initial_option("DM me the summary", "dm")?
//!         .confirm(|confirm| {
//!             confirm.title("Share summary?")?;
//!             confirm.style(ConfirmStyle::Primary);
//!             Ok(())
//!         })?;
//!
//!     let payload = element.to_value();
//!     assert_eq!(payload["type"], "checkboxes");
//!     assert_eq!(payload["initial_options"][0]["value"], json!("dm"));
//!     println!("{}", serde_json::to_string_pretty(&element)?);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod slack;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter. Calling it again after a
/// subscriber is installed has no effect.
///
/// # Example
///
/// ```
/// blockkit::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
