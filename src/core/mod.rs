//! Crate-wide configuration

pub mod config;

pub use config::{BlockKitConfig, InitialOptionsPolicy, OptionalFieldPolicy};
