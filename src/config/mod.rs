//! Configuration module for vidsum
//!
//! Handles loading settings from a TOML file plus environment overrides.

mod settings;

pub use settings::{CaptionSettings, LlmSettings, ServerSettings, Settings, StatusPolicy};
