//! Printable view of a resolved settings snapshot.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use vimterm_settings::{ColorScheme, KeyCode, Settings};

/// Values computed from the snapshot rather than stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedValues {
    pub color_scheme: ColorScheme,
    pub control_key_code: KeyCode,
    pub fn_key_code: KeyCode,
    pub back_key_sends_character: bool,
    pub back_key_character: u8,
    pub use_cooked_ime: bool,
}

impl DerivedValues {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            color_scheme: *settings.color_scheme(),
            control_key_code: settings.control_key_code(),
            fn_key_code: settings.fn_key_code(),
            back_key_sends_character: settings.back_key_sends_character(),
            back_key_character: settings.back_key_character(),
            use_cooked_ime: settings.use_cooked_ime(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference_file: Option<&'a Path>,
    pub settings: &'a Settings,
    pub derived: DerivedValues,
}

impl<'a> SettingsReport<'a> {
    pub fn new(settings: &'a Settings, preference_file: Option<&'a Path>) -> Self {
        Self {
            preference_file,
            settings,
            derived: DerivedValues::from_settings(settings),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).context("Failed to render settings as YAML")
    }
}
