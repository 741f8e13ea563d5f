//! Resource defaults: the values a [`Settings`](crate::Settings) snapshot
//! starts from before any stored preference is applied.
//!
//! Defaults are trusted input. They are not clamped; the values shipped in
//! [`crate::defaults`] are already in range.

use crate::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Named default for every setting. Field names are the logical names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefaults {
    #[serde(default = "crate::defaults::action_bar_mode")]
    pub action_bar_mode: i32,

    #[serde(default = "crate::defaults::cursor_style")]
    pub cursor_style: i32,

    #[serde(default = "crate::defaults::cursor_blink")]
    pub cursor_blink: i32,

    #[serde(default = "crate::defaults::font_size")]
    pub font_size: i32,

    #[serde(default = "crate::defaults::color_id")]
    pub color_id: i32,

    #[serde(default = "crate::defaults::utf8_by_default")]
    pub utf8_by_default: bool,

    #[serde(default = "crate::defaults::back_key_action")]
    pub back_key_action: i32,

    #[serde(default = "crate::defaults::control_key_id")]
    pub control_key_id: i32,

    #[serde(default = "crate::defaults::fn_key_id")]
    pub fn_key_id: i32,

    /// Nonzero selects the cooked IME.
    #[serde(default = "crate::defaults::use_cooked_ime")]
    pub use_cooked_ime: i32,

    /// Also becomes the failsafe shell.
    #[serde(default = "crate::defaults::shell")]
    pub shell: String,

    #[serde(default = "crate::defaults::initial_command")]
    pub initial_command: String,

    #[serde(default = "crate::defaults::term_type")]
    pub term_type: String,

    #[serde(default = "crate::defaults::bool_true")]
    pub close_on_exit: bool,

    #[serde(default = "crate::defaults::bool_true")]
    pub verify_path: bool,

    #[serde(default = "crate::defaults::bool_true")]
    pub do_path_extensions: bool,

    #[serde(default = "crate::defaults::bool_true")]
    pub allow_path_prepend: bool,

    #[serde(default = "crate::defaults::bool_true")]
    pub touch_gesture: bool,

    #[serde(default = "crate::defaults::bool_false")]
    pub single_tap_esc: bool,

    #[serde(default = "crate::defaults::bool_false")]
    pub zoom_bottom: bool,

    #[serde(default = "crate::defaults::quickbar_position")]
    pub quickbar_position: i32,
}

impl Default for ResourceDefaults {
    fn default() -> Self {
        Self {
            action_bar_mode: crate::defaults::action_bar_mode(),
            cursor_style: crate::defaults::cursor_style(),
            cursor_blink: crate::defaults::cursor_blink(),
            font_size: crate::defaults::font_size(),
            color_id: crate::defaults::color_id(),
            utf8_by_default: crate::defaults::utf8_by_default(),
            back_key_action: crate::defaults::back_key_action(),
            control_key_id: crate::defaults::control_key_id(),
            fn_key_id: crate::defaults::fn_key_id(),
            use_cooked_ime: crate::defaults::use_cooked_ime(),
            shell: crate::defaults::shell(),
            initial_command: crate::defaults::initial_command(),
            term_type: crate::defaults::term_type(),
            close_on_exit: crate::defaults::bool_true(),
            verify_path: crate::defaults::bool_true(),
            do_path_extensions: crate::defaults::bool_true(),
            allow_path_prepend: crate::defaults::bool_true(),
            touch_gesture: crate::defaults::bool_true(),
            single_tap_esc: crate::defaults::bool_false(),
            zoom_bottom: crate::defaults::bool_false(),
            quickbar_position: crate::defaults::quickbar_position(),
        }
    }
}

impl ResourceDefaults {
    /// Read defaults from a YAML file. Keys the file leaves out keep their
    /// compiled-in value.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
        let defaults: ResourceDefaults =
            serde_yaml_ng::from_str(&contents).map_err(|e| SettingsError::parse(path, e))?;
        log::info!("Loaded resource defaults from {:?}", path);
        Ok(defaults)
    }
}
