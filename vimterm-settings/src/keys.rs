//! Preference keys as stored by the preference source.
//!
//! These strings are the persisted format shared with the settings screen,
//! so they must never be renamed.

pub const ACTIONBAR_KEY: &str = "actionbar";
/// Not loaded; cursor style is default-only.
pub const CURSORSTYLE_KEY: &str = "cursorstyle";
/// Not loaded; cursor blink is default-only.
pub const CURSORBLINK_KEY: &str = "cursorblink";
pub const FONTSIZE_KEY: &str = "fontsize";
pub const COLOR_KEY: &str = "color";
pub const UTF8_KEY: &str = "utf8_by_default";
pub const BACKACTION_KEY: &str = "backaction";
pub const CONTROLKEY_KEY: &str = "controlkey";
pub const FNKEY_KEY: &str = "fnkey";
pub const IME_KEY: &str = "ime";
pub const SHELL_KEY: &str = "shell";
pub const INITIALCOMMAND_KEY: &str = "initialcommand";
pub const TERMTYPE_KEY: &str = "termtype";
pub const CLOSEONEXIT_KEY: &str = "close_window_on_process_exit";
pub const VERIFYPATH_KEY: &str = "verify_path";
pub const PATHEXTENSIONS_KEY: &str = "do_path_extensions";
pub const PATHPREPEND_KEY: &str = "allow_prepend_path";
pub const TOUCHGESTURE_KEY: &str = "touch_gesture";
pub const SINGLETAPESC_KEY: &str = "single_tap_esc";
pub const ZOOMBOTTOM_KEY: &str = "zoombottom";
pub const QUICKBARPOS_KEY: &str = "quickbar_pos";
pub const LASTVERSION_KEY: &str = "last_version";
