//! Compiled-in default values.
//!
//! Each function backs one `#[serde(default = "crate::defaults::...")]`
//! attribute on [`ResourceDefaults`](crate::ResourceDefaults), so a defaults
//! file that omits a key still resolves to the value shipped with the app.

pub fn action_bar_mode() -> i32 {
    1 // ALWAYS_VISIBLE
}

pub fn cursor_style() -> i32 {
    0
}

pub fn cursor_blink() -> i32 {
    0
}

pub fn font_size() -> i32 {
    12
}

pub fn color_id() -> i32 {
    1 // white on black
}

pub fn utf8_by_default() -> bool {
    false
}

pub fn back_key_action() -> i32 {
    2 // CLOSES_ACTIVITY
}

pub fn control_key_id() -> i32 {
    5 // volume down
}

pub fn fn_key_id() -> i32 {
    4 // volume up
}

pub fn use_cooked_ime() -> i32 {
    0
}

pub fn shell() -> String {
    "/bin/sh -".to_string()
}

pub fn initial_command() -> String {
    String::new()
}

pub fn term_type() -> String {
    "screen".to_string()
}

pub fn quickbar_position() -> i32 {
    0
}

pub fn bool_true() -> bool {
    true
}

pub fn bool_false() -> bool {
    false
}
