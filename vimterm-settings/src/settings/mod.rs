//! The resolved settings snapshot.
//!
//! A [`Settings`] value is built in two phases:
//!
//! 1. every field is populated from [`ResourceDefaults`];
//! 2. every persisted key is overlaid from a [`PreferenceSource`], clamping
//!    bounded integers into range.
//!
//! Phase 2 can be re-run with [`Settings::reload`]. A key that is missing or
//! unreadable keeps whatever value the field already holds. Loading never
//! fails and never reports the fallback.
//!
//! # Sub-modules
//!
//! - [`accessors`] — getters, derived lookups and the few runtime setters

mod accessors;

use crate::keys::*;
use crate::resources::ResourceDefaults;
use crate::schemes::{COLOR_SCHEMES, CONTROL_KEY_SCHEMES, FN_KEY_SCHEMES};
use crate::source::PreferenceSource;
use crate::types::{ActionBarMode, BackKeyAction};
use serde::Serialize;

/// Upper bound for a stored font size.
pub const FONT_SIZE_MAX: i32 = 20;
/// Upper bound for the IME flag (0 = raw, 1 = cooked).
pub const IME_MAX: i32 = 1;
/// Upper bound for the quickbar position.
pub const QUICKBAR_POSITION_MAX: i32 = 4;

/// Validated settings for one application session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    action_bar_mode: ActionBarMode,
    cursor_style: i32,
    cursor_blink: i32,
    font_size: i32,
    color_id: usize,
    utf8_by_default: bool,
    back_key_action: BackKeyAction,
    control_key_id: usize,
    fn_key_id: usize,
    use_cooked_ime: i32,
    shell: String,
    failsafe_shell: String,
    initial_command: String,
    term_type: String,
    close_on_exit: bool,
    verify_path: bool,
    do_path_extensions: bool,
    allow_path_prepend: bool,
    touch_gesture: bool,
    single_tap_esc: bool,
    zoom_bottom: bool,
    quickbar_position: i32,
    last_version_code: i64,

    // Set by the running application only; never persisted.
    prepend_path: Option<String>,
    append_path: Option<String>,
}

impl Settings {
    /// Resolve settings from `defaults` overlaid with `prefs`.
    ///
    /// `prefs` is only borrowed for the duration of the call.
    pub fn new<S>(defaults: &ResourceDefaults, prefs: &S) -> Self
    where
        S: PreferenceSource + ?Sized,
    {
        let mut settings = Self::from_defaults(defaults);
        settings.reload(prefs);
        settings
    }

    /// Settings populated from `defaults` alone.
    pub fn from_defaults(defaults: &ResourceDefaults) -> Self {
        Self {
            action_bar_mode: ActionBarMode::from_ordinal(defaults.action_bar_mode),
            cursor_style: defaults.cursor_style,
            cursor_blink: defaults.cursor_blink,
            font_size: defaults.font_size,
            color_id: clamp_index(defaults.color_id, COLOR_SCHEMES.len()),
            utf8_by_default: defaults.utf8_by_default,
            back_key_action: BackKeyAction::from_ordinal(defaults.back_key_action),
            control_key_id: clamp_index(defaults.control_key_id, CONTROL_KEY_SCHEMES.len()),
            fn_key_id: clamp_index(defaults.fn_key_id, FN_KEY_SCHEMES.len()),
            use_cooked_ime: defaults.use_cooked_ime,
            shell: defaults.shell.clone(),
            failsafe_shell: defaults.shell.clone(),
            initial_command: defaults.initial_command.clone(),
            term_type: defaults.term_type.clone(),
            close_on_exit: defaults.close_on_exit,
            verify_path: defaults.verify_path,
            do_path_extensions: defaults.do_path_extensions,
            allow_path_prepend: defaults.allow_path_prepend,
            touch_gesture: defaults.touch_gesture,
            single_tap_esc: defaults.single_tap_esc,
            zoom_bottom: defaults.zoom_bottom,
            quickbar_position: defaults.quickbar_position,
            last_version_code: 0,
            prepend_path: None,
            append_path: None,
        }
    }

    /// Overlay stored preferences onto the current values.
    ///
    /// Fields are not reset to their defaults first, so a key absent from
    /// `prefs` keeps the value from the previous load. Cursor style and
    /// blink are default-only and are not read.
    pub fn reload<S>(&mut self, prefs: &S)
    where
        S: PreferenceSource + ?Sized,
    {
        self.action_bar_mode = ActionBarMode::from_ordinal(read_int_pref(
            prefs,
            ACTIONBAR_KEY,
            self.action_bar_mode.ordinal(),
            ActionBarMode::MAX,
        ));
        self.font_size = read_int_pref(prefs, FONTSIZE_KEY, self.font_size, FONT_SIZE_MAX);
        self.color_id = read_index_pref(prefs, COLOR_KEY, self.color_id, COLOR_SCHEMES.len());
        self.utf8_by_default = prefs.get_bool(UTF8_KEY, self.utf8_by_default);
        self.back_key_action = BackKeyAction::from_ordinal(read_int_pref(
            prefs,
            BACKACTION_KEY,
            self.back_key_action.ordinal(),
            BackKeyAction::MAX,
        ));
        self.control_key_id = read_index_pref(
            prefs,
            CONTROLKEY_KEY,
            self.control_key_id,
            CONTROL_KEY_SCHEMES.len(),
        );
        self.fn_key_id = read_index_pref(prefs, FNKEY_KEY, self.fn_key_id, FN_KEY_SCHEMES.len());
        self.use_cooked_ime = read_int_pref(prefs, IME_KEY, self.use_cooked_ime, IME_MAX);
        self.shell = prefs.get_string(SHELL_KEY, &self.shell);
        self.initial_command = prefs.get_string(INITIALCOMMAND_KEY, &self.initial_command);
        self.term_type = prefs.get_string(TERMTYPE_KEY, &self.term_type);
        self.close_on_exit = prefs.get_bool(CLOSEONEXIT_KEY, self.close_on_exit);
        self.verify_path = prefs.get_bool(VERIFYPATH_KEY, self.verify_path);
        self.do_path_extensions = prefs.get_bool(PATHEXTENSIONS_KEY, self.do_path_extensions);
        self.allow_path_prepend = prefs.get_bool(PATHPREPEND_KEY, self.allow_path_prepend);
        self.touch_gesture = prefs.get_bool(TOUCHGESTURE_KEY, self.touch_gesture);
        self.single_tap_esc = prefs.get_bool(SINGLETAPESC_KEY, self.single_tap_esc);
        self.zoom_bottom = prefs.get_bool(ZOOMBOTTOM_KEY, self.zoom_bottom);
        self.quickbar_position = read_int_pref(
            prefs,
            QUICKBARPOS_KEY,
            self.quickbar_position,
            QUICKBAR_POSITION_MAX,
        );
        self.last_version_code = prefs.get_i64(LASTVERSION_KEY, self.last_version_code);

        log::debug!(
            "Settings overlaid: font size {}, color scheme {}, term type {:?}",
            self.font_size,
            self.color_id,
            self.term_type
        );
    }
}

/// Parse `raw` as a decimal integer, or return `default` when it is not one.
pub fn parse_or_default(raw: &str, default: i32) -> i32 {
    raw.parse().unwrap_or(default)
}

/// Read a bounded integer stored as text and clamp it into `[0, max]`.
fn read_int_pref<S>(prefs: &S, key: &str, default: i32, max: i32) -> i32
where
    S: PreferenceSource + ?Sized,
{
    let raw = prefs.get_string(key, &default.to_string());
    parse_or_default(&raw, default).clamp(0, max)
}

/// Read a table index, clamped into `[0, len - 1]`.
fn read_index_pref<S>(prefs: &S, key: &str, current: usize, len: usize) -> usize
where
    S: PreferenceSource + ?Sized,
{
    let max = i32::try_from(len - 1).unwrap_or(i32::MAX);
    let current = i32::try_from(current).unwrap_or(max);
    read_int_pref(prefs, key, current, max) as usize
}

fn clamp_index(value: i32, len: usize) -> usize {
    usize::try_from(value).unwrap_or(0).min(len - 1)
}
