//! Read accessors, derived lookups and runtime setters for [`Settings`].

use super::Settings;
use crate::schemes::{COLOR_SCHEMES, CONTROL_KEY_SCHEMES, ColorScheme, FN_KEY_SCHEMES, KeyCode};
use crate::types::{ActionBarMode, BackKeyAction};

impl Settings {
    // ========================================================================
    // Display
    // ========================================================================

    pub fn action_bar_mode(&self) -> ActionBarMode {
        self.action_bar_mode
    }

    pub fn cursor_style(&self) -> i32 {
        self.cursor_style
    }

    pub fn cursor_blink(&self) -> i32 {
        self.cursor_blink
    }

    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    /// Change the font size for this session only (e.g. pinch zoom).
    ///
    /// The value is not clamped and not written back to the preference source.
    pub fn set_font_size(&mut self, size: i32) {
        self.font_size = size;
    }

    pub fn color_id(&self) -> usize {
        self.color_id
    }

    pub fn color_scheme(&self) -> &'static ColorScheme {
        &COLOR_SCHEMES[self.color_id]
    }

    pub fn zoom_bottom(&self) -> bool {
        self.zoom_bottom
    }

    pub fn quickbar_position(&self) -> i32 {
        self.quickbar_position
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn back_key_action(&self) -> BackKeyAction {
        self.back_key_action
    }

    /// Whether the back key is delivered to the terminal as a character.
    pub fn back_key_sends_character(&self) -> bool {
        self.back_key_action.sends_character()
    }

    /// Character the back key sends: 27 for ESC, 9 for TAB, otherwise 0.
    pub fn back_key_character(&self) -> u8 {
        self.back_key_action.character()
    }

    pub fn control_key_id(&self) -> usize {
        self.control_key_id
    }

    pub fn fn_key_id(&self) -> usize {
        self.fn_key_id
    }

    /// Physical key acting as Ctrl, or [`keycode::NONE`](crate::schemes::keycode::NONE).
    pub fn control_key_code(&self) -> KeyCode {
        CONTROL_KEY_SCHEMES[self.control_key_id]
    }

    /// Physical key acting as Fn, or [`keycode::NONE`](crate::schemes::keycode::NONE).
    pub fn fn_key_code(&self) -> KeyCode {
        FN_KEY_SCHEMES[self.fn_key_id]
    }

    pub fn use_cooked_ime(&self) -> bool {
        self.use_cooked_ime != 0
    }

    pub fn touch_gesture(&self) -> bool {
        self.touch_gesture
    }

    pub fn single_tap_esc(&self) -> bool {
        self.single_tap_esc
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub fn utf8_by_default(&self) -> bool {
        self.utf8_by_default
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// The shell from the resource defaults, unaffected by stored preferences.
    pub fn failsafe_shell(&self) -> &str {
        &self.failsafe_shell
    }

    pub fn initial_command(&self) -> &str {
        &self.initial_command
    }

    pub fn term_type(&self) -> &str {
        &self.term_type
    }

    pub fn close_window_on_process_exit(&self) -> bool {
        self.close_on_exit
    }

    pub fn verify_path(&self) -> bool {
        self.verify_path
    }

    pub fn do_path_extensions(&self) -> bool {
        self.do_path_extensions
    }

    pub fn allow_path_prepend(&self) -> bool {
        self.allow_path_prepend
    }

    pub fn prepend_path(&self) -> Option<&str> {
        self.prepend_path.as_deref()
    }

    pub fn set_prepend_path(&mut self, path: Option<String>) {
        self.prepend_path = path;
    }

    pub fn append_path(&self) -> Option<&str> {
        self.append_path.as_deref()
    }

    pub fn set_append_path(&mut self, path: Option<String>) {
        self.append_path = path;
    }

    /// Version code recorded by the previous run; 0 when never recorded.
    pub fn last_version_code(&self) -> i64 {
        self.last_version_code
    }
}

#[cfg(test)]
mod tests {
    use crate::resources::ResourceDefaults;
    use crate::schemes::keycode;
    use crate::settings::Settings;

    #[test]
    fn test_derived_lookups_follow_ids() {
        let defaults = ResourceDefaults {
            color_id: 3,
            control_key_id: 7,
            fn_key_id: 2,
            use_cooked_ime: 1,
            ..ResourceDefaults::default()
        };
        let settings = Settings::from_defaults(&defaults);
        assert_eq!(settings.color_scheme().foreground_index, 2);
        assert_eq!(settings.control_key_code(), keycode::NONE);
        assert_eq!(settings.fn_key_code(), keycode::ALT_LEFT);
        assert!(settings.use_cooked_ime());
    }

    #[test]
    fn test_transient_paths() {
        let mut settings = Settings::from_defaults(&ResourceDefaults::default());
        assert_eq!(settings.prepend_path(), None);
        assert_eq!(settings.append_path(), None);

        settings.set_prepend_path(Some("/opt/vim/bin".to_string()));
        settings.set_append_path(Some("/sdcard/bin".to_string()));
        assert_eq!(settings.prepend_path(), Some("/opt/vim/bin"));
        assert_eq!(settings.append_path(), Some("/sdcard/bin"));

        settings.set_prepend_path(None);
        assert_eq!(settings.prepend_path(), None);
    }

    #[test]
    fn test_set_font_size_is_not_clamped() {
        let mut settings = Settings::from_defaults(&ResourceDefaults::default());
        settings.set_font_size(32);
        assert_eq!(settings.font_size(), 32);
    }
}
