//! Constant lookup tables: color schemes and modifier-key schemes.
//!
//! Settings store an index into these tables; the index is clamped at load
//! time so lookups here never go out of bounds.

use serde::Serialize;

// ============================================================================
// Colors
// ============================================================================

/// Opaque ARGB colors used by the built-in schemes.
pub const WHITE: u32 = 0xffff_ffff;
pub const BLACK: u32 = 0xff00_0000;
pub const BLUE: u32 = 0xff34_4ebd;
pub const GREEN: u32 = 0xff00_ff00;
pub const AMBER: u32 = 0xffff_b651;
pub const RED: u32 = 0xffff_0113;
pub const HOLO_BLUE: u32 = 0xff33_b5e5;

/// Foreground/background pair, each as an ANSI palette index plus an ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub foreground_index: u8,
    pub foreground: u32,
    pub background_index: u8,
    pub background: u32,
}

impl ColorScheme {
    pub const fn new(
        foreground_index: u8,
        foreground: u32,
        background_index: u8,
        background: u32,
    ) -> Self {
        Self {
            foreground_index,
            foreground,
            background_index,
            background,
        }
    }

    /// Foreground as `[r, g, b]`, alpha dropped.
    pub fn foreground_rgb(&self) -> [u8; 3] {
        argb_to_rgb(self.foreground)
    }

    /// Background as `[r, g, b]`, alpha dropped.
    pub fn background_rgb(&self) -> [u8; 3] {
        argb_to_rgb(self.background)
    }
}

#[inline]
fn argb_to_rgb(argb: u32) -> [u8; 3] {
    [(argb >> 16) as u8, (argb >> 8) as u8, argb as u8]
}

pub const COLOR_SCHEMES: [ColorScheme; 7] = [
    ColorScheme::new(0, BLACK, 7, WHITE),
    ColorScheme::new(7, WHITE, 0, BLACK),
    ColorScheme::new(7, WHITE, 4, BLUE),
    ColorScheme::new(2, GREEN, 0, BLACK),
    ColorScheme::new(3, AMBER, 0, BLACK),
    ColorScheme::new(1, RED, 0, BLACK),
    ColorScheme::new(4, HOLO_BLUE, 0, BLACK),
];

// ============================================================================
// Modifier Keys
// ============================================================================

/// Physical key code as reported by the input layer.
pub type KeyCode = i32;

/// Physical key codes that can be bound to the virtual Ctrl / Fn modifiers.
pub mod keycode {
    use super::KeyCode;

    pub const DPAD_CENTER: KeyCode = 23;
    pub const VOLUME_UP: KeyCode = 24;
    pub const VOLUME_DOWN: KeyCode = 25;
    pub const CAMERA: KeyCode = 27;
    pub const ALT_LEFT: KeyCode = 57;
    pub const ALT_RIGHT: KeyCode = 58;
    pub const AT: KeyCode = 77;
    /// Not a real key code; means "no key bound".
    pub const NONE: KeyCode = -1;
}

pub const CONTROL_KEY_ID_NONE: usize = 7;
pub const CONTROL_KEY_SCHEMES: [KeyCode; 8] = [
    keycode::DPAD_CENTER,
    keycode::AT,
    keycode::ALT_LEFT,
    keycode::ALT_RIGHT,
    keycode::VOLUME_UP,
    keycode::VOLUME_DOWN,
    keycode::CAMERA,
    keycode::NONE,
];

pub const FN_KEY_ID_NONE: usize = 7;
pub const FN_KEY_SCHEMES: [KeyCode; 8] = [
    keycode::DPAD_CENTER,
    keycode::AT,
    keycode::ALT_LEFT,
    keycode::ALT_RIGHT,
    keycode::VOLUME_UP,
    keycode::VOLUME_DOWN,
    keycode::CAMERA,
    keycode::NONE,
];
