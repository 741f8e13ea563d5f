//! Settings layer for the vimterm terminal emulator.
//!
//! Reads persisted key/value preferences, applies validated defaults and
//! exposes typed accessors to the rest of the application:
//!
//! - Compiled-in defaults and a YAML defaults file ([`ResourceDefaults`])
//! - Preference sources: in-memory and YAML-file backed
//! - The validated [`Settings`] snapshot with derived lookups
//! - Color and modifier-key scheme tables
//! - Preference file watching for live reload

pub mod defaults;
pub mod error;
pub mod keys;
pub mod resources;
pub mod schemes;
pub mod settings;
pub mod source;
pub mod types;
#[cfg(feature = "watcher")]
pub mod watcher;

pub use error::SettingsError;
pub use resources::ResourceDefaults;
pub use schemes::{COLOR_SCHEMES, CONTROL_KEY_SCHEMES, ColorScheme, FN_KEY_SCHEMES, KeyCode};
pub use settings::{Settings, parse_or_default};
pub use source::{MemoryPreferences, PrefValue, PreferenceFile, PreferenceSource};
pub use types::{ActionBarMode, BackKeyAction};
#[cfg(feature = "watcher")]
pub use watcher::{PreferenceChangeEvent, PreferenceWatcher};
