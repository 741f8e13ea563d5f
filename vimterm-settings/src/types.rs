//! Enumerated settings: action bar visibility and back-key behaviour.
//!
//! Both are persisted as their ordinal, so variant order is part of the
//! stored format.

use serde::{Deserialize, Serialize};

// ============================================================================
// Action Bar
// ============================================================================

/// Action bar visibility mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionBarMode {
    /// Never shown
    None = 0,
    /// Always shown
    #[default]
    AlwaysVisible = 1,
    /// Shown on demand, hides again afterwards
    Hides = 2,
}

impl ActionBarMode {
    /// Highest valid ordinal.
    pub const MAX: i32 = ActionBarMode::Hides as i32;

    /// Map an ordinal to a mode, snapping out-of-range values to the nearest bound.
    pub fn from_ordinal(value: i32) -> Self {
        match value {
            i32::MIN..=0 => ActionBarMode::None,
            1 => ActionBarMode::AlwaysVisible,
            _ => ActionBarMode::Hides,
        }
    }

    pub fn ordinal(self) -> i32 {
        self as i32
    }
}

// ============================================================================
// Back Key
// ============================================================================

/// What the hardware back key does.
///
/// Variants that send a character to the terminal sort after
/// [`BackKeyAction::SendsEsc`]; [`BackKeyAction::sends_character`] relies on
/// that ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum BackKeyAction {
    StopsService = 0,
    ClosesWindow = 1,
    #[default]
    ClosesActivity = 2,
    SendsEsc = 3,
    SendsTab = 4,
}

impl BackKeyAction {
    /// Highest valid ordinal.
    pub const MAX: i32 = BackKeyAction::SendsTab as i32;

    /// Map an ordinal to an action, snapping out-of-range values to the nearest bound.
    pub fn from_ordinal(value: i32) -> Self {
        match value {
            i32::MIN..=0 => BackKeyAction::StopsService,
            1 => BackKeyAction::ClosesWindow,
            2 => BackKeyAction::ClosesActivity,
            3 => BackKeyAction::SendsEsc,
            _ => BackKeyAction::SendsTab,
        }
    }

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// True for every action at or after `SendsEsc`.
    pub fn sends_character(self) -> bool {
        self >= BackKeyAction::SendsEsc
    }

    /// Character code sent to the terminal, or 0 when the key is not a character key.
    pub fn character(self) -> u8 {
        match self {
            BackKeyAction::SendsEsc => 27,
            BackKeyAction::SendsTab => 9,
            _ => 0,
        }
    }

    /// All actions in ordinal order
    pub fn all() -> &'static [BackKeyAction] {
        &[
            BackKeyAction::StopsService,
            BackKeyAction::ClosesWindow,
            BackKeyAction::ClosesActivity,
            BackKeyAction::SendsEsc,
            BackKeyAction::SendsTab,
        ]
    }
}
