use crate::prefs::SettingsSnapshot;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsIntent {
    Loaded(SettingsSnapshot),
    MoveUp,
    MoveDown,
    /// Flip the focused toggle row.
    Toggle,
    FontIncrease,
    FontDecrease,
    Reset,
}

impl Intent for SettingsIntent {}
