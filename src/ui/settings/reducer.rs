use crate::prefs::{SettingsSnapshot, DEFAULT_FONT_SIZE};
use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{SettingsRow, SettingsState};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Loaded(snapshot) => SettingsState {
                snapshot,
                focused: 0,
            },
            SettingsIntent::MoveUp => {
                let len = state.rows().len();
                SettingsState {
                    focused: if state.focused == 0 {
                        len - 1
                    } else {
                        state.focused - 1
                    },
                    ..state
                }
            }
            SettingsIntent::MoveDown => {
                let len = state.rows().len();
                SettingsState {
                    focused: (state.focused + 1) % len,
                    ..state
                }
            }
            SettingsIntent::Toggle => {
                let mut snapshot = state.snapshot.clone();
                match state.focused_row() {
                    SettingsRow::Notifications => snapshot.notifications = !snapshot.notifications,
                    SettingsRow::ScreenReader => {
                        snapshot.screen_reader = !snapshot.screen_reader;
                        // Turning the reader off also turns off the
                        // menu announcements.
                        if !snapshot.screen_reader {
                            snapshot.speak_menus = false;
                        }
                    }
                    SettingsRow::SpeakMenus => snapshot.speak_menus = !snapshot.speak_menus,
                    SettingsRow::FontSize | SettingsRow::Reset => return state,
                }
                clamped(snapshot, state.focused)
            }
            SettingsIntent::FontIncrease => {
                let mut snapshot = state.snapshot.clone();
                snapshot.font_size = snapshot.font_size.saturating_add(2);
                SettingsState { snapshot, ..state }
            }
            SettingsIntent::FontDecrease => {
                let mut snapshot = state.snapshot.clone();
                snapshot.font_size = snapshot.font_size.saturating_sub(2).max(2);
                SettingsState { snapshot, ..state }
            }
            SettingsIntent::Reset => clamped(
                SettingsSnapshot {
                    font_size: DEFAULT_FONT_SIZE,
                    ..SettingsSnapshot::default()
                },
                state.focused,
            ),
        }
    }
}

/// Row visibility can shrink when a toggle flips; keep focus in range.
fn clamped(snapshot: SettingsSnapshot, focused: usize) -> SettingsState {
    let state = SettingsState {
        snapshot,
        focused: 0,
    };
    let len = state.rows().len();
    SettingsState {
        focused: focused.min(len - 1),
        ..state
    }
}
