use eternum::prefs::SettingsSnapshot;
use eternum::ui::mvi::Reducer;
use eternum::ui::settings::{SettingsIntent, SettingsReducer, SettingsRow, SettingsState};

fn reduce(state: SettingsState, intent: SettingsIntent) -> SettingsState {
    SettingsReducer::reduce(state, intent)
}

fn loaded(screen_reader: bool, speak_menus: bool) -> SettingsState {
    reduce(
        SettingsState::default(),
        SettingsIntent::Loaded(SettingsSnapshot {
            screen_reader,
            speak_menus,
            ..SettingsSnapshot::default()
        }),
    )
}

#[test]
fn menu_toggle_row_only_exists_with_the_reader_on() {
    let state = loaded(false, false);
    assert!(!state.rows().contains(&SettingsRow::SpeakMenus));

    let state = loaded(true, false);
    assert!(state.rows().contains(&SettingsRow::SpeakMenus));
}

#[test]
fn disabling_the_reader_also_disables_menu_announcements() {
    let mut state = loaded(true, true);
    // Focus the screen-reader row (second).
    state = reduce(state, SettingsIntent::MoveDown);
    assert_eq!(state.focused_row(), SettingsRow::ScreenReader);

    let state = reduce(state, SettingsIntent::Toggle);
    assert!(!state.snapshot.screen_reader);
    assert!(!state.snapshot.speak_menus);
    assert!(!state.rows().contains(&SettingsRow::SpeakMenus));
}

#[test]
fn focus_wraps_over_the_visible_rows() {
    let mut state = loaded(true, false);
    // Walk to the last row while the menu row is visible.
    for _ in 0..state.rows().len() - 1 {
        state = reduce(state, SettingsIntent::MoveDown);
    }
    assert_eq!(state.focused_row(), SettingsRow::Reset);
    let state = reduce(state, SettingsIntent::MoveDown);
    assert_eq!(state.focused_row(), SettingsRow::Notifications);

    let state = reduce(state, SettingsIntent::MoveUp);
    assert_eq!(state.focused_row(), SettingsRow::Reset);
}

#[test]
fn font_size_moves_in_steps_of_two() {
    let state = loaded(false, false);
    let state = reduce(state, SettingsIntent::FontIncrease);
    assert_eq!(state.snapshot.font_size, 18);
    let state = reduce(state, SettingsIntent::FontDecrease);
    let state = reduce(state, SettingsIntent::FontDecrease);
    assert_eq!(state.snapshot.font_size, 14);
}

#[test]
fn reset_returns_every_setting_to_default() {
    let mut state = loaded(true, true);
    state.snapshot.notifications = true;
    state.snapshot.font_size = 24;

    let state = reduce(state, SettingsIntent::Reset);
    assert_eq!(state.snapshot, SettingsSnapshot::default());
    assert!(!state.snapshot.screen_reader);
    assert_eq!(state.snapshot.font_size, 16);
    assert!(state.snapshot.audio);
}

#[test]
fn toggle_on_the_font_row_changes_nothing() {
    let mut state = loaded(false, false);
    // Notifications, ScreenReader, FontSize.
    state = reduce(state, SettingsIntent::MoveDown);
    state = reduce(state, SettingsIntent::MoveDown);
    assert_eq!(state.focused_row(), SettingsRow::FontSize);
    let before = state.clone();
    let state = reduce(state, SettingsIntent::Toggle);
    assert_eq!(state, before);
}
