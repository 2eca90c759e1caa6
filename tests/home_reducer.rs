use eternum::ui::home::{HomeIntent, HomeReducer, HomeState, SearchFocus, MENU_ITEMS};
use eternum::ui::mvi::Reducer;

fn reduce(state: HomeState, intent: HomeIntent) -> HomeState {
    HomeReducer::reduce(state, intent)
}

#[test]
fn menu_selection_wraps() {
    let state = HomeState::default();
    let state = reduce(state, HomeIntent::MenuUp);
    assert_eq!(state.menu_selected, MENU_ITEMS.len() - 1);
    let state = reduce(state, HomeIntent::MenuDown);
    assert_eq!(state.menu_selected, 0);
}

#[test]
fn open_search_focuses_the_name_field() {
    let state = reduce(HomeState::default(), HomeIntent::OpenSearch);
    assert!(state.searching);
    assert_eq!(state.focus, SearchFocus::Name);
}

#[test]
fn date_input_is_masked_as_typed() {
    let mut state = reduce(HomeState::default(), HomeIntent::OpenSearch);
    state = reduce(state, HomeIntent::FocusNext);
    assert_eq!(state.focus, SearchFocus::Date);

    for c in "15062020".chars() {
        state = reduce(state, HomeIntent::Input(c));
    }
    assert_eq!(state.date, "15/06/2020");

    state = reduce(state, HomeIntent::Backspace);
    assert_eq!(state.date, "15/06/202");
}

#[test]
fn typing_ignores_the_submit_row() {
    let mut state = reduce(HomeState::default(), HomeIntent::OpenSearch);
    state = reduce(state, HomeIntent::FocusNext);
    state = reduce(state, HomeIntent::FocusNext);
    assert_eq!(state.focus, SearchFocus::Submit);
    let state = reduce(state, HomeIntent::Input('x'));
    assert!(state.name.is_empty());
    assert!(state.date.is_empty());
}

#[test]
fn back_to_menu_clears_the_search() {
    let mut state = reduce(HomeState::default(), HomeIntent::OpenSearch);
    for c in "maria".chars() {
        state = reduce(state, HomeIntent::Input(c));
    }
    state = reduce(state, HomeIntent::BackToMenu);
    assert!(!state.searching);
    assert!(state.name.is_empty());
    assert!(state.date.is_empty());
    assert!(!state.loading);
}

#[test]
fn criteria_check_needs_name_or_date() {
    let mut state = reduce(HomeState::default(), HomeIntent::OpenSearch);
    assert!(!state.has_criteria());
    state = reduce(state, HomeIntent::Input('a'));
    assert!(state.has_criteria());
}

#[test]
fn returning_to_search_reopens_the_section() {
    let state = HomeState::returning_to_search();
    assert!(state.searching);
    assert!(state.name.is_empty());
}
