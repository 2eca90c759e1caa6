use crate::textfmt::mask_date_input;
use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::{HomeState, SearchFocus, MENU_ITEMS};
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::MenuUp => {
                if state.searching {
                    return state;
                }
                let selected = if state.menu_selected == 0 {
                    MENU_ITEMS.len() - 1
                } else {
                    state.menu_selected - 1
                };
                HomeState {
                    menu_selected: selected,
                    ..state
                }
            }
            HomeIntent::MenuDown => {
                if state.searching {
                    return state;
                }
                let selected = (state.menu_selected + 1) % MENU_ITEMS.len();
                HomeState {
                    menu_selected: selected,
                    ..state
                }
            }
            HomeIntent::OpenSearch => HomeState {
                searching: true,
                focus: SearchFocus::Name,
                ..state
            },
            HomeIntent::BackToMenu => HomeState {
                menu_selected: state.menu_selected,
                ..HomeState::default()
            },
            HomeIntent::FocusNext => HomeState {
                focus: match state.focus {
                    SearchFocus::Name => SearchFocus::Date,
                    SearchFocus::Date => SearchFocus::Submit,
                    SearchFocus::Submit => SearchFocus::Name,
                },
                ..state
            },
            HomeIntent::FocusPrev => HomeState {
                focus: match state.focus {
                    SearchFocus::Name => SearchFocus::Submit,
                    SearchFocus::Date => SearchFocus::Name,
                    SearchFocus::Submit => SearchFocus::Date,
                },
                ..state
            },
            HomeIntent::Input(c) => match state.focus {
                SearchFocus::Name => {
                    let mut name = state.name.clone();
                    name.push(c);
                    HomeState { name, ..state }
                }
                SearchFocus::Date => {
                    let mut raw = state.date.clone();
                    raw.push(c);
                    HomeState {
                        date: mask_date_input(&raw),
                        ..state
                    }
                }
                SearchFocus::Submit => state,
            },
            HomeIntent::Backspace => match state.focus {
                SearchFocus::Name => {
                    let mut name = state.name.clone();
                    name.pop();
                    HomeState { name, ..state }
                }
                SearchFocus::Date => {
                    let digits: String = state
                        .date
                        .chars()
                        .filter(|c| c.is_ascii_digit())
                        .collect();
                    let mut digits = digits;
                    digits.pop();
                    HomeState {
                        date: mask_date_input(&digits),
                        ..state
                    }
                }
                SearchFocus::Submit => state,
            },
            HomeIntent::SearchStarted => HomeState {
                loading: true,
                ..state
            },
            HomeIntent::SearchSettled => HomeState {
                loading: false,
                ..state
            },
        }
    }
}
