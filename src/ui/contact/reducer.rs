use crate::ui::contact::intent::ContactIntent;
use crate::ui::contact::state::{ContactState, CONTACT_ACTIONS};
use crate::ui::mvi::Reducer;

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactState;
    type Intent = ContactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = CONTACT_ACTIONS.len();
        match intent {
            ContactIntent::MoveUp => ContactState {
                selected: if state.selected == 0 {
                    len - 1
                } else {
                    state.selected - 1
                },
            },
            ContactIntent::MoveDown => ContactState {
                selected: (state.selected + 1) % len,
            },
        }
    }
}
