use crate::ui::burial::intent::BurialIntent;
use crate::ui::burial::state::BurialState;
use crate::ui::mvi::Reducer;

pub struct BurialReducer;

impl Reducer for BurialReducer {
    type State = BurialState;
    type Intent = BurialIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BurialIntent::Loaded(entries) => BurialState {
                entries: Some(entries),
                selected: 0,
                loading: false,
                ..state
            },
            BurialIntent::LoadFailed => BurialState {
                entries: Some(Vec::new()),
                loading: false,
                ..state
            },
            BurialIntent::MoveUp => {
                let count = state.entry_count();
                if count == 0 {
                    return state;
                }
                let selected = if state.selected == 0 {
                    count - 1
                } else {
                    state.selected - 1
                };
                BurialState { selected, ..state }
            }
            BurialIntent::MoveDown => {
                let count = state.entry_count();
                if count == 0 {
                    return state;
                }
                BurialState {
                    selected: (state.selected + 1) % count,
                    ..state
                }
            }
        }
    }
}
