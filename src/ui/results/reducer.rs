use crate::ui::mvi::Reducer;
use crate::ui::results::intent::ResultsIntent;
use crate::ui::results::state::ResultsState;

pub struct ResultsReducer;

impl Reducer for ResultsReducer {
    type State = ResultsState;
    type Intent = ResultsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.items.is_empty() {
            return state;
        }
        match intent {
            ResultsIntent::MoveUp => {
                let selected = if state.selected == 0 {
                    state.items.len() - 1
                } else {
                    state.selected - 1
                };
                ResultsState { selected, ..state }
            }
            ResultsIntent::MoveDown => {
                let selected = (state.selected + 1) % state.items.len();
                ResultsState { selected, ..state }
            }
        }
    }
}
