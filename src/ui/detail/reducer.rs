use crate::api::DeceasedRecord;
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::RecordLoaded(remote) => {
                let record = DeceasedRecord::unify(&state.params, Some(&remote));
                // A new identity re-arms the narration flag.
                let narrated_for = match &state.narrated_for {
                    Some(spoken) if *spoken == record.id => Some(spoken.clone()),
                    _ => None,
                };
                DetailState {
                    record: Some(record),
                    loading: false,
                    narrated_for,
                    ..state
                }
            }
            DetailIntent::LoadFailed => {
                let record = DeceasedRecord::unify(&state.params, None);
                DetailState {
                    record: Some(record),
                    loading: false,
                    ..state
                }
            }
            DetailIntent::VisitCounted(count) => DetailState {
                visit_count: Some(count),
                ..state
            },
            DetailIntent::Narrated(id) => DetailState {
                narrated_for: Some(id),
                ..state
            },
            DetailIntent::ScrollUp => DetailState {
                scroll: state.scroll.saturating_sub(1),
                ..state
            },
            DetailIntent::ScrollDown => DetailState {
                scroll: state.scroll.saturating_add(1),
                ..state
            },
        }
    }
}
