use crate::api::DeceasedFields;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailIntent {
    /// Remote record arrived; unify it with the params.
    RecordLoaded(DeceasedFields),
    /// The fetch failed; fall back to params alone.
    LoadFailed,
    VisitCounted(u64),
    /// Biography narration started for the given id.
    Narrated(String),
    ScrollUp,
    ScrollDown,
}

impl Intent for DetailIntent {}
