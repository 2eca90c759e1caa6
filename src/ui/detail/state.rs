use crate::api::{DeceasedFields, DeceasedRecord};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    /// Navigation params; gaps are filled once the fetch lands.
    pub params: DeceasedFields,
    pub record: Option<DeceasedRecord>,
    pub loading: bool,
    pub visit_count: Option<u64>,
    /// Id the biography was already narrated for. One narration per
    /// identity; a different id re-arms it.
    pub narrated_for: Option<String>,
    pub scroll: u16,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn new(params: DeceasedFields) -> Self {
        Self {
            params,
            loading: true,
            ..Self::default()
        }
    }

    pub fn record_id(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.id.as_str())
    }

    /// True when the loaded record has not been narrated yet.
    pub fn should_narrate(&self) -> bool {
        match (&self.record, &self.narrated_for) {
            (Some(record), Some(spoken)) => &record.id != spoken,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
