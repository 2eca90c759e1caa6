use crate::api::BurialEntry;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BurialState {
    pub localsep: String,
    pub entries: Option<Vec<BurialEntry>>,
    pub selected: usize,
    pub loading: bool,
}

impl UiState for BurialState {}

impl BurialState {
    pub fn new(localsep: String) -> Self {
        Self {
            localsep,
            loading: true,
            ..Self::default()
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn selected_entry(&self) -> Option<&BurialEntry> {
        self.entries.as_ref()?.get(self.selected)
    }
}
