use crate::api::DeceasedFields;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    pub items: Vec<DeceasedFields>,
    pub selected: usize,
}

impl UiState for ResultsState {}

impl ResultsState {
    pub fn new(items: Vec<DeceasedFields>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn selected_item(&self) -> Option<&DeceasedFields> {
        self.items.get(self.selected)
    }
}
