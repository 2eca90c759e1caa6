use crate::ui::mvi::UiState;

/// Menu order is fixed; the narration announces it in this order too.
pub const MENU_ITEMS: [&str; 3] = ["Memorial", "Contato", "Configurações"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Name,
    Date,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    /// False: the menu; true: the search section.
    pub searching: bool,
    pub menu_selected: usize,
    pub focus: SearchFocus,
    pub name: String,
    pub date: String,
    pub loading: bool,
}

impl UiState for HomeState {}

impl HomeState {
    pub fn returning_to_search() -> Self {
        Self {
            searching: true,
            ..Self::default()
        }
    }

    /// The search needs at least one of the two criteria.
    pub fn has_criteria(&self) -> bool {
        !self.name.trim().is_empty() || !self.date.trim().is_empty()
    }
}
