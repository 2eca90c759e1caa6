use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    Lgpd,
    Email,
    WhatsApp,
    BackToMenu,
}

pub const CONTACT_ACTIONS: [(ContactAction, &str); 4] = [
    (ContactAction::Lgpd, "Autorização LGPD"),
    (ContactAction::Email, "E-mail"),
    (ContactAction::WhatsApp, "WhatsApp"),
    (ContactAction::BackToMenu, "Voltar ao Menu"),
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactState {
    pub selected: usize,
}

impl UiState for ContactState {}

impl ContactState {
    pub fn selected_action(&self) -> ContactAction {
        CONTACT_ACTIONS[self.selected % CONTACT_ACTIONS.len()].0
    }
}
