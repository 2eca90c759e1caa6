use crate::prefs::SettingsSnapshot;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Notifications,
    ScreenReader,
    SpeakMenus,
    FontSize,
    Reset,
}

impl SettingsRow {
    pub fn label(self) -> &'static str {
        match self {
            SettingsRow::Notifications => "Ativar Notificações Push",
            SettingsRow::ScreenReader => "Modo Leitor de Tela (acessibilidade)",
            SettingsRow::SpeakMenus => "Falar os Menus",
            SettingsRow::FontSize => "Tamanho da Fonte",
            SettingsRow::Reset => "Redefinir Configurações Padrão",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub snapshot: SettingsSnapshot,
    pub focused: usize,
}

impl UiState for SettingsState {}

impl SettingsState {
    /// Visible rows; the menu-announcement toggle only exists while
    /// screen-reader mode is on.
    pub fn rows(&self) -> Vec<SettingsRow> {
        let mut rows = vec![SettingsRow::Notifications, SettingsRow::ScreenReader];
        if self.snapshot.screen_reader {
            rows.push(SettingsRow::SpeakMenus);
        }
        rows.push(SettingsRow::FontSize);
        rows.push(SettingsRow::Reset);
        rows
    }

    pub fn focused_row(&self) -> SettingsRow {
        let rows = self.rows();
        rows[self.focused.min(rows.len() - 1)]
    }
}
