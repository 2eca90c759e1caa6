use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum HomeIntent {
    MenuUp,
    MenuDown,
    /// The "Memorial" menu entry opens the search section in place.
    OpenSearch,
    /// "Voltar ao Menu": close the search section and clear it.
    BackToMenu,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    SearchStarted,
    SearchSettled,
}

impl Intent for HomeIntent {}
