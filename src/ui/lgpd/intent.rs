use crate::api::Address;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LgpdIntent {
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    ToggleAceite,
    /// App layer acknowledged `cep_lookup` and fired the request.
    CepLookupStarted,
    CepResolved(Option<Address>),
}

impl Intent for LgpdIntent {}
