//! Named routes and their parameter bags.

use crate::api::DeceasedFields;

/// Where navigation can land, with the parameter bag each screen
/// expects to receive.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home { voltar_para_busca: bool },
    Results { items: Vec<DeceasedFields> },
    Detail { params: DeceasedFields },
    Burial { localsep: String },
    Contact,
    Lgpd,
    Settings,
}

/// A navigation request against the screen stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Nav {
    Push(Route),
    Replace(Route),
    Back,
    /// "Voltar ao Menu": unwind everything back to the home screen.
    PopToRoot,
}

/// Screen identity, used to route asynchronous results to the screen
/// that asked for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Home,
    Results,
    Detail,
    Burial,
    Contact,
    Lgpd,
    Settings,
}
