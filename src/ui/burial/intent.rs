use crate::api::BurialEntry;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum BurialIntent {
    Loaded(Vec<BurialEntry>),
    LoadFailed,
    MoveUp,
    MoveDown,
}

impl Intent for BurialIntent {}
