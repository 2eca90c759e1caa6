use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsIntent {
    MoveUp,
    MoveDown,
}

impl Intent for ResultsIntent {}
