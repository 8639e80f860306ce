use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum HomeIntent {
    MoveSelection { delta: i8 },
}

impl Intent for HomeIntent {}
