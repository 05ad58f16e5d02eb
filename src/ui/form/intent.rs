use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Character typed into the focused field.
    Input(char),
    Backspace,
    NextField,
    PrevField,
    NextStatus,
    PrevStatus,
    /// Back to defaults; only sent after a successful create.
    Reset,
}

impl Intent for FormIntent {}
