use crate::telemetry::DraftField;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;
use crate::ui::mvi::Reducer;

/// Longest vehicle id accepted from the keyboard.
pub const MAX_ID_LEN: usize = 32;
/// Longest numeric entry accepted from the keyboard.
pub const MAX_NUMBER_LEN: usize = 16;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let FormState { mut draft, focused } = state;
        match intent {
            FormIntent::Input(ch) => {
                let numeric = focused.is_numeric();
                if let Some(text) = draft.text_mut(focused) {
                    if numeric {
                        push_numeric(text, ch);
                    } else if !ch.is_control() && text.chars().count() < MAX_ID_LEN {
                        text.push(ch);
                    }
                }
                FormState { draft, focused }
            }
            FormIntent::Backspace => {
                if let Some(text) = draft.text_mut(focused) {
                    text.pop();
                }
                FormState { draft, focused }
            }
            FormIntent::NextField => FormState {
                draft,
                focused: focused.next(),
            },
            FormIntent::PrevField => FormState {
                draft,
                focused: focused.prev(),
            },
            FormIntent::NextStatus | FormIntent::PrevStatus if focused != DraftField::Status => {
                FormState { draft, focused }
            }
            FormIntent::NextStatus => {
                draft.status = draft.status.next();
                FormState { draft, focused }
            }
            FormIntent::PrevStatus => {
                draft.status = draft.status.prev();
                FormState { draft, focused }
            }
            FormIntent::Reset => FormState::default(),
        }
    }
}

/// Numeric fields take digits, one decimal point and a leading minus. A lone
/// "0" (the initial value) is replaced by the first digit typed.
fn push_numeric(text: &mut String, ch: char) {
    if text.len() >= MAX_NUMBER_LEN {
        return;
    }
    match ch {
        '0'..='9' => {
            if text.as_str() == "0" {
                text.clear();
            }
            text.push(ch);
        }
        '.' if !text.contains('.') => text.push(ch),
        '-' if text.is_empty() || text.as_str() == "0" => {
            text.clear();
            text.push(ch);
        }
        _ => {}
    }
}
