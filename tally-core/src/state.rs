// Accumulator state for the input machine

use crate::compat::String;
use crate::value::LastResult;

/// How the next input event is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Empty,
    Number,
    Decimal,
    Operator,
    Evaluated,
}

// RUST CONCEPT: State as a plain record, replaced wholesale on every event
// Transitions build a fresh value from the previous one; nothing mutates a
// field in place, so a half-updated state is never observable.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// The full accumulated input, including `=result` once evaluated.
    pub expression: String,
    /// The display register: the operand being typed, the pending operator
    /// symbol, or the latest result.
    pub display: String,
    pub mode: InputMode,
    /// Whether the operand currently being typed already has a decimal point.
    pub decimal_added: bool,
    pub last_result: LastResult,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            display: String::from("0"),
            mode: InputMode::Empty,
            decimal_added: false,
            last_result: LastResult::None,
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
