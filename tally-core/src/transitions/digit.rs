// Digit entry

use crate::compat::{String, format};
use crate::state::{CalculatorState, InputMode};

// Digit entry: ( state digit -- state' )
// The caller guarantees `digit` is one of '0'..='9'.
pub fn digit_impl(state: &CalculatorState, digit: char) -> CalculatorState {
    // Never stack a second leading zero in the display register
    if !state.expression.is_empty() && state.display == "0" && digit == '0' {
        return state.clone();
    }

    match state.mode {
        // Start a fresh operand and a fresh trace
        InputMode::Empty | InputMode::Evaluated => CalculatorState {
            expression: String::from(digit),
            display: String::from(digit),
            mode: InputMode::Number,
            decimal_added: state.decimal_added,
            last_result: state.last_result.clone(),
        },
        // Extend the operand being typed
        InputMode::Number | InputMode::Decimal => CalculatorState {
            expression: format!("{}{}", state.expression, digit),
            display: format!("{}{}", state.display, digit),
            mode: InputMode::Number,
            decimal_added: state.decimal_added,
            last_result: state.last_result.clone(),
        },
        // A pending operator closed the previous operand; this digit opens
        // the next one, so the display restarts while the trace extends
        InputMode::Operator => CalculatorState {
            expression: format!("{}{}", state.expression, digit),
            display: String::from(digit),
            mode: InputMode::Number,
            decimal_added: state.decimal_added,
            last_result: state.last_result.clone(),
        },
    }
}
