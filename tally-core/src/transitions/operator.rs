// Operator entry and operator collision resolution

use crate::compat::{ToString, format};
use crate::state::{CalculatorState, InputMode};
use crate::tokenizer::{Operator, strip_trailing_run, trailing_run_len};

// Operator entry: ( state op -- state' )
// After an evaluation the stored result seeds a fresh trace as the left
// operand. When an operator is already pending, the collision resolves to
// either an appended negation marker or a replacement of the pending run.
pub fn operator_impl(state: &CalculatorState, op: Operator) -> CalculatorState {
    if state.mode != InputMode::Operator {
        let expression = if state.mode == InputMode::Evaluated {
            format!("{}{}", state.last_result, op)
        } else {
            format!("{}{}", state.expression, op)
        };
        return CalculatorState {
            expression,
            display: op.to_string(),
            mode: InputMode::Operator,
            decimal_added: false,
            last_result: state.last_result.clone(),
        };
    }

    // The trace is a bare operator: replace it outright
    if state.expression.len() == 1 {
        return CalculatorState {
            expression: op.to_string(),
            display: op.to_string(),
            mode: InputMode::Operator,
            decimal_added: state.decimal_added,
            last_result: state.last_result.clone(),
        };
    }

    // A single pending operator followed by '-' encodes a negative operand
    if op == Operator::Subtract && trailing_run_len(&state.expression) == 1 {
        return CalculatorState {
            expression: format!("{}{}", state.expression, op),
            display: op.to_string(),
            mode: InputMode::Operator,
            decimal_added: state.decimal_added,
            last_result: state.last_result.clone(),
        };
    }

    // Anything else replaces the whole pending run
    let stripped = strip_trailing_run(&state.expression);
    CalculatorState {
        expression: format!("{}{}", stripped, op),
        display: op.to_string(),
        mode: InputMode::Operator,
        decimal_added: state.decimal_added,
        last_result: state.last_result.clone(),
    }
}
