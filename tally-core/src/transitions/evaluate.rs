// Evaluation: freeze the trace, reduce it, record the result

use crate::compat::{String, format};
use crate::evaluator;
use crate::state::{CalculatorState, InputMode};
use crate::tokenizer::is_operator_char;
use crate::value::{LastResult, format_number};

// Evaluate: ( state -- state' )
// Idempotent once evaluated. An empty trace, a trace of nothing but
// operator characters, or a sticky prior error all land on the NAN path;
// everything else runs the reducer.
pub fn evaluate_impl(state: &CalculatorState) -> CalculatorState {
    if state.mode == InputMode::Evaluated {
        return state.clone();
    }

    let trace = &state.expression;
    let only_operators = !trace.is_empty() && trace.chars().all(is_operator_char);
    if trace.is_empty() || only_operators || state.last_result.is_undefined() {
        return undefined_state(state);
    }

    match evaluator::evaluate(trace) {
        Ok(n) if n.is_finite() => {
            let formatted = format_number(n);
            CalculatorState {
                expression: format!("{}={}", trace, formatted),
                display: formatted.clone(),
                mode: InputMode::Evaluated,
                decimal_added: state.decimal_added,
                last_result: LastResult::Number(formatted),
            }
        }
        // NaN results and operand-free traces both surface as the sentinel
        _ => undefined_state(state),
    }
}

fn undefined_state(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        expression: format!("{}=NAN", state.expression),
        display: String::from("NAN"),
        mode: InputMode::Evaluated,
        decimal_added: state.decimal_added,
        last_result: LastResult::Undefined,
    }
}
