// Decimal point entry

use crate::compat::{String, format};
use crate::state::{CalculatorState, InputMode};

// Decimal point: ( state -- state' )
// At most one decimal point per operand; a point on an empty trace seeds "0."
pub fn decimal_impl(state: &CalculatorState) -> CalculatorState {
    if state.decimal_added {
        return state.clone();
    }

    let expression = if state.expression.is_empty() {
        String::from("0.")
    } else {
        format!("{}.", state.expression)
    };

    CalculatorState {
        expression,
        display: format!("{}.", state.display),
        mode: InputMode::Decimal,
        decimal_added: true,
        last_result: state.last_result.clone(),
    }
}
