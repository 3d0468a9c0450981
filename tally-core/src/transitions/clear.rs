// Clear: unconditional reset to the initial state

use crate::state::CalculatorState;

pub fn clear_impl() -> CalculatorState {
    CalculatorState::new()
}
