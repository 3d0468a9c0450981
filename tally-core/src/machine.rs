// The calculator input machine: event dispatch over pure transitions

use crate::state::CalculatorState;
use crate::tokenizer::Operator;
use crate::transitions::{clear, decimal, digit, evaluate, operator};

/// A discrete input event delivered by the host adapter.
///
/// The host translates physical input (buttons, key presses) into these
/// five shapes; the engine never sees raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// One of '0'..='9'.
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Evaluate,
    Clear,
}

/// The calculator engine. Owns the accumulator state and applies events
/// one at a time, each as a pure transition.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
        }
    }

    /// Apply one input event, replacing the state with the transition result.
    pub fn apply(&mut self, event: InputEvent) {
        self.state = match event {
            InputEvent::Digit(d) => digit::digit_impl(&self.state, d),
            InputEvent::DecimalPoint => decimal::decimal_impl(&self.state),
            InputEvent::Operator(op) => operator::operator_impl(&self.state, op),
            InputEvent::Evaluate => evaluate::evaluate_impl(&self.state),
            InputEvent::Clear => clear::clear_impl(),
        };
    }

    pub fn on_digit(&mut self, digit: char) {
        self.apply(InputEvent::Digit(digit));
    }

    pub fn on_decimal_point(&mut self) {
        self.apply(InputEvent::DecimalPoint);
    }

    pub fn on_operator(&mut self, op: Operator) {
        self.apply(InputEvent::Operator(op));
    }

    pub fn on_evaluate(&mut self) {
        self.apply(InputEvent::Evaluate);
    }

    pub fn on_clear(&mut self) {
        self.apply(InputEvent::Clear);
    }

    /// The accumulated expression trace, for the host's upper readout.
    pub fn expression(&self) -> &str {
        &self.state.expression
    }

    /// The display register, for the host's main readout.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }
}
