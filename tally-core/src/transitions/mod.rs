// Pure transition functions, one file per input event.
// Each takes the previous state by reference and returns the next state.

pub mod clear;
pub mod decimal;
pub mod digit;
pub mod evaluate;
pub mod operator;
