//! # Tally Core
//!
//! Input state machine and expression evaluator for a four-function
//! calculator.
//!
//! The engine has two halves:
//!
//! - The **input machine** consumes discrete events (digits, decimal point,
//!   operators, evaluate, clear) and accumulates an expression trace plus a
//!   display register.
//! - The **evaluator** reduces a finished trace in two left-to-right passes,
//!   multiplication and division before addition and subtraction. A trailing
//!   `-` inside an operator run negates the operand to its right.
//!
//! Hosts feed events in and render the expression/display pair back out.
//! The library performs no I/O and builds for `no_std` targets with `alloc`.
//!
//! ## Example
//!
//! ```
//! use tally_core::{Calculator, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.on_digit('2');
//! calc.on_operator(Operator::Add);
//! calc.on_digit('3');
//! calc.on_operator(Operator::Multiply);
//! calc.on_digit('4');
//! calc.on_evaluate();
//!
//! assert_eq!(calc.expression(), "2+3*4=14");
//! assert_eq!(calc.display(), "14");
//! ```

#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
extern crate alloc;

// Public modules
pub mod evaluator;
pub mod machine;
pub mod state;
pub mod tokenizer;
pub mod transitions;
pub mod value;

// Internal module
mod compat;

// Re-exports for convenience
pub use evaluator::evaluate;
pub use machine::{Calculator, InputEvent};
pub use state::{CalculatorState, InputMode};
pub use tokenizer::Operator;
pub use value::{EvalError, LastResult, format_number};
