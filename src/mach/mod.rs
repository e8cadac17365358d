/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

*/

mod console;
mod eval;
mod program;
mod runtime;
mod statement;
mod var;

pub use console::Console;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::INVALID_NUMBER;
pub use runtime::PROMPT;
pub use var::Var;

#[cfg(test)]
mod tests;
