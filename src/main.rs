//! # BASIC
//!
//! A line-numbered BASIC for the terminal.
//!

mod term;

fn main() {
    term::main()
}
