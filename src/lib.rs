//! # Line BASIC
//!
//! A small line-numbered BASIC with integer variables.
//!
//! Lines typed with a number are stored as the program. Lines typed
//! without one run immediately. `RUN` starts the stored program and
//! `GOTO` or `IF ... THEN` move it around.
//! ```text
//! 10 LET X = 5
//! 20 PRINT X
//! 30 END
//! RUN
//! 5
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
