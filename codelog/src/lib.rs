//! Interpreter for code-log (`.prc`) scripts.
//!
//! A code-log script is a flat sequence of lines:
//!
//! | Line                     | Effect                                        |
//! |--------------------------|-----------------------------------------------|
//! | `set <name> <value>`     | store a variable, inferring `int` or `str`    |
//! | `log <message>`          | print the message with variables substituted  |
//! | `if (<name>) is (<val>)` | open a conditional block                      |
//! | `]`                      | close the block and evaluate its condition    |
//!
//! # Quick start
//!
//! ```rust
//! use codelog::script::Interpreter;
//! use codelog::clock::FixedClock;
//!
//! let clock = FixedClock::new("12:00:00");
//! let mut interp = Interpreter::new(&clock);
//! interp.run_str("set x \"hi\"\nlog &[x.val] is &{x.type}").unwrap();
//! assert_eq!(interp.plain_output(), vec!["hi is <str>"]);
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod script;
pub mod terminal;
pub mod var;
