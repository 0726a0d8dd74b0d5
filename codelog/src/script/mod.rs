//! The code-log scripting language.
//!
//! - [`stmt`]: flat, priority-ordered line classifier
//! - [`value`]: type inference and quote handling
//! - [`expand`]: `&[name.val]` / `&{name.type}` interpolation
//! - [`block`]: `if (name) is (value)` … `]` evaluation
//! - [`interp`]: the driver tying them together

pub mod block;
pub mod expand;
pub mod interp;
pub mod stmt;
pub mod value;

// Re-exports for convenience.
pub use interp::{Interpreter, Output};
pub use value::VarType;
