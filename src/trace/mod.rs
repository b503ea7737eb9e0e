//! Captured frames and stack traces.
//!
//! - `RawFrame`: record handed over by the stack walker
//! - `Frame`: immutable wrapper deriving function and package names
//! - `StackTrace`: frames in capture order, innermost first

pub mod frame;
pub mod stack;

// Re-export main types
pub use frame::{Frame, RawFrame};
pub use stack::StackTrace;
