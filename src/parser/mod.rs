//! Symbol parsing.
//!
//! This module handles:
//! - Splitting qualified symbols into module path, package and function
//! - Rewriting demangled Rust paths into qualified symbols

pub mod rust_symbol;
pub mod symbol;

// Re-export main functions
pub use rust_symbol::qualify;
pub use symbol::{func_name, pkg_name, pkg_path};
