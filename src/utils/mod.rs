//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Checks on URLs submitted for shortening

pub mod code_generator;
pub mod url_validator;
