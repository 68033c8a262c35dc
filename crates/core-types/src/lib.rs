//! # Y.U.V.A. Core Types
//!
//! The shared vocabulary of the calculator: the five user-editable inputs, the
//! field identifiers used to edit them one at a time, and the improvement
//! assumptions the projection is built on.
//!
//! As a Layer 0 crate it has no knowledge of the engine, the configuration
//! loader or the shell.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::InputField;
pub use error::CoreError;
pub use structs::{coerce_amount, Assumptions, CalculatorInputs};
