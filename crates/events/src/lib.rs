//! # Y.U.V.A. Hand-off Payloads
//!
//! This crate defines the payloads the calculator hands to systems outside
//! of it: the share summary and the captured lead.

// Declare the modules that make up this crate.
pub mod error;
pub mod messages;

// Re-export the core types to provide a clean public API.
pub use error::EventsError;
pub use messages::{LeadCapture, SharePayload};
