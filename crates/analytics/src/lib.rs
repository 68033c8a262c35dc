//! # Y.U.V.A. Projection Engine
//!
//! This crate turns five business metrics into a revenue-impact projection
//! and renders it for display, export and sharing.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems.
//!   It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `ProjectionEngine` takes inputs and produces a
//!   complete `ProjectionReport` in one step. There is no incremental update, so a
//!   caller never sees a partially computed projection.
//! - **Display is separate:** the helpers in `format` and `render` only read a
//!   report; they never write back into one.
//!
//! ## Public API
//!
//! - `ProjectionEngine`: The main struct that contains the calculation logic.
//! - `ProjectionReport` / `PaybackPeriod`: The projection output.
//! - `LeakageInsights`: Youth-segment leakage against the benchmark.
//! - `format_currency`, `group_digits`, `render_text_report`, `share_summary`.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod format;
pub mod insights;
pub mod render;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ProjectionEngine;
pub use error::AnalyticsError;
pub use format::{format_currency, group_digits};
pub use insights::LeakageInsights;
pub use render::{render_text_report, share_summary};
pub use report::{PaybackPeriod, ProjectionReport, INFINITE_PAYBACK};
