//! # Y.U.V.A. Calculator Session
//!
//! The state behind the calculator form. A `CalculatorSession` owns the
//! inputs, the latest projection snapshot and the lead-capture form, and
//! exposes the three user actions: export, share and lead capture.

pub mod error;
pub mod export;
pub mod lead_form;
pub mod session;

pub use error::SessionError;
pub use export::ExportedReport;
pub use lead_form::LeadForm;
pub use session::{CalculatorSession, SessionSettings};
