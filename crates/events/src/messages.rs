use crate::error::EventsError;
use analytics::ProjectionReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the share action hands to the platform share capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

/// A staged lead: the visitor's email plus the projection they were looking
/// at when they asked for the strategy guide.
///
/// Serializes to `{ "email": ..., "results": {...} }`, the shape expected by
/// the external delivery integration. `results` is `null` when no projection
/// existed at submission. The capture time is kept locally only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadCapture {
    pub email: String,
    pub results: Option<ProjectionReport>,
    #[serde(skip)]
    pub captured_at: Option<DateTime<Utc>>,
}

impl LeadCapture {
    pub fn new(
        email: impl Into<String>,
        results: Option<ProjectionReport>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            results,
            captured_at: Some(captured_at),
        }
    }

    /// The JSON document handed to the delivery integration.
    pub fn to_json(&self) -> Result<String, EventsError> {
        Ok(serde_json::to_string(self)?)
    }
}
