use crate::error::SessionError;
use crate::export::ExportedReport;
use crate::lead_form::LeadForm;
use analytics::{render_text_report, share_summary, LeakageInsights, ProjectionEngine, ProjectionReport};
use chrono::{DateTime, Duration, Utc};
use configuration::{Config, LeadConfig};
use core_types::{CalculatorInputs, InputField};
use events::{LeadCapture, SharePayload};

/// Presentation settings a session needs besides the projection itself.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub report_filename: String,
    pub share_title: String,
    pub lead_reset_after: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            report_filename: config.report.filename.clone(),
            share_title: config.share.title.clone(),
            lead_reset_after: lead_reset_after(&config.lead),
        }
    }
}

/// Negative delays reset immediately; delays beyond what `Duration` can hold
/// fall back to the default.
fn lead_reset_after(lead: &LeadConfig) -> Duration {
    Duration::try_seconds(lead.reset_after_secs.max(0))
        .or_else(|| Duration::try_seconds(LeadConfig::default().reset_after_secs))
        .unwrap_or_default()
}

/// The state of one calculator session.
///
/// Owns the inputs, the latest projection snapshot and the lead form. The
/// inputs only change through `set_field` and `apply`, and both recompute the
/// snapshot immediately, so the snapshot always belongs to the latest inputs
/// that could be projected.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    engine: ProjectionEngine,
    settings: SessionSettings,
    inputs: CalculatorInputs,
    results: Option<ProjectionReport>,
    lead_form: LeadForm,
}

impl CalculatorSession {
    /// Starts a session seeded with `inputs` and computes the first snapshot.
    pub fn new(engine: ProjectionEngine, settings: SessionSettings, inputs: CalculatorInputs) -> Self {
        let mut session = Self {
            engine,
            settings,
            inputs: CalculatorInputs::default(),
            results: None,
            lead_form: LeadForm::default(),
        };
        session.apply(inputs);
        session
    }

    /// Starts a session from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, SessionError> {
        let engine = ProjectionEngine::new(config.assumptions.clone())?;
        Ok(Self::new(engine, SessionSettings::from(config), config.inputs.clone()))
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    /// The latest projection, or `None` if no inputs could be projected yet.
    pub fn results(&self) -> Option<&ProjectionReport> {
        self.results.as_ref()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    pub fn lead_form(&self) -> &LeadForm {
        &self.lead_form
    }

    /// Updates one field from raw user text and recomputes.
    ///
    /// Returns `true` if the snapshot was replaced.
    pub fn set_field(&mut self, field: InputField, raw: &str) -> bool {
        let mut inputs = self.inputs.clone();
        inputs.set_raw(field, raw);
        tracing::debug!(%field, value = %inputs.get(field), "Input changed.");
        self.apply(inputs)
    }

    /// Replaces all inputs and recomputes.
    ///
    /// If the engine declines to project (zero conversion or order value) the
    /// previous snapshot stays in place. Returns `true` if the snapshot was
    /// replaced.
    pub fn apply(&mut self, inputs: CalculatorInputs) -> bool {
        self.inputs = inputs.clamped();
        match self.engine.project(&self.inputs) {
            Some(report) => {
                self.results = Some(report);
                true
            }
            None => false,
        }
    }

    pub fn insights(&self) -> Option<LeakageInsights> {
        LeakageInsights::derive(&self.inputs, self.results.as_ref(), self.engine.assumptions())
    }

    /// Renders the downloadable text report for the current state.
    pub fn export_report(&self) -> Result<ExportedReport, SessionError> {
        let report = self.results.as_ref().ok_or(SessionError::NoProjection)?;
        Ok(ExportedReport {
            filename: self.settings.report_filename.clone(),
            contents: render_text_report(&self.inputs, report),
        })
    }

    /// Builds the payload for the share action.
    pub fn share_payload(&self) -> Result<SharePayload, SessionError> {
        let report = self.results.as_ref().ok_or(SessionError::NoProjection)?;
        Ok(SharePayload {
            title: self.settings.share_title.clone(),
            text: share_summary(report),
        })
    }

    pub fn toggle_lead_form(&mut self) {
        self.lead_form.toggle();
    }

    pub fn set_lead_email(&mut self, email: &str) {
        self.lead_form.set_email(email);
    }

    /// Submits the lead form and stages the lead for delivery.
    ///
    /// Only the email is required. A session that has not produced a
    /// projection yet stages the lead with `results: null`. Delivery itself
    /// happens outside the calculator; the staged payload is logged and the
    /// submission is acknowledged locally.
    pub fn submit_lead(&mut self, now: DateTime<Utc>) -> Result<LeadCapture, SessionError> {
        self.lead_form.submit(now)?;
        let results = self.results.clone();

        let lead = LeadCapture::new(self.lead_form.email(), results, now);
        tracing::info!(lead = %lead.to_json()?, "Lead captured.");
        Ok(lead)
    }

    /// Advances the lead form's clock. Returns `true` if the form was reset.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.lead_form.tick(now, self.settings.lead_reset_after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn default_session() -> CalculatorSession {
        CalculatorSession::new(
            ProjectionEngine::default(),
            SessionSettings::default(),
            CalculatorInputs::default(),
        )
    }

    #[test]
    fn new_session_has_a_projection_for_default_inputs() {
        let session = default_session();
        let results = session.results().unwrap();
        assert_eq!(results.total_monthly_impact, dec!(1125000));
    }

    #[test]
    fn editing_a_field_recomputes_the_snapshot() {
        let mut session = default_session();

        assert!(session.set_field(InputField::MonthlyVisitors, "20000"));

        let results = session.results().unwrap();
        assert_eq!(results.current_customers, dec!(400));
        assert_eq!(results.total_monthly_impact, dec!(2250000));
    }

    #[test]
    fn degenerate_edit_keeps_the_previous_snapshot() {
        let mut session = default_session();
        let before = session.results().cloned();

        assert!(!session.set_field(InputField::CurrentConversion, "0"));
        assert_eq!(session.results().cloned(), before);
        assert_eq!(session.inputs().current_conversion, Decimal::ZERO);

        assert!(!session.set_field(InputField::AvgOrderValue, "not a number"));
        assert_eq!(session.results().cloned(), before);
    }

    #[test]
    fn degenerate_fresh_session_has_no_snapshot() {
        let inputs = CalculatorInputs {
            current_conversion: Decimal::ZERO,
            ..CalculatorInputs::default()
        };
        let session =
            CalculatorSession::new(ProjectionEngine::default(), SessionSettings::default(), inputs);

        assert!(session.results().is_none());
        assert!(session.insights().is_none());
        assert!(matches!(session.export_report(), Err(SessionError::NoProjection)));
        assert!(matches!(session.share_payload(), Err(SessionError::NoProjection)));
    }

    #[test]
    fn export_uses_the_configured_filename() {
        let exported = default_session().export_report().unwrap();
        assert_eq!(exported.filename, "YUVA_ROI_Report.txt");
        assert!(exported.contents.contains("- Total Monthly Impact: ₹1,125,000"));
    }

    #[test]
    fn share_payload_carries_title_and_summary() {
        let payload = default_session().share_payload().unwrap();
        assert_eq!(payload.title, "Y.U.V.A. Revenue Impact Calculator");
        assert!(payload.text.contains("₹1,125,000 monthly"));
    }

    #[test]
    fn lead_submission_stages_the_current_snapshot() {
        let mut session = default_session();
        let now = Utc::now();

        session.toggle_lead_form();
        session.set_lead_email("founder@example.in");
        let lead = session.submit_lead(now).unwrap();

        assert_eq!(lead.email, "founder@example.in");
        assert_eq!(lead.results.as_ref(), session.results());
        assert!(session.lead_form().is_submitted());

        assert!(!session.tick(now + Duration::seconds(1)));
        assert!(session.tick(now + Duration::seconds(3)));
        assert!(!session.lead_form().is_visible());
        assert_eq!(session.lead_form().email(), "");
    }

    #[test]
    fn lead_is_captured_before_any_projection() {
        let inputs = CalculatorInputs {
            avg_order_value: Decimal::ZERO,
            ..CalculatorInputs::default()
        };
        let mut session =
            CalculatorSession::new(ProjectionEngine::default(), SessionSettings::default(), inputs);

        session.toggle_lead_form();
        session.set_lead_email("founder@example.in");
        let lead = session.submit_lead(Utc::now()).unwrap();

        assert_eq!(lead.results, None);
        assert!(session.lead_form().is_submitted());
        assert_eq!(session.lead_form().button_label(), "✓ Sent! Check your email");
    }

    #[test]
    fn lead_reset_delay_never_panics_on_extreme_config() {
        let mut config = Config::default();

        config.lead.reset_after_secs = i64::MAX;
        assert_eq!(SessionSettings::from(&config).lead_reset_after, Duration::seconds(3));

        config.lead.reset_after_secs = i64::MIN;
        assert_eq!(SessionSettings::from(&config).lead_reset_after, Duration::zero());
    }

    #[test]
    fn lead_submission_without_email_is_rejected() {
        let mut session = default_session();
        session.toggle_lead_form();

        assert!(matches!(
            session.submit_lead(Utc::now()),
            Err(SessionError::InvalidEmail(_))
        ));
        assert!(!session.lead_form().is_submitted());
    }

    #[test]
    fn session_from_config_uses_configured_inputs() {
        let mut config = Config::default();
        config.inputs.monthly_visitors = dec!(5000);
        config.report.filename = "impact.txt".to_string();

        let session = CalculatorSession::from_config(&config).unwrap();

        assert_eq!(session.results().unwrap().current_customers, dec!(100));
        assert_eq!(session.export_report().unwrap().filename, "impact.txt");
    }
}
