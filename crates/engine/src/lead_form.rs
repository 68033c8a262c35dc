use crate::error::SessionError;
use chrono::{DateTime, Duration, Utc};

/// The lead-capture form: whether it is shown, what has been typed into it
/// and whether the last submission is still being acknowledged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    visible: bool,
    submitted: bool,
    email: String,
    submitted_at: Option<DateTime<Utc>>,
}

impl LeadForm {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Label of the submit button.
    pub fn button_label(&self) -> &'static str {
        if self.submitted {
            "✓ Sent! Check your email"
        } else {
            "Send Strategy Guide"
        }
    }

    /// Shows the form if hidden, hides it if shown.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.trim().to_string();
    }

    /// Marks the form as submitted. The email must be non-empty and look like
    /// an address; the form must be open.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if !self.visible {
            return Err(SessionError::LeadFormClosed);
        }
        if !is_plausible_email(&self.email) {
            return Err(SessionError::InvalidEmail(self.email.clone()));
        }
        self.submitted = true;
        self.submitted_at = Some(now);
        Ok(())
    }

    /// Resets the form once the acknowledgement has been shown for
    /// `reset_after`. Returns `true` if the form was reset.
    pub fn tick(&mut self, now: DateTime<Utc>, reset_after: Duration) -> bool {
        match self.submitted_at {
            Some(at) if now - at >= reset_after => {
                *self = LeadForm::default();
                true
            }
            _ => false,
        }
    }
}

/// `local@domain`, both parts non-empty, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_form(email: &str) -> LeadForm {
        let mut form = LeadForm::default();
        form.toggle();
        form.set_email(email);
        form
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut form = LeadForm::default();
        assert!(!form.is_visible());
        form.toggle();
        assert!(form.is_visible());
        form.toggle();
        assert!(!form.is_visible());
    }

    #[test]
    fn empty_or_malformed_email_is_rejected() {
        let now = Utc::now();
        for email in ["", "   ", "founder", "@example.in", "founder@", "a@b@c", "fo under@x.in"] {
            let mut form = open_form(email);
            assert!(
                matches!(form.submit(now), Err(SessionError::InvalidEmail(_))),
                "accepted {email:?}"
            );
            assert!(!form.is_submitted());
        }
    }

    #[test]
    fn closed_form_cannot_be_submitted() {
        let mut form = LeadForm::default();
        form.set_email("founder@example.in");
        assert!(matches!(form.submit(Utc::now()), Err(SessionError::LeadFormClosed)));
    }

    #[test]
    fn form_resets_after_the_acknowledgement_delay() {
        let now = Utc::now();
        let delay = Duration::seconds(3);
        let mut form = open_form("founder@example.in");

        form.submit(now).unwrap();
        assert!(form.is_submitted());
        assert_eq!(form.button_label(), "✓ Sent! Check your email");

        assert!(!form.tick(now + Duration::seconds(2), delay));
        assert!(form.is_visible());

        assert!(form.tick(now + Duration::seconds(3), delay));
        assert_eq!(form, LeadForm::default());
        assert_eq!(form.button_label(), "Send Strategy Guide");
    }

    #[test]
    fn tick_without_submission_does_nothing() {
        let mut form = open_form("founder@example.in");
        assert!(!form.tick(Utc::now(), Duration::seconds(3)));
        assert!(form.is_visible());
        assert_eq!(form.email(), "founder@example.in");
    }
}
