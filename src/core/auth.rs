//! core/auth.rs
//! Login: credential shape check + the stubbed authentication round-trip.
//!
//! `DemoAuthenticator::sign_in` waits a fixed delay and then always succeeds.
//! `AuthError` is part of the signature so the GUI keeps a failure branch,
//! but nothing here produces it.

use std::time::Duration;

use crate::core::session::UserSession;
use crate::error::AuthError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Which required field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Email,
    Password,
}

impl MissingField {
    pub fn prompt(self) -> &'static str {
        match self {
            MissingField::Email => "Please enter your email.",
            MissingField::Password => "Please enter your password.",
        }
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Presence check only. No format rules.
    pub fn check_required(&self) -> Result<(), MissingField> {
        if self.email.trim().is_empty() {
            return Err(MissingField::Email);
        }
        if self.password.is_empty() {
            return Err(MissingField::Password);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    delay: Duration,
}

impl DemoAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn sign_in(&self, credentials: Credentials) -> Result<UserSession, AuthError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "simulating sign-in");
        tokio::time::sleep(self.delay).await;
        Ok(UserSession::demo_for_email(&credentials.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_are_checked_in_order() {
        assert_eq!(
            Credentials::new("", "").check_required(),
            Err(MissingField::Email)
        );
        assert_eq!(
            Credentials::new("   ", "pw").check_required(),
            Err(MissingField::Email)
        );
        assert_eq!(
            Credentials::new("kid@school.org", "").check_required(),
            Err(MissingField::Password)
        );
        assert_eq!(Credentials::new("a", "b").check_required(), Ok(()));
    }

    #[test]
    fn no_format_validation_beyond_presence() {
        assert!(Credentials::new("not-an-email", "1").check_required().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn sign_in_waits_then_returns_authenticated_demo_session() {
        let auth = DemoAuthenticator::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        let session = auth
            .sign_in(Credentials::new("mia@school.org", "secret"))
            .await
            .expect("demo sign-in always succeeds");

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(session.is_authenticated);
        assert_eq!(session.nickname, "Mia");
    }
}
