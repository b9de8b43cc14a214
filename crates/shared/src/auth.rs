//! Bearer token claims and the authorized-user gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims identifying a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (caller email).
    pub sub: String,
    /// Display name, if the identity provider supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a caller.
    #[must_use]
    pub fn new(email: &str, name: Option<&str>, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: email.to_string(),
            name: name.map(String::from),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the caller email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.sub
    }
}

/// Decides whether an authenticated caller may use the ledger.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    authorized: Vec<String>,
}

impl AccessGate {
    /// Creates a gate from the configured email list.
    ///
    /// Entries are trimmed and blank entries dropped.
    #[must_use]
    pub fn new<I, S>(authorized_users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let authorized = authorized_users
            .into_iter()
            .map(|email| email.as_ref().trim().to_string())
            .filter(|email| !email.is_empty())
            .collect();
        Self { authorized }
    }

    /// Returns true if `email` is on the authorized list.
    #[must_use]
    pub fn is_authorized(&self, email: &str) -> bool {
        let email = email.trim();
        !email.is_empty() && self.authorized.iter().any(|allowed| allowed == email)
    }

    /// Returns true if the claims belong to an authorized caller.
    #[must_use]
    pub fn admits(&self, claims: &Claims) -> bool {
        self.is_authorized(claims.email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_claims_new_sets_correct_fields() {
        let expires_at = Utc::now() + Duration::hours(1);
        let claims = Claims::new("manuel@example.com", Some("Manuel"), expires_at);

        assert_eq!(claims.email(), "manuel@example.com");
        assert_eq!(claims.name.as_deref(), Some("Manuel"));
        assert!(claims.iat <= Utc::now().timestamp());
        assert_eq!(claims.exp, expires_at.timestamp());
    }

    #[test]
    fn test_gate_trims_configured_entries() {
        let gate = AccessGate::new([" manuel@example.com ", "", "pablo@example.com"]);

        assert!(gate.is_authorized("manuel@example.com"));
        assert!(gate.is_authorized("pablo@example.com"));
        assert!(!gate.is_authorized("intruder@example.com"));
        assert!(!gate.is_authorized(""));
    }

    #[test]
    fn test_gate_is_exact_match() {
        let gate = AccessGate::new(["manuel@example.com"]);
        assert!(!gate.is_authorized("Manuel@example.com"));
        assert!(!gate.is_authorized("manuel@example"));
    }

    #[test]
    fn test_empty_gate_admits_nobody() {
        let gate = AccessGate::default();
        let claims = Claims::new("manuel@example.com", None, Utc::now() + Duration::hours(1));
        assert!(!gate.admits(&claims));
    }
}
