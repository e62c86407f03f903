use serde::{Deserialize, Serialize};

use crate::allowlist::AllowList;
use crate::config::ConfigError;

/// Client identifier restricted by the default policy.
pub const DEFAULT_RESTRICTED_CLIENT: &str = "sample_rule2app";

/// Emails allowed into [`DEFAULT_RESTRICTED_CLIENT`] by the default policy.
pub const DEFAULT_ALLOWED_EMAILS: [&str; 2] = ["user1@example.com", "user2@example.com"];

/// Login policy configuration.
///
/// Users of `restricted_client_id` must appear in `allowed_emails`; every
/// other client only requires a verified email.
///
/// # Examples
///
/// ```
/// use login_policy::{AccessPolicy, AllowList};
///
/// let policy = AccessPolicy::new("billing", AllowList::from_iter(["ops@corp.example"]));
///
/// assert!(policy.applies_to("billing"));
/// assert!(!policy.applies_to("Billing"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccessPolicy {
    /// The single client whose logins are narrowed to the allow-list
    pub restricted_client_id: String,
    /// Emails authorized for the restricted client
    #[serde(default)]
    pub allowed_emails: AllowList,
}

impl AccessPolicy {
    /// Creates a policy restricting `restricted_client_id` to `allowed_emails`.
    pub fn new(restricted_client_id: impl Into<String>, allowed_emails: AllowList) -> Self {
        Self {
            restricted_client_id: restricted_client_id.into(),
            allowed_emails,
        }
    }

    /// Returns true if the allow-list restriction applies to `client_name`.
    pub fn applies_to(&self, client_name: &str) -> bool {
        self.restricted_client_id == client_name
    }

    /// Checks that the policy is usable.
    ///
    /// An empty allow-list is accepted: it locks everyone out of the
    /// restricted client.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restricted_client_id.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "restrictedClientId must not be empty".into(),
            ));
        }
        if let Some(pos) = self.allowed_emails.iter().position(|e| e.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "allowedEmails[{pos}] must not be empty"
            )));
        }
        Ok(())
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_RESTRICTED_CLIENT,
            AllowList::from_iter(DEFAULT_ALLOWED_EMAILS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_builtin_literals() {
        let policy = AccessPolicy::default();
        assert_eq!(policy.restricted_client_id, "sample_rule2app");
        assert!(policy.allowed_emails.contains("user1@example.com"));
        assert!(policy.allowed_emails.contains("user2@example.com"));
        assert_eq!(policy.allowed_emails.len(), 2);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn applies_to_is_exact() {
        let policy = AccessPolicy::default();
        assert!(policy.applies_to("sample_rule2app"));
        assert!(!policy.applies_to("sample_rule2app "));
        assert!(!policy.applies_to("SAMPLE_RULE2APP"));
        assert!(!policy.applies_to("other_app"));
    }

    #[test]
    fn blank_client_is_rejected() {
        let policy = AccessPolicy::new("  ", AllowList::new());
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("restrictedClientId"));
    }

    #[test]
    fn blank_email_entry_is_rejected() {
        let policy = AccessPolicy::new("app", AllowList::from_iter(["a@x.com", ""]));
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("allowedEmails[1]"));
    }

    #[test]
    fn empty_allow_list_is_valid() {
        assert!(AccessPolicy::new("app", AllowList::new()).validate().is_ok());
    }
}
