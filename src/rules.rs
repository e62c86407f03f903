//! Maps login rules to the client application they are scoped to.
//!
//! A rule scopes itself to one application with a guard of the form
//!
//! ```text
//! if (context.clientName === 'TheAppToCheckAccessTo') {
//! ```
//!
//! The first such guard in the script names the application. Names may
//! contain letters, digits, underscores and spaces. Scripts without a guard
//! map to [`UNKNOWN_APPLICATION`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::allowlist::AllowList;
use crate::audit::{self, AuditEvent, AuditTrail};
use crate::error::{Error, Violation, ViolationKind};
use crate::request::RequestContext;

/// Application name reported for rules without a client guard.
pub const UNKNOWN_APPLICATION: &str = "unknown";

/// Message returned to viewers who are not on the allow-list.
pub const VIEW_DENIED: &str = "You are not authorized to use this function.";

const VIEW_ACTION: &str = "list_rules";

static CLIENT_GUARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"if\s?\(context\.clientName\s?===\s?([a-zA-Z0-9_ '"]+)\)\s?\{"#)
        .expect("client guard pattern is valid")
});

/// A rule as listed by the identity platform's management API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleRecord {
    /// Rule name
    pub name: String,
    /// Whether the rule runs on login
    pub enabled: bool,
    /// JavaScript source of the rule
    pub script: String,
}

/// One row of the rule-to-application view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    /// Rule name
    pub rule: String,
    /// Whether the rule runs on login
    pub enabled: bool,
    /// Application the rule is scoped to, or `"unknown"`
    pub application: String,
}

/// Returns the client application a rule script is scoped to.
///
/// # Examples
///
/// ```
/// use login_policy::rules::application_for_script;
///
/// let script = "function (user, context, callback) {
///     if(context.clientName === 'sample_rule2app'){ callback(null, user, context); }
/// }";
///
/// assert_eq!(application_for_script(script).as_deref(), Some("sample_rule2app"));
/// assert_eq!(application_for_script("function () {}"), None);
/// ```
pub fn application_for_script(script: &str) -> Option<String> {
    let literal = CLIENT_GUARD.captures(script)?.get(1)?.as_str();
    Some(strip_delimiters(literal).to_string())
}

// Drops the first and last characters of the captured literal, whatever
// they are. Captures of one character or less yield an empty name.
fn strip_delimiters(literal: &str) -> &str {
    let mut chars = literal.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return "";
    }
    chars.as_str()
}

/// Summarizes rules in input order.
pub fn summarize(rules: &[RuleRecord]) -> Vec<RuleSummary> {
    rules
        .iter()
        .map(|rule| RuleSummary {
            rule: rule.name.clone(),
            enabled: rule.enabled,
            application: application_for_script(&rule.script)
                .unwrap_or_else(|| UNKNOWN_APPLICATION.to_string()),
        })
        .collect()
}

/// Decodes the JSON array returned by the management API's rule listing.
///
/// Fields other than `name`, `enabled` and `script` are ignored.
///
/// # Errors
///
/// Returns [`Error::Rules`] if the payload is not an array of rule objects.
pub fn parse_rules(json: &str) -> Result<Vec<RuleRecord>, Error> {
    Ok(serde_json::from_str(json)?)
}

/// Checks that `viewer_email` may see the rule summaries.
///
/// Emits a `rule_view` audit event either way, correlated with `context`.
///
/// # Errors
///
/// Returns a [`Violation`] carrying [`VIEW_DENIED`] if the viewer is not on
/// `viewers`.
pub fn authorize_viewer(
    viewers: &AllowList,
    viewer_email: &str,
    context: &RequestContext,
) -> Result<(), Violation> {
    let (event, result) = check_viewer(viewers, viewer_email, context);
    audit::emit(&event);
    result
}

/// Same as [`authorize_viewer`], and also records the audit event in `trail`.
///
/// # Errors
///
/// Returns a [`Violation`] carrying [`VIEW_DENIED`] if the viewer is not on
/// `viewers`.
pub fn authorize_viewer_audited(
    viewers: &AllowList,
    viewer_email: &str,
    context: &RequestContext,
    trail: &AuditTrail,
) -> Result<(), Violation> {
    let (event, result) = check_viewer(viewers, viewer_email, context);
    audit::emit_and_record(event, trail);
    result
}

fn check_viewer(
    viewers: &AllowList,
    viewer_email: &str,
    context: &RequestContext,
) -> (AuditEvent, Result<(), Violation>) {
    let allowed = viewers.contains(viewer_email);
    let event = AuditEvent::for_rule_view(viewer_email, context, allowed);

    let result = if allowed {
        Ok(())
    } else {
        Err(Violation::new(
            ViolationKind::Unauthorized {
                action: VIEW_ACTION,
            },
            VIEW_DENIED,
        ))
    };
    (event, result)
}
