//! Audit event schema and types.

use std::fmt;

use crate::error::DenyReason;
use crate::gate::Decision;
use crate::logging::mask_email;
use crate::request::{RequestContext, User};

/// Kind of audit event being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEventKind {
    /// A login attempt evaluated by the access policy
    Login,
    /// A request to view rule summaries
    RuleView,
}

impl fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEventKind::Login => write!(f, "login"),
            AuditEventKind::RuleView => write!(f, "rule_view"),
        }
    }
}

/// Outcome of an audited operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// Operation was allowed
    Allowed,
    /// Operation was denied by policy
    Denied,
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::Allowed => write!(f, "allowed"),
            AuditOutcome::Denied => write!(f, "denied"),
        }
    }
}

/// A structured audit event containing only non-sensitive metadata.
///
/// The principal is stored masked (`u***@example.com`).
///
/// # Example
///
/// ```
/// use login_policy::{AccessPolicyEvaluator, RequestContext, User};
/// use login_policy::audit::{AuditEvent, AuditOutcome};
///
/// let evaluator = AccessPolicyEvaluator::default();
/// let user = User::new("someone@else.com", true);
/// let ctx = RequestContext::new("sample_rule2app").with_request_id("req-9");
///
/// let decision = evaluator.evaluate(&user, &ctx);
/// let event = AuditEvent::for_login(&user, &ctx, &decision);
///
/// assert_eq!(event.outcome(), AuditOutcome::Denied);
/// assert_eq!(event.reason(), Some("not_allow_listed"));
/// assert_eq!(event.principal(), Some("s***@else.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Request identifier for correlation ("-" if the host gave none)
    request_id: String,
    /// Client application the request targeted
    client: String,
    /// Masked email of the user, None if the user had no email
    principal: Option<String>,
    kind: AuditEventKind,
    outcome: AuditOutcome,
    /// Deny reason code, None when allowed
    reason: Option<&'static str>,
}

impl AuditEvent {
    /// Creates a new audit event with required fields.
    pub fn new(
        request_id: impl Into<String>,
        client: impl Into<String>,
        kind: AuditEventKind,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            client: client.into(),
            principal: None,
            kind,
            outcome,
            reason: None,
        }
    }

    /// Builds the audit record for one login decision.
    pub fn for_login(user: &User, context: &RequestContext, decision: &Decision) -> Self {
        let outcome = if decision.is_allowed() {
            AuditOutcome::Allowed
        } else {
            AuditOutcome::Denied
        };
        let mut event = Self::new(
            context.request_id_or_placeholder(),
            context.client_name.as_str(),
            AuditEventKind::Login,
            outcome,
        );
        if let Some(email) = user.email.as_deref().filter(|e| !e.is_empty()) {
            event = event.with_principal(email);
        }
        if let Decision::Deny(reason) = decision {
            event = event.with_reason(reason);
        }
        event
    }

    /// Builds the audit record for a rule-summary view check.
    pub fn for_rule_view(viewer_email: &str, context: &RequestContext, allowed: bool) -> Self {
        let outcome = if allowed {
            AuditOutcome::Allowed
        } else {
            AuditOutcome::Denied
        };
        let event = Self::new(
            context.request_id_or_placeholder(),
            context.client_name.as_str(),
            AuditEventKind::RuleView,
            outcome,
        )
        .with_principal(viewer_email);

        if allowed {
            event
        } else {
            event.with_reason(&DenyReason::NotAllowListed {
                client: context.client_name.clone(),
            })
        }
    }

    /// Sets the principal, masking it.
    pub fn with_principal(mut self, email: &str) -> Self {
        self.principal = Some(mask_email(email));
        self
    }

    /// Sets the deny reason code.
    pub fn with_reason(mut self, reason: &DenyReason) -> Self {
        self.reason = Some(reason.code());
        self
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the client name.
    pub fn client(&self) -> &str {
        &self.client
    }

    /// Returns the masked principal, if any.
    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    /// Returns the event kind.
    pub fn kind(&self) -> AuditEventKind {
        self.kind
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    /// Returns the deny reason code, if denied.
    pub fn reason(&self) -> Option<&'static str> {
        self.reason
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditEvent[kind={}, outcome={}, request_id={}, client={}, principal={}",
            self.kind,
            self.outcome,
            self.request_id,
            self.client,
            self.principal.as_deref().unwrap_or("<none>")
        )?;

        if let Some(reason) = self.reason {
            write!(f, ", reason={}", reason)?;
        }

        write!(f, "]")
    }
}
