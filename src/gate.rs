use crate::{
    audit::{self, AuditEvent, AuditTrail},
    error::{DenyReason, Unauthorized},
    logging::{mask_email, AttemptLog},
    policy::AccessPolicy,
    request::{RequestContext, User},
};

/// Outcome of evaluating one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The login proceeds unchanged
    Allow,
    /// The login is rejected
    Deny(DenyReason),
}

impl Decision {
    /// Returns true for [`Decision::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Converts the decision into the host-facing result.
    ///
    /// # Errors
    ///
    /// Returns [`Unauthorized`] (displayed as `"Access denied."`) for a deny.
    pub fn into_result(self) -> Result<(), Unauthorized> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(Unauthorized::new(reason)),
        }
    }
}

/// The login access policy evaluator.
///
/// Evaluation is pure: it reads only its arguments and the policy it was
/// built with, so one evaluator can serve concurrent logins.
///
/// # Examples
///
/// ```
/// use login_policy::{AccessPolicyEvaluator, Decision, RequestContext, User};
///
/// let evaluator = AccessPolicyEvaluator::default();
///
/// let user = User::new("user1@example.com", true);
/// let ctx = RequestContext::new("sample_rule2app");
/// assert_eq!(evaluator.evaluate(&user, &ctx), Decision::Allow);
///
/// let stranger = User::new("someone@else.com", true);
/// let err = evaluator.authorize(&stranger, &ctx).unwrap_err();
/// assert_eq!(err.to_string(), "Access denied.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccessPolicyEvaluator {
    policy: AccessPolicy,
}

impl AccessPolicyEvaluator {
    /// Creates an evaluator enforcing `policy`.
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy this evaluator enforces.
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Decides whether the login proceeds.
    ///
    /// 1. No email, an empty email, or an unverified one is denied for
    ///    every client.
    /// 2. For the restricted client, the email must be on the allow-list.
    /// 3. Every other client is allowed.
    pub fn evaluate(&self, user: &User, context: &RequestContext) -> Decision {
        let log = AttemptLog::new(context);
        let decision = self.decide(user, context);

        match &decision {
            Decision::Allow => log.debug(format_args!("login allowed")),
            Decision::Deny(reason) => {
                let email = user
                    .email
                    .as_deref()
                    .map(mask_email)
                    .unwrap_or_else(|| "<none>".to_string());
                log.info(format_args!(
                    "login denied: {} (reason={}, email={})",
                    reason,
                    reason.code(),
                    email
                ));
            }
        }

        decision
    }

    fn decide(&self, user: &User, context: &RequestContext) -> Decision {
        // Verification precedes the allow-list check.
        let Some(email) = user.verified_email() else {
            return Decision::Deny(DenyReason::EmailNotVerified);
        };

        if !self.policy.applies_to(&context.client_name) {
            return Decision::Allow;
        }

        if self.policy.allowed_emails.contains(email) {
            Decision::Allow
        } else {
            Decision::Deny(DenyReason::NotAllowListed {
                client: context.client_name.clone(),
            })
        }
    }

    /// Evaluates the attempt and reports it the way the host expects:
    /// `Ok(())` to let the login continue, an error otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Unauthorized`] whenever [`evaluate`](Self::evaluate) denies.
    pub fn authorize(&self, user: &User, context: &RequestContext) -> Result<(), Unauthorized> {
        self.evaluate(user, context).into_result()
    }

    /// Evaluates the attempt, emits an audit event and records it in `trail`.
    ///
    /// Returns the same decision as [`evaluate`](Self::evaluate).
    pub fn evaluate_audited(
        &self,
        user: &User,
        context: &RequestContext,
        trail: &AuditTrail,
    ) -> Decision {
        let decision = self.evaluate(user, context);
        audit::emit_and_record(AuditEvent::for_login(user, context, &decision), trail);
        decision
    }
}
