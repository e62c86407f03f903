use std::fmt;

use crate::request::RequestContext;

/// A logger scoped to one login attempt.
///
/// Every event carries the client name and request id of the attempt. It is
/// lifetime-bound to the `RequestContext` it was created from.
///
/// Email addresses must not be passed in full; use [`mask_email`].
#[derive(Debug)]
pub struct AttemptLog<'a> {
    client: &'a str,
    request_id: &'a str,
}

impl<'a> AttemptLog<'a> {
    /// Creates a logger for the given request context.
    pub(crate) fn new(context: &'a RequestContext) -> Self {
        Self {
            client: &context.client_name,
            request_id: context.request_id_or_placeholder(),
        }
    }

    /// Returns the request ID associated with this logger.
    #[cfg(test)]
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Logs an info-level message.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(request_id = %self.request_id, client = %self.client, "{}", args);
    }

    /// Logs a debug-level message.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_id = %self.request_id, client = %self.client, "{}", args);
    }
}

/// Masks the local part of an email for log output.
///
/// Keeps the first character of the local part and the whole domain:
/// `user1@example.com` becomes `u***@example.com`. Input without an `@`
/// is fully masked.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_keeps_domain() {
        assert_eq!(mask_email("user1@example.com"), "u***@example.com");
        assert_eq!(mask_email("@example.com"), "***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }

    #[test]
    fn attempt_log_uses_placeholder_request_id() {
        let ctx = RequestContext::new("app");
        let log = AttemptLog::new(&ctx);
        assert_eq!(log.request_id(), "-");
        log.info(format_args!("hello"));
    }
}
