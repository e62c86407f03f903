/// The user attempting to log in, as supplied by the identity platform.
///
/// Created fresh for every attempt; the policy never mutates or stores it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    /// Primary email address, if the identity carries one
    pub email: Option<String>,
    /// Whether the platform has verified ownership of `email`
    pub email_verified: bool,
}

impl User {
    /// Creates a user with the given email and verification flag.
    pub fn new(email: impl Into<String>, email_verified: bool) -> Self {
        Self {
            email: Some(email.into()),
            email_verified,
        }
    }

    /// Returns the email only if it is present, non-empty and verified.
    pub fn verified_email(&self) -> Option<&str> {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() && self.email_verified => Some(email),
            _ => None,
        }
    }
}

/// Metadata about the login request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Name of the client application that initiated the login
    pub client_name: String,
    /// Correlation identifier for logs and audit records, if the host has one
    pub request_id: Option<String>,
}

impl RequestContext {
    /// Creates a context for the named client with no request id.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            request_id: None,
        }
    }

    /// Attaches a correlation identifier.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns the request id, or `"-"` when the host did not supply one.
    pub fn request_id_or_placeholder(&self) -> &str {
        self.request_id.as_deref().unwrap_or("-")
    }
}
