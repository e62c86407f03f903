use std::fmt;

use crate::config::ConfigError;

/// Message reported to the host for every denied login.
pub const ACCESS_DENIED: &str = "Access denied.";

/// Errors that can occur in the login policy crate.
#[derive(Debug)]
pub enum Error {
    /// A login attempt was denied by policy
    Unauthorized(Unauthorized),
    /// A non-login policy check failed
    Violation(Violation),
    /// The policy configuration could not be loaded
    Config(ConfigError),
    /// Rule records could not be decoded
    Rules(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unauthorized(e) => write!(f, "{}", e),
            Error::Violation(v) => write!(f, "Policy violation: {}", v),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Rules(e) => write!(f, "Invalid rule records: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Unauthorized(e) => Some(e),
            Error::Violation(v) => Some(v),
            Error::Config(e) => Some(e),
            Error::Rules(e) => Some(e),
        }
    }
}

impl From<Unauthorized> for Error {
    fn from(e: Unauthorized) -> Self {
        Error::Unauthorized(e)
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Rules(e)
    }
}

/// Why a login attempt was denied.
///
/// Both reasons surface to the host identically (see [`ACCESS_DENIED`]);
/// the distinction exists for logs and audit records only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// The user has no email, an empty email, or an unverified one
    EmailNotVerified,
    /// The user is verified but not on the allow-list of a restricted client
    NotAllowListed {
        /// The restricted client the user tried to log into
        client: String,
    },
}

impl DenyReason {
    /// Stable machine-readable code for logs and audit records.
    pub fn code(&self) -> &'static str {
        match self {
            DenyReason::EmailNotVerified => "email_not_verified",
            DenyReason::NotAllowListed { .. } => "not_allow_listed",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::EmailNotVerified => write!(f, "email missing or not verified"),
            DenyReason::NotAllowListed { client } => {
                write!(f, "email not on the allow-list for '{}'", client)
            }
        }
    }
}

/// The authorization error handed back to the host for a denied login.
///
/// `Display` always yields `"Access denied."` regardless of the reason, so
/// callers cannot tell an unverified user from one missing on the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unauthorized {
    reason: DenyReason,
}

impl Unauthorized {
    pub(crate) fn new(reason: DenyReason) -> Self {
        Self { reason }
    }

    /// Returns the internal reason for the denial.
    pub fn reason(&self) -> &DenyReason {
        &self.reason
    }

    /// Returns the externally visible message.
    pub fn message(&self) -> &'static str {
        ACCESS_DENIED
    }
}

impl fmt::Display for Unauthorized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ACCESS_DENIED)
    }
}

impl std::error::Error for Unauthorized {}

/// A policy violation outside the login path, with details about what failed.
#[derive(Debug)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Violation {}

/// The kind of policy violation.
#[derive(Debug, PartialEq)]
pub enum ViolationKind {
    /// Authorization failed for a specific action
    Unauthorized {
        /// The action that was not authorized
        action: &'static str,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Unauthorized { action } => write!(f, "Unauthorized for '{}'", action),
        }
    }
}
