//! Policy config loader (strict parsing).
//!
//! ```yaml
//! restrictedClientId: sample_rule2app
//! allowedEmails:
//!   - user1@example.com
//!   - user2@example.com
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use crate::policy::AccessPolicy;

/// Errors raised while loading a policy configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read
    Io(std::io::Error),
    /// The document is not valid YAML or has the wrong shape
    Parse(serde_yaml::Error),
    /// The document parsed but describes an unusable policy
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "read config failed: {}", e),
            ConfigError::Parse(e) => write!(f, "invalid yaml: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid policy: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Reads and validates a policy from a YAML file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<AccessPolicy, ConfigError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loaded policy config");
    load_from_str(&s)
}

/// Parses and validates a policy from a YAML document.
pub fn load_from_str(s: &str) -> Result<AccessPolicy, ConfigError> {
    let policy: AccessPolicy = serde_yaml::from_str(s)?;
    policy.validate()?;
    Ok(policy)
}
