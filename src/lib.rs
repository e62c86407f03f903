//! Login access policy for an identity platform's login hook.
//!
//! Every login runs two checks:
//! - **Verified email**: users without a verified, non-empty email are denied
//! - **Client allow-list**: for one restricted client application, only
//!   allow-listed emails may log in; all other clients skip this check
//!
//! # Core Types
//!
//! - [`AccessPolicyEvaluator`]: Evaluates a login attempt into a [`Decision`]
//! - [`AccessPolicy`]: Restricted client id and its [`AllowList`]
//! - [`User`] / [`RequestContext`]: Per-attempt input supplied by the host
//! - [`Unauthorized`]: The host-facing error, always `"Access denied."`
//!
//! # Examples
//!
//! ```
//! use login_policy::{AccessPolicyEvaluator, RequestContext, User, config};
//!
//! let policy = config::load_from_str(
//!     "restrictedClientId: sample_rule2app\nallowedEmails: [user1@example.com]\n",
//! )
//! .expect("valid policy");
//! let evaluator = AccessPolicyEvaluator::new(policy);
//!
//! let user = User::new("user1@example.com", true);
//! assert!(evaluator.authorize(&user, &RequestContext::new("sample_rule2app")).is_ok());
//!
//! let unverified = User::new("user1@example.com", false);
//! let err = evaluator
//!     .authorize(&unverified, &RequestContext::new("other_app"))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Access denied.");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod allowlist;
pub mod audit;
pub mod config;
mod error;
mod gate;
mod logging;
mod policy;
mod request;
pub mod rules;

pub use allowlist::AllowList;
pub use config::ConfigError;
pub use error::{DenyReason, Error, Unauthorized, Violation, ViolationKind, ACCESS_DENIED};
pub use gate::{AccessPolicyEvaluator, Decision};
pub use logging::mask_email;
pub use policy::{AccessPolicy, DEFAULT_ALLOWED_EMAILS, DEFAULT_RESTRICTED_CLIENT};
pub use request::{RequestContext, User};
