//! Email allow-lists.
//!
//! Membership is exact, case-sensitive string equality. No normalization is
//! applied: `User1@Example.com` does not match `user1@example.com`.

use serde::{Deserialize, Serialize};

/// An ordered list of authorized email addresses.
///
/// # Examples
///
/// ```
/// use login_policy::AllowList;
///
/// let list = AllowList::from_iter(["user1@example.com", "user2@example.com"]);
///
/// assert!(list.contains("user2@example.com"));
/// assert!(!list.contains("USER2@example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList {
    emails: Vec<String>,
}

impl AllowList {
    /// Creates an empty allow-list. It matches nothing.
    pub fn new() -> Self {
        Self { emails: Vec::new() }
    }

    /// Returns true if `email` equals one of the entries.
    ///
    /// Stops at the first match.
    pub fn contains(&self, email: &str) -> bool {
        self.emails.iter().any(|entry| entry == email)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Iterates over entries in their configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.emails.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            emails: iter.into_iter().map(Into::into).collect(),
        }
    }
}
