//! In-memory audit trail recorder.

use std::sync::{Mutex, MutexGuard};

use super::AuditEvent;

/// In-memory recorder for audit events.
///
/// Internally synchronized so one trail can be shared by evaluations running
/// on different threads. In production you would forward events to a
/// persistent audit store instead.
///
/// # Example
///
/// ```
/// use login_policy::audit::{AuditTrail, AuditEvent, AuditEventKind, AuditOutcome};
///
/// let trail = AuditTrail::new();
///
/// trail.record(AuditEvent::new(
///     "req-123",
///     "sample_rule2app",
///     AuditEventKind::Login,
///     AuditOutcome::Allowed,
/// ));
///
/// assert_eq!(trail.events().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AuditTrail {
    events: Mutex<Vec<AuditEvent>>,
}

impl AuditTrail {
    /// Creates a new empty audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<AuditEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Records an audit event.
    ///
    /// Events are stored in the order they are recorded.
    pub fn record(&self, event: AuditEvent) {
        self.lock().push(event);
    }

    /// Returns a snapshot of all recorded events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }
}
