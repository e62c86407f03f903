//! Emits audit events through tracing.

use super::{AuditEvent, AuditTrail};

/// `tracing` target used for all audit events.
pub const AUDIT_TARGET: &str = "login_audit";

/// Emits an audit event as a structured `tracing` event.
pub fn emit(event: &AuditEvent) {
    tracing::info!(
        target: AUDIT_TARGET,
        request_id = %event.request_id(),
        client = %event.client(),
        principal = ?event.principal(),
        kind = %event.kind(),
        outcome = %event.outcome(),
        reason = ?event.reason(),
        "audit event"
    );
}

/// Emits an audit event and records it in `trail`.
pub fn emit_and_record(event: AuditEvent, trail: &AuditTrail) {
    emit(&event);
    trail.record(event);
}
