//! Audit records for login decisions.
//!
//! This module provides:
//! - `AuditEvent`: Structured record of one decision
//! - `AuditTrail`: In-memory, thread-safe event recorder
//! - `emit`: Emits an event through `tracing`
//!
//! Audit events never hold a full email address; principals are masked
//! before the event is built.

mod emit;
mod event;
mod trail;

pub use emit::{emit, emit_and_record, AUDIT_TARGET};
pub use event::{AuditEvent, AuditEventKind, AuditOutcome};
pub use trail::AuditTrail;
