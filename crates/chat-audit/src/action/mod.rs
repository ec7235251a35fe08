//! Audit log action types and what they act on

mod audit_action;

pub use audit_action::{AuditLogAction, AuditLogActionCategory, TargetType};
