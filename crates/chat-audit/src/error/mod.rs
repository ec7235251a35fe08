//! Audit log errors

mod audit_error;

pub use audit_error::{AuditLogError, AuditLogResult};
