//! Decoded audit log entries

mod audit_entry;
mod context;
mod extra;
mod target;

pub use audit_entry::AuditLogEntry;
pub use context::{AuditLogContext, UserTable};
pub use extra::AuditLogExtra;
pub use target::{AuditLogTarget, InviteTarget};
