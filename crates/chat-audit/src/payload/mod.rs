//! Raw wire payloads, deserialized but not yet interpreted

mod raw;

pub use raw::{AuditLogChangePayload, AuditLogEntryPayload, AuditLogPage, UserPayload};
