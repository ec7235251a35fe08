//! # chat-audit
//!
//! Audit log decoder. Turns raw audit log records into entries with typed
//! before/after diffs, a resolved target, and an action-specific extra.
//!
//! ## Example
//!
//! ```ignore
//! use chat_audit::{AuditLog, AuditLogPage};
//!
//! let page = AuditLogPage::from_json(&body)?;
//! let log = AuditLog::new(page, &guild, &cache, &config.cdn);
//!
//! for entry in log.entries() {
//!     println!("{} {:?}", entry.action(), entry.after().get("name"));
//! }
//! ```

pub mod action;
pub mod changes;
pub mod entry;
pub mod error;
pub mod page;
pub mod payload;

// Re-export commonly used types at crate root
pub use action::{AuditLogAction, AuditLogActionCategory, TargetType};
pub use changes::{AuditLogChanges, AuditLogDiff, DiffValue, OverwriteTarget};
pub use entry::{AuditLogContext, AuditLogEntry, AuditLogExtra, AuditLogTarget, InviteTarget, UserTable};
pub use error::{AuditLogError, AuditLogResult};
pub use page::AuditLog;
pub use payload::{AuditLogChangePayload, AuditLogEntryPayload, AuditLogPage, UserPayload};
