//! Change-set decoding: the per-field transform table and the before/after bags

mod builder;
mod diff;
mod transformers;

pub use builder::AuditLogChanges;
pub use diff::{AuditLogDiff, DiffValue, OverwriteTarget};
pub use transformers::{lookup, FieldTransform, Transform};
pub(crate) use transformers::overwrite_kind;
