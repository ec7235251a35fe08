//! Channel permission overwrite expressed as an allow/deny pair

use serde::{Deserialize, Serialize};

use super::Permissions;

/// Tri-state permission overwrite
///
/// A permission is explicitly allowed, explicitly denied, or left to inherit
/// (neither bit set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    allow: Permissions,
    deny: Permissions,
}

impl PermissionOverwrite {
    /// Build from an allow/deny pair. Bits present in both resolve to deny.
    pub fn from_pair(allow: Permissions, deny: Permissions) -> Self {
        Self {
            allow: allow.difference(deny),
            deny,
        }
    }

    /// Returns `(allow, deny)`
    #[inline]
    pub fn pair(&self) -> (Permissions, Permissions) {
        (self.allow, self.deny)
    }

    /// `Some(true)` when allowed, `Some(false)` when denied, `None` when inherited
    pub fn get(&self, permission: Permissions) -> Option<bool> {
        if self.deny.contains(permission) {
            Some(false)
        } else if self.allow.contains(permission) {
            Some(true)
        } else {
            None
        }
    }

    /// True when the overwrite changes nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}
