//! A page of audit log entries bound to the guild it was fetched for

use chat_common::CdnConfig;
use chat_core::{EntityCache, Guild, User};

use crate::entry::{AuditLogContext, AuditLogEntry, UserTable};
use crate::payload::{AuditLogEntryPayload, AuditLogPage};

/// Decoded view over one listing response
///
/// Entries are decoded on iteration. Users embedded in the page back the
/// member lookups of every entry.
pub struct AuditLog<'a> {
    guild: &'a Guild,
    cache: &'a dyn EntityCache,
    cdn: &'a CdnConfig,
    users: UserTable,
    records: Vec<AuditLogEntryPayload>,
}

impl<'a> AuditLog<'a> {
    pub fn new(
        page: AuditLogPage,
        guild: &'a Guild,
        cache: &'a dyn EntityCache,
        cdn: &'a CdnConfig,
    ) -> Self {
        let users = page
            .users
            .into_iter()
            .map(|payload| {
                let user = User::from(payload);
                (user.id, user)
            })
            .collect();

        tracing::debug!(
            guild_id = %guild.id,
            entries = page.audit_log_entries.len(),
            "Audit log page loaded"
        );

        Self {
            guild,
            cache,
            cdn,
            users,
            records: page.audit_log_entries,
        }
    }

    /// Context shared by this page's entries
    pub fn context(&self) -> AuditLogContext<'_> {
        AuditLogContext::new(self.guild, self.cache, &self.users, self.cdn)
    }

    /// Decode entries in page order
    ///
    /// Each call yields fresh entries with empty memo cells.
    pub fn entries(&self) -> impl Iterator<Item = AuditLogEntry<'_>> + '_ {
        let ctx = self.context();
        self.records
            .iter()
            .map(move |record| AuditLogEntry::new(ctx, record.clone()))
    }

    pub fn users(&self) -> &UserTable {
        &self.users
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl std::fmt::Debug for AuditLog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLog")
            .field("guild_id", &self.guild.id)
            .field("entries", &self.records.len())
            .field("users", &self.users.len())
            .finish_non_exhaustive()
    }
}
