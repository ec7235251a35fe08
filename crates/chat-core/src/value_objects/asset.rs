//! Asset - a CDN-hosted image referenced by hash

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Snowflake;

/// Image size requested for every asset URL unless the caller overrides it
pub const DEFAULT_ASSET_SIZE: u32 = 1024;

/// A CDN asset (icon, avatar, banner, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Full URL including the `size` query parameter
    pub url: String,
    /// The hash the platform sent
    pub key: String,
    /// Hashes prefixed with `a_` refer to animated images
    pub animated: bool,
}

impl Asset {
    fn build(base: &str, path: &str, key: &str, animated: bool, size: u32) -> Self {
        let format = if animated { "gif" } else { "png" };
        Self {
            url: format!(
                "{}/{path}/{key}.{format}?size={size}",
                base.trim_end_matches('/')
            ),
            key: key.to_string(),
            animated,
        }
    }

    /// Guild icon; may be animated
    pub fn guild_icon(base: &str, guild_id: Snowflake, hash: &str, size: u32) -> Self {
        Self::build(
            base,
            &format!("icons/{guild_id}"),
            hash,
            is_animated(hash),
            size,
        )
    }

    /// Static guild image under `path` (splashes, banners, discovery-splashes)
    pub fn guild_image(base: &str, guild_id: Snowflake, hash: &str, path: &str, size: u32) -> Self {
        Self::build(base, &format!("{path}/{guild_id}"), hash, false, size)
    }

    /// User avatar; may be animated
    pub fn avatar(base: &str, user_id: Snowflake, hash: &str, size: u32) -> Self {
        Self::build(
            base,
            &format!("avatars/{user_id}"),
            hash,
            is_animated(hash),
            size,
        )
    }

    /// Scheduled event cover image
    pub fn scheduled_event_image(base: &str, event_id: Snowflake, hash: &str, size: u32) -> Self {
        Self::build(base, &format!("guild-events/{event_id}"), hash, false, size)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[inline]
fn is_animated(hash: &str) -> bool {
    hash.starts_with("a_")
}
