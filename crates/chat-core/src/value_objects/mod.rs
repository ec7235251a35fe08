//! Value objects - immutable types that represent domain concepts

mod asset;
mod colour;
mod permission_overwrite;
mod permissions;
mod snowflake;

pub use asset::{Asset, DEFAULT_ASSET_SIZE};
pub use colour::Colour;
pub use permission_overwrite::PermissionOverwrite;
pub use permissions::Permissions;
pub use snowflake::{Snowflake, SnowflakeParseError};
