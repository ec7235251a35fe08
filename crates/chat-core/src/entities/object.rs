//! Opaque references for entities that are not in the local cache

use chrono::{DateTime, Utc};
use std::fmt;

use super::{
    Channel, Emoji, Guild, MemberOrUser, Role, ScheduledEvent, StageInstance, Sticker, Thread,
};
use crate::value_objects::Snowflake;

/// Stand-in for an entity that could not be resolved
///
/// Carries the id and, when the raw payload supplied one, a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Object {
    pub id: Snowflake,
    pub name: Option<String>,
}

impl Object {
    pub fn new(id: Snowflake) -> Self {
        Self { id, name: None }
    }

    pub fn named(id: Snowflake, name: Option<String>) -> Self {
        Self { id, name }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.id.created_at()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Anything with a snowflake id
pub trait Identifiable {
    fn id(&self) -> Snowflake;
}

macro_rules! identifiable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identifiable for $ty {
                #[inline]
                fn id(&self) -> Snowflake {
                    self.id
                }
            }
        )+
    };
}

identifiable!(Channel, Emoji, Guild, Object, Role, ScheduledEvent, StageInstance, Sticker, Thread);

impl Identifiable for MemberOrUser {
    #[inline]
    fn id(&self) -> Snowflake {
        MemberOrUser::id(self)
    }
}

/// A cache lookup result: the live entity, or an opaque reference to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    Cached(T),
    Object(Object),
}

impl<T> Resolved<T> {
    /// Wrap a lookup result, falling back to an id-only reference on a miss
    pub fn or_object(found: Option<T>, id: Snowflake) -> Self {
        Self::or_named_object(found, id, None)
    }

    /// Like [`Resolved::or_object`], keeping a display name for the fallback
    pub fn or_named_object(found: Option<T>, id: Snowflake, name: Option<String>) -> Self {
        match found {
            Some(entity) => Self::Cached(entity),
            None => Self::Object(Object::named(id, name)),
        }
    }

    pub fn cached(&self) -> Option<&T> {
        match self {
            Self::Cached(entity) => Some(entity),
            Self::Object(_) => None,
        }
    }

    #[inline]
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }
}

impl<T: Identifiable> Resolved<T> {
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Cached(entity) => entity.id(),
            Self::Object(object) => object.id,
        }
    }
}
