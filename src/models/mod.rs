pub mod business;
pub mod review;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// The entity types the app persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Business,
    Review,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Business => write!(f, "Business"),
            EntityKind::Review => write!(f, "Review"),
        }
    }
}

/// A record stored in an [`crate::db::EntityStore`].
///
/// `Draft` is the payload accepted by `create`; `Patch` is the partial record
/// accepted by `update`, where every `Some` field overwrites the stored one.
pub trait Entity: Clone + Serialize + DeserializeOwned + 'static {
    const KIND: EntityKind;

    type Draft;
    type Patch;

    fn id(&self) -> u32;

    fn from_draft(id: u32, draft: Self::Draft) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);
}
