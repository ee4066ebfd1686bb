//! Entity model for creators, publications and the contributions joining them.
//!
//! # Responsibility
//! - Define the three entity shapes and their field-level validation.
//! - Keep relationships as typed ids so entities never hold each other.
//!
//! # Invariants
//! - Every entity is identified by a v4 uuid; identity never depends on names.
//! - Invalid input is rejected at construction; no entity exists half-built.
//! - Backlink lists never contain the same contribution twice.

/// Declares a uuid-backed identifier newtype.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            pub(crate) fn generate() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Returns the underlying uuid.
            pub fn as_uuid(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod contribution;
pub mod creator;
pub mod publication;
pub mod set_once;
pub mod validation;

use contribution::ContributionId;

/// Appends `id` unless it is already present. Returns whether it was added.
pub(crate) fn link_once(links: &mut Vec<ContributionId>, id: ContributionId) -> bool {
    if links.contains(&id) {
        return false;
    }
    links.push(id);
    true
}

/// Removes `id` from `links`. Returns whether it was present.
pub(crate) fn unlink(links: &mut Vec<ContributionId>, id: ContributionId) -> bool {
    let before = links.len();
    links.retain(|existing| *existing != id);
    links.len() != before
}
