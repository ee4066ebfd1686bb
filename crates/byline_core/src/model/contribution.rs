//! Contribution join entity.
//!
//! # Responsibility
//! - Link exactly one creator to exactly one publication.
//! - Carry the contribution title as set-once data.
//!
//! # Invariants
//! - `creator` and `publication` are always set; they can be replaced but
//!   never cleared.
//! - `title` is validated at construction and never changes afterwards.
//! - Contributions are only constructed by the catalog, which registers them
//!   on both owning sides in the same step.

use crate::model::creator::CreatorId;
use crate::model::publication::PublicationId;
use crate::model::set_once::SetOnce;
use crate::model::validation::{validate_title, ValidationError};
use serde::Serialize;

entity_id!(
    /// Stable identity of one contribution.
    ContributionId
);

/// A titled piece of work by one creator in one publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contribution {
    id: ContributionId,
    creator: CreatorId,
    publication: PublicationId,
    title: SetOnce<String>,
}

impl Contribution {
    /// Builds a contribution after validating `title`.
    ///
    /// Relationship ids are not checked here; the catalog verifies that both
    /// entities exist before calling this.
    pub(crate) fn new(
        creator: CreatorId,
        publication: PublicationId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: ContributionId::generate(),
            creator,
            publication,
            title: SetOnce::with_value(title),
        })
    }

    pub fn id(&self) -> ContributionId {
        self.id
    }

    pub fn creator_id(&self) -> CreatorId {
        self.creator
    }

    pub fn publication_id(&self) -> PublicationId {
        self.publication
    }

    /// Returns the title fixed at construction.
    pub fn title(&self) -> &str {
        self.title.get().map_or("", String::as_str)
    }

    /// Attempts to replace the title.
    ///
    /// The title is set during construction, so this never changes it and
    /// always returns `false`. The argument is not validated.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        self.title.set(title.into())
    }

    /// Swaps the creator and returns the previous one.
    pub(crate) fn replace_creator(&mut self, creator: CreatorId) -> CreatorId {
        std::mem::replace(&mut self.creator, creator)
    }

    /// Swaps the publication and returns the previous one.
    pub(crate) fn replace_publication(&mut self, publication: PublicationId) -> PublicationId {
        std::mem::replace(&mut self.publication, publication)
    }
}
