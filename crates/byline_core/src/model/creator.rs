//! Creator entity.

use crate::model::contribution::ContributionId;
use crate::model::validation::{validate_creator_name, ValidationError};
use crate::model::{link_once, unlink};
use serde::Serialize;

entity_id!(
    /// Stable identity of one creator.
    CreatorId
);

/// Someone who writes contributions.
///
/// `name` is fixed at construction. The contribution list only grows through
/// catalog registration and keeps creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creator {
    id: CreatorId,
    name: String,
    contributions: Vec<ContributionId>,
}

impl Creator {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_creator_name(&name)?;
        Ok(Self {
            id: CreatorId::generate(),
            name,
            contributions: Vec::new(),
        })
    }

    pub fn id(&self) -> CreatorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of contributions written by this creator, oldest first.
    pub fn contribution_ids(&self) -> &[ContributionId] {
        &self.contributions
    }

    pub(crate) fn link_contribution(&mut self, id: ContributionId) -> bool {
        link_once(&mut self.contributions, id)
    }

    pub(crate) fn unlink_contribution(&mut self, id: ContributionId) -> bool {
        unlink(&mut self.contributions, id)
    }
}
