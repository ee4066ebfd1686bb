//! Publication entity.

use crate::model::contribution::ContributionId;
use crate::model::validation::{validate_category, validate_publication_name, ValidationError};
use crate::model::{link_once, unlink};
use serde::Serialize;

entity_id!(
    /// Stable identity of one publication.
    PublicationId
);

/// A venue hosting contributions, grouped under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    id: PublicationId,
    name: String,
    category: String,
    contributions: Vec<ContributionId>,
}

impl Publication {
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_publication_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: PublicationId::generate(),
            name,
            category,
            contributions: Vec::new(),
        })
    }

    pub fn id(&self) -> PublicationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Ids of contributions published here, oldest first.
    pub fn contribution_ids(&self) -> &[ContributionId] {
        &self.contributions
    }

    /// Replaces the name. The old name is kept when validation fails.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_publication_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category. The old category is kept when validation fails.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    pub(crate) fn link_contribution(&mut self, id: ContributionId) -> bool {
        link_once(&mut self.contributions, id)
    }

    pub(crate) fn unlink_contribution(&mut self, id: ContributionId) -> bool {
        unlink(&mut self.contributions, id)
    }
}

#[cfg(test)]
mod tests {
    use super::Publication;
    use crate::model::validation::ValidationError;

    #[test]
    fn rejects_short_name_and_empty_category() {
        assert_eq!(
            Publication::new("V", "Fashion").unwrap_err(),
            ValidationError::PublicationNameLength { chars: 1 }
        );
        assert_eq!(
            Publication::new("Vogue", "").unwrap_err(),
            ValidationError::EmptyCategory
        );
    }

    #[test]
    fn setters_validate_and_keep_old_value_on_failure() {
        let mut publication = Publication::new("Vogue", "Fashion").unwrap();

        publication.set_name("AD").unwrap();
        publication.set_category("Architecture").unwrap();
        assert_eq!(publication.name(), "AD");
        assert_eq!(publication.category(), "Architecture");

        let err = publication
            .set_name("Architectural Digest")
            .expect_err("20 characters is too long");
        assert_eq!(err, ValidationError::PublicationNameLength { chars: 20 });
        assert_eq!(publication.name(), "AD");

        publication.set_category("").unwrap_err();
        assert_eq!(publication.category(), "Architecture");
    }
}
