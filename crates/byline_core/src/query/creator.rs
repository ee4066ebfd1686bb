//! Creator-side derived queries.

use crate::model::contribution::Contribution;
use crate::model::creator::{Creator, CreatorId};
use crate::model::publication::Publication;
use crate::query::unique_by;
use crate::repo::catalog::Catalog;
use std::collections::BTreeSet;

/// Read view pairing a creator with the catalog that owns its contributions.
#[derive(Debug, Clone, Copy)]
pub struct CreatorView<'a> {
    catalog: &'a Catalog,
    creator: &'a Creator,
}

impl<'a> CreatorView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, creator: &'a Creator) -> Self {
        Self { catalog, creator }
    }

    pub fn creator(&self) -> &'a Creator {
        self.creator
    }

    pub fn id(&self) -> CreatorId {
        self.creator.id()
    }

    pub fn name(&self) -> &'a str {
        self.creator.name()
    }

    /// Contributions written by this creator, oldest first.
    pub fn contributions(&self) -> Vec<&'a Contribution> {
        self.creator
            .contribution_ids()
            .iter()
            .filter_map(|id| self.catalog.contribution(*id))
            .collect()
    }

    /// Distinct publications this creator wrote for, in first-contribution order.
    pub fn publications(&self) -> Vec<&'a Publication> {
        let catalog = self.catalog;
        let publications = self
            .contributions()
            .into_iter()
            .filter_map(|contribution| catalog.publication(contribution.publication_id()));
        unique_by(publications, |publication| publication.id())
    }

    /// Distinct categories across this creator's publications.
    ///
    /// Returns `None` when the creator has no contributions yet.
    pub fn topic_areas(&self) -> Option<BTreeSet<&'a str>> {
        if self.creator.contribution_ids().is_empty() {
            return None;
        }
        Some(
            self.publications()
                .into_iter()
                .map(Publication::category)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::repo::catalog::Catalog;
    use std::collections::BTreeSet;

    #[test]
    fn topic_areas_is_none_without_contributions() {
        let mut catalog = Catalog::new();
        let creator = catalog.add_creator("Nobody Yet").unwrap();

        let view = catalog.creator_view(creator).unwrap();
        assert!(view.contributions().is_empty());
        assert!(view.publications().is_empty());
        assert_eq!(view.topic_areas(), None);
    }

    #[test]
    fn topic_areas_deduplicates_categories() {
        let mut catalog = Catalog::new();
        let creator = catalog.add_creator("Carry Bradshaw").unwrap();
        let wired = catalog.add_publication("Wired", "Tech").unwrap();
        let verge = catalog.add_publication("The Verge", "Tech").unwrap();
        let vogue = catalog.add_publication("Vogue", "Fashion").unwrap();
        for (publication, title) in [
            (wired, "Chips All The Way Down"),
            (verge, "Phones Fold Again"),
            (vogue, "Spring Collections"),
        ] {
            catalog
                .create_contribution(creator, publication, title)
                .unwrap();
        }

        let view = catalog.creator_view(creator).unwrap();
        let expected: BTreeSet<&str> = ["Tech", "Fashion"].into_iter().collect();
        assert_eq!(view.topic_areas(), Some(expected));
    }
}
