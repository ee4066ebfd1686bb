//! Publication-side derived queries.

use crate::model::contribution::Contribution;
use crate::model::creator::{Creator, CreatorId};
use crate::model::publication::{Publication, PublicationId};
use crate::query::unique_by;
use crate::repo::catalog::Catalog;
use std::collections::BTreeMap;

/// A creator counts as frequent with strictly more contributions than this.
pub const FREQUENT_CONTRIBUTOR_THRESHOLD: usize = 2;

/// Read view pairing a publication with the catalog that owns its contributions.
#[derive(Debug, Clone, Copy)]
pub struct PublicationView<'a> {
    catalog: &'a Catalog,
    publication: &'a Publication,
}

impl<'a> PublicationView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, publication: &'a Publication) -> Self {
        Self {
            catalog,
            publication,
        }
    }

    pub fn publication(&self) -> &'a Publication {
        self.publication
    }

    pub fn id(&self) -> PublicationId {
        self.publication.id()
    }

    /// Contributions published here, oldest first.
    pub fn contributions(&self) -> Vec<&'a Contribution> {
        self.publication
            .contribution_ids()
            .iter()
            .filter_map(|id| self.catalog.contribution(*id))
            .collect()
    }

    /// Distinct creators published here, in first-contribution order.
    pub fn contributors(&self) -> Vec<&'a Creator> {
        let catalog = self.catalog;
        let creators = self
            .contributions()
            .into_iter()
            .filter_map(|contribution| catalog.creator(contribution.creator_id()));
        unique_by(creators, |creator| creator.id())
    }

    /// Titles of every contribution, oldest first.
    ///
    /// Returns `None` when nothing has been published here.
    pub fn contribution_titles(&self) -> Option<Vec<&'a str>> {
        let titles: Vec<&'a str> = self
            .contributions()
            .into_iter()
            .map(Contribution::title)
            .collect();
        if titles.is_empty() {
            return None;
        }
        Some(titles)
    }

    /// Creators with more than [`FREQUENT_CONTRIBUTOR_THRESHOLD`] contributions
    /// here, grouped by creator id, in first-contribution order.
    ///
    /// Returns `None` when no creator crosses the threshold, including when
    /// the publication has no contributions.
    pub fn frequent_contributors(&self) -> Option<Vec<&'a Creator>> {
        let contributions = self.contributions();
        let mut counts: BTreeMap<CreatorId, usize> = BTreeMap::new();
        for contribution in &contributions {
            *counts.entry(contribution.creator_id()).or_default() += 1;
        }

        let frequent: Vec<&'a Creator> = self
            .contributors()
            .into_iter()
            .filter(|creator| {
                counts.get(&creator.id()).copied().unwrap_or_default()
                    > FREQUENT_CONTRIBUTOR_THRESHOLD
            })
            .collect();
        if frequent.is_empty() {
            return None;
        }
        Some(frequent)
    }
}
