//! Catalog repository and relationship registration.
//!
//! # Responsibility
//! - Insert validated creators, publications and contributions.
//! - Register each contribution on its creator, its publication and the
//!   registry atomically.
//! - Hand out read views for derived queries.
//!
//! # Invariants
//! - Existence of referenced entities is checked before any mutation.
//! - Registration is idempotent; repeating it never duplicates links.
//! - Entities are never removed except by `reset`, which drops everything.

use crate::model::contribution::{Contribution, ContributionId};
use crate::model::creator::{Creator, CreatorId};
use crate::model::publication::{Publication, PublicationId};
use crate::model::validation::ValidationError;
use crate::query::creator::CreatorView;
use crate::query::publication::PublicationView;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Catalog write and lookup errors.
///
/// `Unknown*` variants mean a relationship field was given an id that does
/// not name an entity in this catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    UnknownCreator(CreatorId),
    UnknownPublication(PublicationId),
    UnknownContribution(ContributionId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownCreator(id) => write!(f, "creator not found: {id}"),
            Self::UnknownPublication(id) => write!(f, "publication not found: {id}"),
            Self::UnknownContribution(id) => write!(f, "contribution not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::UnknownCreator(_) | Self::UnknownPublication(_) | Self::UnknownContribution(_) => {
                None
            }
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory owner of all entities plus the ordered contribution registry.
#[derive(Debug, Default)]
pub struct Catalog {
    creators: BTreeMap<CreatorId, Creator>,
    publications: BTreeMap<PublicationId, Publication>,
    contributions: BTreeMap<ContributionId, Contribution>,
    registry: Vec<ContributionId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a creator.
    ///
    /// # Errors
    /// - `Validation(EmptyCreatorName)` when `name` is empty.
    pub fn add_creator(&mut self, name: impl Into<String>) -> RepoResult<CreatorId> {
        let creator = Creator::new(name).map_err(rejected("creator"))?;
        let id = creator.id();
        self.creators.insert(id, creator);
        debug!("event=creator_added module=catalog status=ok creator_id={id}");
        Ok(id)
    }

    /// Creates a publication.
    ///
    /// # Errors
    /// - `Validation(PublicationNameLength)` when `name` is outside 2..=16 characters.
    /// - `Validation(EmptyCategory)` when `category` is empty.
    pub fn add_publication(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<PublicationId> {
        let publication = Publication::new(name, category).map_err(rejected("publication"))?;
        let id = publication.id();
        self.publications.insert(id, publication);
        debug!("event=publication_added module=catalog status=ok publication_id={id}");
        Ok(id)
    }

    /// Constructs a contribution and registers it everywhere it must appear.
    ///
    /// # Contract
    /// - Checks `creator`, then `publication`, then `title`; the first failure
    ///   is returned and nothing is written.
    /// - On success the new id is linked on the creator, on the publication
    ///   and appended to the registry before returning.
    pub fn create_contribution(
        &mut self,
        creator: CreatorId,
        publication: PublicationId,
        title: impl Into<String>,
    ) -> RepoResult<ContributionId> {
        self.require_creator(creator)?;
        self.require_publication(publication)?;
        let contribution =
            Contribution::new(creator, publication, title).map_err(rejected("contribution"))?;

        let id = contribution.id();
        self.contributions.insert(id, contribution);
        self.link(id, creator, publication);
        debug!(
            "event=contribution_created module=catalog status=ok contribution_id={id} creator_id={creator} publication_id={publication}"
        );
        Ok(id)
    }

    /// Opens the creator-side factory for `creator`.
    pub fn creator_mut(&mut self, creator: CreatorId) -> RepoResult<CreatorMut<'_>> {
        self.require_creator(creator)?;
        Ok(CreatorMut {
            catalog: self,
            creator,
        })
    }

    /// Re-runs registration for an existing contribution.
    ///
    /// Idempotent: links already present are left alone.
    pub fn register_links(&mut self, id: ContributionId) -> RepoResult<()> {
        let contribution = self.contribution_or_err(id)?;
        let creator = contribution.creator_id();
        let publication = contribution.publication_id();
        self.require_creator(creator)?;
        self.require_publication(publication)?;
        self.link(id, creator, publication);
        Ok(())
    }

    /// Points `contribution` at another creator and moves the backlink.
    pub fn reassign_creator(
        &mut self,
        contribution: ContributionId,
        creator: CreatorId,
    ) -> RepoResult<()> {
        self.require_creator(creator)?;
        let previous = self
            .contributions
            .get_mut(&contribution)
            .ok_or(RepoError::UnknownContribution(contribution))?
            .replace_creator(creator);
        if previous == creator {
            return Ok(());
        }

        if let Some(old) = self.creators.get_mut(&previous) {
            old.unlink_contribution(contribution);
        }
        if let Some(new) = self.creators.get_mut(&creator) {
            new.link_contribution(contribution);
        }
        debug!(
            "event=contribution_reassigned module=catalog status=ok contribution_id={contribution} field=creator"
        );
        Ok(())
    }

    /// Points `contribution` at another publication and moves the backlink.
    pub fn reassign_publication(
        &mut self,
        contribution: ContributionId,
        publication: PublicationId,
    ) -> RepoResult<()> {
        self.require_publication(publication)?;
        let previous = self
            .contributions
            .get_mut(&contribution)
            .ok_or(RepoError::UnknownContribution(contribution))?
            .replace_publication(publication);
        if previous == publication {
            return Ok(());
        }

        if let Some(old) = self.publications.get_mut(&previous) {
            old.unlink_contribution(contribution);
        }
        if let Some(new) = self.publications.get_mut(&publication) {
            new.link_contribution(contribution);
        }
        debug!(
            "event=contribution_reassigned module=catalog status=ok contribution_id={contribution} field=publication"
        );
        Ok(())
    }

    /// Attempts a title write; returns whether it changed anything.
    ///
    /// Titles are fixed at construction, so a known id always yields `false`.
    pub fn set_contribution_title(
        &mut self,
        contribution: ContributionId,
        title: impl Into<String>,
    ) -> RepoResult<bool> {
        let entry = self
            .contributions
            .get_mut(&contribution)
            .ok_or(RepoError::UnknownContribution(contribution))?;
        Ok(entry.set_title(title))
    }

    /// Mutable access for publication setters.
    pub fn publication_mut(&mut self, id: PublicationId) -> RepoResult<&mut Publication> {
        self.publications
            .get_mut(&id)
            .ok_or(RepoError::UnknownPublication(id))
    }

    pub fn creator(&self, id: CreatorId) -> Option<&Creator> {
        self.creators.get(&id)
    }

    pub fn publication(&self, id: PublicationId) -> Option<&Publication> {
        self.publications.get(&id)
    }

    pub fn contribution(&self, id: ContributionId) -> Option<&Contribution> {
        self.contributions.get(&id)
    }

    /// Every contribution ever created, in creation order.
    pub fn contributions(&self) -> impl Iterator<Item = &Contribution> + '_ {
        self.registry
            .iter()
            .filter_map(|id| self.contributions.get(id))
    }

    /// Registry ids in creation order.
    pub fn contribution_ids(&self) -> &[ContributionId] {
        &self.registry
    }

    pub fn creator_count(&self) -> usize {
        self.creators.len()
    }

    pub fn publication_count(&self) -> usize {
        self.publications.len()
    }

    pub fn contribution_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty() && self.publications.is_empty() && self.registry.is_empty()
    }

    /// Read view over one creator's derived queries.
    pub fn creator_view(&self, id: CreatorId) -> RepoResult<CreatorView<'_>> {
        let creator = self.creators.get(&id).ok_or(RepoError::UnknownCreator(id))?;
        Ok(CreatorView::new(self, creator))
    }

    /// Read view over one publication's derived queries.
    pub fn publication_view(&self, id: PublicationId) -> RepoResult<PublicationView<'_>> {
        let publication = self
            .publications
            .get(&id)
            .ok_or(RepoError::UnknownPublication(id))?;
        Ok(PublicationView::new(self, publication))
    }

    /// Drops every entity and empties the registry.
    pub fn reset(&mut self) {
        let dropped = self.registry.len();
        self.creators.clear();
        self.publications.clear();
        self.contributions.clear();
        self.registry.clear();
        info!("event=catalog_reset module=catalog status=ok dropped_contributions={dropped}");
    }

    fn link(&mut self, id: ContributionId, creator: CreatorId, publication: PublicationId) {
        if let Some(entry) = self.creators.get_mut(&creator) {
            entry.link_contribution(id);
        }
        if let Some(entry) = self.publications.get_mut(&publication) {
            entry.link_contribution(id);
        }
        if !self.registry.contains(&id) {
            self.registry.push(id);
        }
    }

    fn require_creator(&self, id: CreatorId) -> RepoResult<()> {
        if self.creators.contains_key(&id) {
            return Ok(());
        }
        warn!("event=lookup_failed module=catalog status=error kind=creator id={id}");
        Err(RepoError::UnknownCreator(id))
    }

    fn require_publication(&self, id: PublicationId) -> RepoResult<()> {
        if self.publications.contains_key(&id) {
            return Ok(());
        }
        warn!("event=lookup_failed module=catalog status=error kind=publication id={id}");
        Err(RepoError::UnknownPublication(id))
    }

    fn contribution_or_err(&self, id: ContributionId) -> RepoResult<&Contribution> {
        self.contributions
            .get(&id)
            .ok_or(RepoError::UnknownContribution(id))
    }
}

/// Creator-side factory handle returned by [`Catalog::creator_mut`].
pub struct CreatorMut<'a> {
    catalog: &'a mut Catalog,
    creator: CreatorId,
}

impl CreatorMut<'_> {
    pub fn id(&self) -> CreatorId {
        self.creator
    }

    /// Writes a new contribution by this creator.
    ///
    /// Registration happens inside [`Catalog::create_contribution`]; this
    /// handle adds no links of its own.
    pub fn add_contribution(
        &mut self,
        publication: PublicationId,
        title: impl Into<String>,
    ) -> RepoResult<ContributionId> {
        self.catalog
            .create_contribution(self.creator, publication, title)
    }
}

fn rejected(entity: &'static str) -> impl Fn(ValidationError) -> RepoError {
    move |err| {
        warn!(
            "event=validation_rejected module=catalog status=error entity={entity} code={}",
            err.code()
        );
        RepoError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CreatorId, PublicationId, RepoError};
    use crate::model::validation::ValidationError;

    fn seeded() -> (Catalog, CreatorId, PublicationId) {
        let mut catalog = Catalog::new();
        let creator = catalog.add_creator("Carry Bradshaw").unwrap();
        let publication = catalog.add_publication("Vogue", "Fashion").unwrap();
        (catalog, creator, publication)
    }

    #[test]
    fn failed_contribution_leaves_catalog_untouched() {
        let (mut catalog, creator, publication) = seeded();

        let err = catalog
            .create_contribution(creator, publication, "Bad")
            .unwrap_err();
        assert_eq!(
            err,
            RepoError::Validation(ValidationError::TitleLength { chars: 3 })
        );
        assert_eq!(catalog.contribution_count(), 0);
        assert!(catalog.creator(creator).unwrap().contribution_ids().is_empty());
        assert!(catalog
            .publication(publication)
            .unwrap()
            .contribution_ids()
            .is_empty());
    }

    #[test]
    fn unknown_relationship_ids_are_rejected_before_title() {
        let (mut catalog, creator, publication) = seeded();
        let (_, foreign_creator, foreign_publication) = seeded();

        assert_eq!(
            catalog.create_contribution(foreign_creator, publication, "Bad"),
            Err(RepoError::UnknownCreator(foreign_creator))
        );
        assert_eq!(
            catalog.create_contribution(creator, foreign_publication, "Bad"),
            Err(RepoError::UnknownPublication(foreign_publication))
        );
    }

    #[test]
    fn register_links_is_idempotent() {
        let (mut catalog, creator, publication) = seeded();
        let id = catalog
            .create_contribution(creator, publication, "Idempotent Links")
            .unwrap();

        catalog.register_links(id).unwrap();
        catalog.register_links(id).unwrap();

        assert_eq!(catalog.contribution_ids(), &[id]);
        assert_eq!(catalog.creator(creator).unwrap().contribution_ids(), &[id]);
        assert_eq!(
            catalog.publication(publication).unwrap().contribution_ids(),
            &[id]
        );
    }

    #[test]
    fn reassign_creator_moves_backlink() {
        let (mut catalog, creator, publication) = seeded();
        let other = catalog.add_creator("Samantha Jones").unwrap();
        let id = catalog
            .create_contribution(creator, publication, "Moving Article")
            .unwrap();

        catalog.reassign_creator(id, other).unwrap();

        assert_eq!(catalog.contribution(id).unwrap().creator_id(), other);
        assert!(catalog.creator(creator).unwrap().contribution_ids().is_empty());
        assert_eq!(catalog.creator(other).unwrap().contribution_ids(), &[id]);
    }

    #[test]
    fn reassign_publication_rejects_unknown_target() {
        let (mut catalog, creator, publication) = seeded();
        let id = catalog
            .create_contribution(creator, publication, "Staying Put")
            .unwrap();
        let (_, _, foreign) = seeded();

        let err = catalog.reassign_publication(id, foreign).unwrap_err();
        assert_eq!(err, RepoError::UnknownPublication(foreign));
        assert_eq!(
            catalog.contribution(id).unwrap().publication_id(),
            publication
        );
    }

    #[test]
    fn reset_empties_everything() {
        let (mut catalog, creator, publication) = seeded();
        catalog
            .create_contribution(creator, publication, "Soon Forgotten")
            .unwrap();

        catalog.reset();

        assert!(catalog.is_empty());
        assert_eq!(catalog.contributions().count(), 0);
        assert!(catalog.creator(creator).is_none());
    }

    #[test]
    fn repo_error_exposes_validation_source() {
        use std::error::Error;

        let err = RepoError::from(ValidationError::EmptyCategory);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "publication category must not be empty");
    }
}
