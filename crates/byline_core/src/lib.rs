//! Core domain logic for Byline.
//! This crate owns the creator/publication/contribution model and every
//! relationship invariant between them.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::contribution::{Contribution, ContributionId};
pub use model::creator::{Creator, CreatorId};
pub use model::publication::{Publication, PublicationId};
pub use model::set_once::SetOnce;
pub use model::validation::ValidationError;
pub use query::creator::CreatorView;
pub use query::publication::{PublicationView, FREQUENT_CONTRIBUTOR_THRESHOLD};
pub use repo::catalog::{Catalog, CreatorMut, RepoError, RepoResult};
pub use repo::shared::{reset_shared_catalog, with_shared_catalog};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
