//! Process-wide catalog instance.
//!
//! The shared catalog is created lazily on first access and lives for the
//! rest of the process. `reset_shared_catalog` is the explicit teardown used
//! to isolate tests.

use crate::repo::catalog::Catalog;
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

static SHARED_CATALOG: Lazy<Mutex<Catalog>> = Lazy::new(|| Mutex::new(Catalog::new()));

/// Runs `f` with exclusive access to the process-wide catalog.
///
/// Lock poisoning is ignored: catalog writes validate before mutating.
pub fn with_shared_catalog<T>(f: impl FnOnce(&mut Catalog) -> T) -> T {
    let mut guard = SHARED_CATALOG
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Clears the process-wide catalog.
pub fn reset_shared_catalog() {
    with_shared_catalog(Catalog::reset);
}
