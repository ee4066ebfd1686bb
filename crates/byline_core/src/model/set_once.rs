//! Write-once value cell.
//!
//! # Invariants
//! - Once a value is stored it is never replaced.
//! - Writes after the first are ignored, not reported as errors.

use serde::Serialize;

/// Holds a value that can be assigned at most once.
///
/// Serializes as the inner value, or `null` while unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SetOnce<T> {
    value: Option<T>,
}

impl<T> SetOnce<T> {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Creates a cell that is already set.
    pub fn with_value(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Stores `value` if the cell is empty.
    ///
    /// Returns `true` when the value was stored, `false` when the cell was
    /// already set and `value` was dropped.
    pub fn set(&mut self, value: T) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for SetOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}
