//! In-memory repository owning every entity and the contribution registry.
//!
//! # Responsibility
//! - Be the only construction point for entities.
//! - Keep creator, publication and registry views of each contribution in
//!   step with each other.
//!
//! # Invariants
//! - Every lookup failure is a semantic error (`Unknown*`), never a panic.
//! - A failed write leaves the catalog exactly as it was.
//! - The registry lists each contribution once, in creation order.

pub mod catalog;
pub mod shared;
