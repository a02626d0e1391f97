//! Repositories issuing SQL against the store.
//!
//! Repositories are zero-sized structs with associated async functions that
//! take the pool explicitly.

pub mod plant_repo;

pub use plant_repo::PlantRepo;
