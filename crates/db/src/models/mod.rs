//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row, with its JSON shape
//! - `Deserialize` request DTOs for create and partial update
//! - The validated inputs the repositories accept

pub mod plant;
