//! Domain types and rules shared by the plant service crates.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod error;
pub mod patch;
pub mod plant;
pub mod price;
pub mod types;
