//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the admin write operations on that entity

pub mod page;
pub mod product;
pub mod section;
pub mod tag;
