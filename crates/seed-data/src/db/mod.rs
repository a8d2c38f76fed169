//! Database integration for seeding placeholder data.
//!
//! The [`Seeder`] creates the `consumers`, `providers` and `requests` tables
//! on demand and fills them with conflict-ignoring inserts.

mod seeder;

pub use seeder::{GroupReport, SeedReport, Seeder};
