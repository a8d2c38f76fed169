//! Placeholder data seeding for consult.
//!
//! This crate creates the `consumers`, `providers` and `requests` tables and
//! fills them with fixed placeholder records for development and testing.
//! Passwords are bcrypt-hashed before they reach the database.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let data = PlaceholderData::load(&config)?;
//! let report = Seeder::new(pool)
//!     .with_hash_cost(config.hash_cost)
//!     .seed_all(&data)
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod password;
pub mod placeholder;

pub use errors::SeedError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{GroupReport, SeedReport, Seeder};
    pub use crate::errors::SeedError;
    pub use crate::models::{Consumer, EntityGroup, Provider, Request};
    pub use crate::password::{hash_password, verify_password};
    pub use crate::placeholder::PlaceholderData;
}
