//! Plain placeholder records, as read from the seed data file.
//!
//! Passwords are held in plaintext here; they are hashed by the
//! [`Seeder`](crate::db::Seeder) right before insertion and never stored as-is.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Someone who requests services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Consumer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Someone who offers a service to consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub title: String,
    pub description: String,
    pub speciality: String,
}

/// A consumer's request addressed to a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Request {
    pub request_id: Uuid,
    pub consumer_id: Uuid,
    pub provider_id: Uuid,
    pub request_description: String,
}

/// The entity groups seeded, in seeding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityGroup {
    Consumers,
    Providers,
    Requests,
}

impl EntityGroup {
    pub const ALL: [EntityGroup; 3] = [Self::Consumers, Self::Providers, Self::Requests];

    /// Table name, which doubles as the group's name in log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consumers => "consumers",
            Self::Providers => "providers",
            Self::Requests => "requests",
        }
    }
}

impl fmt::Display for EntityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
