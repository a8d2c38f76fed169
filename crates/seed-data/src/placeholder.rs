//! Placeholder records to seed.
//!
//! A default data set is compiled into the crate from `data/placeholder.json`.
//! Any other JSON file with the same shape can be loaded instead, see
//! [`SeedConfig::data_path`](crate::config::SeedConfig::data_path).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::SeedConfig;
use crate::errors::SeedError;
use crate::models::{Consumer, Provider, Request};

const BUNDLED_JSON: &str = include_str!("../data/placeholder.json");

/// The full set of records for one seeding run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceholderData {
    #[serde(default)]
    pub consumers: Vec<Consumer>,
    #[serde(default)]
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub requests: Vec<Request>,
}

impl PlaceholderData {
    /// Returns the data set shipped with the crate.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::from_json(BUNDLED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::DataIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads the configured data set and validates it.
    pub fn load(config: &SeedConfig) -> Result<Self, SeedError> {
        let data = match &config.data_path {
            Some(path) => {
                info!("Loading placeholder data from {}", path.display());
                Self::from_path(path)?
            }
            None => Self::bundled()?,
        };
        data.validate()?;
        Ok(data)
    }

    /// Checks the constraints the database would otherwise reject mid-seed:
    /// unique emails per group and requests pointing at known ids.
    pub fn validate(&self) -> Result<(), SeedError> {
        ensure_unique_emails("consumer", self.consumers.iter().map(|c| c.email.as_str()))?;
        ensure_unique_emails("provider", self.providers.iter().map(|p| p.email.as_str()))?;

        let consumer_ids: HashSet<Uuid> = self.consumers.iter().map(|c| c.id).collect();
        let provider_ids: HashSet<Uuid> = self.providers.iter().map(|p| p.id).collect();

        for request in &self.requests {
            if !consumer_ids.contains(&request.consumer_id) {
                return Err(SeedError::InvalidData(format!(
                    "request {} references unknown consumer {}",
                    request.request_id, request.consumer_id
                )));
            }
            if !provider_ids.contains(&request.provider_id) {
                return Err(SeedError::InvalidData(format!(
                    "request {} references unknown provider {}",
                    request.request_id, request.provider_id
                )));
            }
        }

        Ok(())
    }
}

fn ensure_unique_emails<'a>(
    kind: &str,
    emails: impl Iterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for email in emails {
        // Postgres UNIQUE on TEXT is case-sensitive; compare the same way.
        if !seen.insert(email) {
            return Err(SeedError::InvalidData(format!(
                "duplicate {kind} email {email}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_data_is_valid() {
        let data = PlaceholderData::bundled().unwrap();

        assert!(!data.consumers.is_empty());
        assert!(!data.providers.is_empty());
        assert!(!data.requests.is_empty());
        data.validate().unwrap();
    }

    #[test]
    fn test_missing_groups_default_to_empty() {
        let data = PlaceholderData::from_json(
            r#"{"consumers": [{
                "id": "410544b2-4001-4271-9855-fec4b6a6442a",
                "name": "A",
                "email": "a@x.com",
                "password": "pw"
            }]}"#,
        )
        .unwrap();

        assert_eq!(data.consumers.len(), 1);
        assert!(data.providers.is_empty());
        assert!(data.requests.is_empty());
        data.validate().unwrap();
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = PlaceholderData::from_json(r#"{"consumers": [{"id": "not-a-uuid"}]}"#);

        assert!(matches!(result, Err(SeedError::DataParse(_))));
    }

    #[test]
    fn test_rejects_duplicate_emails() {
        let mut data = PlaceholderData::bundled().unwrap();
        let email = data.consumers[0].email.clone();
        data.consumers[1].email = email;

        let err = data.validate().unwrap_err();
        assert!(matches!(err, SeedError::InvalidData(_)));
        assert!(err.to_string().contains("duplicate consumer email"));
    }

    #[test]
    fn test_same_email_allowed_across_groups() {
        let mut data = PlaceholderData::bundled().unwrap();
        data.providers[0].email = data.consumers[0].email.clone();

        data.validate().unwrap();
    }

    #[test]
    fn test_rejects_dangling_request_references() {
        let mut data = PlaceholderData::bundled().unwrap();
        data.requests[0].provider_id = Uuid::new_v4();

        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("unknown provider"));

        let mut data = PlaceholderData::bundled().unwrap();
        data.requests[0].consumer_id = Uuid::new_v4();

        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("unknown consumer"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let config = SeedConfig {
            data_path: Some("/nonexistent/placeholder.json".into()),
            ..SeedConfig::default()
        };

        let result = PlaceholderData::load(&config);
        assert!(matches!(result, Err(SeedError::DataIo { .. })));
    }
}
