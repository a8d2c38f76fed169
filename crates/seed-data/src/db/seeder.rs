//! Database seeding utilities.

use futures::future::try_join_all;
use sqlx::PgPool;
use tracing::{error, info};

use crate::errors::SeedError;
use crate::models::{Consumer, EntityGroup, Provider, Request};
use crate::password::{DEFAULT_HASH_COST, hash_password_blocking};
use crate::placeholder::PlaceholderData;

/// Outcome of seeding one entity group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupReport {
    /// Number of insert statements issued.
    pub attempted: usize,
    /// Rows actually written; the rest hit an existing primary key.
    pub inserted: u64,
}

impl GroupReport {
    fn from_rows_affected(rows: &[u64]) -> Self {
        Self {
            attempted: rows.len(),
            inserted: rows.iter().sum(),
        }
    }

    /// Rows skipped by the conflict clause.
    pub fn skipped(&self) -> u64 {
        self.attempted as u64 - self.inserted
    }
}

/// Outcome of a full [`Seeder::seed_all`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub consumers: GroupReport,
    pub providers: GroupReport,
    pub requests: GroupReport,
}

impl SeedReport {
    pub fn group(&self, group: EntityGroup) -> GroupReport {
        match group {
            EntityGroup::Consumers => self.consumers,
            EntityGroup::Providers => self.providers,
            EntityGroup::Requests => self.requests,
        }
    }
}

/// Database seeder for the placeholder consumers, providers and requests.
pub struct Seeder {
    pool: PgPool,
    hash_cost: u32,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    /// Sets the bcrypt cost factor for seeded passwords.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Seeds every group in dependency order: consumers, providers, requests.
    ///
    /// Stops at the first group that fails; earlier groups stay seeded.
    pub async fn seed_all(&self, data: &PlaceholderData) -> Result<SeedReport, SeedError> {
        let consumers = self.seed_consumers(&data.consumers).await?;
        let providers = self.seed_providers(&data.providers).await?;
        let requests = self.seed_requests(&data.requests).await?;

        Ok(SeedReport {
            consumers,
            providers,
            requests,
        })
    }

    /// Creates the `consumers` table if needed and inserts the given consumers.
    pub async fn seed_consumers(&self, consumers: &[Consumer]) -> Result<GroupReport, SeedError> {
        logged(EntityGroup::Consumers, self.try_seed_consumers(consumers)).await
    }

    async fn try_seed_consumers(&self, consumers: &[Consumer]) -> Result<GroupReport, SeedError> {
        self.ensure_uuid_extension().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS consumers (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        info!(r#"Created "consumers" table"#);

        let rows = try_join_all(consumers.iter().map(|c| self.insert_consumer(c))).await?;
        let report = GroupReport::from_rows_affected(&rows);

        info!("Seeded {} consumers", report.attempted);
        Ok(report)
    }

    async fn insert_consumer(&self, consumer: &Consumer) -> Result<u64, SeedError> {
        let password_hash =
            hash_password_blocking(consumer.password.clone(), self.hash_cost).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO consumers (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(consumer.id)
        .bind(&consumer.name)
        .bind(&consumer.email)
        .bind(&password_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Creates the `providers` table if needed and inserts the given providers.
    pub async fn seed_providers(&self, providers: &[Provider]) -> Result<GroupReport, SeedError> {
        logged(EntityGroup::Providers, self.try_seed_providers(providers)).await
    }

    async fn try_seed_providers(&self, providers: &[Provider]) -> Result<GroupReport, SeedError> {
        self.ensure_uuid_extension().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS providers (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                title VARCHAR(255) NOT NULL,
                description TEXT NOT NULL,
                speciality TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        info!(r#"Created "providers" table"#);

        let rows = try_join_all(providers.iter().map(|p| self.insert_provider(p))).await?;
        let report = GroupReport::from_rows_affected(&rows);

        info!("Seeded {} providers", report.attempted);
        Ok(report)
    }

    async fn insert_provider(&self, provider: &Provider) -> Result<u64, SeedError> {
        let password_hash =
            hash_password_blocking(provider.password.clone(), self.hash_cost).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO providers (id, name, email, password, title, description, speciality)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(provider.id)
        .bind(&provider.name)
        .bind(&provider.email)
        .bind(&password_hash)
        .bind(&provider.title)
        .bind(&provider.description)
        .bind(&provider.speciality)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Creates the `requests` table if needed and inserts the given requests.
    ///
    /// The table references `consumers` and `providers`, so both must exist.
    pub async fn seed_requests(&self, requests: &[Request]) -> Result<GroupReport, SeedError> {
        logged(EntityGroup::Requests, self.try_seed_requests(requests)).await
    }

    async fn try_seed_requests(&self, requests: &[Request]) -> Result<GroupReport, SeedError> {
        self.ensure_uuid_extension().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS requests (
                request_id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                consumer_id UUID NOT NULL REFERENCES consumers (id),
                provider_id UUID NOT NULL REFERENCES providers (id),
                request_description TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        info!(r#"Created "requests" table"#);

        let rows = try_join_all(requests.iter().map(|r| self.insert_request(r))).await?;
        let report = GroupReport::from_rows_affected(&rows);

        info!("Seeded {} requests", report.attempted);
        Ok(report)
    }

    async fn insert_request(&self, request: &Request) -> Result<u64, SeedError> {
        let result = sqlx::query(
            r#"
            INSERT INTO requests (request_id, consumer_id, provider_id, request_description)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (request_id) DO NOTHING
            "#,
        )
        .bind(request.request_id)
        .bind(request.consumer_id)
        .bind(request.provider_id)
        .bind(&request.request_description)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn ensure_uuid_extension(&self) -> Result<(), SeedError> {
        sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Clears all seeded data, keeping the tables.
    ///
    /// **WARNING**: This deletes all data from the tables. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        // Order matters due to foreign key constraints
        for group in EntityGroup::ALL.iter().rev() {
            let exists: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
                .bind(group.as_str())
                .fetch_one(&self.pool)
                .await?;
            if !exists {
                continue;
            }

            let sql = format!("DELETE FROM {group}");
            sqlx::query(&sql).execute(&self.pool).await?;
        }

        info!("All data cleared");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Logs a failed group with a group-specific message and passes the error on.
async fn logged<T>(
    group: EntityGroup,
    seeding: impl Future<Output = Result<T, SeedError>>,
) -> Result<T, SeedError> {
    seeding
        .await
        .inspect_err(|e| error!("Error seeding {group}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_report_counts() {
        let report = GroupReport::from_rows_affected(&[1, 0, 1, 1]);

        assert_eq!(report.attempted, 4);
        assert_eq!(report.inserted, 3);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_empty_group_report() {
        let report = GroupReport::from_rows_affected(&[]);

        assert_eq!(report, GroupReport::default());
        assert_eq!(report.skipped(), 0);
    }

    #[test]
    fn test_seed_report_group_lookup() {
        let report = SeedReport {
            consumers: GroupReport::from_rows_affected(&[1]),
            providers: GroupReport::from_rows_affected(&[1, 1]),
            requests: GroupReport::from_rows_affected(&[0, 0, 0]),
        };

        assert_eq!(report.group(EntityGroup::Consumers).attempted, 1);
        assert_eq!(report.group(EntityGroup::Providers).inserted, 2);
        assert_eq!(report.group(EntityGroup::Requests).skipped(), 3);
    }

    #[tokio::test]
    async fn test_logged_passes_error_through() {
        let result: Result<(), SeedError> = logged(EntityGroup::Consumers, async {
            Err(SeedError::InvalidData("boom".to_string()))
        })
        .await;

        assert!(matches!(result, Err(SeedError::InvalidData(msg)) if msg == "boom"));
    }
}
