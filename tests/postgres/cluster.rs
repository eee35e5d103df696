//! Cluster lifecycle helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use postgresql_embedded::{PostgreSQL, Settings};
use rstest::fixture;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Error type used by cluster setup.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Schema applied to every temporary database.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-01-20-000000_create_todo_items/up.sql");

static SHARED_CLUSTER: OnceLock<ManagedCluster> = OnceLock::new();

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Embedded `PostgreSQL` server kept alive for the whole test binary.
pub struct ManagedCluster {
    runtime: Runtime,
    postgres: PostgreSQL,
}

impl ManagedCluster {
    fn new() -> Result<Self, BoxError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let mut postgres = PostgreSQL::new(Settings::default());
        runtime.block_on(async {
            postgres.setup().await?;
            postgres.start().await
        })?;
        Ok(Self { runtime, postgres })
    }

    /// Returns the connection URL of `database`.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.postgres.settings().url(database)
    }

    /// Creates an empty database with the todo schema applied and returns
    /// its URL.
    pub fn migrated_database(&self, database: &str) -> Result<String, BoxError> {
        self.runtime
            .block_on(self.postgres.create_database(database))?;
        let url = self.database_url(database);
        let mut conn = PgConnection::establish(&url)?;
        conn.batch_execute(CREATE_SCHEMA_SQL)?;
        Ok(url)
    }
}

/// Provides the shared cluster, starting it on first use.
#[fixture]
pub fn postgres_cluster() -> PostgresCluster {
    SHARED_CLUSTER.get_or_init(|| match ManagedCluster::new() {
        Ok(cluster) => cluster,
        Err(err) => panic!("SKIP-TEST-CLUSTER: failed to start PostgreSQL: {err}"),
    })
}
