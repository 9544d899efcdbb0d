use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::{config::DatabaseConfig, services::response::ServiceError};

/// Opens the pool and checks that the store answers before anything is served.
pub async fn connection_pool(config: &DatabaseConfig) -> Result<PgPool, ServiceError> {
	let pool = PgPoolOptions::new()
		.max_connections(config.max_connections)
		.connect_with(config.connect_options()?)
		.await
		.map_err(|err| {
			tracing::error!("Error occurred while connecting to the database : {:?}", err);
			err
		})?;

	if config.run_migrations {
		tracing::info!("Applying migrations...");
		sqlx::migrate!("./migrations").run(&pool).await?;
	}
	Ok(pool)
}
