use std::{
	net::{Ipv4Addr, SocketAddr, SocketAddrV4},
	str::FromStr,
};

use axum::http::HeaderValue;
use sqlx::postgres::PgConnectOptions;

use crate::services::response::ServiceError;

const DEFAULT_SERVER_IP_PORT: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
const DEFAULT_ALLOW_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";
const DEFAULT_MAX_CONNECTIONS: u32 = 30;

#[derive(Debug, Clone)]
pub struct Config {
	/// Default tracing filter, used when `RUST_LOG` is not set
	pub log_level: String,

	/// Address the server is listening on
	pub server_ip_port: SocketAddr,
	pub allow_origins: Vec<HeaderValue>,
	pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
	/// Full connection URL; takes precedence over the individual parts
	pub url: Option<String>,
	pub host: String,
	pub port: u16,
	pub user: String,
	pub password: String,
	pub name: String,
	pub max_connections: u32,
	pub run_migrations: bool,
}

impl DatabaseConfig {
	pub fn connect_options(&self) -> Result<PgConnectOptions, ServiceError> {
		match &self.url {
			Some(url) => url.parse::<PgConnectOptions>().map_err(|err| ServiceError::Config(format!("DATABASE_URL: {err}"))),
			None => Ok(PgConnectOptions::new()
				.host(&self.host)
				.port(self.port)
				.username(&self.user)
				.password(&self.password)
				.database(&self.name)),
		}
	}
}

impl Config {
	/// Reads the process environment, after loading `.env` if there is one.
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_vars(|key| std::env::var(key).ok())
	}

	pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let required = |key: &'static str| var(key).ok_or_else(|| ServiceError::Config(format!("{key} must be set")));

		let url = var("DATABASE_URL");
		let (user, name) = match &url {
			Some(_) => (var("DB_USER").unwrap_or_default(), var("DB_NAME").unwrap_or_default()),
			None => (required("DB_USER")?, required("DB_NAME")?),
		};

		let database = DatabaseConfig {
			url,
			host: var("DB_HOST").unwrap_or("localhost".to_string()),
			port: parse_or("DB_PORT", var("DB_PORT"), 5432)?,
			user,
			password: var("DB_PASSWORD").unwrap_or_default(),
			name,
			max_connections: parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
			run_migrations: parse_or("RUN_MIGRATIONS", var("RUN_MIGRATIONS"), false)?,
		};

		let allow_origins = var("ALLOW_ORIGINS")
			.unwrap_or(DEFAULT_ALLOW_ORIGINS.to_string())
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(|origin| origin.parse::<HeaderValue>().map_err(|err| ServiceError::Config(format!("ALLOW_ORIGINS: {origin}: {err}"))))
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Config {
			log_level: var("LOG_LEVEL").unwrap_or("info".to_string()),
			server_ip_port: parse_or("SERVER_IP_PORT", var("SERVER_IP_PORT"), DEFAULT_SERVER_IP_PORT)?,
			allow_origins,
			database,
		})
	}
}

fn parse_or<T>(
	key: &str,
	value: Option<String>,
	default: T,
) -> Result<T, ServiceError>
where
	T: FromStr,
	T::Err: std::fmt::Display,
{
	match value {
		None => Ok(default),
		Some(raw) => raw.trim().parse().map_err(|err| ServiceError::Config(format!("{key}: {raw:?}: {err}"))),
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::Config;
	use crate::services::response::ServiceError;

	fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ServiceError> {
		let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		Config::from_vars(|key| vars.get(key).cloned())
	}

	#[test]
	fn test_defaults_from_parts() {
		let config = config_from(&[("DB_USER", "root"), ("DB_PASSWORD", "p@ss:word"), ("DB_NAME", "comments")]).unwrap();

		assert_eq!(config.server_ip_port.port(), 8080);
		assert_eq!(config.log_level, "info");
		assert_eq!(config.allow_origins.len(), 2);
		assert_eq!(config.database.host, "localhost");
		assert_eq!(config.database.port, 5432);
		assert_eq!(config.database.password, "p@ss:word");
		assert_eq!(config.database.max_connections, 30);
		assert!(!config.database.run_migrations);
		assert!(config.database.connect_options().is_ok());
	}

	#[test]
	fn test_database_url_makes_parts_optional() {
		let config = config_from(&[("DATABASE_URL", "postgres://root:secret@db:5433/comments"), ("RUN_MIGRATIONS", "true")]).unwrap();
		assert!(config.database.run_migrations);
		assert!(config.database.connect_options().is_ok());
	}

	#[test]
	fn test_missing_required_part() {
		let err = config_from(&[("DB_USER", "root")]).unwrap_err();
		assert!(matches!(err, ServiceError::Config(message) if message.contains("DB_NAME")));
	}

	#[test]
	fn test_unparsable_values() {
		assert!(config_from(&[("DB_USER", "root"), ("DB_NAME", "c"), ("DB_PORT", "port")]).is_err());
		assert!(config_from(&[("DB_USER", "root"), ("DB_NAME", "c"), ("SERVER_IP_PORT", "localhost")]).is_err());
		assert!(config_from(&[("DB_USER", "root"), ("DB_NAME", "c"), ("ALLOW_ORIGINS", "http://a\u{1}b")]).is_err());
	}
}
