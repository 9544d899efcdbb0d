pub mod adapters;
pub mod config;
pub mod database;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;

use axum::{http::Method, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use crate::{config::Config, database::connection_pool, dependencies::AppState, routes::create_routes, services::response::ServiceError};

/// Route table plus the HTTP layers every request goes through.
pub fn app(
	config: &Config,
	state: AppState,
) -> Router {
	create_routes(state).layer(
		ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(config.allow_origins.clone()))
				.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]),
		),
	)
}

pub async fn run(config: Config) -> Result<(), ServiceError> {
	tracing::info!("Connections Are Being Pooled...");
	let pool = connection_pool(&config.database).await?;

	let app = app(&config, pool.clone().into());

	let listener = TcpListener::bind(config.server_ip_port).await?;
	tracing::info!("Start Web Server on {}...", config.server_ip_port);
	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	pool.close().await;
	tracing::info!("Server shutdown complete");
	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = tokio::signal::ctrl_c().await {
			tracing::error!("Failed to listen for Ctrl+C: {}", err);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(err) => {
				tracing::error!("Failed to listen for SIGTERM: {}", err);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => tracing::info!("Received Ctrl+C, starting shutdown"),
		_ = terminate => tracing::info!("Received SIGTERM, starting shutdown"),
	}
}
