mod comments;

use axum::{routing::get, Router};

use crate::dependencies::AppState;

const GREETING: &str = "Hello, comment server API !";

async fn index() -> &'static str {
	GREETING
}

/// The full route table. Unmatched requests fall through to axum's default
/// 404 with an empty body.
pub fn create_routes(state: AppState) -> Router {
	Router::new()
		.route("/", get(index))
		.merge(comments::comment_routers())
		.with_state(state)
}
