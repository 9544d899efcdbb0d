use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::repositories::{CommentGateway, CommentRepository};

/// Everything a handler may touch, built once at startup and cloned into each
/// request.
#[derive(Clone)]
pub struct AppState {
	comments: Arc<dyn CommentGateway>,
}

impl AppState {
	pub fn new(comments: Arc<dyn CommentGateway>) -> Self {
		Self { comments }
	}

	pub fn comments(&self) -> &dyn CommentGateway {
		self.comments.as_ref()
	}
}

impl From<PgPool> for AppState {
	fn from(value: PgPool) -> Self {
		AppState::new(Arc::new(CommentRepository::new(value)))
	}
}
