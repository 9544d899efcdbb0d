pub(crate) mod comment_repository;
#[cfg(test)]
pub(crate) mod in_memory;

use async_trait::async_trait;

use crate::domain::comment::Comment;

pub use comment_repository::CommentRepository;

/// Outcome of a gateway call that did not yield a value.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	/// The lookup ran fine but matched no row.
	#[error("no matching row")]
	NotFound,

	#[error("{0}")]
	Failure(Box<dyn std::error::Error + Send + Sync>),
}

impl From<sqlx::Error> for StoreError {
	fn from(value: sqlx::Error) -> Self {
		match value {
			sqlx::Error::RowNotFound => StoreError::NotFound,
			err => StoreError::Failure(Box::new(err)),
		}
	}
}

/// The only way the service talks to the `comments` table.
///
/// Each operation maps to exactly one parameterized statement. Implementations
/// are shared between concurrent requests, so they must be `Send + Sync`.
#[async_trait]
pub trait CommentGateway: Send + Sync {
	async fn list_all(&self) -> Result<Vec<Comment>, StoreError>;

	/// Yields `StoreError::NotFound` when no row has this id.
	async fn get_by_id(
		&self,
		id: i64,
	) -> Result<Comment, StoreError>;

	async fn insert(
		&self,
		username: &str,
		content: &str,
	) -> Result<(), StoreError>;

	/// Succeeds whether or not a row was changed.
	async fn update_content(
		&self,
		id: i64,
		content: &str,
	) -> Result<(), StoreError>;

	/// Succeeds whether or not a row was removed.
	async fn delete_by_id(
		&self,
		id: i64,
	) -> Result<(), StoreError>;
}
