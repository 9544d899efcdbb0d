use async_trait::async_trait;
use sqlx::PgPool;

use super::{CommentGateway, StoreError};
use crate::domain::comment::Comment;

// `created_at` is handed out as the store's text rendering, and `id` is widened
// so a SERIAL column decodes the same as a BIGSERIAL one.
const SELECT_COMMENTS: &str = "SELECT id::BIGINT AS id, username, content, created_at::TEXT AS created_at FROM comments";
const SELECT_COMMENT_BY_ID: &str =
	"SELECT id::BIGINT AS id, username, content, created_at::TEXT AS created_at FROM comments WHERE id = $1";

pub struct CommentRepository {
	pool: PgPool,
}

impl CommentRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}
}

#[async_trait]
impl CommentGateway for CommentRepository {
	async fn list_all(&self) -> Result<Vec<Comment>, StoreError> {
		let comments = sqlx::query_as::<_, Comment>(SELECT_COMMENTS).fetch_all(&self.pool).await?;
		Ok(comments)
	}

	async fn get_by_id(
		&self,
		id: i64,
	) -> Result<Comment, StoreError> {
		sqlx::query_as::<_, Comment>(SELECT_COMMENT_BY_ID)
			.bind(id)
			.fetch_optional(&self.pool)
			.await?
			.ok_or(StoreError::NotFound)
	}

	async fn insert(
		&self,
		username: &str,
		content: &str,
	) -> Result<(), StoreError> {
		sqlx::query("INSERT INTO comments (username, content) VALUES ($1, $2)")
			.bind(username)
			.bind(content)
			.execute(&self.pool)
			.await?;
		Ok(())
	}

	async fn update_content(
		&self,
		id: i64,
		content: &str,
	) -> Result<(), StoreError> {
		let result = sqlx::query("UPDATE comments SET content = $1 WHERE id = $2")
			.bind(content)
			.bind(id)
			.execute(&self.pool)
			.await?;
		tracing::debug!(id, rows_affected = result.rows_affected(), "comment content updated");
		Ok(())
	}

	async fn delete_by_id(
		&self,
		id: i64,
	) -> Result<(), StoreError> {
		let result = sqlx::query("DELETE FROM comments WHERE id = $1").bind(id).execute(&self.pool).await?;
		tracing::debug!(id, rows_affected = result.rows_affected(), "comment deleted");
		Ok(())
	}
}
