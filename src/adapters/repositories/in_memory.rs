use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CommentGateway, StoreError};
use crate::domain::comment::Comment;

/// Test double for the `comments` table: ids come from a counter that never
/// goes back, and `fail` makes every call report a store failure.
#[derive(Default)]
pub struct InMemoryCommentRepository {
	rows: RwLock<Table>,
	fail: AtomicBool,
}

#[derive(Default)]
struct Table {
	last_id: i64,
	comments: BTreeMap<i64, Comment>,
}

impl InMemoryCommentRepository {
	pub fn failing() -> Self {
		let repository = Self::default();
		repository.fail.store(true, Ordering::SeqCst);
		repository
	}

	pub async fn row_count(&self) -> usize {
		self.rows.read().await.comments.len()
	}

	fn check(&self) -> Result<(), StoreError> {
		if self.fail.load(Ordering::SeqCst) {
			return Err(StoreError::Failure("store is unavailable".into()));
		}
		Ok(())
	}
}

#[async_trait]
impl CommentGateway for InMemoryCommentRepository {
	async fn list_all(&self) -> Result<Vec<Comment>, StoreError> {
		self.check()?;
		Ok(self.rows.read().await.comments.values().cloned().collect())
	}

	async fn get_by_id(
		&self,
		id: i64,
	) -> Result<Comment, StoreError> {
		self.check()?;
		self.rows.read().await.comments.get(&id).cloned().ok_or(StoreError::NotFound)
	}

	async fn insert(
		&self,
		username: &str,
		content: &str,
	) -> Result<(), StoreError> {
		self.check()?;
		let mut table = self.rows.write().await;
		table.last_id += 1;
		let id = table.last_id;
		table.comments.insert(
			id,
			Comment {
				id,
				username: username.to_string(),
				content: content.to_string(),
				created_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.6f+00").to_string(),
			},
		);
		Ok(())
	}

	async fn update_content(
		&self,
		id: i64,
		content: &str,
	) -> Result<(), StoreError> {
		self.check()?;
		if let Some(comment) = self.rows.write().await.comments.get_mut(&id) {
			comment.content = content.to_string();
		}
		Ok(())
	}

	async fn delete_by_id(
		&self,
		id: i64,
	) -> Result<(), StoreError> {
		self.check()?;
		self.rows.write().await.comments.remove(&id);
		Ok(())
	}
}
