use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `comments` table, as it travels on the wire.
///
/// `created_at` is the store's own textual rendering of the insertion
/// timestamp. It is never parsed here.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, FromRow)]
pub struct Comment {
	pub id: i64,
	pub username: String,
	pub content: String,
	pub created_at: String,
}
