use crate::{
	adapters::repositories::CommentGateway,
	domain::comment::{from_json_object, CreateComment, UpdateComment},
};

use super::response::{ServiceError, ServiceResponse};

/// Per-operation logic behind the `/comments` routes.
///
/// Request bodies arrive as raw bytes so that anything that is not JSON maps
/// to `MalformedInput` regardless of the declared content type.
pub struct CommentHandler;
impl CommentHandler {
	pub async fn list(gateway: &dyn CommentGateway) -> Result<ServiceResponse, ServiceError> {
		let comments = gateway.list_all().await?;
		Ok(comments.into())
	}

	pub async fn get(
		gateway: &dyn CommentGateway,
		id: i64,
	) -> Result<ServiceResponse, ServiceError> {
		let comment = gateway.get_by_id(id).await.map_err(|err| {
			tracing::debug!(id, "comment lookup failed: {}", err);
			err
		})?;
		Ok(comment.into())
	}

	pub async fn create(
		gateway: &dyn CommentGateway,
		body: &[u8],
	) -> Result<ServiceResponse, ServiceError> {
		let command: CreateComment = from_json_object(body)?;
		gateway.insert(&command.username, &command.content).await?;
		Ok(ServiceResponse::Created)
	}

	/// Reports success even when `id` matches no row.
	pub async fn update(
		gateway: &dyn CommentGateway,
		id: i64,
		body: &[u8],
	) -> Result<ServiceResponse, ServiceError> {
		let command: UpdateComment = from_json_object(body)?;
		gateway.update_content(id, &command.content).await?;
		Ok(ServiceResponse::Empty)
	}

	pub async fn delete(
		gateway: &dyn CommentGateway,
		id: i64,
	) -> Result<ServiceResponse, ServiceError> {
		gateway.delete_by_id(id).await?;
		Ok(ServiceResponse::Empty)
	}
}
