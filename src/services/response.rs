use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};

use crate::{adapters::repositories::StoreError, domain::comment::Comment};

/// Successful outcome of a comment handler.
#[derive(Debug)]
pub enum ServiceResponse {
	Comment(Comment),
	Comments(Vec<Comment>),
	Created,
	Empty,
}

impl From<Comment> for ServiceResponse {
	fn from(value: Comment) -> Self {
		ServiceResponse::Comment(value)
	}
}

impl From<Vec<Comment>> for ServiceResponse {
	fn from(value: Vec<Comment>) -> Self {
		ServiceResponse::Comments(value)
	}
}

impl IntoResponse for ServiceResponse {
	fn into_response(self) -> Response {
		match self {
			ServiceResponse::Comment(comment) => (StatusCode::OK, Json(comment)).into_response(),
			ServiceResponse::Comments(comments) => (StatusCode::OK, Json(comments)).into_response(),
			ServiceResponse::Created => StatusCode::CREATED.into_response(),
			ServiceResponse::Empty => StatusCode::OK.into_response(),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	/// The request body is not decodable JSON.
	#[error("{0}")]
	MalformedInput(#[from] serde_json::Error),

	#[error("EntityNotFound")]
	EntityNotFound,

	#[error("{0}")]
	StoreFailure(Box<dyn std::error::Error + Send + Sync>),

	#[error("configuration error: {0}")]
	Config(String),

	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),

	#[error("migration error: {0}")]
	Migration(#[from] sqlx::migrate::MigrateError),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<StoreError> for ServiceError {
	fn from(value: StoreError) -> Self {
		match value {
			StoreError::NotFound => ServiceError::EntityNotFound,
			StoreError::Failure(cause) => ServiceError::StoreFailure(cause),
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		match self {
			ServiceError::MalformedInput(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
			ServiceError::EntityNotFound => StatusCode::NOT_FOUND.into_response(),
			err => {
				tracing::error!("Error while handling comment request: {}", err);
				(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
			}
		}
	}
}
