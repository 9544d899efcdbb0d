use axum::{
	extract::{FromRequestParts, Path, State},
	http::{request::Parts, StatusCode},
	routing::{get, MethodRouter},
	Router,
};
use axum_macros::debug_handler;
use bytes::Bytes;

use crate::{
	dependencies::AppState,
	services::{
		handlers::CommentHandler,
		response::{ServiceError, ServiceResponse},
	},
};

/// The `{id}` path segment. Anything that is not a base-10 integer cannot name
/// a comment, so it is treated as an unmatched route.
pub struct CommentId(pub i64);

impl<S> FromRequestParts<S> for CommentId
where
	S: Send + Sync,
{
	type Rejection = StatusCode;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let Path(raw): Path<String> = Path::from_request_parts(parts, state).await.map_err(|_| StatusCode::NOT_FOUND)?;
		raw.parse().map(Self).map_err(|_| StatusCode::NOT_FOUND)
	}
}

#[debug_handler]
async fn list_comments(State(state): State<AppState>) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::list(state.comments()).await
}

#[debug_handler]
async fn get_comment(
	State(state): State<AppState>,
	CommentId(id): CommentId,
) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::get(state.comments(), id).await
}

#[debug_handler]
async fn create_comment(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::create(state.comments(), &body).await
}

#[debug_handler]
async fn update_comment(
	State(state): State<AppState>,
	CommentId(id): CommentId,
	body: Bytes,
) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::update(state.comments(), id, &body).await
}

#[debug_handler]
async fn delete_comment(
	State(state): State<AppState>,
	CommentId(id): CommentId,
) -> Result<ServiceResponse, ServiceError> {
	CommentHandler::delete(state.comments(), id).await
}

async fn not_found() -> StatusCode {
	StatusCode::NOT_FOUND
}

fn collection() -> MethodRouter<AppState> {
	get(list_comments).post(create_comment).fallback(not_found)
}

/// Routes under the `/comments` prefix. The collection answers both with and
/// without a trailing slash.
pub fn comment_routers() -> Router<AppState> {
	Router::new()
		.route("/comments", collection())
		.route("/comments/", collection())
		.route("/comments/{id}", get(get_comment).put(update_comment).delete(delete_comment).fallback(not_found))
}
