use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

use crate::application::errors::ApiError;
use crate::application::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct ImageQuery {
    #[serde(default)]
    id: Option<String>,
}

/// Relay an asset's preview thumbnail. Every upstream failure collapses to
/// a uniform 404; the real cause is only logged.
#[tracing::instrument(skip(state, query))]
pub(crate) async fn image(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Result<Response, ApiError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing ?id parameter"))?;

    let bytes = state.immich.thumbnail(&id).await.map_err(|err| {
        warn!(asset_id = %id, error = %err, "thumbnail fetch failed");
        ApiError::not_found("Image not found")
    })?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{id}.jpg\""),
        )
        .body(Body::from(bytes))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()))
}
