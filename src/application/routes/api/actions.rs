use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::{debug, info};

use crate::application::errors::ApiError;
use crate::application::routes::api::ActionRequest;
use crate::application::state::AppState;

#[derive(Debug, Serialize)]
pub(crate) struct ActionResponse {
    pub success: bool,
}

fn ok() -> Json<ActionResponse> {
    Json(ActionResponse { success: true })
}

/// Acknowledge a like. Intentionally performs no upstream call: the
/// favorite-marking call (`ImmichClient::set_favorite`) exists but stays
/// disconnected until the product decides likes should mark favorites.
/// See DESIGN.md.
#[tracing::instrument(skip(request))]
pub(crate) async fn like(
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let id = request.require_id()?;
    debug!(asset_id = %id, "like acknowledged");
    Ok(ok())
}

/// Acknowledge a dislike. A dislike means "skip"; there is nothing to tell
/// the photo service.
#[tracing::instrument(skip(request))]
pub(crate) async fn dislike(
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let id = request.require_id()?;
    debug!(asset_id = %id, "dislike acknowledged");
    Ok(ok())
}

/// Add the asset to the configured superlike album.
#[tracing::instrument(skip(state, request))]
pub(crate) async fn superlike(
    State(state): State<AppState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let id = request.require_id()?;

    let Some(album_id) = state.superlike_album_id.as_deref() else {
        return Err(ApiError::misconfigured(
            "Server misconfigured: no superlike album id",
        ));
    };

    state
        .immich
        .add_to_album(album_id, &[&id])
        .await
        .map_err(|err| ApiError::gateway_from(&err, "Failed to add asset to superlike album"))?;

    info!(asset_id = %id, album_id, "asset superliked");
    Ok(ok())
}

/// Delete the asset: per-asset endpoint first, bulk endpoint as the single
/// fallback. Only both failing is reported, with the bulk attempt's status.
#[tracing::instrument(skip(state, request))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let id = request.require_id()?;

    if let Err(err) = state.immich.delete_asset(&id).await {
        debug!(asset_id = %id, error = %err, "single delete failed, trying bulk delete");
        state
            .immich
            .delete_assets(&[&id])
            .await
            .map_err(|err| ApiError::gateway_from(&err, "Failed to delete asset"))?;
    }

    info!(asset_id = %id, "asset deleted");
    Ok(ok())
}
