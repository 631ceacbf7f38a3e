use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::debug;

use crate::application::errors::ApiError;
use crate::application::state::AppState;
use crate::domain::assets::{AssetLocation, taken_at};

#[derive(Debug, Serialize)]
pub(crate) struct RandomResponse {
    pub id: String,
    #[serde(rename = "localDateTime")]
    pub local_date_time: Option<String>,
    #[serde(rename = "takenAt", skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<AssetLocation>,
}

/// One random library asset. With enrichment enabled, a second upstream call
/// reads the full record for capture time and location.
#[tracing::instrument(skip(state))]
pub(crate) async fn random_asset(
    State(state): State<AppState>,
) -> Result<Json<RandomResponse>, ApiError> {
    let asset = state
        .immich
        .random_asset()
        .await
        .map_err(|err| ApiError::gateway_from(&err, "failed to fetch random asset"))?;

    debug!(asset_id = %asset.id, "picked random asset");

    if !state.enrich_random {
        return Ok(Json(RandomResponse {
            id: asset.id,
            local_date_time: asset.local_date_time,
            taken_at: None,
            location: None,
        }));
    }

    let detail = state
        .immich
        .asset_detail(&asset.id)
        .await
        .map_err(|err| ApiError::gateway_from(&err, "failed to fetch asset detail"))?;

    let taken_at = taken_at(&detail, asset.local_date_time.as_deref());
    // Enriched responses always carry the location block; a record without
    // EXIF data yields all-null fields rather than an absent key.
    let exif = detail.exif_info.unwrap_or_default();
    let location = Some(AssetLocation::from_exif(&exif));

    Ok(Json(RandomResponse {
        id: asset.id,
        local_date_time: asset.local_date_time,
        taken_at,
        location,
    }))
}
