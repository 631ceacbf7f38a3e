pub(crate) mod actions;
pub(crate) mod image;
pub(crate) mod random;

use axum::routing::{get, post};
use serde::Deserialize;

use crate::application::errors::ApiError;
use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/random", get(random::random_asset))
        .route("/image", get(image::image))
        .route("/like", post(actions::like))
        .route("/dislike", post(actions::dislike))
        .route("/superlike", post(actions::superlike))
        .route("/delete", post(actions::delete))
}

/// Request body shared by all action endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ActionRequest {
    #[serde(default)]
    pub id: Option<String>,
}

impl ActionRequest {
    /// The identifier, validated before any outbound call is made.
    pub fn require_id(self) -> Result<String, ApiError> {
        self.id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::bad_request("Missing id in request body"))
    }
}
