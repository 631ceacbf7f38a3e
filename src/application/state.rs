use crate::infrastructure::immich::ImmichClient;

/// Shared, clone-cheap handler context. No handler mutates anything here;
/// the photo service is the sole source of truth.
#[derive(Clone)]
pub struct AppState {
    pub immich: ImmichClient,
    /// Destination album for superliked assets. Absence is only reported
    /// when /api/superlike is actually called.
    pub superlike_album_id: Option<String>,
    /// When set, /api/random also fetches the full asset record and returns
    /// capture time and location.
    pub enrich_random: bool,
}

impl AppState {
    pub fn new(
        immich: ImmichClient,
        superlike_album_id: Option<String>,
        enrich_random: bool,
    ) -> Self {
        Self {
            immich,
            superlike_album_id,
            enrich_random,
        }
    }
}
