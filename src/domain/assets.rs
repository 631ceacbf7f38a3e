use serde::{Deserialize, Serialize};

/// One entry from the photo service's random search. The id is an opaque
/// token; nothing here validates its shape.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomAsset {
    pub id: String,
    #[serde(rename = "localDateTime")]
    pub local_date_time: Option<String>,
}

/// Full asset record as returned by the per-asset lookup. Only the fields
/// the enriched random response reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetDetail {
    pub id: String,
    #[serde(rename = "localDateTime")]
    pub local_date_time: Option<String>,
    #[serde(rename = "exifInfo")]
    pub exif_info: Option<ExifInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExifInfo {
    #[serde(rename = "dateTimeOriginal")]
    pub date_time_original: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Location block of the enriched random response. `text` is derived, the
/// rest is read through from the photo service.
#[derive(Debug, Clone, Serialize)]
pub struct AssetLocation {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub text: Option<String>,
}

impl AssetLocation {
    pub fn from_exif(exif: &ExifInfo) -> Self {
        let text = location_text(
            exif.city.as_deref(),
            exif.state.as_deref(),
            exif.country.as_deref(),
        );
        Self {
            city: exif.city.clone(),
            state: exif.state.clone(),
            country: exif.country.clone(),
            latitude: exif.latitude,
            longitude: exif.longitude,
            text,
        }
    }
}

/// Preferred capture timestamp: EXIF original time, else the timestamp the
/// random search reported, else none.
pub fn taken_at(detail: &AssetDetail, search_timestamp: Option<&str>) -> Option<String> {
    detail
        .exif_info
        .as_ref()
        .and_then(|exif| exif.date_time_original.clone())
        .or_else(|| search_timestamp.map(String::from))
}

/// Human-readable place string: the non-empty ones of city, state, country
/// joined with ", ". `None` when all three are empty.
pub fn location_text(
    city: Option<&str>,
    state: Option<&str>,
    country: Option<&str>,
) -> Option<String> {
    let parts: Vec<&str> = [city, state, country]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
