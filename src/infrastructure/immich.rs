use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, Method, StatusCode};
use serde_json::json;
use url::Url;

use crate::domain::assets::{AssetDetail, RandomAsset};

const USER_AGENT: &str = "picsift/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure talking to the photo service. `status()` is what the public
/// gateway mapping consumes; everything else is detail for the logs.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("photo service returned {status}")]
    Status { status: StatusCode },

    #[error("failed to reach photo service")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected photo service response: {0}")]
    Payload(String),
}

impl UpstreamError {
    /// The upstream HTTP status, when the failure carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::Payload(_) => None,
        }
    }
}

/// Thin client for the Immich HTTP API. Authenticates every call with a
/// static `x-api-key` header; holds no state beyond the connection pool.
#[derive(Clone)]
pub struct ImmichClient {
    base_url: Url,
    http: Client,
    api_key: String,
}

impl ImmichClient {
    pub fn new(base_url: Url, api_key: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| anyhow::anyhow!("failed to configure HTTP client: {err}"))?;

        Ok(Self {
            base_url,
            http,
            api_key,
        })
    }

    pub fn from_base_url(base_url: &str, api_key: &str) -> anyhow::Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|err| anyhow::anyhow!("invalid photo service URL {base_url}: {err}"))?;
        Self::new(url, api_key.to_string())
    }

    /// One random image asset from the library.
    pub async fn random_asset(&self) -> Result<RandomAsset, UpstreamError> {
        let url = self.endpoint(&["api", "search", "random"])?;
        let response = self
            .request(Method::POST, url)
            .json(&json!({ "size": 1 }))
            .send()
            .await?;

        let mut assets: Vec<RandomAsset> = Self::check(response).await?.json().await?;
        if assets.is_empty() {
            return Err(UpstreamError::Payload(
                "random search returned no assets".to_string(),
            ));
        }
        Ok(assets.remove(0))
    }

    /// Full asset record, including EXIF capture time and location.
    pub async fn asset_detail(&self, id: &str) -> Result<AssetDetail, UpstreamError> {
        let url = self.endpoint(&["api", "assets", id])?;
        let response = self.request(Method::GET, url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Preview-sized thumbnail bytes for an asset.
    pub async fn thumbnail(&self, id: &str) -> Result<Bytes, UpstreamError> {
        let mut url = self.endpoint(&["api", "assets", id, "thumbnail"])?;
        url.set_query(Some("size=preview"));
        let response = self.request(Method::GET, url).send().await?;
        Ok(Self::check(response).await?.bytes().await?)
    }

    /// Mark an asset as favorite. Not wired into any route: the like
    /// endpoint deliberately acknowledges without side effect (see DESIGN.md).
    pub async fn set_favorite(&self, id: &str) -> Result<(), UpstreamError> {
        let url = self.endpoint(&["api", "assets", id, "favorite"])?;
        let response = self
            .request(Method::POST, url)
            .json(&json!({ "isFavorite": true }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Delete a single asset via the per-asset endpoint.
    pub async fn delete_asset(&self, id: &str) -> Result<(), UpstreamError> {
        let url = self.endpoint(&["api", "assets", id])?;
        let response = self.request(Method::DELETE, url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Delete assets via the bulk endpoint.
    pub async fn delete_assets(&self, ids: &[&str]) -> Result<(), UpstreamError> {
        let url = self.endpoint(&["api", "assets"])?;
        let response = self
            .request(Method::DELETE, url)
            .json(&json!({ "ids": ids }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Add assets to an album.
    pub async fn add_to_album(&self, album_id: &str, ids: &[&str]) -> Result<(), UpstreamError> {
        let url = self.endpoint(&["api", "albums", album_id, "assets"])?;
        let response = self
            .request(Method::PUT, url)
            .json(&json!({ "ids": ids }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Build an upstream URL from path segments. Each segment is
    /// percent-encoded, so opaque ids cannot escape into the path structure.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                UpstreamError::Payload("photo service URL cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http.request(method, url).header("x-api-key", &self.api_key)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(UpstreamError::Status { status })
        }
    }
}
