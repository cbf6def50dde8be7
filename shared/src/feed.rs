//! GeoNet quake feed client.

use reqwest::header::ACCEPT;
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::{Config, Error, Result};

/// Media type GeoNet serves the quake GeoJSON under.
pub const GEONET_ACCEPT: &str = "application/vnd.geo+json;version=2";

/// Quake feed as returned by GeoNet, most recent first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuakeFeed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<QuakeFeature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuakeFeature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: QuakeProperties,
}

/// A single quake. Missing or null fields decode to their zero values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuakeProperties {
    /// Origin time, RFC 3339
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    /// Depth in kilometres
    #[serde(deserialize_with = "null_as_default")]
    pub depth: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub magnitude: f32,
    /// Nearest named place
    #[serde(deserialize_with = "null_as_default")]
    pub locality: String,
    /// Modified Mercalli Intensity
    #[serde(deserialize_with = "null_as_default")]
    pub mmi: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl QuakeFeed {
    /// The first quake in upstream order.
    ///
    /// GeoNet orders the feed newest first; no sorting happens here.
    pub fn latest(&self) -> Option<&QuakeProperties> {
        self.features.first().map(|feature| &feature.properties)
    }
}

/// Client for the quake feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http_client: reqwest::Client,
    config: Config,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(http_client: reqwest::Client, config: Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Fetch the feed with a single GET. No retries.
    pub async fn fetch(&self) -> Result<QuakeFeed> {
        info!(
            "Fetching quake feed from {} with MMI>={}",
            self.config.feed_url, self.config.min_mmi
        );

        let response = self
            .http_client
            .get(&self.config.feed_url)
            .query(&[("MMI", self.config.min_mmi)])
            .header(ACCEPT, GEONET_ACCEPT)
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(Error::Read)?;
        let feed: QuakeFeed = serde_json::from_slice(&body)?;

        debug!("Quake feed returned {} features", feed.features.len());

        Ok(feed)
    }
}
