//! Configuration management for the quake announcer.

use std::env;

use crate::{Error, Result};

/// GeoNet quake feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://api.geonet.org.nz/quake";

/// Minimum Modified Mercalli Intensity requested from the feed.
pub const DEFAULT_MIN_MMI: i32 = 3;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Quake feed endpoint, without query string
    pub feed_url: String,
    /// Value of the `MMI` query filter
    pub min_mmi: i32,
}

impl Config {
    pub fn new(feed_url: impl Into<String>, min_mmi: i32) -> Self {
        Self {
            feed_url: feed_url.into(),
            min_mmi,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let feed_url = lookup("QUAKE_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        let min_mmi = match lookup("QUAKE_MIN_MMI") {
            Some(raw) => parse_mmi(&raw)?,
            None => DEFAULT_MIN_MMI,
        };

        Ok(Self::new(feed_url, min_mmi))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL, DEFAULT_MIN_MMI)
    }
}

// GeoNet accepts MMI from -1 (unnoticeable) through 8.
fn parse_mmi(raw: &str) -> Result<i32> {
    let mmi: i32 = raw
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("QUAKE_MIN_MMI must be an integer: {}", e)))?;

    if !(-1..=8).contains(&mmi) {
        return Err(Error::Config(format!(
            "QUAKE_MIN_MMI must be between -1 and 8, got {}",
            mmi
        )));
    }

    Ok(mmi)
}
