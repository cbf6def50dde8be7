//! Shared library for the quake announcer Lambda.
//!
//! This crate provides the GeoNet feed client, the Alexa response envelope and
//! the announcement pipeline used by the Lambda entry point.

pub mod alexa;
pub mod announce;
pub mod config;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_server;

pub use alexa::{AlexaResponse, AlexaResponseBody, OutputSpeech};
pub use announce::{announce_latest, announcement, respond, spoken_time};
pub use config::Config;
pub use error::{Error, Result};
pub use feed::{FeedClient, QuakeFeature, QuakeFeed, QuakeProperties};
