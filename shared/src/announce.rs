//! Turns the latest quake into something Alexa can say.

use chrono::DateTime;
use tracing::{info, warn};

use crate::{AlexaResponse, Error, FeedClient, QuakeFeed, QuakeProperties, Result};

/// Spoken form of the quake time, e.g. `Monday 2 January 2006, 3 04 PM`.
const SPOKEN_TIME_FORMAT: &str = "%A %-d %B %Y, %-I %M %p";

/// Render the time in its own offset for speech.
///
/// Only the `T` date/time separator is accepted.
pub fn spoken_time(time: &str) -> Result<String> {
    if time.as_bytes().get(10) != Some(&b'T') {
        return Err(Error::TimeParse(format!(
            "{:?}: expected 'T' between date and time",
            time
        )));
    }

    let parsed = DateTime::parse_from_rfc3339(time)
        .map_err(|e| Error::TimeParse(format!("{:?}: {}", time, e)))?;
    Ok(parsed.format(SPOKEN_TIME_FORMAT).to_string())
}

/// Sentence describing a single quake.
pub fn announcement(quake: &QuakeProperties) -> Result<String> {
    Ok(format!(
        "The latest earthquake was a magnitude {:.1} earthquake near {} at {}",
        quake.magnitude,
        quake.locality,
        spoken_time(&quake.time)?
    ))
}

/// Build the Alexa response for an already fetched feed.
///
/// An empty feed is not an error and yields `AlexaResponse::default()`.
pub fn respond(feed: &QuakeFeed) -> Result<AlexaResponse> {
    let Some(quake) = feed.latest() else {
        warn!("Quake feed is empty, returning an empty response");
        return Ok(AlexaResponse::default());
    };

    let speech = announcement(quake)?;
    info!(locality = %quake.locality, magnitude = quake.magnitude, "Announcing quake");

    Ok(AlexaResponse::plain_text(speech))
}

/// Fetch the feed and announce its first quake.
pub async fn announce_latest(client: &FeedClient) -> Result<AlexaResponse> {
    let feed = client.fetch().await?;
    respond(&feed)
}
