//! Alexa response envelope.

use serde::Serialize;

/// Response envelope version understood by Alexa.
pub const RESPONSE_VERSION: &str = "1.0";

/// Top-level Alexa skill response.
///
/// `Default` is the zero-valued envelope returned when there is nothing to
/// announce: empty version, no speech, session left open.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlexaResponse {
    pub version: String,
    pub response: AlexaResponseBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaResponseBody {
    pub output_speech: OutputSpeech,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub speech_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl AlexaResponse {
    /// Speak `text` and end the session.
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            response: AlexaResponseBody {
                output_speech: OutputSpeech {
                    speech_type: "PlainText".to_string(),
                    text: text.into(),
                },
                should_end_session: true,
            },
        }
    }

    pub fn speech(&self) -> &str {
        &self.response.output_speech.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text_shape() {
        let value = serde_json::to_value(AlexaResponse::plain_text("Kia ora")).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "response": {
                    "outputSpeech": { "type": "PlainText", "text": "Kia ora" },
                    "shouldEndSession": true
                }
            })
        );
    }

    #[test]
    fn test_default_shape() {
        let value = serde_json::to_value(AlexaResponse::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "",
                "response": {
                    "outputSpeech": {},
                    "shouldEndSession": false
                }
            })
        );
    }
}
