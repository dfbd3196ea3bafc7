use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::practice::domain::translator::{TranslationRequest, Translator};
use crate::shared::constants::LIBRETRANSLATE_ENDPOINT;

#[derive(Error, Debug)]
pub enum LibreTranslateError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode LibreTranslate response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("LibreTranslate returned no translation")]
    NoTranslation,
}

#[derive(Debug, Serialize)]
struct LibreTranslatePayload<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Fallback translation provider backed by a LibreTranslate instance.
pub struct LibreTranslateTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl LibreTranslateTranslator {
    pub fn new() -> Self {
        Self::with_endpoint(LIBRETRANSLATE_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    fn fetch(&self, request: &TranslationRequest) -> Result<String, LibreTranslateError> {
        let payload = LibreTranslatePayload {
            q: &request.text,
            source: request.source.primary(),
            target: request.target.primary(),
            format: "text",
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .map_err(|e| LibreTranslateError::Request {
                url: self.endpoint.clone(),
                source: e,
            })?;

        let body: LibreTranslateResponse = response.json().map_err(LibreTranslateError::Decode)?;
        body.translated_text
            .filter(|t| !t.trim().is_empty())
            .ok_or(LibreTranslateError::NoTranslation)
    }
}

impl Default for LibreTranslateTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for LibreTranslateTranslator {
    fn translate(&self, request: &TranslationRequest) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.fetch(request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_primary_subtags() {
        let payload = LibreTranslatePayload {
            q: "good morning",
            source: "en",
            target: "es",
            format: "text",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["q"], "good morning");
        assert_eq!(json["source"], "en");
        assert_eq!(json["target"], "es");
        assert_eq!(json["format"], "text");
    }

    #[test]
    fn test_response_model_decodes_translation() {
        let body = r#"{"translatedText":"buenos días"}"#;
        let parsed: LibreTranslateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.translated_text.as_deref(), Some("buenos días"));
    }
}
