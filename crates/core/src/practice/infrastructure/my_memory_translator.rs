use serde::Deserialize;
use thiserror::Error;

use crate::practice::domain::translator::{TranslationRequest, Translator};
use crate::shared::constants::{MYMEMORY_ENDPOINT, MYMEMORY_WARNING_MARKER};

#[derive(Error, Debug)]
pub enum MyMemoryError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode MyMemory response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("MyMemory returned no usable translation")]
    NoTranslation,
    #[error("MyMemory quota warning in translated text")]
    QuotaWarning,
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryResponseData>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Primary translation provider backed by the MyMemory REST API.
///
/// MyMemory signals an exhausted free quota by embedding a warning string
/// in the translated text rather than failing the request; that case is
/// treated as a provider failure so the fallback can take over.
pub struct MyMemoryTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl MyMemoryTranslator {
    pub fn new() -> Self {
        Self::with_endpoint(MYMEMORY_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    fn fetch(&self, request: &TranslationRequest) -> Result<String, MyMemoryError> {
        let langpair = format!(
            "{}|{}",
            request.source.primary(),
            request.target.primary()
        );
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", request.text.as_str()), ("langpair", &langpair)])
            .send()
            .map_err(|e| MyMemoryError::Request {
                url: self.endpoint.clone(),
                source: e,
            })?;

        let body: MyMemoryResponse = response.json().map_err(MyMemoryError::Decode)?;
        let translated = body
            .response_data
            .and_then(|d| d.translated_text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(MyMemoryError::NoTranslation)?;

        if translated.contains(MYMEMORY_WARNING_MARKER) {
            return Err(MyMemoryError::QuotaWarning);
        }
        Ok(translated)
    }
}

impl Default for MyMemoryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for MyMemoryTranslator {
    fn translate(&self, request: &TranslationRequest) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.fetch(request)?)
    }
}
