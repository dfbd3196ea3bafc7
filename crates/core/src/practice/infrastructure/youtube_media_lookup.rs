use serde::Deserialize;
use thiserror::Error;

use crate::practice::domain::language::LanguageTag;
use crate::practice::domain::media_lookup::{MediaClip, MediaLookup};
use crate::shared::constants::{MAX_MEDIA_RESULTS, YOUTUBE_SEARCH_ENDPOINT};

#[derive(Error, Debug)]
pub enum YouTubeLookupError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode YouTube response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: Option<SearchItemId>,
    snippet: Option<SearchItemSnippet>,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItemSnippet {
    title: Option<String>,
}

/// Pronunciation-media provider backed by the YouTube Data API v3.
///
/// Searches for `"<phrase> pronunciation <lang>"` videos and maps the top
/// results to watch URLs.
pub struct YouTubeMediaLookup {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    max_results: usize,
}

impl YouTubeMediaLookup {
    pub fn new(api_key: &str) -> Self {
        Self::with_endpoint(YOUTUBE_SEARCH_ENDPOINT, api_key)
    }

    pub fn with_endpoint(endpoint: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            max_results: MAX_MEDIA_RESULTS,
        }
    }

    fn fetch(&self, phrase: &str, language: &LanguageTag) -> Result<Vec<MediaClip>, YouTubeLookupError> {
        let query = format!("{phrase} pronunciation {}", language.primary());
        let max_results = self.max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("q", &query),
                ("key", &self.api_key),
            ])
            .send()
            .map_err(|e| YouTubeLookupError::Request {
                url: self.endpoint.clone(),
                source: e,
            })?;

        let body: SearchResponse = response.json().map_err(YouTubeLookupError::Decode)?;
        Ok(clips_from(body))
    }
}

fn clips_from(response: SearchResponse) -> Vec<MediaClip> {
    response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.and_then(|id| id.video_id)?;
            let title = item
                .snippet
                .and_then(|s| s.title)
                .unwrap_or_else(|| "Untitled".to_string());
            Some(MediaClip {
                title,
                url: format!("https://www.youtube.com/watch?v={video_id}"),
            })
        })
        .collect()
}

impl MediaLookup for YouTubeMediaLookup {
    fn search(
        &self,
        phrase: &str,
        language: &LanguageTag,
    ) -> Result<Vec<MediaClip>, Box<dyn std::error::Error>> {
        Ok(self.fetch(phrase, language)?)
    }
}
