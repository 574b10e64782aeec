//! Datamuse word lookup client
//!
//! Queries `GET {base}/words?sp=<pattern>&md=d&max=<n>[&ml=<topic>]`. Entries
//! without a `defs` field come back with an empty definition list and are
//! filtered out by the candidate source.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::ports::{LookupEntry, LookupError, LookupQuery, WordLookupPort};
use crate::infrastructure::settings::{
    LookupSettings, DEFAULT_LOOKUP_BASE_URL, DEFAULT_LOOKUP_TIMEOUT_SECS,
};

/// Client for a Datamuse-compatible `/words` endpoint
#[derive(Clone)]
pub struct DatamuseClient {
    client: Client,
    base_url: String,
}

impl DatamuseClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &LookupSettings) -> Self {
        Self::new(&settings.base_url, settings.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for DatamuseClient {
    fn default() -> Self {
        Self::new(
            DEFAULT_LOOKUP_BASE_URL,
            Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        )
    }
}

#[async_trait]
impl WordLookupPort for DatamuseClient {
    async fn lookup(&self, query: LookupQuery) -> Result<Vec<LookupEntry>, LookupError> {
        let response = self
            .client
            .get(format!("{}/words", self.base_url))
            .query(&query_params(&query))
            .send()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LookupError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        parse_words(&body)
    }
}

/// Query string pairs for a lookup.
fn query_params(query: &LookupQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("sp", query.pattern.to_string()),
        ("md", "d".to_string()),
        ("max", query.max_results.to_string()),
    ];
    if let Some(topic) = &query.topic {
        params.push(("ml", topic.as_str().to_string()));
    }
    params
}

fn parse_words(body: &str) -> Result<Vec<LookupEntry>, LookupError> {
    let words: Vec<DatamuseWord> =
        serde_json::from_str(body).map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

    Ok(words
        .into_iter()
        .map(|w| LookupEntry::new(w.word, w.defs))
        .collect())
}

// =============================================================================
// Datamuse API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct DatamuseWord {
    word: String,
    #[serde(default)]
    defs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use unscramble_domain::{SearchPattern, Topic};

    fn query(topic: Option<&str>) -> LookupQuery {
        LookupQuery {
            pattern: SearchPattern::new(4, 2, 'a').expect("valid pattern"),
            topic: topic.and_then(Topic::from_input),
            max_results: 20,
        }
    }

    #[test]
    fn query_params_without_topic() {
        let params = query_params(&query(None));
        assert_eq!(
            params,
            vec![
                ("sp", "??a?".to_string()),
                ("md", "d".to_string()),
                ("max", "20".to_string()),
            ]
        );
    }

    #[test]
    fn query_params_with_topic_adds_means_like() {
        let params = query_params(&query(Some("Animals")));
        assert_eq!(params.last(), Some(&("ml", "animals".to_string())));
    }

    #[test]
    fn parses_words_with_and_without_definitions() {
        let body = r#"[
            {"word": "cat", "score": 1200, "defs": ["n\tfeline mammal", "v\tto vomit"]},
            {"word": "cab", "score": 900}
        ]"#;

        let entries = parse_words(body).expect("valid body");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "cat");
        assert_eq!(entries[0].definitions, vec!["n\tfeline mammal", "v\tto vomit"]);
        assert_eq!(entries[1].word, "cab");
        assert!(entries[1].definitions.is_empty());
    }

    #[test]
    fn empty_array_is_not_an_error() {
        assert_eq!(parse_words("[]"), Ok(Vec::new()));
    }

    #[test]
    fn malformed_body_is_invalid_response() {
        let result = parse_words("<html>busy</html>");
        assert!(matches!(result, Err(LookupError::InvalidResponse(_))));
    }

    #[test]
    fn base_url_is_normalized() {
        let client = DatamuseClient::new("http://localhost:9000/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[tokio::test]
    async fn unreachable_service_is_request_failed() {
        let client = DatamuseClient::new("http://127.0.0.1:9", Duration::from_millis(200));
        let result = client.lookup(query(None)).await;
        assert!(matches!(result, Err(LookupError::RequestFailed(_))));
    }
}
