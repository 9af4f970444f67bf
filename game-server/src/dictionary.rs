use std::time::Duration;

use async_trait::async_trait;
use game_core::{LookupFailure, LookupOutcome, WordLookup};
use reqwest::{Client, StatusCode};

/// Word-existence lookup against a dictionary HTTP API that answers
/// `GET {base_url}/{word}` with JSON for known words and 404 otherwise
pub struct DictionaryLookup {
    client: Client,
    base_url: String,
}

impl DictionaryLookup {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, word.to_lowercase())
    }
}

fn classify_status(status: StatusCode) -> Option<LookupOutcome> {
    if status.is_success() {
        return None;
    }
    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        return Some(LookupOutcome::TransientError(LookupFailure::Service(
            format!("dictionary returned {}", status),
        )));
    }
    Some(LookupOutcome::NotFound)
}

fn classify_transport_error(error: &reqwest::Error) -> LookupFailure {
    if error.is_connect() || error.is_timeout() {
        LookupFailure::Unreachable(error.to_string())
    } else {
        LookupFailure::Service(error.to_string())
    }
}

#[async_trait]
impl WordLookup for DictionaryLookup {
    async fn lookup(&self, word: &str) -> LookupOutcome {
        let url = self.url_for(word);
        tracing::debug!("Looking up {} at {}", word, url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Dictionary request failed: {:?}", e);
                return LookupOutcome::TransientError(classify_transport_error(&e));
            }
        };

        if let Some(outcome) = classify_status(response.status()) {
            tracing::debug!("Dictionary returned {} for {}", response.status(), word);
            return outcome;
        }

        match response.json::<serde_json::Value>().await {
            Ok(_) => LookupOutcome::Found,
            Err(e) => {
                tracing::warn!("Failed to parse dictionary response for {}: {:?}", word, e);
                LookupOutcome::TransientError(classify_transport_error(&e))
            }
        }
    }
}
