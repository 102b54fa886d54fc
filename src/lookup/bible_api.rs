//! bible-api.com client.
//!
//! One GET per reference:
//!
//! ```text
//! GET https://bible-api.com/Psalms+23:1-6?translation=web
//! GET https://bible-api.com/Song%20of%20Solomon+2:1?translation=web
//! ```
//!
//! The response is a JSON object; passage text lives in its `text` field.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use crate::core::reference::VerseReference;
use crate::lookup::{LookupError, VerseLookup};

pub const DEFAULT_BASE_URL: &str = "https://bible-api.com";
pub const DEFAULT_TRANSLATION: &str = "web";

pub struct BibleApiClient {
    base_url: String,
    translation: String,
    client: reqwest::Client,
}

impl BibleApiClient {
    pub fn new(base_url: Option<String>, translation: Option<String>) -> Self {
        let env_url = std::env::var("VERSEPICK_BASE_URL").ok();
        let final_url = base_url
            .or(env_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url: final_url.trim_end_matches('/').to_string(),
            translation: translation.unwrap_or_else(|| DEFAULT_TRANSLATION.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Full request URL. `Url` percent-encodes the spaces in book names.
    pub fn url_for(&self, reference: &VerseReference) -> Result<Url, LookupError> {
        let raw = format!("{}/{}", self.base_url, reference.locator());
        let mut url = Url::parse(&raw).map_err(|e| LookupError::Config(format!("{raw}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("translation", &self.translation);
        Ok(url)
    }
}

#[async_trait]
impl VerseLookup for BibleApiClient {
    fn name(&self) -> &str {
        "bible-api"
    }

    fn translation(&self) -> &str {
        &self.translation
    }

    async fn fetch(
        &self,
        reference: &VerseReference,
    ) -> Result<serde_json::Value, LookupError> {
        let url = self.url_for(reference)?;
        info!("Lookup request: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        debug!("Lookup response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Lookup API error: {} - {}", status, err_body);
            return Err(LookupError::Api {
                status,
                message: err_body,
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        if !payload.is_object() {
            return Err(LookupError::Parse(format!(
                "expected a JSON object, got {payload}"
            )));
        }
        Ok(payload)
    }
}
