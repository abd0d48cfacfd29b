use async_trait::async_trait;
use geci_lookup::{LanguageCode, LookupError, LookupService, ProviderMetadata};

/// Free translation endpoint client. The same endpoint serves both
/// translation and romanization, selected by the `dt` flag; the result
/// string sits at [0][0][0] of a nested-array payload.
#[derive(Clone)]
pub struct MandarinLookup {
    client: reqwest::Client,
    api_url: String,
    source: LanguageCode,
    target: LanguageCode,
}

impl MandarinLookup {
    pub fn new(api_url: String, source: LanguageCode, target: LanguageCode) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            source,
            target,
        }
    }

    async fn query(&self, data_type: &str, text: &str) -> Result<String, LookupError> {
        let params = [
            ("client", "gtx"),
            ("sl", self.source.as_str()),
            ("tl", self.target.as_str()),
            ("dt", data_type),
            ("q", text),
        ];

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(LookupError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(LookupError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            LookupError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        extract_result(&json).ok_or(LookupError::UnexpectedPayload)
    }
}

/// Pull the result string out of the endpoint's nested-array payload.
/// Anything other than a string at [0][0][0] is a shape violation.
fn extract_result(json: &serde_json::Value) -> Option<String> {
    json.get(0)?
        .get(0)?
        .get(0)?
        .as_str()
        .map(|s| s.to_string())
}

#[async_trait]
impl LookupService for MandarinLookup {
    async fn translation(&self, text: &str) -> Result<String, LookupError> {
        self.query("t", text).await
    }

    async fn romanization(&self, text: &str) -> Result<String, LookupError> {
        self.query("rm", text).await
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "google-gtx".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
