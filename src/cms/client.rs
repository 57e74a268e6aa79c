use crate::cms::traits::CmsApi;
use crate::cms::types::MediaResponse;
use crate::model::FetchError;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// WordPress REST client for the projects and media endpoints.
pub struct WpClient {
    client: Client,
    base_url: String,
    per_page: u32,
}

impl WpClient {
    pub fn new(
        base_url: &str,
        per_page: u32,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page,
        })
    }

    fn projects_url(&self) -> String {
        format!(
            "{}/wp-json/wp/v2/projects?per_page={}&orderby=date&order=asc&_embed",
            self.base_url, self.per_page
        )
    }

    fn media_url(&self, id: u64) -> String {
        format!("{}/wp-json/wp/v2/media/{}", self.base_url, id)
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::InvalidPayload(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CmsApi for WpClient {
    async fn fetch_projects(&self) -> Result<Vec<Value>, FetchError> {
        let url = self.projects_url();
        info!("Fetching projects from {}", url);

        match self.get_json(&url).await? {
            Value::Array(records) => {
                info!("CMS returned {} records", records.len());
                Ok(records)
            }
            other => Err(FetchError::InvalidPayload(format!(
                "expected an array of projects, got {}",
                kind_of(&other)
            ))),
        }
    }

    async fn fetch_media_url(&self, id: u64) -> Result<String, FetchError> {
        let url = self.media_url(id);
        debug!("Looking up media {}", id);

        let media: MediaResponse = serde_json::from_value(self.get_json(&url).await?)
            .map_err(|e| FetchError::InvalidPayload(e.to_string()))?;
        Ok(media.source_url.unwrap_or_default())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
