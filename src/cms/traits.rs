use crate::model::FetchError;
use serde_json::Value;

/// Read-only access to the remote CMS.
#[async_trait::async_trait]
pub trait CmsApi: Send + Sync {
    /// Raw project records, in the order the CMS returns them.
    async fn fetch_projects(&self) -> Result<Vec<Value>, FetchError>;

    /// `source_url` of a media item; empty when the CMS has none.
    async fn fetch_media_url(&self, id: u64) -> Result<String, FetchError>;
}
