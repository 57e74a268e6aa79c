// Maps raw CMS records onto PortfolioItem
pub mod fields;
pub mod links;
pub mod media;

use crate::cms::CmsApi;
use crate::cms::types::CmsRecord;
use crate::model::{NormalizationError, PortfolioItem, ProjectCatalog};
use crate::utils::html_to_text;
use fields::{LooseRecord, label_list, single_label};
use futures::future::join_all;
use links::{normalize_asset_url, resolve_link};
use media::MediaCache;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Image fields, in order of preference.
const IMAGE_FIELDS: [&str; 3] = ["hero_image", "project_image", "cover"];
/// Size variants tried before an image object's own `url`.
const IMAGE_SIZES: [&str; 3] = ["large", "medium_large", "full"];
const CATEGORY_KEYS: [&str; 4] = ["discipline", "disciplines", "services", "categories"];
const CLIENT_KEYS: [&str; 5] = ["client", "client_name", "client_title", "brand", "company"];

#[derive(Debug, Clone)]
pub struct NormalizerSettings {
    /// Base URL of the CMS, scheme included.
    pub cms_host: String,
    /// Host of the public site, without scheme.
    pub public_host: String,
    pub fallback_category: String,
}

/// One normalization run: shares a media cache across all its records.
pub struct Normalizer<'a> {
    api: &'a dyn CmsApi,
    settings: &'a NormalizerSettings,
    media: MediaCache,
}

impl<'a> Normalizer<'a> {
    pub fn new(api: &'a dyn CmsApi, settings: &'a NormalizerSettings) -> Self {
        Self {
            api,
            settings,
            media: MediaCache::new(),
        }
    }

    /// Normalizes every record concurrently. Records that fail are dropped;
    /// the rest keep their input order.
    pub async fn normalize_all(&self, records: &[Value]) -> Vec<PortfolioItem> {
        let results = join_all(records.iter().map(|raw| self.normalize_record(raw))).await;

        results
            .into_iter()
            .filter_map(|result| match result {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("Dropping record: {}", e);
                    None
                }
            })
            .collect()
    }

    pub async fn normalize_record(&self, raw: &Value) -> Result<PortfolioItem, NormalizationError> {
        let record = CmsRecord::from_json(raw)
            .map_err(|e| NormalizationError::MalformedRecord(e.to_string()))?;
        let acf = LooseRecord::new(&record.acf);

        let title = resolve_title(&record, &acf).ok_or_else(|| NormalizationError::MissingTitle {
            record: record.describe(),
        })?;

        let slug = record.slug.clone().filter(|s| !s.is_empty());
        let id = slug
            .clone()
            .or_else(|| record.id.clone())
            .unwrap_or_else(|| title.clone());

        let raw_link = acf
            .text("project_link")
            .or_else(|| record.link.clone())
            .unwrap_or_default();
        let link = resolve_link(
            &raw_link,
            slug.as_deref().unwrap_or(&title),
            &self.settings.cms_host,
            &self.settings.public_host,
        );

        let short_description = acf.text("project_brief").unwrap_or_default();
        let long_description = acf
            .text("project_description")
            .unwrap_or_else(|| short_description.clone());

        let image_url = self.resolve_image(&record, &acf).await;

        Ok(PortfolioItem {
            id,
            title,
            short_description,
            long_description,
            link,
            categories: self.resolve_categories(&acf),
            image_url,
            year: acf.text("project_year").unwrap_or_default(),
            client: resolve_client(&acf),
        })
    }

    async fn resolve_image(&self, record: &CmsRecord, acf: &LooseRecord<'_>) -> String {
        if let Some(url) = embedded_image(record, acf) {
            return normalize_asset_url(&url, &self.settings.cms_host);
        }

        for id in media_ids(acf) {
            match self.media_url(id).await {
                Ok(url) => return url,
                Err(e) => debug!("Media {} for {} unresolved: {}", id, record.describe(), e),
            }
        }
        String::new()
    }

    async fn media_url(&self, id: u64) -> Result<String, NormalizationError> {
        self.media
            .resolve(id, move || async move {
                let raw = self
                    .api
                    .fetch_media_url(id)
                    .await
                    .map_err(|source| NormalizationError::MediaLookup { id, source })?;
                let url = normalize_asset_url(&raw, &self.settings.cms_host);
                if url.is_empty() {
                    Err(NormalizationError::MissingMediaUrl(id))
                } else {
                    Ok(url)
                }
            })
            .await
    }

    fn resolve_categories(&self, acf: &LooseRecord<'_>) -> Vec<String> {
        acf.candidates(&["discipline"], &CATEGORY_KEYS)
            .into_iter()
            .map(label_list)
            .find(|labels| !labels.is_empty())
            .unwrap_or_else(|| vec![self.settings.fallback_category.clone()])
    }
}

/// Fetches the project list and normalizes it. A failed fetch yields an
/// empty catalog; nothing is retried.
pub async fn load_catalog(api: &dyn CmsApi, settings: &NormalizerSettings) -> ProjectCatalog {
    let records = match api.fetch_projects().await {
        Ok(records) => records,
        Err(e) => {
            warn!("Project fetch failed, showing empty list: {}", e);
            return ProjectCatalog::empty();
        }
    };

    let normalizer = Normalizer::new(api, settings);
    let items = normalizer.normalize_all(&records).await;
    info!(
        "Normalized {} of {} records ({} media ids resolved)",
        items.len(),
        records.len(),
        normalizer.media.resolved().await
    );
    ProjectCatalog::new(items)
}

fn resolve_title(record: &CmsRecord, acf: &LooseRecord<'_>) -> Option<String> {
    acf.get("project_title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| {
            record
                .rendered_title()
                .map(html_to_text)
                .filter(|t| !t.is_empty())
        })
}

fn resolve_client(acf: &LooseRecord<'_>) -> String {
    acf.candidates(&["client", "brand"], &CLIENT_KEYS)
        .into_iter()
        .find_map(single_label)
        .unwrap_or_default()
}

/// First embedded image URL, before any media lookup.
fn embedded_image(record: &CmsRecord, acf: &LooseRecord<'_>) -> Option<String> {
    IMAGE_FIELDS
        .iter()
        .filter_map(|field| acf.get(field))
        .find_map(image_candidate)
        .or_else(|| {
            record
                .featured_media_url()
                .filter(|u| !u.is_empty())
                .map(str::to_string)
        })
}

fn image_candidate(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(image) => {
            let sizes = image.get("sizes");
            IMAGE_SIZES
                .iter()
                .filter_map(|size| sizes.and_then(|s| s.get(size)))
                .chain(image.get("url"))
                .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
                .map(str::to_string)
        }
        _ => None,
    }
}

/// Media ids carried by the image fields, either bare or as `{ "id": .. }`.
fn media_ids(acf: &LooseRecord<'_>) -> Vec<u64> {
    IMAGE_FIELDS
        .iter()
        .filter_map(|field| acf.get(field))
        .filter_map(|value| match value {
            Value::Number(n) => n.as_u64(),
            Value::Object(image) => image.get("id").and_then(Value::as_u64),
            _ => None,
        })
        .filter(|id| *id > 0)
        .collect()
}
