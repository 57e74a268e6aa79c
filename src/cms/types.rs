// Raw WordPress REST shapes for the `projects` post type
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Field of an unexpected type reads as its default instead of failing
/// the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Positive numeric id or non-empty string id.
fn record_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().filter(|id| *id > 0).map(|id| id.to_string()),
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsRecord {
    #[serde(default, deserialize_with = "record_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<Rendered>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
    /// Custom fields. WordPress sends `false` or `[]` when none are set.
    #[serde(default)]
    pub acf: Value,
    #[serde(rename = "_embedded", default, deserialize_with = "lenient")]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rendered {
    #[serde(default, deserialize_with = "lenient")]
    pub rendered: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(rename = "wp:featuredmedia", default, deserialize_with = "lenient")]
    pub featured_media: Vec<FeaturedMedia>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default, deserialize_with = "lenient")]
    pub source_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    #[serde(default)]
    pub source_url: Option<String>,
}

impl CmsRecord {
    /// Decodes one record. Only a non-object input is rejected; fields of
    /// the wrong type fall back to absent.
    pub fn from_json(raw: &Value) -> Result<Self, serde_json::Error> {
        if !raw.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a record object, got {}",
                raw
            )));
        }
        serde_json::from_value(raw.clone())
    }

    pub fn rendered_title(&self) -> Option<&str> {
        self.title.as_ref()?.rendered.as_deref()
    }

    pub fn featured_media_url(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .featured_media
            .first()?
            .source_url
            .as_deref()
    }

    /// Short label for logs.
    pub fn describe(&self) -> String {
        match (&self.slug, &self.id) {
            (Some(slug), _) if !slug.is_empty() => slug.clone(),
            (_, Some(id)) => format!("#{}", id),
            _ => "<unnamed>".to_string(),
        }
    }
}
