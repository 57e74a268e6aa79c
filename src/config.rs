use crate::filter::CategoryMatch;
use crate::model::Category;
use crate::normalizer::NormalizerSettings;
use serde::Deserialize;
use std::fs;

/// Initial inputs for the page session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub category: Category,
    pub query: String,
    pub fragment: Option<String>,
    /// Category slug whose page is printed, e.g. `photography`.
    pub category_page: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cms_host: String,
    pub public_host: String,
    pub per_page: u32,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
    pub fallback_category: String,
    pub category_match: CategoryMatch,
    pub view: ViewConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cms_host: "https://tw.aykays.com".into(),
            public_host: "builtby.aykays.com".into(),
            per_page: 50,
            request_timeout_seconds: 10,
            user_agent: "BuiltbyPortfolio/0.1".into(),
            fallback_category: "Development".into(),
            category_match: CategoryMatch::Exact,
            view: ViewConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn normalizer_settings(&self) -> NormalizerSettings {
        NormalizerSettings {
            cms_host: self.cms_host.trim_end_matches('/').to_string(),
            public_host: self.public_host.trim_end_matches('/').to_string(),
            fallback_category: self.fallback_category.clone(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
