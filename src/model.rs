// Core structs: PortfolioItem, Category, ProjectCatalog
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A normalized project, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub link: String,
    pub categories: Vec<String>,
    pub image_url: String,
    pub year: String,
    pub client: String,
}

/// Categories offered by the grid's filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    #[default]
    All,
    Photography,
    Development,
    Design,
    Branding,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Photography,
        Category::Development,
        Category::Design,
        Category::Branding,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Photography => "Photography",
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Branding => "Branding",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(wanted.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// The project list built once per page load. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    pub items: Vec<PortfolioItem>,
    pub fetched_at: DateTime<Utc>,
}

impl ProjectCatalog {
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        Self {
            items,
            fetched_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("record {record} has no resolvable title")]
    MissingTitle { record: String },
    #[error("media {0} has no source url")]
    MissingMediaUrl(u64),
    #[error("media {id} lookup failed: {source}")]
    MediaLookup {
        id: u64,
        #[source]
        source: FetchError,
    },
}
