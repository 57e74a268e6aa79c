// Filter engine: category and free-text predicates over the loaded list
use crate::model::{Category, PortfolioItem};
use serde::Deserialize;

/// How the active category is compared against an item's category labels.
///
/// CMS labels are stored as the editors typed them, while [`Category`]
/// labels have fixed casing. `Exact` requires the two to agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMatch {
    #[default]
    Exact,
    IgnoreCase,
}

impl CategoryMatch {
    fn matches(self, label: &str, wanted: &str) -> bool {
        match self {
            CategoryMatch::Exact => label == wanted,
            CategoryMatch::IgnoreCase => label.to_lowercase() == wanted.to_lowercase(),
        }
    }
}

pub fn matches_category(item: &PortfolioItem, category: Category, mode: CategoryMatch) -> bool {
    category == Category::All
        || item
            .categories
            .iter()
            .any(|label| mode.matches(label, category.label()))
}

/// `needle` must already be lower-cased.
pub fn matches_text(item: &PortfolioItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.short_description.to_lowercase().contains(needle)
        || item
            .categories
            .iter()
            .any(|c| c.to_lowercase().contains(needle))
}

/// Items passing both the category and the text predicate, in input order.
///
/// A query that is blank after trimming matches everything; otherwise the
/// lower-cased query is matched as typed.
pub fn filter_items<'a>(
    items: &'a [PortfolioItem],
    category: Category,
    query: &str,
    mode: CategoryMatch,
) -> Vec<&'a PortfolioItem> {
    let by_category = items
        .iter()
        .filter(|item| matches_category(item, category, mode));

    if query.trim().is_empty() {
        return by_category.collect();
    }

    let needle = query.to_lowercase();
    by_category
        .filter(|item| matches_text(item, &needle))
        .collect()
}

/// Quick results for the search box: title or category matches only.
pub fn search_suggestions<'a>(
    items: &'a [PortfolioItem],
    query: &str,
    limit: usize,
) -> Vec<&'a PortfolioItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item
                    .categories
                    .iter()
                    .any(|c| c.to_lowercase().contains(&needle))
        })
        .take(limit)
        .collect()
}

/// Items listed on a category page, e.g. `/category/photography`.
pub fn items_in_category<'a>(items: &'a [PortfolioItem], slug: &str) -> Vec<&'a PortfolioItem> {
    let wanted = slug.to_lowercase();
    items
        .iter()
        .filter(|item| item.categories.iter().any(|c| c.to_lowercase() == wanted))
        .collect()
}
