// Page session: loaded catalog plus the user's current filter inputs
use crate::filter::{CategoryMatch, filter_items, items_in_category, search_suggestions};
use crate::model::{Category, PortfolioItem, ProjectCatalog};
use tracing::debug;

const PROJECT_FRAGMENT: &str = "#/project/";
/// Quick results shown under the search box.
pub const SUGGESTION_LIMIT: usize = 5;

/// Project id addressed by a `#/project/{id}` location fragment.
pub fn parse_project_fragment(fragment: &str) -> Option<&str> {
    fragment
        .strip_prefix(PROJECT_FRAGMENT)
        .filter(|id| !id.is_empty())
}

pub struct Portfolio {
    catalog: ProjectCatalog,
    category_match: CategoryMatch,
    active_category: Category,
    query: String,
    selected: Option<String>,
}

impl Portfolio {
    pub fn new(catalog: ProjectCatalog, category_match: CategoryMatch) -> Self {
        Self {
            catalog,
            category_match,
            active_category: Category::All,
            query: String::new(),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_category(&mut self, category: Category) {
        self.active_category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Back to every project: `All` and no search text.
    pub fn clear_filters(&mut self) {
        self.active_category = Category::All;
        self.query.clear();
    }

    /// The grid contents for the current inputs.
    pub fn visible(&self) -> Vec<&PortfolioItem> {
        filter_items(
            &self.catalog.items,
            self.active_category,
            &self.query,
            self.category_match,
        )
    }

    /// Quick matches for the current query.
    pub fn suggestions(&self) -> Vec<&PortfolioItem> {
        search_suggestions(&self.catalog.items, &self.query, SUGGESTION_LIMIT)
    }

    /// Projects listed on the page for a category slug.
    pub fn category_page(&self, slug: &str) -> Vec<&PortfolioItem> {
        items_in_category(&self.catalog.items, slug)
    }

    pub fn find(&self, id: &str) -> Option<&PortfolioItem> {
        self.catalog.items.iter().find(|item| item.id == id)
    }

    /// Opens the detail view for a `#/project/{id}` fragment. Fragments that
    /// do not name a loaded project leave the selection untouched.
    pub fn apply_fragment(&mut self, fragment: &str) -> Option<&PortfolioItem> {
        let id = parse_project_fragment(fragment)?;
        if self.find(id).is_none() {
            debug!("Ignoring fragment for unknown project {}", id);
            return None;
        }
        self.selected = Some(id.to_string());
        self.selected()
    }

    pub fn selected(&self) -> Option<&PortfolioItem> {
        self.find(self.selected.as_deref()?)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// The project shown as "Up next" after `id`, wrapping to the first.
    pub fn next_after(&self, id: &str) -> Option<&PortfolioItem> {
        let items = &self.catalog.items;
        let index = items.iter().position(|item| item.id == id)?;
        items.get((index + 1) % items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str, categories: &[&str]) -> PortfolioItem {
        PortfolioItem {
            id: id.into(),
            title: title.into(),
            short_description: String::new(),
            long_description: String::new(),
            link: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            image_url: String::new(),
            year: String::new(),
            client: String::new(),
        }
    }

    fn portfolio() -> Portfolio {
        Portfolio::new(
            ProjectCatalog::new(vec![
                item("velocity", "Velocity", &["Development"]),
                item("gifted-hands", "Gifted Hands", &["Design", "Luxury"]),
                item("s-zaib-studio", "S.Zaib Studio", &["Photography"]),
            ]),
            CategoryMatch::Exact,
        )
    }

    fn titles(items: Vec<&PortfolioItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn parses_project_fragments() {
        assert_eq!(parse_project_fragment("#/project/velocity"), Some("velocity"));
        assert_eq!(parse_project_fragment("#/project/"), None);
        assert_eq!(parse_project_fragment("#/about"), None);
    }

    #[test]
    fn visible_list_follows_inputs() {
        let mut p = portfolio();
        assert_eq!(p.visible().len(), 3);

        p.set_category(Category::Design);
        assert_eq!(titles(p.visible()), vec!["Gifted Hands"]);

        p.set_category(Category::All);
        p.set_query("zaib");
        assert_eq!(titles(p.visible()), vec!["S.Zaib Studio"]);

        p.set_category(Category::Branding);
        assert!(p.visible().is_empty());

        p.clear_filters();
        assert_eq!(p.active_category(), Category::All);
        assert_eq!(p.query(), "");
        assert_eq!(p.visible().len(), 3);
    }

    #[test]
    fn fragment_selects_known_project_only() {
        let mut p = portfolio();
        assert_eq!(
            p.apply_fragment("#/project/gifted-hands").map(|i| i.title.as_str()),
            Some("Gifted Hands")
        );

        assert!(p.apply_fragment("#/project/missing").is_none());
        assert_eq!(p.selected().map(|i| i.id.as_str()), Some("gifted-hands"));

        p.close_detail();
        assert!(p.selected().is_none());
    }

    #[test]
    fn next_after_wraps_around() {
        let p = portfolio();
        assert_eq!(p.next_after("velocity").map(|i| i.id.as_str()), Some("gifted-hands"));
        assert_eq!(p.next_after("s-zaib-studio").map(|i| i.id.as_str()), Some("velocity"));
        assert!(p.next_after("nope").is_none());
        assert!(p.find("velocity").is_some());
    }

    #[test]
    fn suggestions_and_category_page_use_loaded_items() {
        let mut p = portfolio();
        assert!(p.suggestions().is_empty());

        p.set_query("design");
        assert_eq!(titles(p.suggestions()), vec!["Gifted Hands"]);

        assert_eq!(titles(p.category_page("photography")), vec!["S.Zaib Studio"]);
        assert!(p.category_page("branding").is_empty());
    }
}
