// Plain-text rendering of the grid and the project detail
use crate::model::PortfolioItem;
use crate::portfolio::Portfolio;
use std::fmt::Write;

pub const NO_PROJECTS: &str = "No projects found.";
pub const NO_MATCHES: &str = "No Pioneers Found.";
pub const NO_MATCHES_HINT: &str = "We haven't built that yet, but we'd love to.";

pub fn render_grid(portfolio: &Portfolio) -> String {
    if portfolio.catalog().is_empty() {
        return format!("{}\n", NO_PROJECTS);
    }

    let mut out = String::new();
    if !portfolio.query().trim().is_empty() {
        let _ = writeln!(out, "Showing results for: {}", portfolio.query());
    }

    let visible = portfolio.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "{}\n{}", NO_MATCHES, NO_MATCHES_HINT);
        return out;
    }

    for (index, item) in visible.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:02}  {:<28} {:<36} {}",
            index + 1,
            item.title.to_uppercase(),
            item.categories.join(" / "),
            item.year
        );
    }
    out
}

/// Search box quick results; empty when there is nothing to suggest.
pub fn render_suggestions(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    for item in portfolio.suggestions() {
        let _ = writeln!(out, "-> {}  ({})", item.title, item.categories.join(", "));
    }
    out
}

pub fn render_category_page(portfolio: &Portfolio, slug: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} projects", slug.to_uppercase());
    let items = portfolio.category_page(slug);
    if items.is_empty() {
        let _ = writeln!(out, "{}", NO_PROJECTS);
    }
    for item in items {
        let _ = writeln!(out, "{:<28} {}", item.title.to_uppercase(), item.year);
    }
    out
}

pub fn render_detail(item: &PortfolioItem, next: Option<&PortfolioItem>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.title.to_uppercase());
    if !item.year.is_empty() {
        let _ = writeln!(out, "/ YEAR {}", item.year);
    }
    let _ = writeln!(out, "Discipline: {}", item.categories.join(", "));
    if !item.client.is_empty() {
        let _ = writeln!(out, "Client: {}", item.client);
    }
    if !item.long_description.is_empty() {
        let _ = writeln!(out, "Brief: {}", item.long_description);
    }
    if !item.link.is_empty() {
        let _ = writeln!(out, "Visit Live Site: {}", item.link);
    }
    if !item.image_url.is_empty() {
        let _ = writeln!(out, "Image: {}", item.image_url);
    }
    if let Some(next) = next.filter(|n| n.id != item.id) {
        let _ = writeln!(out, "Up Next: {}", next.title);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryMatch;
    use crate::model::{Category, ProjectCatalog};

    fn item(id: &str, title: &str) -> PortfolioItem {
        PortfolioItem {
            id: id.into(),
            title: title.into(),
            short_description: String::new(),
            long_description: "Artistry in Every Stitch.".into(),
            link: format!("https://builtby.aykays.com/{}/", id),
            categories: vec!["Design".into(), "Luxury".into()],
            image_url: String::new(),
            year: "2024".into(),
            client: "Gifted Hands".into(),
        }
    }

    #[test]
    fn empty_catalog_shows_no_projects() {
        let p = Portfolio::new(ProjectCatalog::empty(), CategoryMatch::Exact);
        assert_eq!(render_grid(&p), "No projects found.\n");
    }

    #[test]
    fn empty_filter_result_shows_no_matches() {
        let mut p = Portfolio::new(
            ProjectCatalog::new(vec![item("gifted-hands", "Gifted Hands")]),
            CategoryMatch::Exact,
        );
        p.set_category(Category::Photography);
        let grid = render_grid(&p);
        assert!(grid.contains(NO_MATCHES));
        assert!(grid.contains(NO_MATCHES_HINT));
    }

    #[test]
    fn grid_lists_visible_items() {
        let mut p = Portfolio::new(
            ProjectCatalog::new(vec![item("gifted-hands", "Gifted Hands"), item("velocity", "Velocity")]),
            CategoryMatch::Exact,
        );
        p.set_query("velo");
        let grid = render_grid(&p);
        assert!(grid.starts_with("Showing results for: velo\n"));
        assert!(grid.contains("01  VELOCITY"));
        assert!(!grid.contains("GIFTED HANDS"));
    }

    #[test]
    fn suggestions_and_category_page_render_matches() {
        let mut p = Portfolio::new(
            ProjectCatalog::new(vec![item("gifted-hands", "Gifted Hands"), item("velocity", "Velocity")]),
            CategoryMatch::Exact,
        );
        assert_eq!(render_suggestions(&p), "");

        p.set_query("velo");
        assert_eq!(render_suggestions(&p), "-> Velocity  (Design, Luxury)\n");

        let page = render_category_page(&p, "luxury");
        assert!(page.starts_with("LUXURY projects\n"));
        assert!(page.contains("GIFTED HANDS"));
        assert!(page.contains("VELOCITY"));

        let empty = render_category_page(&p, "cinema");
        assert!(empty.contains(NO_PROJECTS));
    }

    #[test]
    fn detail_includes_next_project() {
        let current = item("gifted-hands", "Gifted Hands");
        let next = item("velocity", "Velocity");
        let detail = render_detail(&current, Some(&next));
        assert!(detail.starts_with("GIFTED HANDS\n"));
        assert!(detail.contains("Discipline: Design, Luxury"));
        assert!(detail.contains("Visit Live Site: https://builtby.aykays.com/gifted-hands/"));
        assert!(detail.contains("Up Next: Velocity"));

        let alone = render_detail(&current, Some(&current));
        assert!(!alone.contains("Up Next"));
    }
}
