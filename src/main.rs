use builtby_portfolio::cms::WpClient;
use builtby_portfolio::config::load_config;
use builtby_portfolio::normalizer::load_catalog;
use builtby_portfolio::portfolio::Portfolio;
use builtby_portfolio::view;
use tokio::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let client = match WpClient::new(
        &config.cms_host,
        config.per_page,
        &config.user_agent,
        Duration::from_secs(config.request_timeout_seconds),
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build CMS client: {}", e);
            return;
        }
    };

    // The list is built once per page load and never refetched
    let settings = config.normalizer_settings();
    let catalog = load_catalog(&client, &settings).await;
    info!(
        "Loaded {} projects at {}",
        catalog.items.len(),
        catalog.fetched_at.to_rfc3339()
    );

    let mut portfolio = Portfolio::new(catalog, config.category_match);
    portfolio.set_category(config.view.category);
    portfolio.set_query(config.view.query.clone());

    print!("{}", view::render_suggestions(&portfolio));
    print!("{}", view::render_grid(&portfolio));

    if let Some(slug) = config.view.category_page.as_deref() {
        print!("\n{}", view::render_category_page(&portfolio, slug));
    }

    if let Some(fragment) = config.view.fragment.as_deref() {
        if portfolio.apply_fragment(fragment).is_none() {
            warn!("Fragment {} does not match a loaded project", fragment);
        } else if let Some(selected) = portfolio.selected() {
            let next = portfolio.next_after(&selected.id);
            print!("\n{}", view::render_detail(selected, next));
        }
    }
}
