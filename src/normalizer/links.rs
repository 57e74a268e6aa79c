// URL canonicalization for images and outbound project links
use crate::utils::slugify;
use regex::Regex;
use std::sync::LazyLock;

static BARE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9.-]+\.[a-z]{2,}([/:].*)?$").expect("static regex")
});

/// Applies the shared scheme rules. Root-relative paths expand against `host`.
fn canonical_scheme(raw: &str, host: &str) -> Option<String> {
    if let Some(rest) = raw.strip_prefix("http://") {
        Some(format!("https://{}", rest))
    } else if raw.starts_with("//") {
        Some(format!("https:{}", raw))
    } else if raw.starts_with('/') {
        Some(format!("{}{}", host, raw))
    } else {
        None
    }
}

/// Canonical form of an image URL; `cms_host` includes its scheme.
pub fn normalize_asset_url(raw: &str, cms_host: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    canonical_scheme(raw, cms_host).unwrap_or_else(|| raw.to_string())
}

/// Canonical form of an outbound link. Bare domains such as
/// `example.com/work` are qualified with `https://`.
pub fn normalize_link(raw: &str, public_host: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if let Some(url) = canonical_scheme(raw, &format!("https://{}", public_host)) {
        return url;
    }
    if BARE_DOMAIN.is_match(raw) {
        return format!("https://{}", raw);
    }
    raw.to_string()
}

/// Host part of a configured base URL, lower-cased.
pub fn host_name(base: &str) -> String {
    let without_scheme = base.split_once("://").map_or(base, |(_, rest)| rest);
    without_scheme
        .split(['/', ':'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Final outbound link for a project.
///
/// Links that are empty, point back at the CMS or at a CMS `/projects/`
/// page are replaced by `https://{public_host}/{slug}/`.
pub fn resolve_link(raw: &str, slug_source: &str, cms_host: &str, public_host: &str) -> String {
    let normalized = normalize_link(raw, public_host);
    let lower = normalized.to_lowercase();
    let cms = host_name(cms_host);

    let points_inward =
        normalized.is_empty() || (!cms.is_empty() && lower.contains(&cms)) || lower.contains("/projects/");
    if !points_inward {
        return normalized;
    }

    let slug = slugify(slug_source);
    if slug.is_empty() {
        return normalized;
    }
    format!("https://{}/{}/", public_host, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CMS: &str = "https://tw.aykays.com";
    const PUBLIC: &str = "builtby.aykays.com";

    #[test]
    fn asset_urls_are_upgraded_and_expanded() {
        assert_eq!(normalize_asset_url("http://x.com/a.png", CMS), "https://x.com/a.png");
        assert_eq!(normalize_asset_url("//cdn.x.com/a.png", CMS), "https://cdn.x.com/a.png");
        assert_eq!(
            normalize_asset_url("/wp-content/uploads/a.png", CMS),
            "https://tw.aykays.com/wp-content/uploads/a.png"
        );
        assert_eq!(normalize_asset_url("https://x.com/a.png", CMS), "https://x.com/a.png");
        assert_eq!(normalize_asset_url("", CMS), "");
    }

    #[test]
    fn links_qualify_bare_domains() {
        assert_eq!(normalize_link("golean360.com", PUBLIC), "https://golean360.com");
        assert_eq!(normalize_link("Example.CO/work", PUBLIC), "https://Example.CO/work");
        assert_eq!(normalize_link("/laser-lens/", PUBLIC), "https://builtby.aykays.com/laser-lens/");
        assert_eq!(normalize_link("mailto:hello@agency.com", PUBLIC), "mailto:hello@agency.com");
    }

    #[test]
    fn host_name_strips_scheme_port_and_path() {
        assert_eq!(host_name("https://TW.aykays.com/"), "tw.aykays.com");
        assert_eq!(host_name("http://127.0.0.1:1234"), "127.0.0.1");
        assert_eq!(host_name("cms.local"), "cms.local");
    }

    #[test]
    fn cms_project_links_are_rewritten_to_public_slug() {
        assert_eq!(
            resolve_link("https://tw.aykays.com/projects/velocity", "velocity", CMS, PUBLIC),
            "https://builtby.aykays.com/velocity/"
        );
        assert_eq!(
            resolve_link("https://other.com/projects/x", "S.Zaib Studio", CMS, PUBLIC),
            "https://builtby.aykays.com/s-zaib-studio/"
        );
        assert_eq!(
            resolve_link("", "Gifted Hands", CMS, PUBLIC),
            "https://builtby.aykays.com/gifted-hands/"
        );
    }

    #[test]
    fn external_links_are_kept() {
        assert_eq!(
            resolve_link("http://giftedhands.pk", "gifted-hands", CMS, PUBLIC),
            "https://giftedhands.pk"
        );
    }

    #[test]
    fn unsluggable_source_keeps_normalized_link() {
        assert_eq!(resolve_link("", "!!!", CMS, PUBLIC), "");
    }
}
