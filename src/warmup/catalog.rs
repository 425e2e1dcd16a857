//! Static category-to-behavior catalog.
//!
//! The catalog is immutable configuration: an ordered behavior list per
//! site category, executed in order by the site warmer. Unknown behavior
//! names in a list are a logged no-op in the executor, so the table can
//! grow ahead of implementations.

use super::classifier::SiteCategory;

/// Behaviors for sites with no stronger signal: wander, hover, follow a
/// safe link or two, read.
pub const CASUAL_BROWSING: &[&str] = &[
    "scroll_random",
    "hover_elements",
    "click_safe_links",
    "read_content",
];

/// Shopping sites: browse the navigation, open products, skim.
pub const SHOPPING_BEHAVIOR: &[&str] = &[
    "browse_categories",
    "view_products",
    "scroll_random",
    "read_content",
];

/// Social feeds: scroll, show interest, read.
pub const SOCIAL_MEDIA: &[&str] = &["scroll_feed", "hover_elements", "read_content"];

/// The ordered behavior list for a site category.
pub fn behaviors_for(category: SiteCategory) -> &'static [&'static str] {
    match category {
        SiteCategory::Shopping => SHOPPING_BEHAVIOR,
        SiteCategory::Social => SOCIAL_MEDIA,
        SiteCategory::Casual => CASUAL_BROWSING,
    }
}

/// Well-known low-risk sites for warming a fresh browser identity when the
/// caller has no list of their own.
pub fn default_warmup_sites() -> &'static [&'static str] {
    &[
        "https://www.google.com",
        "https://www.bing.com",
        "https://www.wikipedia.org",
        "https://www.amazon.com",
    ]
}
