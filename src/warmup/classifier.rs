//! Site classification by URL keywords.

use serde::{Deserialize, Serialize};

const SHOPPING_KEYWORDS: &[&str] = &["shop", "store", "buy", "amazon", "ebay"];
const SOCIAL_KEYWORDS: &[&str] = &["facebook", "twitter", "instagram", "reddit"];

/// Which behavior script list applies to a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteCategory {
    Shopping,
    Social,
    Casual,
}

impl SiteCategory {
    /// Classify a URL by case-insensitive keyword match. Shopping keywords
    /// are checked before social ones; no match means casual browsing.
    pub fn classify(url: &str) -> Self {
        let lower = url.to_lowercase();

        if SHOPPING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            Self::Shopping
        } else if SOCIAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            Self::Social
        } else {
            Self::Casual
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shopping => "shopping",
            Self::Social => "social",
            Self::Casual => "casual",
        }
    }
}

impl std::fmt::Display for SiteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopping_urls_classify_as_shopping() {
        assert_eq!(
            SiteCategory::classify("https://www.amazon.com/deal"),
            SiteCategory::Shopping
        );
        assert_eq!(
            SiteCategory::classify("https://my-store.example.com"),
            SiteCategory::Shopping
        );
        assert_eq!(
            SiteCategory::classify("https://EBAY.com"),
            SiteCategory::Shopping
        );
    }

    #[test]
    fn social_urls_classify_as_social() {
        assert_eq!(
            SiteCategory::classify("https://reddit.com/r/test"),
            SiteCategory::Social
        );
        assert_eq!(
            SiteCategory::classify("https://www.instagram.com/someone"),
            SiteCategory::Social
        );
    }

    #[test]
    fn everything_else_is_casual() {
        assert_eq!(
            SiteCategory::classify("https://example.org"),
            SiteCategory::Casual
        );
        assert_eq!(SiteCategory::classify(""), SiteCategory::Casual);
    }

    #[test]
    fn shopping_keywords_win_over_social() {
        // Both keyword sets match; shopping is checked first.
        assert_eq!(
            SiteCategory::classify("https://facebook.com/marketplace/store"),
            SiteCategory::Shopping
        );
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SiteCategory::Shopping).unwrap(),
            "\"shopping\""
        );
        assert_eq!(SiteCategory::Social.to_string(), "social");
    }
}
