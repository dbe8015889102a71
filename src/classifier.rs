//! Routes in-jurisdiction requests to one of the two stores

use crate::config::EngineConfig;
use url::Url;

/// Which of the two stores a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Image,
    Api,
}

impl StoreKind {
    /// Name of the store this kind maps to
    pub fn store_id<'a>(&self, config: &'a EngineConfig) -> &'a str {
        match self {
            StoreKind::Image => config.image_store(),
            StoreKind::Api => config.api_store(),
        }
    }
}

/// Classify a request by its URL path. Image-like extensions at the end of
/// the path (case-insensitive) go to the image store, everything else goes
/// to the API store. Total: every in-jurisdiction request gets exactly one
/// classification, URLs without a parseable path included.
pub fn classify(config: &EngineConfig, request_url: &str) -> StoreKind {
    let path = match Url::parse(request_url) {
        Ok(url) => url.path().to_ascii_lowercase(),
        Err(_) => return StoreKind::Api,
    };

    let is_image = config
        .image_extensions()
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext)));

    if is_image {
        StoreKind::Image
    } else {
        StoreKind::Api
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions_route_to_image_store() {
        let config = EngineConfig::default();
        for url in [
            "https://assets.tcgdex.net/en/base/base1/1/high.png",
            "https://assets.tcgdex.net/en/base/base1/1/low.jpg",
            "https://assets.tcgdex.net/scans/card.jpeg",
            "https://assets.tcgdex.net/scans/card.webp",
        ] {
            assert_eq!(classify(&config, url), StoreKind::Image, "{}", url);
        }
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let config = EngineConfig::default();
        assert_eq!(
            classify(&config, "https://assets.tcgdex.net/scans/CARD.PNG"),
            StoreKind::Image
        );
        assert_eq!(
            classify(&config, "https://assets.tcgdex.net/scans/card.Webp"),
            StoreKind::Image
        );
    }

    #[test]
    fn test_query_string_is_not_part_of_the_path() {
        let config = EngineConfig::default();
        assert_eq!(
            classify(&config, "https://assets.tcgdex.net/card.png?size=high"),
            StoreKind::Image
        );
        // Extension hidden in the query does not make an image
        assert_eq!(
            classify(&config, "https://api.tcgdex.net/v2/en/cards?format=png"),
            StoreKind::Api
        );
    }

    #[test]
    fn test_everything_else_routes_to_api_store() {
        let config = EngineConfig::default();
        assert_eq!(
            classify(&config, "https://api.tcgdex.net/v2/en/cards/base1-1"),
            StoreKind::Api
        );
        assert_eq!(
            classify(&config, "https://api.tcgdex.net/v2/en/sets"),
            StoreKind::Api
        );
        // Extension must be at the very end of the path
        assert_eq!(
            classify(&config, "https://api.tcgdex.net/v2/en/card.png/details"),
            StoreKind::Api
        );
    }

    #[test]
    fn test_unparseable_url_defaults_to_api_store() {
        let config = EngineConfig::default();
        assert_eq!(classify(&config, "not a url"), StoreKind::Api);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let config = EngineConfig::default();
        let url = "https://assets.tcgdex.net/en/base/base1/1/high.png";
        let first = classify(&config, url);
        for _ in 0..10 {
            assert_eq!(classify(&config, url), first);
        }
    }

    #[test]
    fn test_store_id_mapping() {
        let config = EngineConfig::default();
        assert_eq!(StoreKind::Image.store_id(&config), "tcgdex-images-v1");
        assert_eq!(StoreKind::Api.store_id(&config), "tcgdex-api-v1");
    }
}
