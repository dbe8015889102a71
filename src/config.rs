//! Engine configuration: jurisdiction prefixes, image extensions and store names

/// TCGdex origins whose requests the engine intercepts
const TCGDEX_DOMAINS: [&str; 2] = ["https://assets.tcgdex.net", "https://api.tcgdex.net"];

/// Path extensions routed to the image store
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Versioned store names. Bumping a version makes the previous store stale,
/// so activation removes it.
const IMAGE_STORE: &str = "tcgdex-images-v1";
const API_STORE: &str = "tcgdex-api-v1";

/// Immutable engine configuration.
///
/// Jurisdiction and classification rules are injected here once instead of
/// being scattered through the interception logic, so tests can swap them
/// for a mock server origin.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// URL prefixes the engine is allowed to intercept
    jurisdiction: Vec<String>,
    /// Extensions (without the dot) that classify a request as an image
    image_extensions: Vec<String>,
    image_store: String,
    api_store: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            jurisdiction: TCGDEX_DOMAINS.iter().map(|d| d.to_string()).collect(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            image_store: IMAGE_STORE.to_string(),
            api_store: API_STORE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with explicit rules
    pub fn new(
        jurisdiction: Vec<String>,
        image_extensions: Vec<String>,
        image_store: &str,
        api_store: &str,
    ) -> Self {
        Self {
            jurisdiction,
            image_extensions,
            image_store: image_store.to_string(),
            api_store: api_store.to_string(),
        }
    }

    /// Default rules with a replaced jurisdiction, mainly for tests
    pub fn with_jurisdiction(jurisdiction: Vec<String>) -> Self {
        Self {
            jurisdiction,
            ..Self::default()
        }
    }

    pub fn jurisdiction(&self) -> &[String] {
        &self.jurisdiction
    }

    pub fn image_extensions(&self) -> &[String] {
        &self.image_extensions
    }

    pub fn image_store(&self) -> &str {
        &self.image_store
    }

    pub fn api_store(&self) -> &str {
        &self.api_store
    }

    /// The complete set of store names this configuration knows about.
    /// Any other store found at activation time is stale.
    pub fn known_stores(&self) -> [&str; 2] {
        [&self.image_store, &self.api_store]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jurisdiction() {
        let config = EngineConfig::default();
        assert_eq!(
            config.jurisdiction(),
            &["https://assets.tcgdex.net", "https://api.tcgdex.net"]
        );
    }

    #[test]
    fn test_default_store_names_are_versioned() {
        let config = EngineConfig::default();
        assert_eq!(config.image_store(), "tcgdex-images-v1");
        assert_eq!(config.api_store(), "tcgdex-api-v1");
    }

    #[test]
    fn test_known_stores_contains_exactly_both() {
        let config = EngineConfig::default();
        assert_eq!(
            config.known_stores(),
            ["tcgdex-images-v1", "tcgdex-api-v1"]
        );
    }

    #[test]
    fn test_with_jurisdiction_keeps_default_rules() {
        let config = EngineConfig::with_jurisdiction(vec!["http://localhost:1234".to_string()]);
        assert_eq!(config.jurisdiction(), &["http://localhost:1234"]);
        assert_eq!(config.image_extensions(), &["png", "jpg", "jpeg", "webp"]);
        assert_eq!(config.image_store(), "tcgdex-images-v1");
    }
}
