//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own options (site address, asset paths) still come from
//! `[package.metadata.leptos]` via `get_configuration`.

/// Public URL of the deployed site, used for the canonical link
pub const PUBLIC_URL_VAR: &str = "VIDEOINSIGHTS_PUBLIC_URL";

/// Set to a truthy value to serve responses uncompressed
pub const DISABLE_COMPRESSION_VAR: &str = "VIDEOINSIGHTS_DISABLE_COMPRESSION";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute URL the page is published under
    /// Example: https://videoinsights.example/
    pub public_url: Option<String>,

    /// Whether responses go through the brotli/gzip compression layer
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let public_url = lookup(PUBLIC_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        let compression = !lookup(DISABLE_COMPRESSION_VAR)
            .as_deref()
            .is_some_and(is_truthy);

        Self {
            public_url,
            compression,
        }
    }

    /// Check if a public URL is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_url: None,
            compression: true,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
