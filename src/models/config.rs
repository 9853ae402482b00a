//! Configuration model loaded from external sources.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::filter::NameMatch;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE};

fn default_case_sensitive_search() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_max_page_size() -> usize {
    MAX_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Whether customer name search distinguishes letter case.
    #[serde(default = "default_case_sensitive_search")]
    pub case_sensitive_search: bool,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("default_page_size must be between 1 and max_page_size ({max}), got {default}")]
    InvalidPageSize { default: usize, max: usize },
}

impl ServerConfig {
    /// Listing settings derived from this configuration.
    ///
    /// Fails when requests without a `limit` could never be served.
    pub fn listing_options(&self) -> Result<ListingOptions, ConfigError> {
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::InvalidPageSize {
                default: self.default_page_size,
                max: self.max_page_size,
            });
        }

        Ok(ListingOptions {
            name_match: NameMatch::from_case_sensitive(self.case_sensitive_search),
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        })
    }
}

/// Per-deployment knobs consumed by the listing service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingOptions {
    pub name_match: NameMatch,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            name_match: NameMatch::CaseSensitive,
            default_page_size: DEFAULT_ITEMS_PER_PAGE,
            max_page_size: MAX_ITEMS_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_config(default_page_size: usize, max_page_size: usize) -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1".into(),
            port: 4000,
            database_url: "app.db".into(),
            case_sensitive_search: false,
            default_page_size,
            max_page_size,
        }
    }

    #[test]
    fn listing_options_follow_config() {
        let options = server_config(20, 50).listing_options().unwrap();
        assert_eq!(options.name_match, NameMatch::CaseInsensitive);
        assert_eq!(options.default_page_size, 20);
        assert_eq!(options.max_page_size, 50);
    }

    #[test]
    fn unusable_default_page_size_is_rejected() {
        assert_eq!(
            server_config(0, 100).listing_options(),
            Err(ConfigError::InvalidPageSize {
                default: 0,
                max: 100
            })
        );
        assert!(server_config(101, 100).listing_options().is_err());
        assert!(server_config(100, 100).listing_options().is_ok());
    }
}
