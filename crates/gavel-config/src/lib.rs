//! # gavel-config
//!
//! Layered configuration loading for Gavel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GAVEL_*` prefix, `__` as separator)
//! 2. Project-level `.gavel/config.toml`
//! 3. User-level `~/.config/gavel/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GAVEL_SCRAPER__CLIENT` -> `scraper.client`,
//! `GAVEL_PATTERNS__VOTE_APPROVE` -> `patterns.vote_approve`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gavel_config::GavelConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = GavelConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = GavelConfig::load().expect("config");
//!
//! if config.scraper.is_configured() {
//!     println!("scraping {}", config.scraper.client);
//! }
//! ```

mod error;
mod patterns;
mod scraper;

pub use error::ConfigError;
pub use patterns::PatternsSection;
pub use scraper::ScraperSection;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GavelConfig {
    #[serde(default)]
    pub scraper: ScraperSection,
    #[serde(default)]
    pub patterns: PatternsSection,
}

impl GavelConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`GavelConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`GAVEL_*` prefix)
    /// 2. `.gavel/config.toml` (project-local)
    /// 3. `~/.config/gavel/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".gavel/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("GAVEL_").split("__"));

        figment
    }

    /// Reject values no scrape run could use.
    ///
    /// Only shape is checked here; whether the client name exists or the
    /// patterns compile is decided where they are used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let minutes = self.scraper.timezone_offset_minutes;
        if minutes <= -24 * 60 || minutes >= 24 * 60 {
            return Err(ConfigError::InvalidValue {
                field: "scraper.timezone_offset_minutes".to_string(),
                reason: format!("{minutes} is not within a day of UTC"),
            });
        }
        Ok(())
    }

    /// The scraper section, or [`ConfigError::NotConfigured`] when no
    /// municipality is named.
    pub fn require_scraper(&self) -> Result<&ScraperSection, ConfigError> {
        if self.scraper.is_configured() {
            Ok(&self.scraper)
        } else {
            Err(ConfigError::NotConfigured {
                section: "scraper".to_string(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gavel").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is
    /// found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
