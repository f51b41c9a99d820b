//! Indentation preferences.
//!
//! Specifically, we try to find a nestml-lang.toml, and if present we load settings from there.
//! This provides the indentation unit and tab width used by the indentation queries.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "nestml-lang.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from nestml-lang.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 2)]
    /// Columns per nesting level.
    pub indent_unit: usize,
    #[facet(default = 4)]
    /// Tab stop width used when measuring columns.
    pub tab_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            tab_size: 4,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from nestml-lang.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when the file is
    /// missing or does not parse.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
