//! Widget configuration persistence
//!
//! Stores user preferences in `~/.config/search-select/config.yaml`

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{SearchSelectConfig, LOOKUP_DEBOUNCE_MS};
use crate::registry::EntityDomain;

/// Per-domain display overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainOverride {
    /// Replaces the noun in "New <noun>: ..."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noun: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Widget configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Delay between the last keystroke and the lookup
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Overrides keyed by domain (e.g. `item_type`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub domains: BTreeMap<EntityDomain, DomainOverride>,
}

fn default_debounce_ms() -> u64 {
    LOOKUP_DEBOUNCE_MS
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            domains: BTreeMap::new(),
        }
    }
}

impl WidgetConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if unusable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Field configuration for a domain with overrides applied
    pub fn field_config(&self, domain: EntityDomain) -> SearchSelectConfig {
        let mut config = SearchSelectConfig::for_domain(domain).with_debounce_ms(self.debounce_ms);
        if let Some(overrides) = self.domains.get(&domain) {
            if let Some(noun) = &overrides.noun {
                config.noun = Some(noun.clone());
            }
            if let Some(placeholder) = &overrides.placeholder {
                config.placeholder = placeholder.clone();
            }
        }
        config
    }
}
