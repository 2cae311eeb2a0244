use serde::{Deserialize, Serialize};

use crate::destinations::{Destination, DestinationCatalog};
use crate::errors::CatalogError;

/// User-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub plain_output: bool,
    /// Custom destination list. Empty means the built-in popular destinations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<Destination>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui_color_enabled: Self::default_ui_color_enabled(),
            plain_output: false,
            destinations: Vec::new(),
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn destination_catalog(&self) -> Result<DestinationCatalog, CatalogError> {
        if self.destinations.is_empty() {
            Ok(DestinationCatalog::popular())
        } else {
            DestinationCatalog::new(self.destinations.clone())
        }
    }
}
