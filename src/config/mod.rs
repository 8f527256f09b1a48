pub mod actions;
pub mod key;
pub mod keybindings;
pub mod loader;
pub mod resolver;

pub use actions::*;
use keybindings::KeybindingsConfig;
pub use loader::{config_path, load};
pub use resolver::KeyResolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

/// Supplier catalogs offered in the search screen's selector.
///
/// This used to be a hardcoded list in the view layer; it now lives in the
/// config file so users can trim or extend it without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierConfig {
    pub enabled: Vec<String>,
}

impl Default for SupplierConfig {
    fn default() -> Self {
        Self {
            enabled: [
                "Digi-Key",
                "Mouser",
                "Farnell",
                "Newark",
                "Element14",
                "LCSC",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// Part-search backend endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8730".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    #[serde(default)]
    pub suppliers: SupplierConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_supplier_list_matches_supported_catalogs() {
        let config = AppConfig::default();
        assert_eq!(
            config.suppliers.enabled,
            vec!["Digi-Key", "Mouser", "Farnell", "Newark", "Element14", "LCSC"]
        );
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [suppliers]
            enabled = ["LCSC"]
            "#,
        )
        .unwrap();

        assert_eq!(config.suppliers.enabled, vec!["LCSC"]);
        assert_eq!(config.theme.name, "Catppuccin Mocha");
        assert_eq!(config.catalog.timeout_secs, 30);
    }
}
