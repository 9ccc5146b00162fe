use crate::error::{CatalogError, Result};
use crate::projection::PriceMode;
use crate::statics;
use crate::store::SortMode;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Viewer settings. Read from an optional JSON5 file; CLI flags override it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Rows added per "show more", and the limit a filter change resets to.
    pub page_step: usize,
    pub default_sort: SortMode,
    pub default_price_mode: PriceMode,
    pub catalog_path: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_step: statics::DEFAULT_PAGE_STEP,
            default_sort: SortMode::default(),
            default_price_mode: PriceMode::default(),
            catalog_path: None,
        }
    }
}

impl BrowserConfig {
    pub fn load_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self =
            json5::from_str(text).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_step == 0 {
            return Err(CatalogError::Config("page_step must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BrowserConfig;
    use crate::projection::PriceMode;
    use crate::store::SortMode;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = BrowserConfig::parse("{ page_step: 25, // comment\n }").unwrap();
        assert_eq!(config.page_step, 25);
        assert_eq!(config.default_sort, SortMode::PriceAsc);
        assert_eq!(config.default_price_mode, PriceMode::Stack);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn enums_use_snake_case() {
        let config = BrowserConfig::parse(
            r#"{"default_sort": "name_desc", "default_price_mode": "unit", "catalog_path": "data/items.json"}"#,
        )
        .unwrap();
        assert_eq!(config.default_sort, SortMode::NameDesc);
        assert_eq!(config.default_price_mode, PriceMode::Unit);
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(std::path::Path::new("data/items.json"))
        );
    }

    #[test]
    fn zero_page_step_is_rejected() {
        assert!(BrowserConfig::parse("{ page_step: 0 }").is_err());
        assert!(BrowserConfig::parse("{ default_sort: \"sideways\" }").is_err());
    }
}
