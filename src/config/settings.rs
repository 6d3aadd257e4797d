use crate::config::toml_config::AppConfig;
use crate::core::recommendation::DEFAULT_PRODUCT_BASE_URL;
use crate::domain::catalog::{CatalogVariant, CrystalCatalog};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::collections::BTreeMap;

/// Values given on the command line, which win over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog: Option<CatalogVariant>,
    pub product_base_url: Option<String>,
    pub notify_endpoint: Option<String>,
}

/// Effective configuration after merging the file, overrides and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    catalog: CrystalCatalog,
    product_base_url: String,
    notify_endpoint: Option<String>,
    notify_timeout_seconds: Option<u64>,
}

impl Settings {
    pub fn resolve(file: Option<&AppConfig>, overrides: &Overrides) -> Result<Self> {
        let variant = overrides
            .catalog
            .or_else(|| file.and_then(AppConfig::catalog_variant))
            .unwrap_or_default();
        let empty = BTreeMap::new();
        let catalog_overrides = file.and_then(AppConfig::catalog_overrides).unwrap_or(&empty);
        let catalog = CrystalCatalog::with_overrides(variant, catalog_overrides)?;

        let product_base_url = overrides
            .product_base_url
            .clone()
            .or_else(|| file.and_then(AppConfig::product_base_url).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_PRODUCT_BASE_URL.to_string());

        let notify_endpoint = overrides
            .notify_endpoint
            .clone()
            .or_else(|| file.and_then(AppConfig::notify_endpoint).map(str::to_string));

        let settings = Self {
            catalog,
            product_base_url,
            notify_endpoint,
            notify_timeout_seconds: file.and_then(AppConfig::notify_timeout_seconds),
        };
        settings.validate()?;

        tracing::debug!(
            "Resolved settings: catalog={:?}, product_base_url={}, notify_endpoint={:?}",
            variant,
            settings.product_base_url,
            settings.notify_endpoint
        );
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CrystalCatalog::default(),
            product_base_url: DEFAULT_PRODUCT_BASE_URL.to_string(),
            notify_endpoint: None,
            notify_timeout_seconds: None,
        }
    }
}

impl ConfigProvider for Settings {
    fn catalog(&self) -> &CrystalCatalog {
        &self.catalog
    }

    fn product_base_url(&self) -> &str {
        &self.product_base_url
    }

    fn notify_endpoint(&self) -> Option<&str> {
        self.notify_endpoint.as_deref()
    }

    fn notify_timeout_seconds(&self) -> Option<u64> {
        self.notify_timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("product_base_url", &self.product_base_url)?;
        if let Some(endpoint) = &self.notify_endpoint {
            validate_url("notify_endpoint", endpoint)?;
        }
        if let Some(timeout) = self.notify_timeout_seconds {
            validate_positive_number("notify_timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::resolve(None, &Overrides::default()).unwrap();

        assert_eq!(settings.product_base_url(), DEFAULT_PRODUCT_BASE_URL);
        assert!(settings.notify_endpoint().is_none());
        assert_eq!(settings.catalog(), &CrystalCatalog::default());
    }

    #[test]
    fn test_file_values_apply() {
        let file = AppConfig::from_toml_str(
            r#"
[catalog]
variant = "planetary"

[notifier]
endpoint = "https://hooks.example.com/in"
timeout_seconds = 3
"#,
        )
        .unwrap();

        let settings = Settings::resolve(Some(&file), &Overrides::default()).unwrap();
        assert_eq!(
            settings.catalog(),
            &CrystalCatalog::builtin(CatalogVariant::Planetary)
        );
        assert_eq!(settings.notify_endpoint(), Some("https://hooks.example.com/in"));
        assert_eq!(settings.notify_timeout_seconds(), Some(3));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = AppConfig::from_toml_str(
            r#"
[catalog]
variant = "planetary"

[store]
product_base_url = "https://file.example.com/products"
"#,
        )
        .unwrap();
        let overrides = Overrides {
            catalog: Some(CatalogVariant::Attributes),
            product_base_url: Some("https://cli.example.com/p".to_string()),
            notify_endpoint: Some("http://localhost:9000/hook".to_string()),
        };

        let settings = Settings::resolve(Some(&file), &overrides).unwrap();
        assert_eq!(settings.catalog(), &CrystalCatalog::default());
        assert_eq!(settings.product_base_url(), "https://cli.example.com/p");
        assert_eq!(settings.notify_endpoint(), Some("http://localhost:9000/hook"));
    }

    #[test]
    fn test_invalid_override_endpoint() {
        let overrides = Overrides {
            notify_endpoint: Some("not a url".to_string()),
            ..Overrides::default()
        };
        assert!(Settings::resolve(None, &overrides).is_err());
    }
}
