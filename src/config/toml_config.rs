use crate::domain::catalog::CatalogVariant;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Optional settings file. Every section may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: Option<CatalogConfig>,
    pub store: Option<StoreConfig>,
    pub notifier: Option<NotifierConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub variant: Option<CatalogVariant>,
    /// Keyed by grid number as a string, "1" to "9".
    pub overrides: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub product_base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifierConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NumerologyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NumerologyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NumerologyError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn catalog_variant(&self) -> Option<CatalogVariant> {
        self.catalog.as_ref().and_then(|c| c.variant)
    }

    pub fn catalog_overrides(&self) -> Option<&BTreeMap<String, String>> {
        self.catalog.as_ref().and_then(|c| c.overrides.as_ref())
    }

    pub fn product_base_url(&self) -> Option<&str> {
        self.store
            .as_ref()
            .and_then(|s| s.product_base_url.as_deref())
    }

    pub fn notify_endpoint(&self) -> Option<&str> {
        self.notifier.as_ref().and_then(|n| n.endpoint.as_deref())
    }

    pub fn notify_timeout_seconds(&self) -> Option<u64> {
        self.notifier.as_ref().and_then(|n| n.timeout_seconds)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = self.product_base_url() {
            validate_url("store.product_base_url", url)?;
        }

        if let Some(endpoint) = self.notify_endpoint() {
            validate_url("notifier.endpoint", endpoint)?;
        }

        if let Some(timeout) = self.notify_timeout_seconds() {
            validate_positive_number("notifier.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
