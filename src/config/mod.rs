pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::catalog::CatalogVariant;
#[cfg(feature = "cli")]
use crate::domain::model::Sex;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Form fields and overrides for one reading. Form fields are optional here so
/// that a missing one is reported like an unfilled form, not as a usage error.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "numerology")]
#[command(about = "Lo Shu grid reading with crystal recommendations")]
pub struct CliConfig {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Date of birth as DD/MM/YYYY or DDMMYYYY
    #[arg(long)]
    pub dob: Option<String>,

    /// Male or Female
    #[arg(long)]
    pub sex: Option<Sex>,

    #[arg(long)]
    pub phone: Option<String>,

    /// A few words about what the bracelet should help with
    #[arg(long)]
    pub problems: Option<String>,

    /// Send a customized bracelet request when two or more numbers are missing
    #[arg(long)]
    pub request_custom: bool,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub catalog: Option<CatalogVariant>,

    #[arg(long)]
    pub product_base_url: Option<String>,

    /// Where custom requests are POSTed; without one they are only logged
    #[arg(long)]
    pub notify_endpoint: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let config = CliConfig::parse_from([
            "numerology",
            "--name",
            "Asha",
            "--email",
            "asha@example.com",
            "--dob",
            "05/12/1990",
            "--sex",
            "female",
            "--catalog",
            "planetary",
            "--request-custom",
            "--json",
        ]);

        assert_eq!(config.name.as_deref(), Some("Asha"));
        assert_eq!(config.dob.as_deref(), Some("05/12/1990"));
        assert_eq!(config.sex, Some(Sex::Female));
        assert_eq!(config.catalog, Some(CatalogVariant::Planetary));
        assert!(config.request_custom);
        assert!(config.json);
        assert!(!config.verbose);
    }

    #[test]
    fn test_form_fields_are_optional() {
        let config = CliConfig::parse_from(["numerology"]);
        assert!(config.name.is_none());
        assert!(config.sex.is_none());
    }

    #[test]
    fn test_rejects_unknown_sex() {
        assert!(CliConfig::try_parse_from(["numerology", "--sex", "robot"]).is_err());
    }
}
