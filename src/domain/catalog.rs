use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::error::{NumerologyError, Result};

const ATTRIBUTE_CRYSTALS: [&str; 9] = [
    "Citrine – boosts confidence & leadership",
    "Moonstone – enhances harmony & intuition",
    "Carnelian – sparks creativity & joy",
    "Pyrite – builds stability & focus",
    "Lapis Lazuli – improves adaptability",
    "Rose Quartz – strengthens love & relationships",
    "Amethyst – deepens spirituality & wisdom",
    "Tiger’s Eye – attracts abundance & power",
    "Black Tourmaline – clears karmic blockages",
];

const PLANETARY_CRYSTALS: [&str; 9] = [
    "Sun – Ruby & Sunstone for vitality",
    "Moon – Pearl & Moonstone for calm emotions",
    "Jupiter – Yellow Sapphire & Citrine for growth",
    "Rahu – Hessonite Garnet for grounding",
    "Mercury – Emerald & Green Aventurine for communication",
    "Venus – Diamond & Clear Quartz for love and comfort",
    "Ketu – Cat’s Eye for detachment and insight",
    "Saturn – Blue Sapphire & Amethyst for discipline",
    "Mars – Red Coral & Red Jasper for courage",
];

/// Which built-in table a catalog starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CatalogVariant {
    #[default]
    Attributes,
    Planetary,
}

/// Crystal description for each grid number 1..=9.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrystalCatalog {
    entries: [String; 9],
}

impl CrystalCatalog {
    pub fn builtin(variant: CatalogVariant) -> Self {
        let table = match variant {
            CatalogVariant::Attributes => ATTRIBUTE_CRYSTALS,
            CatalogVariant::Planetary => PLANETARY_CRYSTALS,
        };
        Self {
            entries: table.map(str::to_string),
        }
    }

    /// Starts from `variant` and replaces the entries named in `overrides`.
    /// Keys must be "1".."9"; values must not be blank.
    pub fn with_overrides(
        variant: CatalogVariant,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut catalog = Self::builtin(variant);
        for (key, description) in overrides {
            let number = key
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=9).contains(n))
                .ok_or_else(|| NumerologyError::InvalidConfigValueError {
                    field: "catalog.overrides".to_string(),
                    value: key.clone(),
                    reason: "Key must be a grid number from 1 to 9".to_string(),
                })?;
            if description.trim().is_empty() {
                return Err(NumerologyError::InvalidConfigValueError {
                    field: format!("catalog.overrides.{}", key),
                    value: description.clone(),
                    reason: "Description cannot be empty".to_string(),
                });
            }
            catalog.entries[usize::from(number - 1)] = description.clone();
        }
        Ok(catalog)
    }

    /// `None` for anything outside 1..=9.
    pub fn get(&self, number: u8) -> Option<&str> {
        match number {
            1..=9 => Some(&self.entries[usize::from(number - 1)]),
            _ => None,
        }
    }
}

impl Default for CrystalCatalog {
    fn default() -> Self {
        Self::builtin(CatalogVariant::default())
    }
}
