use serde::Serialize;

use crate::domain::catalog::CrystalCatalog;

pub const DEFAULT_PRODUCT_BASE_URL: &str = "https://maartstore.com/products";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrystalPick {
    pub number: u8,
    pub crystal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Nothing missing.
    Complete,
    Single {
        number: u8,
        crystal: String,
        shop_url: String,
    },
    /// Two or more missing; a customized bracelet may be requested.
    Combination { picks: Vec<CrystalPick> },
}

impl Recommendation {
    /// Picks the branch from the missing numbers, which must be sorted ascending.
    pub fn for_missing(missing: &[u8], catalog: &CrystalCatalog, product_base_url: &str) -> Self {
        match missing {
            [] => Recommendation::Complete,
            [number] => Recommendation::Single {
                number: *number,
                crystal: crystal_for(catalog, *number),
                shop_url: format!("{}/{}", product_base_url.trim_end_matches('/'), number),
            },
            _ => Recommendation::Combination {
                picks: missing
                    .iter()
                    .map(|&number| CrystalPick {
                        number,
                        crystal: crystal_for(catalog, number),
                    })
                    .collect(),
            },
        }
    }

    pub fn offers_custom_request(&self) -> bool {
        matches!(self, Recommendation::Combination { .. })
    }
}

fn crystal_for(catalog: &CrystalCatalog, number: u8) -> String {
    catalog.get(number).unwrap_or_default().to_string()
}
