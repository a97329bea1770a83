//! Unit prices for sheet materials and hardware
//!
//! Defaults come from the material catalog and a flat hardware list; any
//! override supplied by configuration takes precedence.

use furnikit_core::material_catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Price per sheet for materials missing from the table
pub const FALLBACK_SHEET_PRICE: f64 = 40.0;
/// Price per unit for hardware missing from the table
pub const FALLBACK_UNIT_PRICE: f64 = 1.0;

const DEFAULT_HARDWARE_PRICES: [(&str, f64); 8] = [
    ("wood_screws", 0.05),
    ("shelf_pins", 0.15),
    ("corner_brackets", 0.80),
    ("drawer_slides", 12.00),
    ("hinges", 3.50),
    ("handles", 2.50),
    ("dowels", 0.10),
    ("wood_glue", 8.00),
];

/// Material and hardware unit prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    material_prices: BTreeMap<String, f64>,
    hardware_prices: BTreeMap<String, f64>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            material_prices: material_catalog()
                .iter()
                .map(|m| (m.id.to_string(), m.price_per_sheet))
                .collect(),
            hardware_prices: DEFAULT_HARDWARE_PRICES
                .iter()
                .map(|(item, price)| (item.to_string(), *price))
                .collect(),
        }
    }
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace or add material prices (per sheet)
    pub fn with_material_prices<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.material_prices
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Replace or add hardware unit prices
    pub fn with_hardware_prices<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.hardware_prices
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Price of one sheet of `material`
    pub fn material_price(&self, material: &str) -> f64 {
        match self.material_prices.get(material) {
            Some(price) => *price,
            None => {
                debug!(material, "no sheet price, using fallback");
                FALLBACK_SHEET_PRICE
            }
        }
    }

    /// Price of one unit of hardware `item`
    pub fn hardware_price(&self, item: &str) -> f64 {
        match self.hardware_prices.get(item) {
            Some(price) => *price,
            None => {
                debug!(item, "no hardware price, using fallback");
                FALLBACK_UNIT_PRICE
            }
        }
    }
}
