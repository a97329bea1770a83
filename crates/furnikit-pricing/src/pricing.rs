//! Priced summary of a technical specification

use crate::estimator::{
    estimate_hardware_cost, material_cost_breakdown, MaterialCostLine,
};
use crate::price_table::PriceTable;
use furnikit_core::{format_currency, TechnicalSpecs};
use serde::Serialize;
use tracing::debug;

/// Currency used when none is configured
pub const DEFAULT_CURRENCY: &str = "EUR";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfo {
    pub materials: Vec<MaterialCostLine>,
    pub materials_cost: f64,
    pub hardware_cost: f64,
    /// Not estimated yet, always zero
    pub finishing_cost: f64,
    pub total_cost: f64,
    pub currency: String,
}

impl PricingInfo {
    /// Total formatted for display, e.g. `€215.40`
    pub fn formatted_total(&self) -> String {
        format_currency(self.total_cost, &self.currency)
    }
}

/// Price a generated specification
pub fn price_specs(specs: &TechnicalSpecs, prices: &PriceTable, currency: &str) -> PricingInfo {
    let materials = material_cost_breakdown(&specs.cut_list, prices);
    let materials_cost: f64 = materials.iter().map(|line| line.total).sum();
    let hardware_cost = estimate_hardware_cost(&specs.hardware, prices);
    let finishing_cost = 0.0;

    debug!(materials_cost, hardware_cost, currency, "priced specification");

    PricingInfo {
        materials,
        materials_cost,
        hardware_cost,
        finishing_cost,
        total_cost: materials_cost + hardware_cost + finishing_cost,
        currency: currency.to_string(),
    }
}
