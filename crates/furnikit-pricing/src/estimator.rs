//! Material and hardware cost estimation
//!
//! Cut-list areas are summed per material, inflated by the waste factor and
//! rounded up to whole standard sheets. Thickness does not count towards
//! area. Hardware is a flat unit price times quantity.

use crate::price_table::PriceTable;
use furnikit_core::standards::WASTE_FACTOR;
use furnikit_core::{find_material, CutListItem, HardwareItem};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Standard sheet width (mm)
pub const SHEET_WIDTH: f64 = 1220.0;
/// Standard sheet height (mm)
pub const SHEET_HEIGHT: f64 = 2440.0;
/// Standard sheet area (mm²)
pub const SHEET_AREA: f64 = SHEET_WIDTH * SHEET_HEIGHT;

/// Absorbs float noise so exact multiples of a sheet do not round up
const SHEET_EPSILON: f64 = 1e-9;

/// Sheet requirements per material
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialNeeds {
    pub sheets_needed: BTreeMap<String, u32>,
    /// Raw planar area per material before waste (mm²)
    pub areas_mm2: BTreeMap<String, f64>,
    pub waste_factor: f64,
}

/// Whole sheets covering `area` once waste is added
pub fn sheets_for_area(area: f64) -> u32 {
    let raw = area * WASTE_FACTOR / SHEET_AREA;
    (raw - SHEET_EPSILON).ceil().max(0.0) as u32
}

/// Sum cut-list areas per material and convert them to sheet counts.
///
/// Materials whose pieces add up to no area get no sheet entry.
pub fn calculate_material_needs(cut_list: &[CutListItem]) -> MaterialNeeds {
    let mut areas_mm2: BTreeMap<String, f64> = BTreeMap::new();
    for item in cut_list {
        let area = item.size.area() * f64::from(item.quantity);
        *areas_mm2.entry(item.material.clone()).or_default() += area;
    }
    areas_mm2.retain(|material, area| {
        let keep = *area > 0.0;
        if !keep {
            debug!(material = material.as_str(), "material has no cuttable area");
        }
        keep
    });

    let sheets_needed = areas_mm2
        .iter()
        .map(|(material, area)| (material.clone(), sheets_for_area(*area)))
        .collect();

    MaterialNeeds {
        sheets_needed,
        areas_mm2,
        waste_factor: WASTE_FACTOR,
    }
}

/// Cost of one material in a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCostLine {
    pub material: String,
    pub label: String,
    pub sheets: u32,
    pub area_mm2: f64,
    pub price_per_sheet: f64,
    pub total: f64,
}

/// Per-material cost lines, ordered by material id
pub fn material_cost_breakdown(cut_list: &[CutListItem], prices: &PriceTable) -> Vec<MaterialCostLine> {
    let needs = calculate_material_needs(cut_list);

    needs
        .sheets_needed
        .iter()
        .map(|(material, sheets)| {
            let price_per_sheet = prices.material_price(material);
            MaterialCostLine {
                material: material.clone(),
                label: find_material(material)
                    .map(|m| m.label.to_string())
                    .unwrap_or_else(|| material.clone()),
                sheets: *sheets,
                area_mm2: needs.areas_mm2.get(material).copied().unwrap_or_default(),
                price_per_sheet,
                total: f64::from(*sheets) * price_per_sheet,
            }
        })
        .collect()
}

/// Total sheet cost of a cut list; zero for an empty list
pub fn estimate_material_cost(cut_list: &[CutListItem], prices: &PriceTable) -> f64 {
    material_cost_breakdown(cut_list, prices)
        .iter()
        .map(|line| line.total)
        .sum()
}

/// Cost of one hardware row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareCostLine {
    pub item: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

/// Per-row hardware costs in input order
pub fn hardware_cost_breakdown(hardware: &[HardwareItem], prices: &PriceTable) -> Vec<HardwareCostLine> {
    hardware
        .iter()
        .map(|hw| {
            let unit_price = prices.hardware_price(&hw.item);
            HardwareCostLine {
                item: hw.item.clone(),
                size: hw.size.clone(),
                quantity: hw.quantity,
                unit_price,
                total: unit_price * f64::from(hw.quantity),
            }
        })
        .collect()
}

/// Total hardware cost; zero for an empty list
pub fn estimate_hardware_cost(hardware: &[HardwareItem], prices: &PriceTable) -> f64 {
    hardware
        .iter()
        .map(|hw| prices.hardware_price(&hw.item) * f64::from(hw.quantity))
        .sum()
}

/// Merge rows with the same item and size, keeping first-seen order
pub fn aggregate_hardware(hardware: &[HardwareItem]) -> Vec<HardwareItem> {
    let mut merged: Vec<HardwareItem> = Vec::new();
    for hw in hardware {
        match merged
            .iter_mut()
            .find(|m| m.item == hw.item && m.size == hw.size)
        {
            Some(existing) => existing.quantity += hw.quantity,
            None => merged.push(hw.clone()),
        }
    }
    merged
}
