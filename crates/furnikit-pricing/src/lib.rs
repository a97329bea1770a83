//! # Furnikit Pricing
//!
//! Turns a cut list and hardware list into sheet counts and costs, and
//! gives a rough cutting order for the workshop.

pub mod estimator;
pub mod optimizer;
pub mod price_table;
pub mod pricing;

pub use estimator::{
    aggregate_hardware, calculate_material_needs, estimate_hardware_cost,
    estimate_material_cost, hardware_cost_breakdown, material_cost_breakdown, sheets_for_area,
    HardwareCostLine, MaterialCostLine, MaterialNeeds, SHEET_AREA, SHEET_HEIGHT, SHEET_WIDTH,
};
pub use optimizer::{optimize_cutting, CutPiece, CuttingLayout, ASSUMED_EFFICIENCY};
pub use price_table::{PriceTable, FALLBACK_SHEET_PRICE, FALLBACK_UNIT_PRICE};
pub use pricing::{price_specs, PricingInfo, DEFAULT_CURRENCY};
