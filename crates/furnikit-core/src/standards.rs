//! Carpentry standards
//!
//! Constant tables and small derivation functions used by every archetype
//! engine: board thicknesses, screw classes, load factors and spacing rules.
//! All functions are pure; inputs are assumed to be validated upstream.

use crate::data::{find_material, MaterialCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board thicknesses in millimeters
pub mod thickness {
    pub const PLYWOOD_STANDARD: f64 = 18.0;
    pub const PLYWOOD_THIN: f64 = 12.0;
    pub const MDF: f64 = 18.0;
    pub const SOLID_WOOD: f64 = 20.0;
    pub const BACK_PANEL: f64 = 6.0;
}

/// Fixed furniture dimensions in millimeters
pub mod standard_dimensions {
    pub const DESK_HEIGHT: f64 = 750.0;
    pub const FOOTPLATE_HEIGHT: f64 = 50.0;
    pub const FOOTPLATE_WIDTH: f64 = 50.0;
}

/// Distance of screws and pin holes from a panel edge (mm)
pub const EDGE_CLEARANCE: f64 = 20.0;
/// Distance between shelf pin holes (mm)
pub const STANDARD_SHELF_PIN_SPACING: f64 = 32.0;
/// Default distance between screws along a joint (mm)
pub const DEFAULT_SCREW_SPACING: f64 = 150.0;
/// Extra material allowance for cuts and mistakes
pub const WASTE_FACTOR: f64 = 1.1;

/// Expected load on a joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedLoad {
    Light,
    Medium,
    Heavy,
}

/// Standard screw classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrewSize {
    LightDuty,
    MediumDuty,
    HeavyDuty,
}

impl ScrewSize {
    /// Diameter x length descriptor
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrewSize::LightDuty => "3x30mm",
            ScrewSize::MediumDuty => "4x40mm",
            ScrewSize::HeavyDuty => "5x50mm",
        }
    }
}

impl fmt::Display for ScrewSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shelf load classes, in kg per linear meter of a 300 mm deep shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadFactor {
    Plywood18mm,
    Plywood12mm,
    SolidWood,
    Mdf18mm,
}

impl LoadFactor {
    pub fn capacity_per_meter(&self) -> f64 {
        match self {
            LoadFactor::Plywood18mm => 25.0,
            LoadFactor::Plywood12mm => 15.0,
            LoadFactor::SolidWood => 35.0,
            LoadFactor::Mdf18mm => 20.0,
        }
    }

    /// Pick the load class for a board of the given category and thickness.
    ///
    /// Plywood thinner than the standard board falls into the 12 mm class;
    /// hardboard is rated like thin plywood.
    pub fn classify(category: MaterialCategory, thickness: f64) -> Self {
        match category {
            MaterialCategory::SolidWood => LoadFactor::SolidWood,
            MaterialCategory::Mdf => LoadFactor::Mdf18mm,
            MaterialCategory::Hardboard => LoadFactor::Plywood12mm,
            MaterialCategory::Plywood if thickness < thickness::PLYWOOD_STANDARD => {
                LoadFactor::Plywood12mm
            }
            MaterialCategory::Plywood => LoadFactor::Plywood18mm,
        }
    }
}

/// Load class of a catalog material; unknown ids rate as 18 mm plywood
pub fn load_factor_for(material_id: &str) -> LoadFactor {
    match find_material(material_id) {
        Some(material) => LoadFactor::classify(material.category, material.thickness_mm),
        None => LoadFactor::Plywood18mm,
    }
}

/// Reduce a dimension by the material thickness on `sides` sides
pub fn adjust_for_thickness(dimension: f64, thickness: f64, sides: u32) -> f64 {
    dimension - thickness * f64::from(sides)
}

/// Pick a screw class; the heavy-duty check runs before the medium one
pub fn determine_screw_size(material_thickness: f64, expected_load: ExpectedLoad) -> ScrewSize {
    if expected_load == ExpectedLoad::Heavy || material_thickness >= 20.0 {
        ScrewSize::HeavyDuty
    } else if expected_load == ExpectedLoad::Medium || material_thickness >= 15.0 {
        ScrewSize::MediumDuty
    } else {
        ScrewSize::LightDuty
    }
}

/// Screws along a joint of `length`; never fewer than two
pub fn calculate_screw_count(length: f64, screw_spacing: f64) -> u32 {
    let count = (length / screw_spacing).ceil();
    if count.is_finite() && count > 2.0 {
        count as u32
    } else {
        2
    }
}

/// Shelf pin hole offsets from 50 mm up to `height - 100`, every 32 mm
pub fn calculate_shelf_pin_positions(height: f64) -> Vec<f64> {
    let usable_height = height - 100.0;
    let mut positions = Vec::new();
    let mut h = 50.0;
    while h < usable_height {
        positions.push(h);
        h += STANDARD_SHELF_PIN_SPACING;
    }
    positions
}

/// Estimated shelf load capacity in kg, rounded to the nearest kilogram.
///
/// Capacity degrades linearly with span beyond 0.5 m and is floored at 30 %
/// of the base value. A closed-form estimate, not a structural analysis.
pub fn calculate_load_capacity(
    width: f64,
    depth: f64,
    thickness: f64,
    material: MaterialCategory,
) -> f64 {
    let factor = LoadFactor::classify(material, thickness);
    let span_meters = width / 1000.0;

    let base_capacity = factor.capacity_per_meter() * (depth / 300.0);
    let span_factor = (1.0 - (span_meters - 0.5) * 0.3).max(0.3);

    (base_capacity * span_factor).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_for_thickness() {
        assert_eq!(adjust_for_thickness(800.0, 18.0, 2), 764.0);
        assert_eq!(adjust_for_thickness(800.0, 18.0, 1), 782.0);
        assert_eq!(adjust_for_thickness(800.0, 18.0, 0), 800.0);
    }

    #[test]
    fn test_screw_size_tiers() {
        assert_eq!(determine_screw_size(18.0, ExpectedLoad::Heavy), ScrewSize::HeavyDuty);
        assert_eq!(determine_screw_size(20.0, ExpectedLoad::Light), ScrewSize::HeavyDuty);
        assert_eq!(determine_screw_size(18.0, ExpectedLoad::Medium), ScrewSize::MediumDuty);
        assert_eq!(determine_screw_size(15.0, ExpectedLoad::Light), ScrewSize::MediumDuty);
        assert_eq!(determine_screw_size(12.0, ExpectedLoad::Medium), ScrewSize::MediumDuty);
        assert_eq!(determine_screw_size(12.0, ExpectedLoad::Light), ScrewSize::LightDuty);
        assert_eq!(ScrewSize::MediumDuty.to_string(), "4x40mm");
    }

    #[test]
    fn test_screw_count_minimum() {
        assert_eq!(calculate_screw_count(0.0, DEFAULT_SCREW_SPACING), 2);
        assert_eq!(calculate_screw_count(100.0, DEFAULT_SCREW_SPACING), 2);
        assert_eq!(calculate_screw_count(301.0, DEFAULT_SCREW_SPACING), 3);
        assert_eq!(calculate_screw_count(782.0, DEFAULT_SCREW_SPACING), 6);
        assert_eq!(calculate_screw_count(100.0, 10.0), 10);
    }

    #[test]
    fn test_shelf_pin_positions() {
        assert!(calculate_shelf_pin_positions(150.0).is_empty());
        assert!(calculate_shelf_pin_positions(100.0).is_empty());
        assert_eq!(calculate_shelf_pin_positions(200.0), vec![50.0, 82.0]);

        let positions = calculate_shelf_pin_positions(1750.0);
        assert_eq!(positions.first(), Some(&50.0));
        assert!(positions.iter().all(|p| *p < 1650.0));
        assert!(positions.windows(2).all(|w| w[1] - w[0] == 32.0));
        assert_eq!(positions.len(), 50);
    }

    #[test]
    fn test_load_factor_for_catalog() {
        assert_eq!(load_factor_for("mdf"), LoadFactor::Mdf18mm);
        assert_eq!(load_factor_for("solid_oak"), LoadFactor::SolidWood);
        assert_eq!(load_factor_for("hardboard"), LoadFactor::Plywood12mm);
        assert_eq!(load_factor_for("unobtainium"), LoadFactor::Plywood18mm);
    }

    #[test]
    fn test_load_capacity() {
        // 0.5 m span, 300 mm deep: full base capacity
        assert_eq!(calculate_load_capacity(500.0, 300.0, 18.0, MaterialCategory::Plywood), 25.0);
        // 1.0 m span: 0.85 of base
        assert_eq!(calculate_load_capacity(1000.0, 300.0, 18.0, MaterialCategory::Plywood), 21.0);
        // very long span floors at 30 %
        assert_eq!(calculate_load_capacity(5000.0, 300.0, 18.0, MaterialCategory::Plywood), 8.0);
        // thin plywood and mdf classes
        assert_eq!(calculate_load_capacity(500.0, 300.0, 12.0, MaterialCategory::Plywood), 15.0);
        assert_eq!(calculate_load_capacity(500.0, 600.0, 18.0, MaterialCategory::Mdf), 40.0);
    }
}
