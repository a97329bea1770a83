//! Materials catalog
//!
//! This module provides:
//! - Material categories used for load classes and pricing
//! - The board stock the engines and the estimator know about
//! - Lookup helpers with a plywood fallback for unknown ids

use serde::Serialize;

/// Material categories for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MaterialCategory {
    /// Veneer plywood sheets
    Plywood,
    /// Medium-density fibreboard
    Mdf,
    /// Thin hardboard for backs and drawer bottoms
    Hardboard,
    /// Solid timber for legs and plinths
    SolidWood,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plywood => write!(f, "Plywood"),
            Self::Mdf => write!(f, "MDF"),
            Self::Hardboard => write!(f, "Hardboard"),
            Self::SolidWood => write!(f, "Solid Wood"),
        }
    }
}

/// One stock material
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialOption {
    /// Identifier used in cut lists and price tables
    pub id: &'static str,
    /// Display name
    pub label: &'static str,
    pub category: MaterialCategory,
    /// Nominal board thickness in mm
    pub thickness_mm: f64,
    /// Default price in EUR per sheet (per linear meter for solid wood)
    pub price_per_sheet: f64,
    /// Offered to users as a material preference
    pub selectable: bool,
}

static CATALOG: [MaterialOption; 7] = [
    MaterialOption {
        id: "pine_plywood",
        label: "Pine Plywood",
        category: MaterialCategory::Plywood,
        thickness_mm: 18.0,
        price_per_sheet: 45.0,
        selectable: true,
    },
    MaterialOption {
        id: "birch_plywood",
        label: "Birch Plywood",
        category: MaterialCategory::Plywood,
        thickness_mm: 18.0,
        price_per_sheet: 65.0,
        selectable: true,
    },
    MaterialOption {
        id: "oak_plywood",
        label: "Oak Plywood",
        category: MaterialCategory::Plywood,
        thickness_mm: 18.0,
        price_per_sheet: 85.0,
        selectable: true,
    },
    MaterialOption {
        id: "mdf",
        label: "MDF",
        category: MaterialCategory::Mdf,
        thickness_mm: 18.0,
        price_per_sheet: 35.0,
        selectable: true,
    },
    MaterialOption {
        id: "hardboard",
        label: "Hardboard",
        category: MaterialCategory::Hardboard,
        thickness_mm: 6.0,
        price_per_sheet: 15.0,
        selectable: false,
    },
    MaterialOption {
        id: "solid_pine",
        label: "Solid Pine",
        category: MaterialCategory::SolidWood,
        thickness_mm: 20.0,
        price_per_sheet: 8.0,
        selectable: false,
    },
    MaterialOption {
        id: "solid_oak",
        label: "Solid Oak",
        category: MaterialCategory::SolidWood,
        thickness_mm: 20.0,
        price_per_sheet: 15.0,
        selectable: false,
    },
];

/// Every material the catalog knows about
pub fn material_catalog() -> &'static [MaterialOption] {
    &CATALOG
}

/// Materials a user may pick as a preference
pub fn selectable_materials() -> impl Iterator<Item = &'static MaterialOption> {
    CATALOG.iter().filter(|m| m.selectable)
}

pub fn find_material(id: &str) -> Option<&'static MaterialOption> {
    CATALOG.iter().find(|m| m.id == id)
}

/// Category of a material id; unknown ids are treated as plywood
pub fn material_category(id: &str) -> MaterialCategory {
    find_material(id)
        .map(|m| m.category)
        .unwrap_or(MaterialCategory::Plywood)
}
