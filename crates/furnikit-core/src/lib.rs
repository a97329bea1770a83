//! # Furnikit Core
//!
//! Value types, carpentry standards and reference data shared by the
//! Furnikit rule engines, estimator and exporters.

pub mod data;
pub mod error;
pub mod standards;
pub mod steps;
pub mod types;
pub mod units;

pub use data::{
    find_material, material_catalog, material_category, selectable_materials, MaterialCategory,
    MaterialOption,
};

pub use error::{Error, Result};

pub use standards::{
    adjust_for_thickness, calculate_load_capacity, calculate_screw_count,
    calculate_shelf_pin_positions, determine_screw_size, load_factor_for, ExpectedLoad,
    LoadFactor, ScrewSize,
};

pub use steps::AssemblySteps;

pub use types::{
    CadCoordinate, CutListItem, Dimensions, Features, FurnitureType, HardwareItem, PanelSize,
    Point3, TechnicalSpecs,
};

pub use units::{format_currency, format_dimension, format_dimensions};
