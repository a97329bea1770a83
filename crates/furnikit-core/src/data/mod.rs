//! Static reference data

pub mod materials;

pub use materials::{
    find_material, material_catalog, material_category, selectable_materials, MaterialCategory,
    MaterialOption,
};
