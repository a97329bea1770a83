//! Value types shared by the rule engines, the estimator and the exporters
//!
//! Every type here is an immutable value produced by a single pure call.
//! Lengths are millimeters throughout.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported furniture archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureType {
    /// Two sides meeting in a room corner with shelves spanning between them
    CornerShelf,
    /// Wall-mounted open box with interior shelves
    WallShelf,
    /// Closed carcass with optional doors, drawers and plinth
    Cabinet,
    /// Four-legged desk with aprons and an optional drawer unit
    Desk,
}

impl FurnitureType {
    /// All archetypes in display order
    pub const ALL: [FurnitureType; 4] = [
        FurnitureType::CornerShelf,
        FurnitureType::WallShelf,
        FurnitureType::Cabinet,
        FurnitureType::Desk,
    ];

    /// Wire tag (`corner_shelf`, `wall_shelf`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            FurnitureType::CornerShelf => "corner_shelf",
            FurnitureType::WallShelf => "wall_shelf",
            FurnitureType::Cabinet => "cabinet",
            FurnitureType::Desk => "desk",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            FurnitureType::CornerShelf => "Corner Shelf",
            FurnitureType::WallShelf => "Wall Shelf",
            FurnitureType::Cabinet => "Cabinet",
            FurnitureType::Desk => "Desk",
        }
    }

    /// Sensible starting dimensions for a new design
    pub fn recommended_dimensions(&self) -> Dimensions {
        match self {
            FurnitureType::CornerShelf => {
                Dimensions::new(800.0, 800.0, 1800.0).with_corner_angle(90.0)
            }
            FurnitureType::WallShelf => Dimensions::new(1200.0, 300.0, 1000.0),
            FurnitureType::Cabinet => Dimensions::new(800.0, 400.0, 1800.0),
            FurnitureType::Desk => Dimensions::new(1400.0, 700.0, 750.0),
        }
    }
}

impl fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FurnitureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FurnitureType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| Error::UnsupportedArchetype(s.to_string()))
    }
}

/// Outer dimensions of a design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Angle between the two sides of a corner shelf, degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_angle: Option<f64>,
}

impl Dimensions {
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
            corner_angle: None,
        }
    }

    pub fn with_corner_angle(mut self, degrees: f64) -> Self {
        self.corner_angle = Some(degrees);
        self
    }
}

/// Feature flags and optional counts requested for a design
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default)]
    pub has_footplates: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_shelves: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_drawers: Option<u32>,
    #[serde(default)]
    pub has_doors: bool,
    #[serde(default)]
    pub has_back_panel: bool,
    #[serde(default)]
    pub adjustable_shelves: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_capacity_kg: Option<f64>,
}

/// Planar size and thickness of one cuttable piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

impl PanelSize {
    pub fn new(width: f64, height: f64, thickness: f64) -> Self {
        Self {
            width,
            height,
            thickness,
        }
    }

    /// Planar area in mm², thickness ignored
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl fmt::Display for PanelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}mm", self.width, self.height, self.thickness)
    }
}

impl FromStr for PanelSize {
    type Err = Error;

    /// Parse the legacy `WxHxT` form, with or without a trailing `mm`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidDimensionString {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let body = trimmed.strip_suffix("mm").unwrap_or(trimmed);
        let parts: Vec<&str> = body.split('x').collect();
        if parts.len() != 3 {
            return Err(invalid("expected three components separated by 'x'"));
        }

        let mut values = [0.0; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            let value: f64 = part
                .trim()
                .parse()
                .map_err(|_| invalid("component is not a number"))?;
            if !value.is_finite() || value < 0.0 {
                return Err(invalid("component must be a non-negative length"));
            }
            *slot = value;
        }

        Ok(PanelSize::new(values[0], values[1], values[2]))
    }
}

/// One distinct cuttable piece type
///
/// `size` is the source of truth; `dimensions` is its display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCutListItem")]
pub struct CutListItem {
    pub part: String,
    dimensions: String,
    pub size: PanelSize,
    pub quantity: u32,
    pub material: String,
}

impl CutListItem {
    pub fn new(
        part: impl Into<String>,
        size: PanelSize,
        quantity: u32,
        material: impl Into<String>,
    ) -> Self {
        Self {
            part: part.into(),
            dimensions: size.to_string(),
            size,
            quantity,
            material: material.into(),
        }
    }

    /// Display form of the size, e.g. `800x400x18mm`
    pub fn dimensions(&self) -> &str {
        &self.dimensions
    }
}

/// Wire shape accepted for cut-list rows supplied from outside the engines
#[derive(Deserialize)]
struct RawCutListItem {
    part: String,
    #[serde(default)]
    dimensions: Option<String>,
    #[serde(default)]
    size: Option<PanelSize>,
    quantity: u32,
    material: String,
}

impl TryFrom<RawCutListItem> for CutListItem {
    type Error = Error;

    fn try_from(raw: RawCutListItem) -> Result<Self> {
        let size = match (raw.size, raw.dimensions) {
            (Some(size), _) => size,
            (None, Some(dimensions)) => dimensions.parse()?,
            (None, None) => {
                return Err(Error::InvalidDimensionString {
                    input: String::new(),
                    reason: format!("cut-list part '{}' has no size", raw.part),
                })
            }
        };
        Ok(CutListItem::new(raw.part, size, raw.quantity, raw.material))
    }
}

/// One hardware bill-of-materials row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareItem {
    pub item: String,
    pub size: String,
    pub quantity: u32,
}

impl HardwareItem {
    pub fn new(item: impl Into<String>, size: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            size: size.into(),
            quantity,
        }
    }
}

/// A 3D point `[x, y, z]` in millimeters
pub type Point3 = [f64; 3];

/// Axis-aligned placement box of one physical piece
///
/// X is the width axis, Y depth, Z height; the origin is a bottom corner of
/// the furniture's bounding volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadCoordinate {
    /// Instance name, e.g. `shelf_2`
    pub element: String,
    /// Cut-list part this instance realizes
    #[serde(default)]
    pub part: String,
    pub start: Point3,
    pub end: Point3,
}

impl CadCoordinate {
    pub fn new(
        element: impl Into<String>,
        part: impl Into<String>,
        start: Point3,
        end: Point3,
    ) -> Self {
        Self {
            element: element.into(),
            part: part.into(),
            start,
            end,
        }
    }

    /// True when every axis of `end` is at least the matching axis of `start`
    pub fn is_ordered(&self) -> bool {
        self.start
            .iter()
            .zip(&self.end)
            .all(|(s, e)| s.is_finite() && e.is_finite() && e >= s)
    }

    /// Extent along each axis
    pub fn extent(&self) -> Point3 {
        [
            self.end[0] - self.start[0],
            self.end[1] - self.start[1],
            self.end[2] - self.start[2],
        ]
    }
}

/// Complete fabrication plan produced by one archetype engine call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSpecs {
    pub cut_list: Vec<CutListItem>,
    pub hardware: Vec<HardwareItem>,
    pub assembly_instructions: Vec<String>,
    pub cad_coordinates: Vec<CadCoordinate>,
}

impl TechnicalSpecs {
    /// Coordinates realizing the given cut-list part
    pub fn coordinates_for<'a>(&'a self, part: &'a str) -> impl Iterator<Item = &'a CadCoordinate> {
        self.cad_coordinates.iter().filter(move |c| c.part == part)
    }

    pub fn cut_item(&self, part: &str) -> Option<&CutListItem> {
        self.cut_list.iter().find(|item| item.part == part)
    }

    pub fn hardware_item(&self, item: &str) -> Option<&HardwareItem> {
        self.hardware.iter().find(|hw| hw.item == item)
    }

    /// List every structural rule the plan breaks; empty when well-formed.
    ///
    /// Part/quantity correspondence is only checked when every coordinate
    /// carries a part tag.
    pub fn check_invariants(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for item in &self.cut_list {
            if item.quantity == 0 {
                violations.push(format!("cut-list part '{}' has zero quantity", item.part));
            }
        }

        for coord in &self.cad_coordinates {
            if !coord.is_ordered() {
                violations.push(format!(
                    "coordinate '{}' ends before it starts",
                    coord.element
                ));
            }
        }

        let tagged = !self.cad_coordinates.is_empty()
            && self.cad_coordinates.iter().all(|c| !c.part.is_empty());
        if tagged {
            for item in &self.cut_list {
                let placed = self.coordinates_for(&item.part).count();
                if placed != item.quantity as usize {
                    violations.push(format!(
                        "cut-list part '{}' has quantity {} but {} placed coordinates",
                        item.part, item.quantity, placed
                    ));
                }
            }
        }

        violations
    }
}
