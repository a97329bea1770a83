//! Archetype rule engines
//!
//! One engine per [`FurnitureType`]. Each turns resolved
//! [`DesignParameters`] into a complete [`TechnicalSpecs`] bundle and is
//! total for inputs that passed validation.

pub mod cabinet;
pub mod corner_shelf;
pub mod desk;
pub mod wall_shelf;

pub use cabinet::CabinetRules;
pub use corner_shelf::CornerShelfRules;
pub use desk::DeskRules;
pub use wall_shelf::WallShelfRules;

use crate::params::DesignParameters;
use furnikit_core::{
    AssemblySteps, CadCoordinate, CutListItem, FurnitureType, HardwareItem, PanelSize, Point3,
    TechnicalSpecs,
};

/// Shared contract of the four engines
pub trait ArchetypeRules: Send + Sync {
    /// Archetype this engine builds
    fn furniture_type(&self) -> FurnitureType;

    /// Derive the full fabrication plan
    fn generate(&self, params: &DesignParameters) -> TechnicalSpecs;

    /// Clear span and depth of one shelf, for archetypes that carry shelves
    fn shelf_span(&self, _params: &DesignParameters) -> Option<(f64, f64)> {
        None
    }
}

static CORNER_SHELF: CornerShelfRules = CornerShelfRules;
static WALL_SHELF: WallShelfRules = WallShelfRules;
static CABINET: CabinetRules = CabinetRules;
static DESK: DeskRules = DeskRules;

/// Engine for an archetype
pub fn rules_for(furniture_type: FurnitureType) -> &'static dyn ArchetypeRules {
    match furniture_type {
        FurnitureType::CornerShelf => &CORNER_SHELF,
        FurnitureType::WallShelf => &WALL_SHELF,
        FurnitureType::Cabinet => &CABINET,
        FurnitureType::Desk => &DESK,
    }
}

/// Accumulates the parts of a [`TechnicalSpecs`] while an engine runs
#[derive(Debug, Default)]
pub(crate) struct SpecsBuilder {
    cut_list: Vec<CutListItem>,
    hardware: Vec<HardwareItem>,
    coordinates: Vec<CadCoordinate>,
}

impl SpecsBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn cut(
        &mut self,
        part: &str,
        size: PanelSize,
        quantity: u32,
        material: &str,
    ) -> &mut Self {
        self.cut_list
            .push(CutListItem::new(part, size, quantity, material));
        self
    }

    pub(crate) fn place(&mut self, element: impl Into<String>, part: &str, start: Point3, end: Point3) -> &mut Self {
        self.coordinates
            .push(CadCoordinate::new(element, part, start, end));
        self
    }

    pub(crate) fn hardware(&mut self, item: &str, size: impl Into<String>, quantity: u32) -> &mut Self {
        self.hardware.push(HardwareItem::new(item, size, quantity));
        self
    }

    pub(crate) fn finish(self, steps: AssemblySteps) -> TechnicalSpecs {
        TechnicalSpecs {
            cut_list: self.cut_list,
            hardware: self.hardware,
            assembly_instructions: steps.render(),
            cad_coordinates: self.coordinates,
        }
    }
}

/// Outer box of one drawer and the thickness of its sides
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawerBox {
    pub origin: Point3,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub wall: f64,
    pub bottom: f64,
}

impl DrawerBox {
    /// Place the five pieces of drawer `index` (1-based) against the shared
    /// `drawer_front_back`, `drawer_sides` and `drawer_bottom` cut rows.
    pub(crate) fn place(&self, specs: &mut SpecsBuilder, index: u32) {
        let [x, y, z] = self.origin;
        let (x1, y1, z1) = (x + self.width, y + self.depth, z + self.height);

        specs
            .place(format!("drawer_{index}_front"), "drawer_front_back", [x, y, z], [x1, y + self.wall, z1])
            .place(format!("drawer_{index}_back"), "drawer_front_back", [x, y1 - self.wall, z], [x1, y1, z1])
            .place(format!("drawer_{index}_side_left"), "drawer_sides", [x, y, z], [x + self.wall, y1, z1])
            .place(format!("drawer_{index}_side_right"), "drawer_sides", [x1 - self.wall, y, z], [x1, y1, z1])
            .place(format!("drawer_{index}_bottom"), "drawer_bottom", [x, y, z], [x1, y1, z + self.bottom]);
    }
}

/// Generate the plan for an already resolved request
pub fn generate_specs(furniture_type: FurnitureType, params: &DesignParameters) -> TechnicalSpecs {
    rules_for(furniture_type).generate(params)
}
