//! Corner shelf
//!
//! Two vertical sides meet at the corner angle over a `width x depth`
//! footprint; shelves span the gap between them. Side 1 runs along the Y
//! axis, side 2 along X.

use super::{ArchetypeRules, SpecsBuilder};
use crate::params::DesignParameters;
use furnikit_core::standards::{
    standard_dimensions::{FOOTPLATE_HEIGHT, FOOTPLATE_WIDTH},
    thickness, DEFAULT_SCREW_SPACING, EDGE_CLEARANCE, STANDARD_SHELF_PIN_SPACING,
};
use furnikit_core::{
    adjust_for_thickness, calculate_screw_count, calculate_shelf_pin_positions,
    determine_screw_size, AssemblySteps, ExpectedLoad, FurnitureType, PanelSize, TechnicalSpecs,
};
use tracing::debug;

/// Rule engine for corner shelves
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerShelfRules;

impl ArchetypeRules for CornerShelfRules {
    fn furniture_type(&self) -> FurnitureType {
        FurnitureType::CornerShelf
    }

    fn generate(&self, p: &DesignParameters) -> TechnicalSpecs {
        let t = thickness::PLYWOOD_STANDARD;
        let back_t = thickness::BACK_PANEL;
        let base_z = if p.has_footplates { FOOTPLATE_HEIGHT } else { 0.0 };

        let shelf_width = adjust_for_thickness(p.width, t, 1);
        let shelf_depth = adjust_for_thickness(p.depth, t, 1);
        let vertical_height = p.height - base_z;
        debug!(
            shelf_width,
            shelf_depth, vertical_height, shelves = p.shelves, "corner shelf layout"
        );

        let mut specs = SpecsBuilder::new();

        specs
            .cut(
                "vertical_side_1",
                PanelSize::new(p.width, vertical_height, t),
                1,
                &p.material,
            )
            .cut(
                "vertical_side_2",
                PanelSize::new(p.depth, vertical_height, t),
                1,
                &p.material,
            )
            .place(
                "vertical_side_1",
                "vertical_side_1",
                [0.0, 0.0, base_z],
                [t, p.width, p.height],
            )
            .place(
                "vertical_side_2",
                "vertical_side_2",
                [0.0, 0.0, base_z],
                [p.depth, t, p.height],
            );

        specs.cut(
            "shelf",
            PanelSize::new(shelf_width, shelf_depth, t),
            p.shelves,
            &p.material,
        );
        let spacing = vertical_height / f64::from(p.shelves.saturating_add(1));
        for i in 1..=p.shelves {
            let z = base_z + spacing * f64::from(i);
            specs.place(
                format!("shelf_{i}"),
                "shelf",
                [t, t, z],
                [t + shelf_width, t + shelf_depth, z + t],
            );
        }

        if p.has_footplates {
            specs
                .cut(
                    "footplate",
                    PanelSize::new(shelf_width, FOOTPLATE_WIDTH, FOOTPLATE_HEIGHT),
                    2,
                    "solid_pine",
                )
                .place(
                    "footplate_1",
                    "footplate",
                    [0.0, 0.0, 0.0],
                    [FOOTPLATE_WIDTH, shelf_width, FOOTPLATE_HEIGHT],
                )
                .place(
                    "footplate_2",
                    "footplate",
                    [0.0, 0.0, 0.0],
                    [shelf_depth, FOOTPLATE_WIDTH, FOOTPLATE_HEIGHT],
                );
        }

        if p.has_back_panel {
            let back_width = shelf_width + t;
            let back_height = vertical_height - t;
            specs
                .cut(
                    "back_panel",
                    PanelSize::new(back_width, back_height, back_t),
                    1,
                    "hardboard",
                )
                .place(
                    "back_panel",
                    "back_panel",
                    [0.0, t, base_z],
                    [back_t, t + back_width, p.height - t],
                );
        }

        let screws_per_shelf = calculate_screw_count(shelf_width, DEFAULT_SCREW_SPACING);
        let back_screws = if p.has_back_panel { 20 } else { 0 };
        specs.hardware(
            "wood_screws",
            determine_screw_size(t, ExpectedLoad::Medium).as_str(),
            p.shelves
                .saturating_mul(screws_per_shelf)
                .saturating_mul(2)
                .saturating_add(back_screws),
        );

        if p.adjustable_shelves {
            let levels = calculate_shelf_pin_positions(vertical_height).len() as u32;
            specs.hardware("shelf_pins", "5mm", levels * 4);
        }

        specs
            .hardware("corner_brackets", "50mm", 4)
            .hardware("wood_glue", "500ml", 1);

        let steps = AssemblySteps::new()
            .step("Cut all pieces according to the cut list with clean 90° edges.")
            .step_if(
                p.has_footplates,
                "Attach footplates to the bottom of both vertical sides using wood glue and screws.",
            )
            .step_if(
                p.adjustable_shelves,
                format!(
                    "Drill shelf pin holes every {}mm along the inner faces of both vertical sides, starting {}mm from the front edge.",
                    STANDARD_SHELF_PIN_SPACING, EDGE_CLEARANCE
                ),
            )
            .step(format!(
                "Position the two vertical sides at a {}° angle in the desired corner location.",
                p.corner_angle
            ))
            .step_if(
                p.has_back_panel,
                "Attach the back panel to secure the corner joint using small nails or screws every 150mm.",
            )
            .step("Install corner brackets at the top and bottom where the two sides meet for additional strength.")
            .step_either(
                p.adjustable_shelves,
                "Insert shelf pins at desired heights and place shelves on top.",
                "Install fixed shelves by screwing through the vertical sides into the shelf edges. Pre-drill holes to prevent splitting.",
            )
            .step("Level the unit and secure to wall studs using appropriate wall anchors for safety.");

        specs.finish(steps)
    }

    fn shelf_span(&self, p: &DesignParameters) -> Option<(f64, f64)> {
        let t = thickness::PLYWOOD_STANDARD;
        Some((adjust_for_thickness(p.width, t, 1), adjust_for_thickness(p.depth, t, 1)))
    }
}
