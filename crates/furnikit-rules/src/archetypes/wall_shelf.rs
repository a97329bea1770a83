//! Wall shelf
//!
//! An open box hung from two heavy-duty brackets. The shelf count includes
//! the top and bottom boards, so only `shelves - 2` interior shelves are cut.

use super::{ArchetypeRules, SpecsBuilder};
use crate::params::DesignParameters;
use furnikit_core::standards::thickness;
use furnikit_core::{
    adjust_for_thickness, determine_screw_size, AssemblySteps, ExpectedLoad, FurnitureType,
    PanelSize, TechnicalSpecs,
};
use tracing::debug;

const SCREWS_PER_JOINT: u32 = 4;

/// Rule engine for wall shelves
#[derive(Debug, Clone, Copy, Default)]
pub struct WallShelfRules;

impl ArchetypeRules for WallShelfRules {
    fn furniture_type(&self) -> FurnitureType {
        FurnitureType::WallShelf
    }

    fn generate(&self, p: &DesignParameters) -> TechnicalSpecs {
        let t = thickness::PLYWOOD_STANDARD;
        let back_t = thickness::BACK_PANEL;
        let shelf_width = adjust_for_thickness(p.width, t, 2);
        let interior_shelves = p.shelves.saturating_sub(2);
        debug!(shelf_width, interior_shelves, "wall shelf layout");

        let mut specs = SpecsBuilder::new();

        specs
            .cut("vertical_side", PanelSize::new(p.depth, p.height, t), 2, &p.material)
            .place("vertical_side_left", "vertical_side", [0.0, 0.0, 0.0], [t, p.depth, p.height])
            .place(
                "vertical_side_right",
                "vertical_side",
                [p.width - t, 0.0, 0.0],
                [p.width, p.depth, p.height],
            );

        specs
            .cut("top_bottom", PanelSize::new(shelf_width, p.depth, t), 2, &p.material)
            .place("bottom", "top_bottom", [t, 0.0, 0.0], [p.width - t, p.depth, t])
            .place(
                "top",
                "top_bottom",
                [t, 0.0, p.height - t],
                [p.width - t, p.depth, p.height],
            );

        if interior_shelves > 0 {
            specs.cut(
                "shelf",
                PanelSize::new(shelf_width, p.depth, t),
                interior_shelves,
                &p.material,
            );
            let spacing = (p.height - 2.0 * t) / f64::from(p.shelves - 1);
            for i in 1..=interior_shelves {
                let z = t + spacing * f64::from(i);
                specs.place(
                    format!("shelf_{i}"),
                    "shelf",
                    [t, 0.0, z],
                    [p.width - t, p.depth, z + t],
                );
            }
        }

        if p.has_back_panel {
            specs
                .cut("back_panel", PanelSize::new(p.width, p.height, back_t), 1, "hardboard")
                .place("back_panel", "back_panel", [0.0, 0.0, 0.0], [p.width, back_t, p.height]);
        }

        // each shelf board meets both sides
        let joints = p.shelves.saturating_mul(2);
        let back_screws = if p.has_back_panel { 30 } else { 0 };
        specs.hardware(
            "wood_screws",
            determine_screw_size(t, ExpectedLoad::Medium).as_str(),
            joints
                .saturating_mul(SCREWS_PER_JOINT)
                .saturating_add(back_screws),
        );

        let pinned = p.adjustable_shelves && interior_shelves > 0;
        if pinned {
            specs.hardware("shelf_pins", "5mm", interior_shelves.saturating_mul(4));
        }

        specs
            .hardware("wall_brackets", "heavy_duty", 2)
            .hardware("wood_glue", "500ml", 1);

        let steps = AssemblySteps::new()
            .step("Cut all pieces according to the cut list with clean, square edges.")
            .step("Sand all pieces smooth, especially the visible edges.")
            .step("Lay one vertical side flat and attach the bottom piece using wood glue and screws. Pre-drill to avoid splitting.")
            .step("Attach the top piece to the same vertical side.")
            .step("If using fixed shelves, attach them now at the marked positions.")
            .step_if(
                pinned,
                "Drill shelf pin holes on both vertical sides at regular intervals for adjustable shelves.",
            )
            .step("Attach the second vertical side, ensuring the unit is square.")
            .step_if(
                p.has_back_panel,
                "Attach the back panel using small nails or screws to keep everything square and add rigidity.",
            )
            .step("Mount to wall using heavy-duty wall brackets. Ensure brackets are attached to wall studs for maximum strength.")
            .step("Insert adjustable shelves at desired heights or verify fixed shelves are level.");

        specs.finish(steps)
    }

    fn shelf_span(&self, p: &DesignParameters) -> Option<(f64, f64)> {
        Some((adjust_for_thickness(p.width, thickness::PLYWOOD_STANDARD, 2), p.depth))
    }
}
