//! Cabinet
//!
//! A closed carcass with optional shelves, a pair of doors, a stack of
//! drawers and a 50 mm plinth. With footplates the bottom panel, shelves and
//! drawers all sit on top of the plinth.

use super::{ArchetypeRules, DrawerBox, SpecsBuilder};
use crate::params::DesignParameters;
use furnikit_core::standards::{
    standard_dimensions::{FOOTPLATE_HEIGHT, FOOTPLATE_WIDTH},
    thickness,
};
use furnikit_core::{
    adjust_for_thickness, determine_screw_size, AssemblySteps, ExpectedLoad, FurnitureType,
    PanelSize, TechnicalSpecs,
};
use tracing::debug;

/// Gap around each door (mm)
const DOOR_GAP: f64 = 2.0;
/// Height of one drawer box (mm)
const DRAWER_HEIGHT: f64 = 120.0;
/// Clearance behind a drawer box (mm)
const DRAWER_CLEARANCE: f64 = 20.0;

/// Rule engine for cabinets
#[derive(Debug, Clone, Copy, Default)]
pub struct CabinetRules;

impl ArchetypeRules for CabinetRules {
    fn furniture_type(&self) -> FurnitureType {
        FurnitureType::Cabinet
    }

    fn generate(&self, p: &DesignParameters) -> TechnicalSpecs {
        let t = thickness::PLYWOOD_STANDARD;
        let back_t = thickness::BACK_PANEL;
        let plinth = if p.has_footplates { FOOTPLATE_HEIGHT } else { 0.0 };

        let interior_width = adjust_for_thickness(p.width, t, 2);
        let interior_depth = (p.depth - t).max(0.0);
        let interior_height = p.height - 2.0 * t - plinth;
        debug!(
            interior_width,
            interior_depth,
            interior_height,
            shelves = p.shelves,
            drawers = p.drawers,
            "cabinet layout"
        );

        let mut specs = SpecsBuilder::new();

        specs
            .cut("side_panel", PanelSize::new(p.depth, p.height, t), 2, &p.material)
            .place("side_left", "side_panel", [0.0, 0.0, 0.0], [t, p.depth, p.height])
            .place(
                "side_right",
                "side_panel",
                [p.width - t, 0.0, 0.0],
                [p.width, p.depth, p.height],
            );

        specs
            .cut("top_bottom", PanelSize::new(interior_width, p.depth, t), 2, &p.material)
            .place(
                "bottom",
                "top_bottom",
                [t, 0.0, plinth],
                [p.width - t, p.depth, plinth + t],
            )
            .place(
                "top",
                "top_bottom",
                [t, 0.0, p.height - t],
                [p.width - t, p.depth, p.height],
            );

        if p.shelves > 0 {
            specs.cut(
                "shelf",
                PanelSize::new(interior_width, interior_depth, t),
                p.shelves,
                &p.material,
            );
            let spacing = interior_height / f64::from(p.shelves.saturating_add(1));
            for i in 1..=p.shelves {
                let z = plinth + t + spacing * f64::from(i);
                specs.place(
                    format!("shelf_{i}"),
                    "shelf",
                    [t, 0.0, z],
                    [p.width - t, interior_depth, z + t],
                );
            }
        }

        if p.has_footplates {
            specs
                .cut(
                    "footplate",
                    PanelSize::new(interior_width, FOOTPLATE_WIDTH, FOOTPLATE_HEIGHT),
                    2,
                    "solid_pine",
                )
                .place(
                    "footplate_front",
                    "footplate",
                    [t, 0.0, 0.0],
                    [p.width - t, FOOTPLATE_WIDTH, FOOTPLATE_HEIGHT],
                )
                .place(
                    "footplate_back",
                    "footplate",
                    [t, (p.depth - FOOTPLATE_WIDTH).max(0.0), 0.0],
                    [p.width - t, p.depth, FOOTPLATE_HEIGHT],
                );
        }

        if p.has_back_panel {
            specs
                .cut(
                    "back_panel",
                    PanelSize::new(interior_width, p.height - 2.0 * t, back_t),
                    1,
                    "hardboard",
                )
                .place(
                    "back_panel",
                    "back_panel",
                    [t, (p.depth - back_t).max(0.0), t],
                    [p.width - t, p.depth, p.height - t],
                );
        }

        if p.has_doors {
            let door_width = interior_width / 2.0 - DOOR_GAP;
            let door_height = p.height - 2.0 * t - 2.0 * DOOR_GAP;
            specs
                .cut("door", PanelSize::new(door_width, door_height, t), 2, &p.material)
                .place(
                    "door_left",
                    "door",
                    [t, 0.0, t + DOOR_GAP],
                    [t + door_width, t, p.height - t - DOOR_GAP],
                )
                .place(
                    "door_right",
                    "door",
                    [p.width - t - door_width, 0.0, t + DOOR_GAP],
                    [p.width - t, t, p.height - t - DOOR_GAP],
                );
        }

        if p.drawers > 0 {
            let thin = thickness::PLYWOOD_THIN;
            let drawer_width = interior_width - 2.0;
            let drawer_depth = (interior_depth - DRAWER_CLEARANCE).max(0.0);

            specs
                .cut(
                    "drawer_front_back",
                    PanelSize::new(drawer_width, DRAWER_HEIGHT, thin),
                    p.drawers.saturating_mul(2),
                    &p.material,
                )
                .cut(
                    "drawer_sides",
                    PanelSize::new(drawer_depth, DRAWER_HEIGHT, thin),
                    p.drawers.saturating_mul(2),
                    &p.material,
                )
                .cut(
                    "drawer_bottom",
                    PanelSize::new(drawer_width, drawer_depth, back_t),
                    p.drawers,
                    "hardboard",
                );

            // drawers stack upwards from the bottom panel
            for i in 0..p.drawers {
                DrawerBox {
                    origin: [t + 1.0, 0.0, plinth + t + DRAWER_HEIGHT * f64::from(i)],
                    width: drawer_width,
                    depth: drawer_depth,
                    height: DRAWER_HEIGHT,
                    wall: thin,
                    bottom: back_t,
                }
                .place(&mut specs, i + 1);
            }
        }

        specs.hardware(
            "wood_screws",
            determine_screw_size(t, ExpectedLoad::Medium).as_str(),
            p.shelves.saturating_mul(8).saturating_add(60),
        );

        if p.has_doors {
            specs
                .hardware("hinges", "35mm_euro", 4)
                .hardware("door_handles", "128mm", 2);
        }

        if p.drawers > 0 {
            specs
                .hardware(
                    "drawer_slides",
                    format!("{}mm", (p.depth - 50.0).max(0.0)),
                    p.drawers.saturating_mul(2),
                )
                .hardware("drawer_handles", "96mm", p.drawers);
        }

        specs.hardware("wood_glue", "500ml", 1);

        let has_drawers = p.drawers > 0;
        let steps = AssemblySteps::new()
            .step("Cut all pieces according to the cut list.")
            .step("Sand all pieces, paying special attention to visible edges.")
            .step_if(p.has_footplates, "Attach footplates to the bottom of both side panels.")
            .step("Attach the bottom panel between the two side panels using glue and screws.")
            .step("Install fixed shelves at marked positions.")
            .step("Attach the top panel.")
            .step_if(p.has_back_panel, "Secure the back panel to keep the cabinet square.")
            .step_if(
                has_drawers,
                "Assemble drawer boxes: attach front, back, and sides with glue and nails. Add bottom panel.",
            )
            .step_if(
                has_drawers,
                "Install drawer slides on cabinet sides and drawer boxes according to manufacturer instructions.",
            )
            .step_if(p.has_doors, "Install hinges on doors and mount to cabinet sides.")
            .step_if(p.has_doors, "Attach door handles and adjust door alignment.")
            .step("Level the cabinet and optionally anchor to wall for stability.");

        specs.finish(steps)
    }

    fn shelf_span(&self, p: &DesignParameters) -> Option<(f64, f64)> {
        let t = thickness::PLYWOOD_STANDARD;
        Some((adjust_for_thickness(p.width, t, 2), (p.depth - t).max(0.0)))
    }
}
