//! Desk
//!
//! Fixed 750 mm working height regardless of the requested height. Four
//! solid legs inset from the corners carry front/back and side aprons; an
//! optional drawer unit hangs under the desktop on the right-hand side.

use super::{ArchetypeRules, DrawerBox, SpecsBuilder};
use crate::params::DesignParameters;
use furnikit_core::standards::{standard_dimensions, thickness};
use furnikit_core::{
    adjust_for_thickness, determine_screw_size, AssemblySteps, ExpectedLoad, FurnitureType,
    PanelSize, TechnicalSpecs,
};
use tracing::debug;

const LEG_WIDTH: f64 = 60.0;
const LEG_DEPTH: f64 = 60.0;
const LEG_INSET: f64 = 50.0;
const APRON_HEIGHT: f64 = 100.0;
const DRAWER_UNIT_WIDTH: f64 = 400.0;
/// Free height between the floor and the drawer unit (mm)
const DRAWER_UNIT_CLEARANCE: f64 = 150.0;

/// Rule engine for desks
#[derive(Debug, Clone, Copy, Default)]
pub struct DeskRules;

impl ArchetypeRules for DeskRules {
    fn furniture_type(&self) -> FurnitureType {
        FurnitureType::Desk
    }

    fn generate(&self, p: &DesignParameters) -> TechnicalSpecs {
        let t = thickness::PLYWOOD_STANDARD;
        let height = standard_dimensions::DESK_HEIGHT;
        let foot = standard_dimensions::FOOTPLATE_HEIGHT;
        let base_z = if p.has_footplates { foot } else { 0.0 };
        let (w, d) = (p.width, p.depth);
        let underside = height - t;

        let mut specs = SpecsBuilder::new();

        specs
            .cut("desktop", PanelSize::new(w, d, t), 1, &p.material)
            .place("desktop", "desktop", [0.0, 0.0, underside], [w, d, height]);

        let leg_height = underside - base_z;
        specs.cut(
            "leg",
            PanelSize::new(LEG_WIDTH, LEG_DEPTH, leg_height),
            4,
            "solid_pine",
        );
        let leg_x = [LEG_INSET, w - LEG_INSET - LEG_WIDTH];
        let leg_y = [LEG_INSET, d - LEG_INSET - LEG_DEPTH];
        let legs = [
            ("leg_front_left", leg_x[0], leg_y[0]),
            ("leg_front_right", leg_x[1], leg_y[0]),
            ("leg_back_left", leg_x[0], leg_y[1]),
            ("leg_back_right", leg_x[1], leg_y[1]),
        ];
        for (name, x, y) in legs {
            specs.place(name, "leg", [x, y, base_z], [x + LEG_WIDTH, y + LEG_DEPTH, underside]);
        }

        let front_back_length = adjust_for_thickness(w, LEG_WIDTH, 2);
        let side_length = adjust_for_thickness(d, LEG_WIDTH, 2);
        let apron_z = underside - APRON_HEIGHT;
        debug!(front_back_length, side_length, leg_height, drawers = p.drawers, "desk layout");

        let inner_x = (LEG_INSET + LEG_WIDTH, w - LEG_INSET - LEG_WIDTH);
        let inner_y = (LEG_INSET + LEG_DEPTH, d - LEG_INSET - LEG_DEPTH);
        specs
            .cut(
                "apron_front_back",
                PanelSize::new(front_back_length, APRON_HEIGHT, t),
                2,
                &p.material,
            )
            .cut(
                "apron_sides",
                PanelSize::new(side_length, APRON_HEIGHT, t),
                2,
                &p.material,
            )
            .place(
                "apron_front",
                "apron_front_back",
                [inner_x.0, LEG_INSET, apron_z],
                [inner_x.1, LEG_INSET + t, underside],
            )
            .place(
                "apron_back",
                "apron_front_back",
                [inner_x.0, d - LEG_INSET - t, apron_z],
                [inner_x.1, d - LEG_INSET, underside],
            )
            .place(
                "apron_left",
                "apron_sides",
                [LEG_INSET, inner_y.0, apron_z],
                [LEG_INSET + t, inner_y.1, underside],
            )
            .place(
                "apron_right",
                "apron_sides",
                [w - LEG_INSET - t, inner_y.0, apron_z],
                [w - LEG_INSET, inner_y.1, underside],
            );

        if p.has_footplates {
            specs.cut("footplate", PanelSize::new(LEG_WIDTH, LEG_DEPTH, foot), 4, "solid_pine");
            for (name, x, y) in legs {
                let element = name.replacen("leg", "footplate", 1);
                specs.place(element, "footplate", [x, y, 0.0], [x + LEG_WIDTH, y + LEG_DEPTH, foot]);
            }
        }

        if p.drawers > 0 {
            self.drawer_unit(&mut specs, p, underside);
        }

        specs
            .hardware(
                "wood_screws",
                determine_screw_size(t, ExpectedLoad::Heavy).as_str(),
                40,
            )
            .hardware("corner_brackets", "75mm", 8);

        if p.drawers > 0 {
            specs
                .hardware(
                    "drawer_slides",
                    format!("{}mm", d - 150.0),
                    p.drawers.saturating_mul(2),
                )
                .hardware("drawer_handles", "96mm", p.drawers);
        }

        specs
            .hardware("wood_glue", "500ml", 1)
            .hardware("furniture_levelers", "adjustable", 4);

        let has_drawers = p.drawers > 0;
        let steps = AssemblySteps::new()
            .step("Cut all pieces according to the cut list.")
            .step("Sand the desktop thoroughly, especially the top surface and edges.")
            .step_if(p.has_footplates, "Attach footplates to the bottom of each leg.")
            .step("Attach the front and back aprons between the front and back leg pairs using pocket holes or dowels and wood glue.")
            .step("Connect the front and back leg assemblies with the side aprons.")
            .step("Reinforce each leg-to-apron joint with corner brackets for maximum strength.")
            .step("Flip the leg assembly upside down and attach the desktop using screws from underneath through the aprons.")
            .step_if(has_drawers, "Build the drawer unit box and attach it under the desk on one side.")
            .step_if(has_drawers, "Assemble drawer boxes and install drawer slides.")
            .step_if(has_drawers, "Install drawers and attach handles.")
            .step("Flip the desk right-side up and adjust furniture levelers to ensure the desk is level.")
            .step("Apply finish (stain, paint, or varnish) as desired, allowing proper drying time between coats.");

        specs.finish(steps)
    }
}

impl DeskRules {
    /// Carcass and drawer boxes of the under-desk drawer unit
    fn drawer_unit(&self, specs: &mut SpecsBuilder, p: &DesignParameters, underside: f64) {
        let t = thickness::PLYWOOD_STANDARD;
        let thin = thickness::PLYWOOD_THIN;
        let back_t = thickness::BACK_PANEL;

        let unit_depth = p.depth - 2.0 * LEG_INSET;
        let unit_height = underside - DRAWER_UNIT_CLEARANCE;
        let inner_width = DRAWER_UNIT_WIDTH - 2.0 * t;

        let drawer_width = inner_width - 2.0;
        let drawer_depth = unit_depth - 20.0;
        let panels = f64::from(p.drawers.saturating_add(1));
        let drawer_height = ((unit_height - panels * t) / f64::from(p.drawers)).max(0.0);

        specs
            .cut(
                "drawer_unit_side",
                PanelSize::new(unit_depth, unit_height, t),
                2,
                &p.material,
            )
            .cut(
                "drawer_unit_top_bottom",
                PanelSize::new(inner_width, unit_depth, t),
                2,
                &p.material,
            )
            .cut(
                "drawer_front_back",
                PanelSize::new(drawer_width, drawer_height, thin),
                p.drawers.saturating_mul(2),
                &p.material,
            )
            .cut(
                "drawer_sides",
                PanelSize::new(drawer_depth, drawer_height, thin),
                p.drawers.saturating_mul(2),
                &p.material,
            )
            .cut(
                "drawer_bottom",
                PanelSize::new(drawer_width, drawer_depth, back_t),
                p.drawers,
                "hardboard",
            );

        // right-hand side, inside the right leg pair
        let x0 = p.width - LEG_INSET - LEG_WIDTH - DRAWER_UNIT_WIDTH;
        let y0 = LEG_INSET;
        let z0 = DRAWER_UNIT_CLEARANCE;
        let (x1, y1) = (x0 + DRAWER_UNIT_WIDTH, y0 + unit_depth);

        specs
            .place("drawer_unit_side_left", "drawer_unit_side", [x0, y0, z0], [x0 + t, y1, underside])
            .place("drawer_unit_side_right", "drawer_unit_side", [x1 - t, y0, z0], [x1, y1, underside])
            .place(
                "drawer_unit_bottom",
                "drawer_unit_top_bottom",
                [x0 + t, y0, z0],
                [x1 - t, y1, z0 + t],
            )
            .place(
                "drawer_unit_top",
                "drawer_unit_top_bottom",
                [x0 + t, y0, underside - t],
                [x1 - t, y1, underside],
            );

        for i in 0..p.drawers {
            DrawerBox {
                origin: [
                    x0 + t + 1.0,
                    y0,
                    z0 + t + f64::from(i) * (drawer_height + t),
                ],
                width: drawer_width,
                depth: drawer_depth,
                height: drawer_height,
                wall: thin,
                bottom: back_t,
            }
            .place(specs, i + 1);
        }
    }
}
