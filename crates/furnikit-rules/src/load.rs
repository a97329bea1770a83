//! Advisory shelf load check

use crate::archetypes::rules_for;
use crate::params::{DesignParameters, DesignRequest};
use furnikit_core::standards::thickness;
use furnikit_core::{calculate_load_capacity, material_category};
use serde::Serialize;
use tracing::warn;

/// Estimated capacity of one shelf against the requested load
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadCheck {
    pub span_mm: f64,
    pub depth_mm: f64,
    pub capacity_kg: f64,
    pub requested_kg: f64,
    pub adequate: bool,
}

/// Compare the requested per-shelf load with the estimated capacity.
///
/// `None` when no load was requested or the archetype carries no shelves.
pub fn check_load(request: &DesignRequest, params: &DesignParameters) -> Option<LoadCheck> {
    let requested_kg = request.features.load_capacity_kg?;
    let (span_mm, depth_mm) = rules_for(request.furniture_type).shelf_span(params)?;

    let capacity_kg = calculate_load_capacity(
        span_mm,
        depth_mm,
        thickness::PLYWOOD_STANDARD,
        material_category(&params.material),
    );
    let adequate = capacity_kg >= requested_kg;
    if !adequate {
        warn!(
            furniture_type = %request.furniture_type,
            capacity_kg,
            requested_kg,
            "shelf capacity below requested load"
        );
    }

    Some(LoadCheck {
        span_mm,
        depth_mm,
        capacity_kg,
        requested_kg,
        adequate,
    })
}
