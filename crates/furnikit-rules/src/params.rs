//! Design requests and resolved generation parameters
//!
//! Optional counts in a request are resolved exactly once, against a
//! [`FeatureDefaults`] table owned by the orchestrator. Engines only ever
//! see [`DesignParameters`].

use crate::error::{EngineError, EngineResult};
use crate::validation::{MAX_DRAWERS, MAX_SHELVES};
use furnikit_core::{Dimensions, Features, FurnitureType};
use serde::{Deserialize, Serialize};

/// Default material when a request names none
pub const DEFAULT_MATERIAL: &str = "pine_plywood";

/// Input to the generation pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    /// Project name used for exported documents
    #[serde(default)]
    pub name: String,
    pub furniture_type: FurnitureType,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub features: Features,
    #[serde(default = "default_material")]
    pub material_preference: String,
}

fn default_material() -> String {
    DEFAULT_MATERIAL.to_string()
}

impl DesignRequest {
    pub fn new(furniture_type: FurnitureType, dimensions: Dimensions) -> Self {
        Self {
            name: String::new(),
            furniture_type,
            dimensions,
            features: Features::default(),
            material_preference: default_material(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material_preference = material.into();
        self
    }

    /// Parse a JSON request document.
    ///
    /// An unknown `furnitureType` tag is reported as
    /// [`EngineError::UnsupportedArchetype`], never guessed.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidRequest(e.to_string()))?;

        match value.get("furnitureType").and_then(|t| t.as_str()) {
            Some(tag) => {
                tag.parse::<FurnitureType>()?;
            }
            None => {
                return Err(EngineError::InvalidRequest(
                    "missing string field 'furnitureType'".to_string(),
                ))
            }
        }

        serde_json::from_value(value).map_err(|e| EngineError::InvalidRequest(e.to_string()))
    }
}

/// Counts applied when a request leaves them out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDefaults {
    pub corner_shelf_shelves: u32,
    pub wall_shelf_shelves: u32,
    pub cabinet_shelves: u32,
    pub cabinet_drawers: u32,
    pub desk_drawers: u32,
    /// Degrees
    pub corner_angle: f64,
}

impl Default for FeatureDefaults {
    fn default() -> Self {
        Self {
            corner_shelf_shelves: 3,
            wall_shelf_shelves: 3,
            cabinet_shelves: 2,
            cabinet_drawers: 0,
            desk_drawers: 0,
            corner_angle: 90.0,
        }
    }
}

/// Fully resolved inputs of one engine call
#[derive(Debug, Clone, PartialEq)]
pub struct DesignParameters {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Degrees
    pub corner_angle: f64,
    pub shelves: u32,
    pub drawers: u32,
    pub has_footplates: bool,
    pub has_doors: bool,
    pub has_back_panel: bool,
    pub adjustable_shelves: bool,
    pub material: String,
}

impl DesignParameters {
    /// Resolve every optional field of `request`.
    ///
    /// Shelf archetypes always have shelves: a zero shelf count on a corner
    /// or wall shelf falls back to the default like an absent one. Counts
    /// are clamped to [`MAX_SHELVES`] and [`MAX_DRAWERS`].
    pub fn resolve(request: &DesignRequest, defaults: &FeatureDefaults) -> Self {
        let features = &request.features;
        let (default_shelves, default_drawers) = match request.furniture_type {
            FurnitureType::CornerShelf => (defaults.corner_shelf_shelves, 0),
            FurnitureType::WallShelf => (defaults.wall_shelf_shelves, 0),
            FurnitureType::Cabinet => (defaults.cabinet_shelves, defaults.cabinet_drawers),
            FurnitureType::Desk => (0, defaults.desk_drawers),
        };

        let shelves = match (request.furniture_type, features.num_shelves) {
            (FurnitureType::CornerShelf | FurnitureType::WallShelf, Some(0)) => default_shelves,
            (_, Some(n)) => n,
            (_, None) => default_shelves,
        }
        .min(MAX_SHELVES);
        let drawers = features
            .num_drawers
            .unwrap_or(default_drawers)
            .min(MAX_DRAWERS);

        let material = if request.material_preference.trim().is_empty() {
            default_material()
        } else {
            request.material_preference.clone()
        };

        Self {
            width: request.dimensions.width,
            depth: request.dimensions.depth,
            height: request.dimensions.height,
            corner_angle: request
                .dimensions
                .corner_angle
                .unwrap_or(defaults.corner_angle),
            shelves,
            drawers,
            has_footplates: features.has_footplates,
            has_doors: features.has_doors,
            has_back_panel: features.has_back_panel,
            adjustable_shelves: features.adjustable_shelves,
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(furniture_type: FurnitureType, features: Features) -> DesignRequest {
        DesignRequest::new(furniture_type, furniture_type.recommended_dimensions())
            .with_features(features)
    }

    #[test]
    fn test_resolve_defaults() {
        let defaults = FeatureDefaults::default();

        let corner = DesignParameters::resolve(
            &request(FurnitureType::CornerShelf, Features::default()),
            &defaults,
        );
        assert_eq!(corner.shelves, 3);
        assert_eq!(corner.corner_angle, 90.0);

        let cabinet = DesignParameters::resolve(
            &request(FurnitureType::Cabinet, Features::default()),
            &defaults,
        );
        assert_eq!((cabinet.shelves, cabinet.drawers), (2, 0));

        let desk = DesignParameters::resolve(
            &request(FurnitureType::Desk, Features::default()),
            &defaults,
        );
        assert_eq!(desk.drawers, 0);
    }

    #[test]
    fn test_zero_shelves_on_shelf_archetypes() {
        let features = Features {
            num_shelves: Some(0),
            ..Default::default()
        };
        let defaults = FeatureDefaults::default();

        let corner =
            DesignParameters::resolve(&request(FurnitureType::CornerShelf, features.clone()), &defaults);
        assert_eq!(corner.shelves, 3);

        let cabinet = DesignParameters::resolve(&request(FurnitureType::Cabinet, features), &defaults);
        assert_eq!(cabinet.shelves, 0);
    }

    #[test]
    fn test_explicit_counts_win() {
        let features = Features {
            num_shelves: Some(5),
            num_drawers: Some(2),
            ..Default::default()
        };
        let params = DesignParameters::resolve(
            &request(FurnitureType::Cabinet, features),
            &FeatureDefaults::default(),
        );
        assert_eq!((params.shelves, params.drawers), (5, 2));
    }

    #[test]
    fn test_counts_are_clamped() {
        let features = Features {
            num_shelves: Some(u32::MAX),
            num_drawers: Some(2_147_483_648),
            ..Default::default()
        };
        let params = DesignParameters::resolve(
            &request(FurnitureType::Cabinet, features),
            &FeatureDefaults::default(),
        );
        assert_eq!((params.shelves, params.drawers), (MAX_SHELVES, MAX_DRAWERS));

        let defaults = FeatureDefaults {
            desk_drawers: u32::MAX,
            ..Default::default()
        };
        let desk = DesignParameters::resolve(
            &request(FurnitureType::Desk, Features::default()),
            &defaults,
        );
        assert_eq!(desk.drawers, MAX_DRAWERS);
    }

    #[test]
    fn test_blank_material_resolves_to_default() {
        let req = request(FurnitureType::Desk, Features::default()).with_material("  ");
        let params = DesignParameters::resolve(&req, &FeatureDefaults::default());
        assert_eq!(params.material, DEFAULT_MATERIAL);
    }

    #[test]
    fn test_from_json() {
        let req = DesignRequest::from_json(
            r#"{
                "name": "Hall shelf",
                "furnitureType": "wall_shelf",
                "dimensions": {"width": 1200, "depth": 300, "height": 1000},
                "features": {"numShelves": 4, "hasBackPanel": true},
                "materialPreference": "birch_plywood"
            }"#,
        )
        .unwrap();
        assert_eq!(req.furniture_type, FurnitureType::WallShelf);
        assert_eq!(req.features.num_shelves, Some(4));
        assert_eq!(req.material_preference, "birch_plywood");
    }

    #[test]
    fn test_from_json_unsupported_archetype() {
        let err = DesignRequest::from_json(
            r#"{"furnitureType": "sofa", "dimensions": {"width": 1, "depth": 1, "height": 1}}"#,
        )
        .unwrap_err();
        assert_eq!(err, EngineError::UnsupportedArchetype("sofa".to_string()));

        let err = DesignRequest::from_json("{").unwrap_err();
        assert!(matches!(err, EngineError::InvalidRequest(_)));
    }
}
