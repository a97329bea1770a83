//! Dimension validation
//!
//! General bounds are checked first, then the archetype-specific minimums,
//! then the requested shelf and drawer counts. Every violated rule is
//! reported; validation never stops at the first one.

use crate::params::DesignRequest;
use furnikit_core::{Dimensions, Features, FurnitureType};
use serde::Serialize;

/// Largest accepted width and height (mm)
pub const MAX_SPAN: f64 = 3000.0;
/// Largest accepted depth (mm)
pub const MAX_DEPTH: f64 = 1000.0;
/// Most shelves a request may ask for
pub const MAX_SHELVES: u32 = 20;
/// Most drawers a request may ask for
pub const MAX_DRAWERS: u32 = 10;

/// Outcome of a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// `value` lies in `(0, max]`; NaN never does
fn within(value: f64, max: f64) -> bool {
    value > 0.0 && value <= max
}

/// `value >= min`; NaN never is
fn at_least(value: f64, min: f64) -> bool {
    value >= min
}

/// `value` lies in `[min, max]`; NaN never does
fn between(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Check `dimensions` against the general and archetype rules
pub fn validate(furniture_type: FurnitureType, dimensions: &Dimensions) -> ValidationReport {
    let Dimensions {
        width,
        depth,
        height,
        ..
    } = *dimensions;
    let mut errors = Vec::new();

    if !within(width, MAX_SPAN) {
        errors.push("Width must be between 1mm and 3000mm".to_string());
    }
    if !within(depth, MAX_DEPTH) {
        errors.push("Depth must be between 1mm and 1000mm".to_string());
    }
    if !within(height, MAX_SPAN) {
        errors.push("Height must be between 1mm and 3000mm".to_string());
    }

    match furniture_type {
        FurnitureType::CornerShelf => {
            if !(at_least(width, 300.0) && at_least(depth, 300.0)) {
                errors.push("Corner shelves must be at least 300mm in width and depth".to_string());
            }
            if !at_least(height, 500.0) {
                errors.push("Corner shelves must be at least 500mm tall".to_string());
            }
        }
        FurnitureType::WallShelf => {
            if !at_least(width, 400.0) {
                errors.push("Wall shelves must be at least 400mm wide".to_string());
            }
            if !between(depth, 150.0, 600.0) {
                errors.push("Wall shelf depth must be between 150mm and 600mm".to_string());
            }
        }
        FurnitureType::Cabinet => {
            if !(at_least(width, 400.0) && at_least(height, 600.0)) {
                errors.push("Cabinets must be at least 400mm wide and 600mm tall".to_string());
            }
        }
        FurnitureType::Desk => {
            if !between(width, 800.0, 2400.0) {
                errors.push("Desk width must be between 800mm and 2400mm".to_string());
            }
            if !between(depth, 500.0, 900.0) {
                errors.push("Desk depth must be between 500mm and 900mm".to_string());
            }
        }
    }

    ValidationReport::from_errors(errors)
}

fn count_errors(features: &Features) -> Vec<String> {
    let mut errors = Vec::new();
    if features.num_shelves.is_some_and(|n| n > MAX_SHELVES) {
        errors.push(format!("Number of shelves must be at most {}", MAX_SHELVES));
    }
    if features.num_drawers.is_some_and(|n| n > MAX_DRAWERS) {
        errors.push(format!("Number of drawers must be at most {}", MAX_DRAWERS));
    }
    errors
}

/// Check a whole request: its dimensions and its shelf and drawer counts
pub fn validate_request(request: &DesignRequest) -> ValidationReport {
    let mut errors = validate(request.furniture_type, &request.dimensions).errors;
    errors.extend(count_errors(&request.features));
    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_dimensions_are_valid() {
        for t in FurnitureType::ALL {
            let report = validate(t, &t.recommended_dimensions());
            assert!(report.valid, "{}: {:?}", t, report.errors);
            assert!(report.errors.is_empty());
        }
    }

    #[test]
    fn test_narrow_desk() {
        let report = validate(FurnitureType::Desk, &Dimensions::new(500.0, 700.0, 750.0));
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec!["Desk width must be between 800mm and 2400mm".to_string()]
        );
    }

    #[test]
    fn test_accumulates_every_violation() {
        let report = validate(FurnitureType::CornerShelf, &Dimensions::new(0.0, 2000.0, 100.0));
        assert_eq!(
            report.errors,
            vec![
                "Width must be between 1mm and 3000mm",
                "Depth must be between 1mm and 1000mm",
                "Corner shelves must be at least 300mm in width and depth",
                "Corner shelves must be at least 500mm tall",
            ]
        );
    }

    #[test]
    fn test_wall_shelf_depth_window() {
        let shallow = validate(FurnitureType::WallShelf, &Dimensions::new(1200.0, 100.0, 1000.0));
        assert_eq!(shallow.errors.len(), 1);
        let deep = validate(FurnitureType::WallShelf, &Dimensions::new(1200.0, 700.0, 1000.0));
        assert_eq!(
            deep.errors,
            vec!["Wall shelf depth must be between 150mm and 600mm".to_string()]
        );
    }

    #[test]
    fn test_cabinet_minimums() {
        let report = validate(FurnitureType::Cabinet, &Dimensions::new(800.0, 400.0, 500.0));
        assert_eq!(
            report.errors,
            vec!["Cabinets must be at least 400mm wide and 600mm tall".to_string()]
        );
    }

    #[test]
    fn test_nan_is_rejected() {
        let report = validate(FurnitureType::Cabinet, &Dimensions::new(f64::NAN, 400.0, 1800.0));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_request_counts_at_the_cap_are_valid() {
        let request = DesignRequest::new(FurnitureType::Cabinet, Dimensions::new(800.0, 400.0, 1800.0))
            .with_features(Features {
                num_shelves: Some(MAX_SHELVES),
                num_drawers: Some(MAX_DRAWERS),
                ..Default::default()
            });
        assert!(validate_request(&request).valid);
    }

    #[test]
    fn test_request_counts_over_the_cap_accumulate() {
        let request = DesignRequest::new(FurnitureType::Desk, Dimensions::new(500.0, 700.0, 750.0))
            .with_features(Features {
                num_shelves: Some(u32::MAX),
                num_drawers: Some(u32::MAX / 2 + 1),
                ..Default::default()
            });
        let report = validate_request(&request);
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![
                "Desk width must be between 800mm and 2400mm",
                "Number of shelves must be at most 20",
                "Number of drawers must be at most 10",
            ]
        );
    }
}
