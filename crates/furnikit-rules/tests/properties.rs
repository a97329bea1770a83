//! Property-based tests for validation and the archetype engines.
//!
//! Run with: cargo test -p furnikit-rules --test properties

use furnikit_core::{Dimensions, Features, FurnitureType};
use furnikit_rules::{
    generate_specs, validate, validate_request, DesignParameters, DesignRequest, FeatureDefaults,
    MAX_DRAWERS, MAX_SHELVES,
};
use proptest::prelude::*;

fn arb_type() -> impl Strategy<Value = FurnitureType> {
    prop::sample::select(FurnitureType::ALL.to_vec())
}

fn arb_features() -> impl Strategy<Value = Features> {
    (
        any::<bool>(),
        prop::option::of(0u32..=MAX_SHELVES),
        prop::option::of(0u32..=MAX_DRAWERS),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(has_footplates, num_shelves, num_drawers, has_doors, has_back_panel, adjustable_shelves)| {
                Features {
                    has_footplates,
                    num_shelves,
                    num_drawers,
                    has_doors,
                    has_back_panel,
                    adjustable_shelves,
                    load_capacity_kg: None,
                }
            },
        )
}

/// Dimensions that pass validation for the given archetype
fn arb_valid_dimensions(furniture_type: FurnitureType) -> BoxedStrategy<Dimensions> {
    match furniture_type {
        FurnitureType::CornerShelf => (300.0..3000.0f64, 300.0..1000.0f64, 500.0..3000.0f64)
            .prop_map(|(w, d, h)| Dimensions::new(w, d, h))
            .boxed(),
        FurnitureType::WallShelf => (400.0..3000.0f64, 150.0..600.0f64, 1.0..3000.0f64)
            .prop_map(|(w, d, h)| Dimensions::new(w, d, h))
            .boxed(),
        FurnitureType::Cabinet => (400.0..3000.0f64, 1.0..1000.0f64, 600.0..3000.0f64)
            .prop_map(|(w, d, h)| Dimensions::new(w, d, h))
            .boxed(),
        FurnitureType::Desk => (800.0..2400.0f64, 500.0..900.0f64, 1.0..3000.0f64)
            .prop_map(|(w, d, h)| Dimensions::new(w, d, h))
            .boxed(),
    }
}

fn arb_valid_request() -> impl Strategy<Value = DesignRequest> {
    arb_type().prop_flat_map(|t| {
        (arb_valid_dimensions(t), arb_features()).prop_map(move |(dims, features)| {
            DesignRequest::new(t, dims).with_features(features)
        })
    })
}

fn resolve(request: &DesignRequest) -> DesignParameters {
    DesignParameters::resolve(request, &FeatureDefaults::default())
}

proptest! {
    #[test]
    fn prop_valid_dimensions_validate(request in arb_valid_request()) {
        let report = validate(request.furniture_type, &request.dimensions);
        prop_assert!(report.valid, "{:?}", report.errors);
        prop_assert!(report.errors.is_empty());
    }

    #[test]
    fn prop_valid_flag_matches_error_list(
        t in arb_type(),
        w in -100.0..4000.0f64,
        d in -100.0..1500.0f64,
        h in -100.0..4000.0f64,
    ) {
        let report = validate(t, &Dimensions::new(w, d, h));
        prop_assert_eq!(report.valid, report.errors.is_empty());
    }

    #[test]
    fn prop_widening_never_removes_errors(
        t in arb_type(),
        w in -100.0..4000.0f64,
        d in -100.0..1500.0f64,
        h in -100.0..4000.0f64,
        grow in 0.0..1000.0f64,
    ) {
        let before = validate(t, &Dimensions::new(w, d, h)).errors;

        // push each out-of-range value further out, in its own direction
        let push = |value: f64, low: f64, high: f64| {
            if value < low { value - grow } else if value > high { value + grow } else { value }
        };
        let (w2, d2, h2) = match t {
            FurnitureType::Desk => (push(w, 800.0, 2400.0), push(d, 500.0, 900.0), push(h, 1.0, 3000.0)),
            FurnitureType::WallShelf => (push(w, 400.0, 3000.0), push(d, 150.0, 600.0), push(h, 1.0, 3000.0)),
            FurnitureType::CornerShelf => (push(w, 300.0, 3000.0), push(d, 300.0, 1000.0), push(h, 500.0, 3000.0)),
            FurnitureType::Cabinet => (push(w, 400.0, 3000.0), push(d, 1.0, 1000.0), push(h, 600.0, 3000.0)),
        };
        let after = validate(t, &Dimensions::new(w2, d2, h2)).errors;

        for error in &before {
            prop_assert!(after.contains(error), "{} disappeared", error);
        }
    }

    #[test]
    fn prop_counts_within_caps_validate(request in arb_valid_request()) {
        let report = validate_request(&request);
        prop_assert!(report.valid, "{:?}", report.errors);
    }

    #[test]
    fn prop_counts_over_caps_are_rejected(
        request in arb_valid_request(),
        shelves in prop::option::of((MAX_SHELVES + 1)..=u32::MAX),
        drawers in (MAX_DRAWERS + 1)..=u32::MAX,
    ) {
        let request = request.with_features(Features {
            num_shelves: shelves,
            num_drawers: Some(drawers),
            ..Default::default()
        });
        let report = validate_request(&request);
        prop_assert!(!report.valid);
        let expected = 1 + usize::from(shelves.is_some());
        prop_assert_eq!(report.errors.len(), expected, "{:?}", report.errors);

        let params = resolve(&request);
        prop_assert!(params.shelves <= MAX_SHELVES);
        prop_assert_eq!(params.drawers, MAX_DRAWERS);
    }

    #[test]
    fn prop_quantities_positive_and_coordinates_match(request in arb_valid_request()) {
        let specs = generate_specs(request.furniture_type, &resolve(&request));

        for item in &specs.cut_list {
            prop_assert!(item.quantity > 0, "{} has zero quantity", item.part);
            prop_assert_eq!(
                specs.coordinates_for(&item.part).count(),
                item.quantity as usize,
                "part {}", &item.part
            );
        }
        for coord in &specs.cad_coordinates {
            prop_assert!(specs.cut_item(&coord.part).is_some(), "{} has no cut row", coord.element);
        }
    }

    #[test]
    fn prop_coordinates_are_ordered(request in arb_valid_request()) {
        let specs = generate_specs(request.furniture_type, &resolve(&request));
        for coord in &specs.cad_coordinates {
            prop_assert!(coord.is_ordered(), "{:?}", coord);
        }
        prop_assert!(specs.check_invariants().is_empty());
    }

    #[test]
    fn prop_generation_is_deterministic(request in arb_valid_request()) {
        let params = resolve(&request);
        let first = serde_json::to_string(&generate_specs(request.furniture_type, &params)).unwrap();
        let second = serde_json::to_string(&generate_specs(request.furniture_type, &params)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_steps_are_numbered_in_order(request in arb_valid_request()) {
        let specs = generate_specs(request.furniture_type, &resolve(&request));
        for (i, step) in specs.assembly_instructions.iter().enumerate() {
            let prefix = format!("{}. ", i + 1);
            prop_assert!(step.starts_with(&prefix), "{}", step);
        }
    }
}
