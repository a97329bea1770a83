use furnikit_core::{CutListItem, Dimensions, Features, FurnitureType, PanelSize};
use furnikit_pricing::{
    aggregate_hardware, calculate_material_needs, estimate_hardware_cost, estimate_material_cost,
    optimize_cutting, price_specs, PriceTable, DEFAULT_CURRENCY, SHEET_HEIGHT, SHEET_WIDTH,
};
use furnikit_rules::{DesignRequest, Generator};
use proptest::prelude::*;

fn cabinet_specs() -> furnikit_core::TechnicalSpecs {
    let request = DesignRequest::new(FurnitureType::Cabinet, Dimensions::new(800.0, 400.0, 1800.0))
        .with_features(Features {
            has_doors: true,
            has_back_panel: true,
            num_drawers: Some(2),
            ..Default::default()
        })
        .with_material("birch_plywood");
    Generator::rules()
        .generate(&request)
        .unwrap()
        .technical_specs
}

#[test]
fn test_empty_estimates_are_zero() {
    let prices = PriceTable::default();
    assert_eq!(estimate_material_cost(&[], &prices), 0.0);
    assert_eq!(estimate_hardware_cost(&[], &prices), 0.0);
}

#[test]
fn test_generated_cabinet_is_priced() {
    let specs = cabinet_specs();
    let prices = PriceTable::default();
    let info = price_specs(&specs, &prices, DEFAULT_CURRENCY);

    assert!(info.materials.iter().any(|line| line.material == "birch_plywood"));
    assert!(info.materials.iter().all(|line| line.sheets >= 1));
    assert_eq!(info.materials_cost, estimate_material_cost(&specs.cut_list, &prices));
    assert_eq!(info.hardware_cost, estimate_hardware_cost(&specs.hardware, &prices));
    assert!((info.total_cost - info.materials_cost - info.hardware_cost).abs() < 1e-9);
    assert!(info.formatted_total().starts_with('€'));
}

#[test]
fn test_overrides_change_the_total() {
    let specs = cabinet_specs();
    let base = price_specs(&specs, &PriceTable::default(), DEFAULT_CURRENCY);
    let cheaper = price_specs(
        &specs,
        &PriceTable::default().with_material_prices([("birch_plywood", 0.0)]),
        DEFAULT_CURRENCY,
    );
    assert!(cheaper.materials_cost < base.materials_cost);
    assert_eq!(cheaper.hardware_cost, base.hardware_cost);
}

#[test]
fn test_cutting_layout_covers_every_piece() {
    let specs = cabinet_specs();
    let layout = optimize_cutting(&specs.cut_list);
    let pieces: u32 = specs.cut_list.iter().map(|c| c.quantity).sum();

    assert_eq!(layout.pieces.len(), pieces as usize);
    assert!(layout
        .pieces
        .windows(2)
        .all(|pair| pair[0].area() >= pair[1].area()));
}

#[test]
fn test_aggregated_hardware_keeps_total_quantity() {
    let specs = cabinet_specs();
    let merged = aggregate_hardware(&specs.hardware);
    let before: u32 = specs.hardware.iter().map(|h| h.quantity).sum();
    let after: u32 = merged.iter().map(|h| h.quantity).sum();
    assert_eq!(before, after);
    assert!(merged.len() <= specs.hardware.len());
}

proptest! {
    #[test]
    fn prop_exact_sheets_round_up_with_waste(n in 1u32..500) {
        let item = CutListItem::new("panel", PanelSize::new(SHEET_WIDTH, SHEET_HEIGHT, 18.0), n, "mdf");
        let needs = calculate_material_needs(&[item]);
        // ceil(n * 1.1) in integer arithmetic
        let expected = (11 * n).div_ceil(10);
        prop_assert_eq!(needs.sheets_needed["mdf"], expected);
    }

    #[test]
    fn prop_material_cost_never_negative(
        w in 1.0..2400.0f64,
        h in 1.0..2400.0f64,
        qty in 1u32..20,
    ) {
        let item = CutListItem::new("panel", PanelSize::new(w, h, 18.0), qty, "pine_plywood");
        prop_assert!(estimate_material_cost(&[item], &PriceTable::default()) >= 45.0);
    }
}
