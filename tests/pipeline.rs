use furnikit::{
    export_plan, plan, CadFormat, Config, DesignRequest, Dimensions, EngineError, Features,
    FurnitureType, GeneratedBy,
};
use std::fs;
use tempfile::TempDir;

fn wall_shelf() -> DesignRequest {
    DesignRequest::new(FurnitureType::WallShelf, Dimensions::new(1200.0, 300.0, 1000.0))
        .with_name("Hall shelf")
        .with_features(Features {
            num_shelves: Some(4),
            has_back_panel: true,
            ..Default::default()
        })
}

#[test]
fn test_plan_generates_and_prices() {
    let plan = plan(&wall_shelf(), &Config::default()).unwrap();

    assert_eq!(plan.name, "Hall shelf");
    assert_eq!(plan.generation.generated_by, GeneratedBy::Rules);
    assert_eq!(plan.pricing.currency, "EUR");
    assert!(plan.estimated_cost > 0.0);
    assert_eq!(plan.estimated_cost, plan.pricing.total_cost);
    assert_eq!(plan.specs().cut_item("shelf").unwrap().quantity, 2);
}

#[test]
fn test_plan_json_uses_camel_case() {
    let plan = plan(&wall_shelf(), &Config::default()).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert!(json["estimatedCost"].is_number());
    assert_eq!(json["generation"]["generatedBy"], "rules");
    assert!(json["generation"]["technicalSpecs"]["cutList"].is_array());
    assert!(json["generation"]["technicalSpecs"]["cadCoordinates"].is_array());
    assert_eq!(json["pricing"]["finishingCost"], 0.0);
}

#[test]
fn test_unnamed_request_uses_type_label() {
    let request = DesignRequest::new(FurnitureType::Cabinet, Dimensions::new(800.0, 400.0, 1800.0));
    let plan = plan(&request, &Config::default()).unwrap();
    assert_eq!(plan.name, "Cabinet");
}

#[test]
fn test_invalid_request_reports_every_error() {
    let request = DesignRequest::new(FurnitureType::Desk, Dimensions::new(500.0, 1200.0, 750.0));
    let err = plan(&request, &Config::default()).unwrap_err();
    match err {
        EngineError::Validation { errors } => assert!(errors.len() >= 2, "{:?}", errors),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_config_file_drives_pricing_and_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[pricing]\ncurrency = \"USD\"\n\n[export]\ndefault_format = \"svg\"\n",
    )
    .unwrap();
    let config = Config::load_from_file(&path).unwrap();

    let plan = plan(&wall_shelf(), &config).unwrap();
    assert_eq!(plan.pricing.currency, "USD");
    assert!(plan.pricing.formatted_total().ends_with(" USD"));

    let drawing = export_plan(&plan, &config, None);
    assert_eq!(drawing.filename, "Hall_shelf.svg");
    assert!(drawing.content.contains("<title>Hall shelf</title>"));

    let dxf = export_plan(&plan, &config, Some(CadFormat::Dxf));
    assert_eq!(dxf.mime_type, "application/dxf");
    assert_eq!(
        dxf.content.matches("3DFACE").count(),
        plan.specs().cad_coordinates.len()
    );
}

#[test]
fn test_oversized_shelf_count_never_reaches_pricing() {
    let request = wall_shelf().with_features(Features {
        num_shelves: Some(u32::MAX),
        ..Default::default()
    });
    match plan(&request, &Config::default()) {
        Err(EngineError::Validation { errors }) => {
            assert_eq!(errors, vec!["Number of shelves must be at most 20"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_build_date_is_a_calendar_date() {
    assert!(chrono::NaiveDate::parse_from_str(furnikit::BUILD_DATE, "%Y-%m-%d").is_ok());
    assert_eq!(furnikit::BUILD_DATE.len(), 10);
}
