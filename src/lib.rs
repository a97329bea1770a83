//! # Furnikit
//!
//! A parametric furniture design compiler. Given an archetype, outer
//! dimensions, feature flags and a material it derives a complete
//! fabrication plan: cut list, hardware, ordered assembly steps and 3D
//! placement of every part. Plans can be priced and exported as DXF or SVG.
//!
//! ## Architecture
//!
//! Furnikit is organized as a workspace with multiple crates:
//!
//! 1. **furnikit-core** - Value types, carpentry standards, material catalog, formatting
//! 2. **furnikit-rules** - Archetype engines, dimension validation, generation orchestrator
//! 3. **furnikit-pricing** - Sheet and hardware cost estimation
//! 4. **furnikit-export** - DXF and SVG drawings
//! 5. **furnikit-settings** - Configuration files
//! 6. **furnikit** - End-to-end pipeline and the `furnikit` binary

pub use furnikit_core::{
    format_currency, format_dimensions, selectable_materials, CadCoordinate, CutListItem,
    Dimensions, Features, FurnitureType, HardwareItem, TechnicalSpecs,
};
pub use furnikit_export::{export_document, CadDocument, CadFormat, DxfFaceMode, DxfOptions};
pub use furnikit_pricing::{price_specs, PriceTable, PricingInfo};
pub use furnikit_rules::{
    validate, validate_request, DesignRequest, EngineError, EngineResult, GeneratedBy,
    GenerationResult, Generator, ValidationReport,
};
pub use furnikit_settings::Config;

use serde::Serialize;
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date as `YYYY-MM-DD` (UTC, or `SOURCE_DATE_EPOCH` when set)
pub const BUILD_DATE: &str = env!("FURNIKIT_BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output to stderr so stdout stays clean for documents
/// - RUST_LOG environment variable support
/// - `info` by default, `debug` when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Generated and priced design
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPlan {
    pub name: String,
    pub generation: GenerationResult,
    pub pricing: PricingInfo,
    /// Materials plus hardware, in `pricing.currency`
    pub estimated_cost: f64,
}

impl ProjectPlan {
    pub fn specs(&self) -> &TechnicalSpecs {
        &self.generation.technical_specs
    }
}

/// Validate, generate and price `request` with the given configuration
pub fn plan(request: &DesignRequest, config: &Config) -> EngineResult<ProjectPlan> {
    let generator = Generator::new(config.generator_config());
    plan_with(&generator, request, config)
}

/// Same as [`plan`] with a caller-built generator
pub fn plan_with(
    generator: &Generator,
    request: &DesignRequest,
    config: &Config,
) -> EngineResult<ProjectPlan> {
    let generation = generator.generate(request)?;
    let pricing = price_specs(
        &generation.technical_specs,
        &config.price_table(),
        config.currency(),
    );
    let estimated_cost = pricing.total_cost;

    let name = if request.name.trim().is_empty() {
        request.furniture_type.label().to_string()
    } else {
        request.name.clone()
    };

    info!(
        project = name.as_str(),
        estimated_cost = %pricing.formatted_total(),
        "project planned"
    );

    Ok(ProjectPlan {
        name,
        generation,
        pricing,
        estimated_cost,
    })
}

/// Drawing of a plan; `format` falls back to the configured default
pub fn export_plan(plan: &ProjectPlan, config: &Config, format: Option<CadFormat>) -> CadDocument {
    export_document(
        &plan.specs().cad_coordinates,
        &plan.name,
        format.unwrap_or(config.export.default_format),
        &config.dxf_options(),
    )
}
