//! # Furnikit Rules
//!
//! Parametric furniture generation.
//!
//! ## Components
//!
//! - **Archetype engines**: corner shelf, wall shelf, cabinet and desk rules
//!   turning resolved parameters into cut lists, hardware, assembly steps
//!   and placement geometry
//! - **Validation**: general and per-archetype dimension bounds
//! - **Orchestrator**: validation, default resolution, remote model with
//!   rules fallback, provenance and timing
//! - **Load check**: advisory shelf capacity estimate

pub mod archetypes;
pub mod error;
pub mod load;
pub mod orchestrator;
pub mod params;
pub mod remote;
pub mod validation;

pub use archetypes::{
    generate_specs, rules_for, ArchetypeRules, CabinetRules, CornerShelfRules, DeskRules,
    WallShelfRules,
};
pub use error::{EngineError, EngineResult, RemoteGenerationError, RemoteResult};
pub use load::{check_load, LoadCheck};
pub use orchestrator::{
    GeneratedBy, GenerationMethod, GenerationResult, Generator, GeneratorConfig,
};
pub use params::{DesignParameters, DesignRequest, FeatureDefaults, DEFAULT_MATERIAL};
pub use remote::{HttpRemoteModel, RemoteModel, RemoteModelConfig, DEFAULT_REMOTE_TIMEOUT_MS};
pub use validation::{
    validate, validate_request, ValidationReport, MAX_DRAWERS, MAX_SHELVES,
};
