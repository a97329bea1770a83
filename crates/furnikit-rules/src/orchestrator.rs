//! Generation orchestrator
//!
//! Validates a request, resolves its defaults and produces the plan either
//! through an injected remote model or the local rule engines. The remote
//! path is attempted at most once per call and falls back to the rules on
//! any failure, so a request that passes validation always yields a plan.

use crate::archetypes::generate_specs;
use crate::error::{EngineError, EngineResult, RemoteGenerationError};
use crate::load::{check_load, LoadCheck};
use crate::params::{DesignParameters, DesignRequest, FeatureDefaults};
use crate::remote::{HttpRemoteModel, RemoteModel, RemoteModelConfig};
use crate::validation::validate_request;
use furnikit_core::TechnicalSpecs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use tracing::{info, warn};

/// Which generator a [`Generator`] is configured to use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationMethod {
    /// Local rule engines only
    #[default]
    Rules,
    /// Remote model first, rules as fallback
    Remote(RemoteModelConfig),
}

/// Provenance of a generated plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedBy {
    Rules,
    Ai,
}

impl GeneratedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratedBy::Rules => "rules",
            GeneratedBy::Ai => "ai",
        }
    }
}

impl fmt::Display for GeneratedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit orchestrator configuration, built once by the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorConfig {
    pub method: GenerationMethod,
    pub defaults: FeatureDefaults,
}

/// Output of one generation call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub technical_specs: TechnicalSpecs,
    pub generated_by: GeneratedBy,
    /// Wall-clock time of the whole call, including a failed remote attempt
    pub processing_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_check: Option<LoadCheck>,
}

/// Design generator
pub struct Generator {
    config: GeneratorConfig,
    remote: Option<Box<dyn RemoteModel>>,
}

impl Generator {
    /// Build a generator from configuration.
    ///
    /// A remote method whose endpoint cannot be set up leaves the generator
    /// on rules; the reason is logged.
    pub fn new(config: GeneratorConfig) -> Self {
        let remote = match &config.method {
            GenerationMethod::Rules => None,
            GenerationMethod::Remote(remote_config) => {
                match HttpRemoteModel::new(remote_config.clone()) {
                    Ok(model) => Some(Box::new(model) as Box<dyn RemoteModel>),
                    Err(e) => {
                        warn!("Remote model unavailable, using rules: {}", e);
                        None
                    }
                }
            }
        };
        Self { config, remote }
    }

    /// Build a generator around any remote model implementation
    pub fn with_remote(config: GeneratorConfig, remote: Box<dyn RemoteModel>) -> Self {
        Self {
            config,
            remote: Some(remote),
        }
    }

    /// Rules-only generator with default feature values
    pub fn rules() -> Self {
        Self::new(GeneratorConfig::default())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A remote model is wired in and will be tried first
    pub fn remote_available(&self) -> bool {
        self.remote.is_some()
    }

    /// Method the next call will try first
    pub fn current_method(&self) -> GeneratedBy {
        if self.remote_available() {
            GeneratedBy::Ai
        } else {
            GeneratedBy::Rules
        }
    }

    /// Validate and generate a plan for `request`
    pub fn generate(&self, request: &DesignRequest) -> EngineResult<GenerationResult> {
        let started = Instant::now();

        let report = validate_request(request);
        if !report.valid {
            return Err(EngineError::Validation {
                errors: report.errors,
            });
        }

        let params = DesignParameters::resolve(request, &self.config.defaults);

        let (technical_specs, generated_by) = match self.try_remote(request) {
            Some(specs) => (specs, GeneratedBy::Ai),
            None => (
                generate_specs(request.furniture_type, &params),
                GeneratedBy::Rules,
            ),
        };

        let load_check = check_load(request, &params);
        let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            furniture_type = %request.furniture_type,
            generated_by = %generated_by,
            processing_time_ms,
            parts = technical_specs.cut_list.len(),
            "design generated"
        );

        Ok(GenerationResult {
            technical_specs,
            generated_by,
            processing_time_ms,
            load_check,
        })
    }

    /// One remote attempt; `None` means fall back to rules
    fn try_remote(&self, request: &DesignRequest) -> Option<TechnicalSpecs> {
        let remote = self.remote.as_ref()?;

        let outcome = remote.generate(request).and_then(|specs| {
            let violations = specs.check_invariants();
            if violations.is_empty() {
                Ok(specs)
            } else {
                Err(RemoteGenerationError::Malformed(violations.join("; ")))
            }
        });

        match outcome {
            Ok(specs) => Some(specs),
            Err(e) => {
                warn!(
                    model = remote.name(),
                    "Remote generation failed, falling back to rules: {}", e
                );
                None
            }
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::rules()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .field("remote", &self.remote.as_ref().map(|r| r.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furnikit_core::{Dimensions, FurnitureType};

    #[test]
    fn test_rules_generator_reports_provenance() {
        let generator = Generator::rules();
        assert!(!generator.remote_available());
        assert_eq!(generator.current_method(), GeneratedBy::Rules);

        let request =
            DesignRequest::new(FurnitureType::Cabinet, Dimensions::new(800.0, 400.0, 1800.0));
        let result = generator.generate(&request).unwrap();
        assert_eq!(result.generated_by, GeneratedBy::Rules);
        assert!(!result.technical_specs.cut_list.is_empty());
        assert!(result.load_check.is_none());
    }

    #[test]
    fn test_validation_failure_lists_everything() {
        let request = DesignRequest::new(FurnitureType::Desk, Dimensions::new(500.0, 300.0, 750.0));
        let err = Generator::rules().generate(&request).unwrap_err();
        assert_eq!(
            err.validation_errors(),
            &[
                "Desk width must be between 800mm and 2400mm".to_string(),
                "Desk depth must be between 500mm and 900mm".to_string(),
            ]
        );
    }

    #[test]
    fn test_unusable_remote_config_falls_back_to_rules() {
        let generator = Generator::new(GeneratorConfig {
            method: GenerationMethod::Remote(RemoteModelConfig::new("", "")),
            ..Default::default()
        });
        assert!(!generator.remote_available());
    }

    #[test]
    fn test_generated_by_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GeneratedBy::Ai).unwrap(), "\"ai\"");
        assert_eq!(GeneratedBy::Rules.to_string(), "rules");
    }
}
