//! Configuration management for Furnikit
//!
//! Configuration is organized into sections:
//! - Generation (rules or remote model, feature defaults)
//! - Pricing (currency, price overrides)
//! - Export (default drawing format, DXF face mode)
//!
//! Files are JSON or TOML, chosen by extension. Library crates never read
//! the environment; everything they need is converted from this struct.

use furnikit_core::{Error, Result};
use furnikit_export::{CadFormat, DxfFaceMode, DxfOptions};
use furnikit_pricing::{PriceTable, DEFAULT_CURRENCY};
use furnikit_rules::{FeatureDefaults, GenerationMethod, GeneratorConfig, RemoteModelConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which generator the orchestrator should try first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// Local rule engines only
    #[default]
    Rules,
    /// Remote model with rules fallback
    Remote,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub method: MethodKind,
    /// Required when `method` is `remote`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteModelConfig>,
    pub defaults: FeatureDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    /// ISO 4217 code
    pub currency: String,
    /// Material id to price per sheet
    pub material_prices: BTreeMap<String, f64>,
    /// Hardware item to unit price
    pub hardware_prices: BTreeMap<String, f64>,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            material_prices: BTreeMap::new(),
            hardware_prices: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub default_format: CadFormat,
    pub dxf_faces: DxfFaceMode,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation settings
    pub generation: GenerationSettings,
    /// Pricing settings
    pub pricing: PricingSettings,
    /// Export settings
    pub export: ExportSettings,
}

#[derive(Clone, Copy)]
enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> Result<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(FileFormat::Toml),
        _ => Err(Error::config("Config file must be .json or .toml")),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/furnikit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("furnikit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?,
            FileFormat::Toml => toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Explicit file if given, else the default location when it exists,
    /// else built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(default) if default.is_file() => Self::load_from_file(&default),
            _ => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?,
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!("Failed to write config file {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.generation.method == MethodKind::Remote {
            let remote = self
                .generation
                .remote
                .as_ref()
                .ok_or_else(|| Error::config("Remote generation requires a [generation.remote] block"))?;
            if remote.url.trim().is_empty() {
                return Err(Error::config("Remote model url must not be empty"));
            }
            if remote.api_key.trim().is_empty() {
                return Err(Error::config("Remote model api_key must not be empty"));
            }
        }
        if let Some(remote) = &self.generation.remote {
            if remote.timeout_ms == 0 {
                return Err(Error::config("Remote model timeout must be > 0"));
            }
        }

        let angle = self.generation.defaults.corner_angle;
        if !(angle > 0.0 && angle < 180.0) {
            return Err(Error::config("Default corner angle must be between 0 and 180 degrees"));
        }

        let currency = &self.pricing.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::config(format!(
                "Currency must be a 3-letter code, got '{}'",
                currency
            )));
        }

        let prices = self
            .pricing
            .material_prices
            .iter()
            .chain(self.pricing.hardware_prices.iter());
        for (key, price) in prices {
            if !price.is_finite() || *price < 0.0 {
                return Err(Error::config(format!(
                    "Price for '{}' must be a finite value >= 0",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Orchestrator settings
    pub fn generator_config(&self) -> GeneratorConfig {
        let method = match (self.generation.method, &self.generation.remote) {
            (MethodKind::Remote, Some(remote)) => GenerationMethod::Remote(remote.clone()),
            _ => GenerationMethod::Rules,
        };
        GeneratorConfig {
            method,
            defaults: self.generation.defaults,
        }
    }

    /// Default prices with the configured overrides applied
    pub fn price_table(&self) -> PriceTable {
        PriceTable::default()
            .with_material_prices(
                self.pricing
                    .material_prices
                    .iter()
                    .map(|(k, v)| (k.clone(), *v)),
            )
            .with_hardware_prices(
                self.pricing
                    .hardware_prices
                    .iter()
                    .map(|(k, v)| (k.clone(), *v)),
            )
    }

    pub fn currency(&self) -> &str {
        &self.pricing.currency
    }

    pub fn dxf_options(&self) -> DxfOptions {
        DxfOptions::with_faces(self.export.dxf_faces)
    }
}
