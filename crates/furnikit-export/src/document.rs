//! Downloadable CAD documents

use crate::dxf::{generate_dxf, DxfOptions};
use crate::error::ExportError;
use crate::svg::generate_svg;
use furnikit_core::CadCoordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Supported drawing formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CadFormat {
    #[default]
    Dxf,
    Svg,
}

impl CadFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            CadFormat::Dxf => "application/dxf",
            CadFormat::Svg => "image/svg+xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            CadFormat::Dxf => "dxf",
            CadFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for CadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for CadFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "dxf" => Ok(CadFormat::Dxf),
            "svg" => Ok(CadFormat::Svg),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Rendered drawing ready to be written or served
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CadDocument {
    pub content: String,
    pub mime_type: String,
    pub filename: String,
}

/// Render `coordinates` in `format` and name the file after the project
pub fn export_document(
    coordinates: &[CadCoordinate],
    project_name: &str,
    format: CadFormat,
    options: &DxfOptions,
) -> CadDocument {
    let content = match format {
        CadFormat::Dxf => generate_dxf(coordinates, options),
        CadFormat::Svg => generate_svg(coordinates, project_name),
    };
    let filename = format!("{}.{}", file_stem(project_name), format.extension());

    debug!(
        %format,
        entities = coordinates.len(),
        bytes = content.len(),
        filename = filename.as_str(),
        "exported drawing"
    );

    CadDocument {
        content,
        mime_type: format.mime_type().to_string(),
        filename,
    }
}

/// Project name with every whitespace run collapsed to `_`
fn file_stem(project_name: &str) -> String {
    let stem = project_name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        "design".to_string()
    } else {
        stem
    }
}
