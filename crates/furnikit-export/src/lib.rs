//! # Furnikit Export
//!
//! Serializes the placement boxes of a design into drawing formats:
//! a DXF entity stream for CAD tools and an SVG top view for previews.

pub mod document;
pub mod dxf;
pub mod error;
pub mod svg;

pub use document::{export_document, CadDocument, CadFormat};
pub use dxf::{generate_dxf, DxfFaceMode, DxfOptions};
pub use error::{ExportError, ExportResult};
pub use svg::{generate_svg, Bounds, DISPLAY_SCALE, PADDING};
