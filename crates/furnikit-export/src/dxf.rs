//! Minimal DXF writer
//!
//! Emits an AC1015 (AutoCAD 2000) document with millimeter units, a single
//! CONTINUOUS line type, layer `0` and one or more `3DFACE` entities per
//! placed part.

use crate::error::ExportError;
use furnikit_core::{CadCoordinate, Point3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How each box is turned into faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DxfFaceMode {
    /// One face per box at the base elevation (`start.z`)
    #[default]
    Base,
    /// Six faces per box
    Box,
}

impl fmt::Display for DxfFaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DxfFaceMode::Base => write!(f, "base"),
            DxfFaceMode::Box => write!(f, "box"),
        }
    }
}

impl FromStr for DxfFaceMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(DxfFaceMode::Base),
            "box" => Ok(DxfFaceMode::Box),
            other => Err(ExportError::UnknownFaceMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DxfOptions {
    pub faces: DxfFaceMode,
}

impl DxfOptions {
    pub fn with_faces(faces: DxfFaceMode) -> Self {
        Self { faces }
    }
}

type Quad = [Point3; 4];

/// Render coordinates as a DXF document
pub fn generate_dxf(coordinates: &[CadCoordinate], options: &DxfOptions) -> String {
    let mut dxf = String::new();

    // HEADER
    push_pair(&mut dxf, 0, "SECTION");
    push_pair(&mut dxf, 2, "HEADER");
    push_pair(&mut dxf, 9, "$ACADVER");
    push_pair(&mut dxf, 1, "AC1015");
    push_pair(&mut dxf, 9, "$INSUNITS");
    push_pair(&mut dxf, 70, "4");
    push_pair(&mut dxf, 0, "ENDSEC");

    // TABLES
    push_pair(&mut dxf, 0, "SECTION");
    push_pair(&mut dxf, 2, "TABLES");

    push_pair(&mut dxf, 0, "TABLE");
    push_pair(&mut dxf, 2, "LTYPE");
    push_pair(&mut dxf, 70, "1");
    push_pair(&mut dxf, 0, "LTYPE");
    push_pair(&mut dxf, 2, "CONTINUOUS");
    push_pair(&mut dxf, 70, "0");
    push_pair(&mut dxf, 3, "Solid line");
    push_pair(&mut dxf, 72, "65");
    push_pair(&mut dxf, 73, "0");
    push_pair(&mut dxf, 40, "0.0");
    push_pair(&mut dxf, 0, "ENDTAB");

    push_pair(&mut dxf, 0, "TABLE");
    push_pair(&mut dxf, 2, "LAYER");
    push_pair(&mut dxf, 70, "1");
    push_pair(&mut dxf, 0, "LAYER");
    push_pair(&mut dxf, 2, "0");
    push_pair(&mut dxf, 70, "0");
    push_pair(&mut dxf, 62, "7");
    push_pair(&mut dxf, 6, "CONTINUOUS");
    push_pair(&mut dxf, 0, "ENDTAB");

    push_pair(&mut dxf, 0, "ENDSEC");

    // ENTITIES
    push_pair(&mut dxf, 0, "SECTION");
    push_pair(&mut dxf, 2, "ENTITIES");
    for coord in coordinates {
        for quad in faces_for(coord, options.faces) {
            push_face(&mut dxf, &quad);
        }
    }
    push_pair(&mut dxf, 0, "ENDSEC");

    push_pair(&mut dxf, 0, "EOF");
    dxf
}

fn faces_for(coord: &CadCoordinate, mode: DxfFaceMode) -> Vec<Quad> {
    let [x1, y1, z1] = coord.start;
    let [x2, y2, z2] = coord.end;

    let base = [[x1, y1, z1], [x2, y1, z1], [x2, y2, z1], [x1, y2, z1]];
    match mode {
        DxfFaceMode::Base => vec![base],
        DxfFaceMode::Box => vec![
            base,
            [[x1, y1, z2], [x2, y1, z2], [x2, y2, z2], [x1, y2, z2]],
            [[x1, y1, z1], [x2, y1, z1], [x2, y1, z2], [x1, y1, z2]],
            [[x1, y2, z1], [x2, y2, z1], [x2, y2, z2], [x1, y2, z2]],
            [[x1, y1, z1], [x1, y2, z1], [x1, y2, z2], [x1, y1, z2]],
            [[x2, y1, z1], [x2, y2, z1], [x2, y2, z2], [x2, y1, z2]],
        ],
    }
}

fn push_face(dxf: &mut String, quad: &Quad) {
    push_pair(dxf, 0, "3DFACE");
    push_pair(dxf, 8, "0");
    for (i, [x, y, z]) in quad.iter().enumerate() {
        let i = i as u16;
        push_pair(dxf, 10 + i, &format_number(*x));
        push_pair(dxf, 20 + i, &format_number(*y));
        push_pair(dxf, 30 + i, &format_number(*z));
    }
}

fn push_pair(dxf: &mut String, code: u16, value: &str) {
    dxf.push_str(&format!("{}\n{}\n", code, value));
}

/// Shortest round-trip form; negative zero prints as `0`
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> CadCoordinate {
        CadCoordinate::new("shelf_1", "shelf", [0.0, 0.0, 0.0], [100.0, 200.0, 18.0])
    }

    #[test]
    fn test_empty_document_structure() {
        let dxf = generate_dxf(&[], &DxfOptions::default());
        assert!(dxf.starts_with("0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n"));
        assert!(dxf.contains("9\n$INSUNITS\n70\n4\n"));
        assert!(dxf.ends_with("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n"));
        assert!(!dxf.contains("3DFACE"));
    }

    #[test]
    fn test_base_face_rule() {
        let dxf = generate_dxf(&[panel()], &DxfOptions::default());
        let expected = "0\n3DFACE\n8\n0\n\
                        10\n0\n20\n0\n30\n0\n\
                        11\n100\n21\n0\n31\n0\n\
                        12\n100\n22\n200\n32\n0\n\
                        13\n0\n23\n200\n33\n0\n";
        assert!(dxf.contains(expected));
        assert_eq!(dxf.matches("3DFACE").count(), 1);
    }

    #[test]
    fn test_box_mode_emits_six_faces() {
        let dxf = generate_dxf(&[panel()], &DxfOptions::with_faces(DxfFaceMode::Box));
        assert_eq!(dxf.matches("3DFACE").count(), 6);
        assert!(dxf.contains("10\n0\n20\n0\n30\n18\n"));
    }

    #[test]
    fn test_face_mode_parse() {
        assert_eq!("Box".parse::<DxfFaceMode>().unwrap(), DxfFaceMode::Box);
        assert_eq!(DxfFaceMode::default().to_string(), "base");
        assert!("mesh".parse::<DxfFaceMode>().is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(380.5), "380.5");
        assert_eq!(format_number(-12.0), "-12");
    }
}
