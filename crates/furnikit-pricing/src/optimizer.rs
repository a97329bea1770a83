//! Cutting-layout estimate
//!
//! This is not a packing algorithm. Pieces are expanded by quantity and
//! ordered largest first, and the sheet yield is an assumed constant.

use furnikit_core::CutListItem;
use serde::Serialize;

/// Assumed yield of a hand-planned cutting layout
pub const ASSUMED_EFFICIENCY: f64 = 0.75;

const LAYOUT_NOTE: &str =
    "Estimated layout: pieces sorted by area, efficiency is an assumed figure, not an optimal packing";

/// One physical piece to cut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutPiece {
    pub part: String,
    pub width: f64,
    pub height: f64,
    pub material: String,
}

impl CutPiece {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuttingLayout {
    /// Every physical piece, largest area first
    pub pieces: Vec<CutPiece>,
    pub efficiency: f64,
    pub note: String,
}

/// Expand the cut list into single pieces sorted by descending area.
///
/// The sort is stable, so equal-area pieces keep cut-list order.
pub fn optimize_cutting(cut_list: &[CutListItem]) -> CuttingLayout {
    let mut pieces: Vec<CutPiece> = cut_list
        .iter()
        .flat_map(|item| {
            (0..item.quantity).map(move |_| CutPiece {
                part: item.part.clone(),
                width: item.size.width,
                height: item.size.height,
                material: item.material.clone(),
            })
        })
        .collect();

    pieces.sort_by(|a, b| b.area().total_cmp(&a.area()));

    CuttingLayout {
        pieces,
        efficiency: ASSUMED_EFFICIENCY,
        note: LAYOUT_NOTE.to_string(),
    }
}
