//! Top-view SVG preview
//!
//! Every coordinate is projected onto the X/Y plane and drawn as an outlined
//! rectangle with its element name centred inside. Z is ignored.

use crate::dxf::format_number;
use furnikit_core::CadCoordinate;

/// Margin around the drawing, in drawing units (mm)
pub const PADDING: f64 = 50.0;
/// Display scale applied to the outer width and height
pub const DISPLAY_SCALE: f64 = 0.5;

/// X/Y bounds of a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds over all start and end points; `None` when there are none
    pub fn of(coordinates: &[CadCoordinate]) -> Option<Self> {
        let mut points = coordinates.iter().flat_map(|c| [c.start, c.end]);
        let first = points.next()?;
        let init = Bounds {
            min_x: first[0],
            min_y: first[1],
            max_x: first[0],
            max_y: first[1],
        };
        Some(points.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p[0]),
            min_y: b.min_y.min(p[1]),
            max_x: b.max_x.max(p[0]),
            max_y: b.max_y.max(p[1]),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Render coordinates as a standalone SVG 1.1 document
pub fn generate_svg(coordinates: &[CadCoordinate], project_name: &str) -> String {
    let bounds = Bounds::of(coordinates).unwrap_or(Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    });
    let view_w = bounds.width() + PADDING * 2.0;
    let view_h = bounds.height() + PADDING * 2.0;
    let name = escape_xml(project_name);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\"\n     width=\"{}\"\n     height=\"{}\"\n     viewBox=\"0 0 {} {}\">\n",
        format_number(view_w * DISPLAY_SCALE),
        format_number(view_h * DISPLAY_SCALE),
        format_number(view_w),
        format_number(view_h),
    ));
    svg.push_str(&format!("  <title>{}</title>\n", name));
    svg.push_str(&format!(
        "  <desc>Furniture technical drawing - {}</desc>\n\n",
        name
    ));

    svg.push_str("  <!-- Background -->\n");
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n\n");

    svg.push_str("  <!-- Grid -->\n");
    svg.push_str("  <defs>\n");
    svg.push_str(
        "    <pattern id=\"grid\" width=\"100\" height=\"100\" patternUnits=\"userSpaceOnUse\">\n",
    );
    svg.push_str(
        "      <path d=\"M 100 0 L 0 0 0 100\" fill=\"none\" stroke=\"#e0e0e0\" stroke-width=\"0.5\"/>\n",
    );
    svg.push_str("    </pattern>\n");
    svg.push_str("  </defs>\n");
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"url(#grid)\" />\n\n");

    svg.push_str("  <!-- Furniture parts -->\n");
    svg.push_str(&format!(
        "  <g id=\"furniture\" transform=\"translate({}, {})\">\n",
        format_number(PADDING),
        format_number(PADDING)
    ));

    for coord in coordinates {
        let x = coord.start[0] - bounds.min_x;
        let y = coord.start[1] - bounds.min_y;
        let w = coord.end[0] - coord.start[0];
        let h = coord.end[1] - coord.start[1];
        let element = escape_xml(&coord.element);

        svg.push_str(&format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"\n         fill=\"none\" stroke=\"#333333\" stroke-width=\"2\"\n         data-part=\"{}\"/>\n",
            format_number(x),
            format_number(y),
            format_number(w),
            format_number(h),
            element
        ));
        svg.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\"\n         text-anchor=\"middle\" dominant-baseline=\"middle\"\n         font-size=\"12\" font-family=\"Arial\" fill=\"#666\">\n      {}\n    </text>\n",
            format_number(x + w / 2.0),
            format_number(y + h / 2.0),
            element
        ));
    }

    svg.push_str("  </g>\n\n");
    svg.push_str("  <!-- Dimensions annotation -->\n");
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"Arial\" font-size=\"14\" fill=\"#000\">\n",
        format_number(PADDING),
        format_number(PADDING - 20.0)
    ));
    svg.push_str("    All dimensions in millimeters (mm)\n");
    svg.push_str("  </text>\n");
    svg.push_str("</svg>\n");

    svg
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
