//! Overlay styling and the area color scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Border and fill of one park overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    /// Border width
    pub weight: f32,
    /// Border color
    pub color: Color,
    /// Border opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Dash pattern of the border, `None` for a solid line
    pub dash_array: Option<String>,
    pub fill_color: Color,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f32,
}

pub const BASE_BORDER: Color = Color::rgb(0x9F, 0x9F, 0x9F);
pub const HIGHLIGHT_BORDER: Color = Color::rgb(0x66, 0x66, 0x66);

impl PolygonStyle {
    /// Resting style: thin dashed gray border
    pub fn base(fill_color: Color) -> Self {
        Self {
            weight: 2.0,
            color: BASE_BORDER,
            opacity: 1.0,
            dash_array: Some("3".to_string()),
            fill_color,
            fill_opacity: 0.7,
        }
    }

    /// Hovered style: heavy dark border, same fill
    pub fn highlight(fill_color: Color) -> Self {
        Self {
            weight: 5.0,
            color: HIGHLIGHT_BORDER,
            ..Self::base(fill_color)
        }
    }

    /// Base style filled according to the park's area
    pub fn for_area(area_hectares: Option<f64>) -> Self {
        Self::base(color_for_area(area_hectares))
    }
}

/// Color of areas at or below the first breakpoint, and of unknown areas
pub const SMALLEST_COLOR: Color = Color::rgb(0x7F, 0x00, 0x00);

/// `(lower bound, color)`: an area strictly above the bound takes the color.
/// Ordered from the largest bound down.
pub const AREA_SCALE: [(f64, Color); 12] = [
    (200.0, Color::rgb(0x08, 0x23, 0x00)),
    (150.0, Color::rgb(0x0F, 0x40, 0x00)),
    (100.0, Color::rgb(0x14, 0x54, 0x00)),
    (75.0, Color::rgb(0x1F, 0x6B, 0x07)),
    (50.0, Color::rgb(0x21, 0x8A, 0x00)),
    (25.0, Color::rgb(0x26, 0xA1, 0x00)),
    (15.0, Color::rgb(0x2E, 0xC4, 0x00)),
    (10.0, Color::rgb(0x35, 0xE1, 0x00)),
    (5.0, Color::rgb(0x39, 0xF0, 0x01)),
    (2.5, Color::rgb(0x3C, 0xFF, 0x00)),
    (1.5, Color::rgb(0xAE, 0xE1, 0x00)),
    (0.75, Color::rgb(0xC5, 0xFF, 0x00)),
];

/// Bucket of an area: 0 for the smallest bucket (and unknown areas), 12 for the largest
pub fn area_bucket(area_hectares: Option<f64>) -> usize {
    let Some(area) = area_hectares.filter(|a| !a.is_nan()) else {
        return 0;
    };

    AREA_SCALE
        .iter()
        .position(|(bound, _)| area > *bound)
        .map(|from_top| AREA_SCALE.len() - from_top)
        .unwrap_or(0)
}

/// Fill color for a park of the given area
pub fn color_for_area(area_hectares: Option<f64>) -> Color {
    match area_bucket(area_hectares) {
        0 => SMALLEST_COLOR,
        bucket => AREA_SCALE[AREA_SCALE.len() - bucket].1,
    }
}

/// One legend row
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
}

/// Legend rows from the smallest bucket to the largest
pub fn legend_entries() -> Vec<LegendEntry> {
    let mut entries = vec![LegendEntry {
        color: SMALLEST_COLOR,
        label: format!("< {}", AREA_SCALE[AREA_SCALE.len() - 1].0),
    }];

    let ascending: Vec<&(f64, Color)> = AREA_SCALE.iter().rev().collect();
    for (i, (from, color)) in ascending.iter().enumerate() {
        let label = match ascending.get(i + 1) {
            Some((to, _)) => format!("{}–{}", from, to),
            None => format!("{}+", from),
        };
        entries.push(LegendEntry {
            color: *color,
            label,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_are_exclusive_lower_bounds() {
        assert_eq!(color_for_area(Some(0.0)), SMALLEST_COLOR);
        assert_eq!(color_for_area(Some(0.75)), SMALLEST_COLOR);
        let hex = |area: f64| color_for_area(Some(area)).to_string();
        assert_eq!(hex(0.76), "#C5FF00");
        assert_eq!(hex(2.5), "#AEE100");
        assert_eq!(hex(200.0), "#0F4000");
        assert_eq!(hex(200.01), "#082300");
        assert_eq!(hex(5000.0), "#082300");
    }

    #[test]
    fn test_unknown_area_takes_smallest_bucket() {
        assert_eq!(area_bucket(None), 0);
        assert_eq!(area_bucket(Some(f64::NAN)), 0);
        assert_eq!(color_for_area(None), SMALLEST_COLOR);
    }

    #[test]
    fn test_scale_is_monotonic_and_deterministic() {
        let samples: Vec<f64> = (0..=4000).map(|i| i as f64 * 0.07).collect();
        let mut previous_bucket = 0;
        for area in samples {
            let bucket = area_bucket(Some(area));
            assert!(bucket >= previous_bucket, "bucket dropped at {area}");
            assert_eq!(color_for_area(Some(area)), color_for_area(Some(area)));
            previous_bucket = bucket;
        }
        assert_eq!(previous_bucket, 12);
    }

    #[test]
    fn test_greens_darken_with_area() {
        let luma = |c: Color| 0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64;
        let greens: Vec<f64> = (1..=12).map(|b| luma(AREA_SCALE[12 - b].1)).collect();
        for pair in greens.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn test_styles() {
        let fill = color_for_area(Some(30.0));
        let base = PolygonStyle::base(fill);
        assert_eq!(base.weight, 2.0);
        assert_eq!(base.color.to_string(), "#9F9F9F");
        assert_eq!(base.fill_opacity, 0.7);
        assert_eq!(base.dash_array.as_deref(), Some("3"));

        let hover = PolygonStyle::highlight(fill);
        assert_eq!(hover.weight, 5.0);
        assert_eq!(hover.color.to_string(), "#666666");
        assert_eq!(hover.fill_color, fill);
        assert_eq!(hover.dash_array, base.dash_array);
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(HIGHLIGHT_BORDER.to_string(), "#666666");
        assert_eq!(Color::rgb(8, 35, 0).to_string(), "#082300");
    }

    #[test]
    fn test_legend_runs_small_to_large() {
        let legend = legend_entries();
        assert_eq!(legend.len(), 13);
        assert_eq!(legend[0].label, "< 0.75");
        assert_eq!(legend[0].color, SMALLEST_COLOR);
        assert_eq!(legend[1].label, "0.75–1.5");
        assert_eq!(legend[12].label, "200+");
        assert_eq!(legend[12].color, color_for_area(Some(250.0)));
    }
}
