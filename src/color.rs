use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::aggregate::PieChart;
use crate::data::model::Outcome;

/// CSS `green`.
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 128, 0);
/// CSS `red`.
pub const FAILURE_RED: Color32 = Color32::from_rgb(255, 0, 0);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Success => SUCCESS_GREEN,
        Outcome::Failure => FAILURE_RED,
    }
}

/// Colours for each slice of `chart`, in slice order. Outcome slices use the
/// fixed green/red pair, site slices share an evenly spaced palette.
pub fn slice_colors(chart: &PieChart) -> Vec<Color32> {
    let palette = generate_palette(chart.slices.len());
    chart
        .slices
        .iter()
        .zip(palette)
        .map(|(slice, fallback)| slice.outcome.map_or(fallback, outcome_color))
        .collect()
}

/// `#rrggbb` form used in exported snapshots.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

// ---------------------------------------------------------------------------
// Color mapping: booster category → Color32
// ---------------------------------------------------------------------------

/// Maps each booster version category to a distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let palette = generate_palette(categories.len());
        let mapping = categories.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (category → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(c, col)| (c.clone(), *col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::PieSlice;

    #[test]
    fn palette_is_distinct() {
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        let unique: BTreeSet<_> = colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 5);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn outcome_slices_use_fixed_colors() {
        let chart = PieChart {
            title: String::new(),
            slices: vec![
                PieSlice { label: "Failure".into(), count: 3, outcome: Some(Outcome::Failure) },
                PieSlice { label: "Success".into(), count: 1, outcome: Some(Outcome::Success) },
            ],
        };
        assert_eq!(slice_colors(&chart), [FAILURE_RED, SUCCESS_GREEN]);
        assert_eq!(to_hex(SUCCESS_GREEN), "#008000");
        assert_eq!(to_hex(FAILURE_RED), "#ff0000");
    }

    #[test]
    fn unknown_category_falls_back_to_gray() {
        let categories: BTreeSet<String> = ["B5", "FT"].iter().map(|s| s.to_string()).collect();
        let map = ColorMap::new(&categories);
        assert_ne!(map.color_for("FT"), map.color_for("B5"));
        assert_eq!(map.color_for("v9"), Color32::GRAY);
        assert_eq!(map.legend_entries().len(), 2);
    }
}
