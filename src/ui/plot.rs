use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::slice_colors;
use crate::data::aggregate::PieChart;
use crate::state::AppState;

/// Largest arc drawn as one polygon; egui only fills convex shapes correctly.
const MAX_SEGMENT_ARC: f64 = FRAC_PI_2;
const ARC_STEPS_PER_TURN: f64 = 128.0;

// ---------------------------------------------------------------------------
// Pie chart: success breakdown
// ---------------------------------------------------------------------------

/// Render the success pie. An empty chart is drawn when there are no slices.
pub fn success_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(chart) = &state.pie else {
        return;
    };
    ui.label(RichText::new(&chart.title).heading());

    let colors = slice_colors(chart);
    let wedges = wedge_segments(chart);

    Plot::new("success_pie")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for (slice_idx, points) in wedges {
                let slice = &chart.slices[slice_idx];
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(points))
                        .name(&slice.label)
                        .fill_color(colors[slice_idx])
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
            }
            for (pos, share) in label_positions(chart) {
                plot_ui.text(Text::new(pos, format!("{:.1}%", share * 100.0)).color(Color32::WHITE));
            }
        });
}

/// Split each slice into convex segments, clockwise from twelve o'clock.
/// Yields `(slice index, polygon)` pairs.
fn wedge_segments(chart: &PieChart) -> Vec<(usize, Vec<[f64; 2]>)> {
    let total = chart.total() as f64;
    if total == 0.0 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut start = FRAC_PI_2;
    for (idx, slice) in chart.slices.iter().enumerate() {
        let sweep = slice.count as f64 / total * TAU;
        let n_segments = (sweep / MAX_SEGMENT_ARC).ceil().max(1.0) as usize;
        let seg_sweep = sweep / n_segments as f64;

        for s in 0..n_segments {
            let seg_start = start - seg_sweep * s as f64;
            let steps = ((seg_sweep / TAU) * ARC_STEPS_PER_TURN).ceil().max(2.0) as usize;
            let mut points = Vec::with_capacity(steps + 2);
            points.push([0.0, 0.0]);
            for k in 0..=steps {
                let angle = seg_start - seg_sweep * k as f64 / steps as f64;
                points.push([angle.cos(), angle.sin()]);
            }
            segments.push((idx, points));
        }
        start -= sweep;
    }
    segments
}

/// Mid-angle label anchors and each slice's share of the total.
fn label_positions(chart: &PieChart) -> Vec<(PlotPoint, f64)> {
    let total = chart.total() as f64;
    if total == 0.0 {
        return Vec::new();
    }

    let mut start = FRAC_PI_2;
    chart
        .slices
        .iter()
        .map(|slice| {
            let share = slice.count as f64 / total;
            let mid = start - share * TAU / 2.0;
            start -= share * TAU;
            (PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()), share)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter chart: payload vs. outcome
// ---------------------------------------------------------------------------

/// Render one point series per booster category over the filtered records.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    ui.label(RichText::new(&state.scatter_title).heading());

    let range = state.filters.payload;
    let color_map = &state.color_map;

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(range.low())
        .include_x(range.high())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for category in &dataset.booster_categories {
                let points: PlotPoints = state
                    .visible_indices
                    .iter()
                    .map(|&idx| &dataset.records[idx])
                    .filter(|rec| rec.booster_category == *category)
                    .map(|rec| [rec.payload_mass_kg, f64::from(rec.outcome.class())])
                    .collect();
                if points.points().is_empty() {
                    continue;
                }

                let color = color_map
                    .as_ref()
                    .map_or(Color32::LIGHT_BLUE, |cm| cm.color_for(category));

                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::PieSlice;

    fn chart(counts: &[usize]) -> PieChart {
        PieChart {
            title: String::new(),
            slices: counts
                .iter()
                .map(|&count| PieSlice {
                    label: count.to_string(),
                    count,
                    outcome: None,
                })
                .collect(),
        }
    }

    #[test]
    fn large_slice_is_split_into_convex_segments() {
        let segments = wedge_segments(&chart(&[1, 1]));
        // Two half circles at 90 degrees per segment.
        assert_eq!(segments.iter().filter(|(i, _)| *i == 0).count(), 2);
        assert_eq!(segments.iter().filter(|(i, _)| *i == 1).count(), 2);
        assert!(segments.iter().all(|(_, pts)| pts[0] == [0.0, 0.0]));
    }

    #[test]
    fn empty_chart_has_no_wedges_or_labels() {
        assert!(wedge_segments(&chart(&[])).is_empty());
        assert!(label_positions(&chart(&[])).is_empty());
    }

    #[test]
    fn label_shares_sum_to_one() {
        let labels = label_positions(&chart(&[2, 1, 1]));
        let total: f64 = labels.iter().map(|(_, share)| share).sum();
        assert!((total - 1.0).abs() < 1e-12);
        // First slice starts at twelve o'clock and runs clockwise to six.
        let (pos, _) = labels[0];
        assert!(pos.x > 0.6 && pos.y.abs() < 1e-9);
    }
}
