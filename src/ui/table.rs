use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::outcome_color;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Render the records currently passing the site and payload filters.
pub fn filtered_records(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for name in ["#", "Launch Site", "Payload Mass (kg)", "Outcome", "Booster"] {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let idx = state.visible_indices[row.index()];
                let rec = &dataset.records[idx];
                row.col(|ui| {
                    ui.label(idx.to_string());
                });
                row.col(|ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(rec.outcome.label()).color(outcome_color(rec.outcome)),
                    );
                });
                row.col(|ui| {
                    ui.label(&rec.booster_category);
                });
            });
        });
}
