use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::catalog::search_catalog;
use crate::data::model::PayloadRange;
use crate::events::DashboardEvent;
use crate::state::AppState;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

// ---------------------------------------------------------------------------
// Left side panel – site dropdown and payload range
// ---------------------------------------------------------------------------

/// Render the input controls and dispatch whatever changed.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new(DASHBOARD_TITLE).color(Color32::from_rgb(0x50, 0x3D, 0x36)));
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    let mut events = Vec::new();

    // ---- Launch site ----
    ui.strong("Launch site");
    let selected = &state.filters.site;
    let search = &mut state.site_search;
    let selected_label = dataset
        .catalog
        .iter()
        .find(|opt| opt.value == *selected)
        .map_or_else(|| selected.to_string(), |opt| opt.label.clone());
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selected_label)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(egui::TextEdit::singleline(search).hint_text("Search sites"));
            for opt in search_catalog(&dataset.catalog, search) {
                if ui
                    .selectable_label(opt.value == *selected, &opt.label)
                    .clicked()
                    && opt.value != *selected
                {
                    events.push(DashboardEvent::SiteSelected(opt.value.clone()));
                }
            }
        });
    ui.add_space(8.0);

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let range = state.filters.payload;
    let (mut low, mut high) = (range.low(), range.high());
    let slider_range = PayloadRange::SLIDER_MIN..=PayloadRange::SLIDER_MAX;

    // Only user edits are clamped and snapped to the step; an unsnapped
    // range from the data or the command line is shown as is.
    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, slider_range.clone())
                .step_by(PayloadRange::SLIDER_STEP)
                .clamping(egui::SliderClamping::Edits)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, slider_range)
                .step_by(PayloadRange::SLIDER_STEP)
                .clamping(egui::SliderClamping::Edits)
                .text("max"),
        )
        .changed();

    // Dragging one handle past the other pushes it along.
    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }
    let edited = PayloadRange::new(low, high);
    if (low_changed || high_changed) && edited != range {
        events.push(DashboardEvent::PayloadRangeChanged(edited));
    }

    if ui.small_button("Reset range").clicked() {
        events.push(DashboardEvent::PayloadRangeChanged(dataset.full_payload_range()));
    }
    ui.separator();

    // ---- Booster legend ----
    if let Some(cm) = &state.color_map {
        ui.strong("Booster Version Category");
        for (category, color) in cm.legend_entries() {
            ui.label(RichText::new(format!("● {category}")).color(color));
        }
    }

    for event in events {
        state.dispatch(event);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} in range",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} sites",
                    dataset.len(),
                    dataset.catalog.len() - 1
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
