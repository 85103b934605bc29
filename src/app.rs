use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

const PIE_HEIGHT: f32 = 320.0;
const SCATTER_HEIGHT: f32 = 340.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: site and payload inputs ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a launch dataset to begin  (File → Open…)");
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::success_pie(ui, &self.state, PIE_HEIGHT);
                    ui.add_space(12.0);
                    plot::payload_scatter(ui, &self.state, SCATTER_HEIGHT);
                    ui.add_space(12.0);
                    egui::CollapsingHeader::new("Filtered launches")
                        .default_open(false)
                        .show(ui, |ui| table::filtered_records(ui, &self.state));
                });
        });
    }
}
