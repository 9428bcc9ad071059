use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CrashviewApp {
    pub state: AppState,
}

impl Default for CrashviewApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for CrashviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard sections ----
        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.state.dataset {
                None => {
                    ui.centered_and_justified(|ui: &mut egui::Ui| {
                        ui.heading("Open a collisions CSV to begin  (File → Open…)");
                    });
                    return;
                }
                Some(dataset) if dataset.is_empty() => {
                    ui.centered_and_justified(|ui: &mut egui::Ui| {
                        ui.heading("No rows with coordinates in this file.");
                    });
                    return;
                }
                Some(_) => {}
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::severity_map(ui, &self.state);
                    ui.separator();
                    plot::hour_map(ui, &self.state);
                    ui.separator();
                    plot::minute_chart(ui, &self.state);
                    ui.separator();
                    table::top_streets_table(ui, &self.state);
                    if self.state.show_raw {
                        ui.separator();
                        table::raw_data_table(ui, &self.state);
                    }
                });
        });
    }
}
