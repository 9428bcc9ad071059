use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top streets table
// ---------------------------------------------------------------------------

/// Ranked table of the streets with the most injuries in the selected
/// category.
pub fn top_streets_table(ui: &mut Ui, state: &AppState) {
    ui.heading(format!(
        "Top dangerous streets: {}",
        state.category.label()
    ));

    if state.top_streets.is_empty() {
        ui.label("No matching collisions.");
        return;
    }

    ui.push_id("top_streets", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::remainder())
            .column(Column::auto())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Street");
                });
                header.col(|ui| {
                    ui.strong("Injured");
                });
            })
            .body(|mut body| {
                for ranking in &state.top_streets {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&ranking.street);
                        });
                        row.col(|ui| {
                            ui.label(ranking.injured.to_string());
                        });
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// The raw rows of the hour-narrowed working set.
pub fn raw_data_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else { return };

    ui.heading("Raw data");

    ui.push_id("raw_data", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(300.0)
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in ["Date/time", "Latitude", "Longitude", "Injured", "Street"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, state.hour_indices.len(), |mut row| {
                    let r = &dataset.records[state.hour_indices[row.index()]];
                    row.col(|ui| {
                        ui.label(r.timestamp.format("%Y-%m-%d %H:%M").to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.5}", r.latitude));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.5}", r.longitude));
                    });
                    row.col(|ui| {
                        ui.label(
                            r.injured_persons
                                .map(|n| n.to_string())
                                .unwrap_or_default(),
                        );
                    });
                    row.col(|ui| {
                        ui.label(r.on_street_name.as_deref().unwrap_or(""));
                    });
                });
            });
    });
}
