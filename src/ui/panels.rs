use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::loader::{self, DEFAULT_ROW_LIMIT};
use crate::data::model::InjuryCategory;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – interaction widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ui.strong("Injured persons");
    ui.add(Slider::new(&mut state.injured_threshold, 0..=29));
    ui.label("Minimum injured in a collision shown on the severity map.");
    ui.separator();

    ui.strong("Hour of day");
    ui.add(Slider::new(&mut state.hour, 0..=23).suffix(":00"));
    ui.separator();

    ui.strong("Affected by collision");
    egui::ComboBox::from_id_salt("injury_category")
        .selected_text(state.category.label())
        .show_ui(ui, |ui: &mut Ui| {
            for category in InjuryCategory::ALL {
                if ui
                    .selectable_label(state.category == category, category.label())
                    .clicked()
                {
                    state.category = category;
                }
            }
        });
    ui.separator();

    ui.checkbox(&mut state.show_raw, "Display raw data");

    // Recompute cached views after any widget change.
    state.recompute_views();
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

        if let Some(dataset) = &state.dataset {
            ui.label(format!(
                "{} collisions loaded · {} at ≥ {} injured · {} between {}:00 and {}:00",
                dataset.len(),
                state.threshold_coords.len(),
                state.injured_threshold,
                state.hour_indices.len(),
                state.hour,
                (state.hour + 1) % 24,
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
        .set_title("Open collision data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match loader::load_cached(&path, DEFAULT_ROW_LIMIT) {
            Ok(dataset) => {
                log::info!("loaded {} collision records", dataset.len());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
