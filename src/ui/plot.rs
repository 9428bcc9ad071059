use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::color::SeverityScale;
use crate::data::views;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Severity map – threshold view as a scatter over lon/lat
// ---------------------------------------------------------------------------

/// Map of collisions at or above the injured-persons threshold, grouped
/// and coloured by injured count.
pub fn severity_map(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else { return };

    ui.heading("Where are the most people injured?");

    // One Points series per injured count so each gets its own colour
    // and legend entry.
    let mut groups: BTreeMap<u32, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.threshold_indices {
        let r = &dataset.records[idx];
        let Some(injured) = r.injured_persons else {
            continue;
        };
        groups
            .entry(injured)
            .or_default()
            .push([r.longitude, r.latitude]);
    }

    let max_injured = groups.keys().next_back().copied().unwrap_or(0);
    let scale = SeverityScale::new(max_injured);

    Plot::new("severity_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .height(320.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (injured, points) in groups {
                plot_ui.points(
                    Points::new(points)
                        .name(format!("{injured} injured"))
                        .color(scale.color_for(injured))
                        .radius(2.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Hour map – the hour-narrowed records
// ---------------------------------------------------------------------------

/// Map of the collisions inside the selected hour window.
pub fn hour_map(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else { return };

    ui.heading(format!(
        "Vehicle collisions between {}:00 and {}:00",
        state.hour,
        (state.hour + 1) % 24
    ));

    if let Some((lat, lon)) = views::midpoint(dataset, &state.hour_indices) {
        ui.label(format!("Centered near ({lat:.4}, {lon:.4})"));
    } else {
        ui.label("No collisions in this hour.");
    }

    let points: Vec<[f64; 2]> = state
        .hour_indices
        .iter()
        .map(|&idx| {
            let r = &dataset.records[idx];
            [r.longitude, r.latitude]
        })
        .collect();

    Plot::new("hour_map")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .height(320.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .name("collisions")
                    .color(Color32::LIGHT_BLUE)
                    .radius(2.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Minute histogram – bar chart over the hour window
// ---------------------------------------------------------------------------

/// Per-minute breakdown of the selected hour as a 60-bar chart.
pub fn minute_chart(ui: &mut Ui, state: &AppState) {
    ui.heading(format!(
        "Breakdown by minute between {}:00 and {}:00",
        state.hour,
        (state.hour + 1) % 24
    ));

    let bars: Vec<Bar> = state
        .minute_counts
        .iter()
        .enumerate()
        .map(|(minute, &count)| Bar::new(minute as f64, count as f64).width(0.8))
        .collect();

    Plot::new("minute_histogram")
        .x_axis_label("Minute")
        .y_axis_label("Crashes")
        .height(280.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("crashes"));
        });
}
