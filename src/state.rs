use std::sync::Arc;

use crate::data::model::{CollisionDataset, InjuryCategory};
use crate::data::views::{self, StreetRanking};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset itself is immutable and shared; every interaction only
/// moves the parameters below and recomputes the cached view results.
pub struct AppState {
    /// Loaded dataset (None until user opens a file).
    pub dataset: Option<Arc<CollisionDataset>>,

    /// Minimum injured-persons count for the severity map (0–29).
    pub injured_threshold: u32,

    /// Hour of day for the time-based views (0–23).
    pub hour: u32,

    /// Category the street ranking is keyed on.
    pub category: InjuryCategory,

    /// Whether the raw rows of the hour window are shown.
    pub show_raw: bool,

    /// Indices of records at or above the injury threshold (cached).
    pub threshold_indices: Vec<usize>,

    /// Coordinates of the threshold view (cached).
    pub threshold_coords: Vec<[f64; 2]>,

    /// Indices of records in the selected hour (cached).
    pub hour_indices: Vec<usize>,

    /// Per-minute collision counts for the selected hour (cached).
    pub minute_counts: [u32; 60],

    /// Ranked streets for the selected category (cached).
    pub top_streets: Vec<StreetRanking>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            injured_threshold: 0,
            hour: 0,
            category: InjuryCategory::Pedestrians,
            show_raw: false,
            threshold_indices: Vec::new(),
            threshold_coords: Vec::new(),
            hour_indices: Vec::new(),
            minute_counts: [0; 60],
            top_streets: Vec::new(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and compute the initial views.
    pub fn set_dataset(&mut self, dataset: Arc<CollisionDataset>) {
        self.dataset = Some(dataset);
        self.recompute_views();
        self.status_message = None;
        self.loading = false;
    }

    /// Re-evaluate every cached view against the current parameters.
    pub fn recompute_views(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.threshold_indices.clear();
            self.threshold_coords.clear();
            self.hour_indices.clear();
            self.minute_counts = [0; 60];
            self.top_streets.clear();
            return;
        };

        self.threshold_indices = views::threshold_indices(dataset, self.injured_threshold);
        self.threshold_coords = views::injury_threshold_coords(dataset, self.injured_threshold);
        self.hour_indices = views::hour_indices(dataset, self.hour);
        self.minute_counts = views::minute_histogram(dataset, &self.hour_indices);
        self.top_streets = views::top_streets(dataset, self.category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CollisionRecord;
    use chrono::NaiveDate;

    fn dataset() -> Arc<CollisionDataset> {
        let records = (0..4)
            .map(|i| CollisionRecord {
                timestamp: NaiveDate::from_ymd_opt(2023, 6, 1)
                    .unwrap()
                    .and_hms_opt(8, i * 10, 0)
                    .unwrap(),
                latitude: 40.7,
                longitude: -73.9,
                injured_persons: Some(i),
                injured_pedestrians: Some(1),
                injured_cyclists: None,
                injured_motorists: None,
                on_street_name: Some(format!("STREET {i}")),
            })
            .collect();
        Arc::new(CollisionDataset { records })
    }

    #[test]
    fn test_set_dataset_computes_views() {
        let mut state = AppState::default();
        state.hour = 8;
        state.set_dataset(dataset());

        assert_eq!(state.threshold_coords.len(), 4);
        assert_eq!(state.hour_indices.len(), 4);
        assert_eq!(state.minute_counts.iter().sum::<u32>(), 4);
        assert_eq!(state.top_streets.len(), 3);
    }

    #[test]
    fn test_parameter_change_recompute() {
        let mut state = AppState::default();
        state.hour = 8;
        state.set_dataset(dataset());

        state.injured_threshold = 2;
        state.hour = 12;
        state.recompute_views();

        assert_eq!(state.threshold_coords.len(), 2);
        assert!(state.hour_indices.is_empty());
        assert_eq!(state.minute_counts, [0; 60]);
    }
}
