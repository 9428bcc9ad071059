use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// CollisionRecord – one row of the normalized dataset
// ---------------------------------------------------------------------------

/// A single collision event after load-time normalization.
///
/// Coordinates are guaranteed present and finite; rows missing either are
/// dropped by the loader. Injury counts stay `Option` because the source
/// data leaves them blank on some rows, and a blank is missing, not zero.
#[derive(Debug, Clone)]
pub struct CollisionRecord {
    /// Combined crash date + crash time.
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub injured_persons: Option<u32>,
    pub injured_pedestrians: Option<u32>,
    pub injured_cyclists: Option<u32>,
    pub injured_motorists: Option<u32>,
    /// Street the collision occurred on, if the row carries one.
    pub on_street_name: Option<String>,
}

// ---------------------------------------------------------------------------
// InjuryCategory – which injured-count column a view ranks by
// ---------------------------------------------------------------------------

/// The three injury categories the street ranking can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjuryCategory {
    Pedestrians,
    Cyclists,
    Motorists,
}

impl InjuryCategory {
    pub const ALL: [InjuryCategory; 3] = [
        InjuryCategory::Pedestrians,
        InjuryCategory::Cyclists,
        InjuryCategory::Motorists,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InjuryCategory::Pedestrians => "Pedestrians",
            InjuryCategory::Cyclists => "Cyclists",
            InjuryCategory::Motorists => "Motorists",
        }
    }

    /// The injured count this category ranks by.
    pub fn count_in(&self, record: &CollisionRecord) -> Option<u32> {
        match self {
            InjuryCategory::Pedestrians => record.injured_pedestrians,
            InjuryCategory::Cyclists => record.injured_cyclists,
            InjuryCategory::Motorists => record.injured_motorists,
        }
    }

    /// How many ranked streets this category shows. The per-category
    /// asymmetry (3/5/9) is inherited source behavior and kept as-is.
    pub fn result_limit(&self) -> usize {
        match self {
            InjuryCategory::Pedestrians => 3,
            InjuryCategory::Cyclists => 5,
            InjuryCategory::Motorists => 9,
        }
    }
}

// ---------------------------------------------------------------------------
// CollisionDataset – the complete loaded working set
// ---------------------------------------------------------------------------

/// The normalized working set. Immutable after load; views index into it.
#[derive(Debug, Clone)]
pub struct CollisionDataset {
    pub records: Vec<CollisionRecord>,
}

impl CollisionDataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_limits_are_asymmetric() {
        assert_eq!(InjuryCategory::Pedestrians.result_limit(), 3);
        assert_eq!(InjuryCategory::Cyclists.result_limit(), 5);
        assert_eq!(InjuryCategory::Motorists.result_limit(), 9);
    }

    #[test]
    fn test_category_count_accessor() {
        let record = CollisionRecord {
            timestamp: chrono::NaiveDate::from_ymd_opt(2023, 6, 1)
                .unwrap()
                .and_hms_opt(8, 15, 0)
                .unwrap(),
            latitude: 40.7,
            longitude: -73.9,
            injured_persons: Some(3),
            injured_pedestrians: Some(1),
            injured_cyclists: None,
            injured_motorists: Some(2),
            on_street_name: Some("BROADWAY".to_string()),
        };

        assert_eq!(InjuryCategory::Pedestrians.count_in(&record), Some(1));
        assert_eq!(InjuryCategory::Cyclists.count_in(&record), None);
        assert_eq!(InjuryCategory::Motorists.count_in(&record), Some(2));
    }
}
