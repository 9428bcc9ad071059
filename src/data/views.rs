use chrono::Timelike;

use super::model::{CollisionDataset, CollisionRecord, InjuryCategory};

// ---------------------------------------------------------------------------
// Injury-threshold view
// ---------------------------------------------------------------------------

/// Indices of records with at least `min_injured` injured persons.
///
/// A record with no injured-persons count never passes the predicate:
/// missing is missing, not zero.
pub fn threshold_indices(dataset: &CollisionDataset, min_injured: u32) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.injured_persons.is_some_and(|n| n >= min_injured))
        .map(|(i, _)| i)
        .collect()
}

/// The (latitude, longitude) pairs of the threshold view. No ordering
/// guarantee beyond input order.
pub fn injury_threshold_coords(dataset: &CollisionDataset, min_injured: u32) -> Vec<[f64; 2]> {
    threshold_indices(dataset, min_injured)
        .into_iter()
        .map(|i| {
            let r = &dataset.records[i];
            [r.latitude, r.longitude]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Hourly breakdown view
// ---------------------------------------------------------------------------

/// Indices of records whose timestamp falls in hour `hour` (0–23).
pub fn hour_indices(dataset: &CollisionDataset, hour: u32) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.timestamp.hour() == hour)
        .map(|(i, _)| i)
        .collect()
}

/// 60-bucket histogram over minute-of-hour for the given record indices.
/// Bucket `m` counts records whose timestamp minute equals `m`; an empty
/// index list yields all zeros.
pub fn minute_histogram(dataset: &CollisionDataset, indices: &[usize]) -> [u32; 60] {
    let mut counts = [0u32; 60];
    for &i in indices {
        let minute = dataset.records[i].timestamp.minute() as usize;
        counts[minute] += 1;
    }
    counts
}

/// Mean latitude/longitude of the given records, for centering the hour
/// map. `None` when the set is empty instead of a NaN midpoint.
pub fn midpoint(dataset: &CollisionDataset, indices: &[usize]) -> Option<(f64, f64)> {
    if indices.is_empty() {
        return None;
    }
    let (mut lat_sum, mut lon_sum) = (0.0, 0.0);
    for &i in indices {
        lat_sum += dataset.records[i].latitude;
        lon_sum += dataset.records[i].longitude;
    }
    let n = indices.len() as f64;
    Some((lat_sum / n, lon_sum / n))
}

// ---------------------------------------------------------------------------
// Top streets per injury category
// ---------------------------------------------------------------------------

/// One row of the street ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetRanking {
    pub street: String,
    pub injured: u32,
}

/// Streets ranked by the category's injured count, descending.
///
/// Records with a zero/missing count or no street name are excluded; the
/// result is truncated to the category's limit. The sort is stable, so
/// equal counts keep their input order.
pub fn top_streets(dataset: &CollisionDataset, category: InjuryCategory) -> Vec<StreetRanking> {
    let mut rows: Vec<StreetRanking> = dataset
        .records
        .iter()
        .filter_map(|r| {
            let injured = category.count_in(r).filter(|&n| n >= 1)?;
            let street = r.on_street_name.clone()?;
            Some(StreetRanking { street, injured })
        })
        .collect();

    rows.sort_by(|a, b| b.injured.cmp(&a.injured));
    rows.truncate(category.result_limit());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        hour: u32,
        minute: u32,
        injured: Option<u32>,
        street: Option<&str>,
    ) -> CollisionRecord {
        CollisionRecord {
            timestamp: NaiveDate::from_ymd_opt(2023, 6, 1)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
            latitude: 40.7,
            longitude: -73.9,
            injured_persons: injured,
            injured_pedestrians: None,
            injured_cyclists: None,
            injured_motorists: None,
            on_street_name: street.map(str::to_owned),
        }
    }

    fn dataset(records: Vec<CollisionRecord>) -> CollisionDataset {
        CollisionDataset { records }
    }

    #[test]
    fn test_threshold_zero_returns_everything_with_counts() {
        let ds = dataset(vec![
            record(8, 0, Some(0), None),
            record(9, 0, Some(3), None),
        ]);

        assert_eq!(injury_threshold_coords(&ds, 0).len(), 2);
    }

    #[test]
    fn test_threshold_above_all_counts_is_empty() {
        let ds = dataset(vec![
            record(8, 0, Some(0), None),
            record(9, 0, Some(3), None),
        ]);

        assert!(injury_threshold_coords(&ds, 30).is_empty());
    }

    #[test]
    fn test_missing_count_never_passes_threshold() {
        let ds = dataset(vec![record(8, 0, None, None)]);

        assert!(threshold_indices(&ds, 0).is_empty());
    }

    #[test]
    fn test_raising_threshold_shrinks_the_view() {
        let ds = dataset(vec![
            record(8, 0, Some(0), None),
            record(9, 0, Some(1), None),
            record(10, 0, Some(2), None),
            record(11, 0, Some(5), None),
        ]);

        // for every T1 <= T2 the T2 view is a subset of the T1 view
        for t1 in 0..6u32 {
            for t2 in t1..6u32 {
                let wide = threshold_indices(&ds, t1);
                let narrow = threshold_indices(&ds, t2);
                assert!(narrow.iter().all(|i| wide.contains(i)));
            }
        }
    }

    #[test]
    fn test_histogram_counts_match_worked_example() {
        // records at 8:15, 8:15, 8:42
        let ds = dataset(vec![
            record(8, 15, Some(0), None),
            record(8, 15, Some(0), None),
            record(8, 42, Some(0), None),
            record(9, 15, Some(0), None),
        ]);

        let in_hour = hour_indices(&ds, 8);
        let hist = minute_histogram(&ds, &in_hour);

        assert_eq!(hist[15], 2);
        assert_eq!(hist[42], 1);
        assert_eq!(hist.iter().sum::<u32>(), in_hour.len() as u32);
        assert_eq!(in_hour.len(), 3);
    }

    #[test]
    fn test_empty_hour_is_sixty_zeros() {
        let ds = dataset(vec![record(8, 15, Some(0), None)]);

        let in_hour = hour_indices(&ds, 3);
        assert!(in_hour.is_empty());

        let hist = minute_histogram(&ds, &in_hour);
        assert_eq!(hist, [0u32; 60]);
    }

    #[test]
    fn test_midpoint_is_coordinate_mean() {
        let mut a = record(8, 0, Some(0), None);
        a.latitude = 40.0;
        a.longitude = -74.0;
        let mut b = record(8, 30, Some(0), None);
        b.latitude = 41.0;
        b.longitude = -73.0;
        let ds = dataset(vec![a, b]);

        let in_hour = hour_indices(&ds, 8);
        let (lat, lon) = midpoint(&ds, &in_hour).unwrap();
        assert!((lat - 40.5).abs() < 1e-9);
        assert!((lon - -73.5).abs() < 1e-9);

        assert_eq!(midpoint(&ds, &[]), None);
    }

    fn pedestrian_record(injured: u32, street: Option<&str>) -> CollisionRecord {
        let mut r = record(12, 0, Some(injured), street);
        r.injured_pedestrians = Some(injured);
        r
    }

    #[test]
    fn test_top_streets_excludes_zero_and_unnamed() {
        let ds = dataset(vec![
            pedestrian_record(0, Some("FLATBUSH AVENUE")),
            pedestrian_record(2, None),
            pedestrian_record(3, Some("BROADWAY")),
        ]);

        let ranking = top_streets(&ds, InjuryCategory::Pedestrians);
        assert_eq!(
            ranking,
            vec![StreetRanking {
                street: "BROADWAY".to_string(),
                injured: 3,
            }]
        );
    }

    #[test]
    fn test_top_streets_sorted_descending_and_limited() {
        let streets = ["A", "B", "C", "D", "E", "F"];
        let ds = dataset(
            streets
                .iter()
                .enumerate()
                .map(|(i, s)| pedestrian_record(i as u32 + 1, Some(s)))
                .collect(),
        );

        let ranking = top_streets(&ds, InjuryCategory::Pedestrians);
        assert_eq!(ranking.len(), 3);
        assert!(ranking.windows(2).all(|w| w[0].injured >= w[1].injured));
        assert_eq!(ranking[0].street, "F");
    }

    #[test]
    fn test_top_streets_limit_follows_category() {
        let records: Vec<CollisionRecord> = (0..12)
            .map(|i| {
                let mut r = record(12, 0, Some(1), Some(&format!("STREET {i}")));
                r.injured_pedestrians = Some(1);
                r.injured_cyclists = Some(1);
                r.injured_motorists = Some(1);
                r
            })
            .collect();
        let ds = dataset(records);

        assert_eq!(top_streets(&ds, InjuryCategory::Pedestrians).len(), 3);
        assert_eq!(top_streets(&ds, InjuryCategory::Cyclists).len(), 5);
        assert_eq!(top_streets(&ds, InjuryCategory::Motorists).len(), 9);
    }

    #[test]
    fn test_top_streets_ties_keep_input_order() {
        let ds = dataset(vec![
            pedestrian_record(2, Some("FIRST")),
            pedestrian_record(2, Some("SECOND")),
            pedestrian_record(2, Some("THIRD")),
        ]);

        let ranking = top_streets(&ds, InjuryCategory::Pedestrians);
        let names: Vec<&str> = ranking.iter().map(|r| r.street.as_str()).collect();
        assert_eq!(names, vec!["FIRST", "SECOND", "THIRD"]);
    }
}
