use std::collections::{BTreeMap, HashSet};

use super::model::{CategoryCount, TrafficRecord};

/// Count rows per category.  Categories come out in ascending key order.
pub fn count_by<'a, T, F>(records: &'a [T], key: F) -> Vec<CategoryCount>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in records {
        *counts.entry(key(rec)).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}

/// The `n` busiest stations, highest traffic first.
///
/// The sort is stable: stations with equal traffic keep their file order.
pub fn top_by_traffic(records: &[TrafficRecord], n: usize) -> Vec<TrafficRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.traffic.cmp(&a.traffic));
    sorted.truncate(n);
    sorted
}

/// The first `n` rows as read, whatever their traffic.
pub fn first_rows(records: &[TrafficRecord], n: usize) -> Vec<TrafficRecord> {
    records.iter().take(n).cloned().collect()
}

/// Sum traffic per city, cities in order of first appearance.
pub fn traffic_by_city(records: &[TrafficRecord]) -> Vec<(String, u64)> {
    let mut sums: Vec<(String, u64)> = Vec::new();
    for rec in records {
        match sums.iter_mut().find(|(city, _)| *city == rec.city) {
            Some((_, total)) => *total += rec.traffic,
            None => sums.push((rec.city.clone(), rec.traffic)),
        }
    }
    sums
}

/// Distinct values, in order of first appearance.
pub fn unique_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{GeoPoint, StationRecord};

    fn traffic(station: &str, network: &str, traffic: u64, city: &str) -> TrafficRecord {
        TrafficRecord {
            station: station.into(),
            network: network.into(),
            traffic,
            city: city.into(),
        }
    }

    fn station(name: &str, operator: &str, line: &str) -> StationRecord {
        StationRecord {
            name: name.into(),
            operator: operator.into(),
            line: line.into(),
            geo_point: "48.85, 2.35".into(),
            position: GeoPoint { lat: 48.85, lng: 2.35 },
        }
    }

    #[test]
    fn test_count_by_operator() {
        let stations = vec![
            station("a", "Y", "1"),
            station("b", "X", "1"),
            station("c", "Y", "2"),
            station("d", "X", "2"),
            station("e", "Y", "3"),
            station("f", "X", "3"),
            station("g", "Y", "3"),
            station("h", "Y", "1"),
        ];
        let counts = count_by(&stations, |s| s.operator.as_str());
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: "X".into(), count: 3 },
                CategoryCount { category: "Y".into(), count: 5 },
            ]
        );

        let by_line = count_by(&stations, |s| s.line.as_str());
        let total: usize = by_line.iter().map(|c| c.count).sum();
        assert_eq!(by_line.len(), 3);
        assert_eq!(total, stations.len());

        // Same input, same answer.
        assert_eq!(count_by(&stations, |s| s.operator.as_str()), counts);
    }

    #[test]
    fn test_count_by_empty() {
        let stations: Vec<StationRecord> = Vec::new();
        assert!(count_by(&stations, |s| s.line.as_str()).is_empty());
    }

    #[test]
    fn test_top_by_traffic_sorted_and_truncated() {
        let rows: Vec<TrafficRecord> = (0..15)
            .map(|i| traffic(&format!("S{i}"), "Métro", (i * 37 % 15) as u64, "Paris"))
            .collect();
        let top = top_by_traffic(&rows, 10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].traffic >= w[1].traffic));
        assert_eq!(top[0].traffic, 14);

        let few = top_by_traffic(&rows[..4], 10);
        assert_eq!(few.len(), 4);
    }

    #[test]
    fn test_top_by_traffic_ties_keep_file_order() {
        let rows = vec![
            traffic("A", "RER", 5, "Paris"),
            traffic("B", "RER", 9, "Paris"),
            traffic("C", "RER", 5, "Paris"),
        ];
        let names: Vec<_> = top_by_traffic(&rows, 3)
            .into_iter()
            .map(|r| r.station)
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_first_rows_ignores_traffic() {
        let rows = vec![
            traffic("A", "RER", 1, "Paris"),
            traffic("B", "RER", 100, "Paris"),
            traffic("C", "RER", 50, "Paris"),
        ];
        let first: Vec<_> = first_rows(&rows, 2).into_iter().map(|r| r.station).collect();
        assert_eq!(first, ["A", "B"]);
        assert_eq!(first_rows(&rows, 20).len(), 3);
    }

    #[test]
    fn test_traffic_by_city_sums_in_appearance_order() {
        let rows = vec![
            traffic("A", "RER", 10, "Paris"),
            traffic("B", "RER", 4, "Puteaux"),
            traffic("C", "RER", 6, "Paris"),
        ];
        assert_eq!(
            traffic_by_city(&rows),
            vec![("Paris".to_string(), 16), ("Puteaux".to_string(), 4)]
        );
    }

    #[test]
    fn test_unique_in_order() {
        let vals = ["RER", "Métro", "RER", "Train", "Métro"];
        assert_eq!(unique_in_order(vals), ["RER", "Métro", "Train"]);
    }
}
