use std::collections::{BTreeMap, HashMap};

use crate::entities::{EventStats, MonthCount, OfficialEvent, ProvinceCount};
use crate::value_objects::is_known_province;

pub fn summarize_events(events: &[OfficialEvent], pending_reports: usize) -> EventStats {
    let mut provinces: HashMap<&str, u64> = HashMap::new();
    let mut months: BTreeMap<String, u64> = BTreeMap::new();
    let mut stats = EventStats {
        total_events: events.len() as u64,
        pending_reports: pending_reports as u64,
        ..EventStats::default()
    };

    for event in events {
        stats.total_deaths += u64::from(event.casualties.deaths);
        stats.total_injuries += u64::from(event.casualties.injuries);
        stats.total_damaged_homes += u64::from(event.casualties.damaged_homes);
        if is_known_province(&event.province) {
            *provinces.entry(event.province.trim()).or_default() += 1;
        }
        *months
            .entry(event.date.format("%Y-%m").to_string())
            .or_default() += 1;
    }

    stats.provinces_affected = provinces.len() as u64;
    let mut by_province = provinces
        .into_iter()
        .map(|(province, events)| ProvinceCount {
            province: province.to_string(),
            events,
        })
        .collect::<Vec<_>>();
    by_province.sort_by(|a, b| b.events.cmp(&a.events).then_with(|| a.province.cmp(&b.province)));
    stats.by_province = by_province;
    stats.by_month = months
        .into_iter()
        .map(|(month, events)| MonthCount { month, events })
        .collect();
    stats
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::value_objects::{Casualties, EventId, GeoPoint};

    fn event(id: i64, date: &str, province: &str, deaths: u32) -> OfficialEvent {
        OfficialEvent {
            id: EventId(id),
            location: format!("Lokasi {}", id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
            point: GeoPoint::new(-6.0, 107.0),
            casualties: Casualties::new(deaths, 1, 2),
            description: None,
            source: "BNPB".to_string(),
            province: province.to_string(),
        }
    }

    #[test]
    fn summary_counts_totals_provinces_and_months() {
        let events = vec![
            event(1, "2024-01-10", "Jawa Barat", 1),
            event(2, "2024-01-22", "Jawa Barat", 3),
            event(3, "2023-05-01", "Sulawesi Selatan", 0),
            event(4, "2024-02-02", "N/A", 2),
        ];
        let stats = summarize_events(&events, 2);
        assert_eq!(stats.total_events, 4);
        assert_eq!(stats.total_deaths, 6);
        assert_eq!(stats.total_injuries, 4);
        assert_eq!(stats.total_damaged_homes, 8);
        assert_eq!(stats.provinces_affected, 2);
        assert_eq!(stats.pending_reports, 2);
        assert_eq!(stats.by_province[0].province, "Jawa Barat");
        assert_eq!(stats.by_province[0].events, 2);
        let months = stats
            .by_month
            .iter()
            .map(|m| (m.month.as_str(), m.events))
            .collect::<Vec<_>>();
        assert_eq!(months, vec![("2023-05", 1), ("2024-01", 2), ("2024-02", 1)]);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let stats = summarize_events(&[], 0);
        assert_eq!(stats, EventStats::default());
    }
}
