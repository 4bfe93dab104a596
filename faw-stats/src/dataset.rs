//! The normalized per-county statistics map.
//!
//! `FraudDataset` is built exactly once per page load from the raw
//! backend payload and read by every renderer afterwards. The single
//! mutation allowed later is `ensure()`, which inserts a zero-value
//! placeholder when the map selects a county the payload never
//! mentioned.

use std::collections::BTreeMap;

use crate::payload::{FraudStat, FraudStatsPayload};

/// Maximum number of fraud methods kept per county.
pub const TOP5_LEN: usize = 5;

/// Per-county aggregate: total question count plus the county's most
/// frequent fraud methods, sorted descending and capped at [`TOP5_LEN`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountyEntry {
    pub name: String,
    pub count: u32,
    pub top5: Vec<FraudStat>,
}

impl CountyEntry {
    /// Placeholder entry for a county absent from the payload.
    pub fn zero(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 0,
            top5: Vec::new(),
        }
    }
}

/// County-name-keyed statistics map.
///
/// Keyed iteration is name-ordered, which makes every downstream ranking
/// deterministic without further tie-breaking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FraudDataset {
    counties: BTreeMap<String, CountyEntry>,
}

impl FraudDataset {
    /// Normalize the raw payload.
    ///
    /// Records without a county name are dropped. Each county's `top5`
    /// is sorted descending by count (stable, so payload order breaks
    /// ties) and truncated to [`TOP5_LEN`].
    pub fn from_payload(payload: FraudStatsPayload) -> Self {
        let mut counties = BTreeMap::new();
        for record in payload.county_counts {
            let Some(name) = record.county.filter(|n| !n.is_empty()) else {
                log::debug!("dropping county record without a name");
                continue;
            };
            let mut top5 = record.top5;
            top5.sort_by(|a, b| b.count.cmp(&a.count));
            top5.truncate(TOP5_LEN);
            counties.insert(
                name.clone(),
                CountyEntry {
                    name,
                    count: record.count,
                    top5,
                },
            );
        }
        Self { counties }
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counties.len()
    }

    pub fn get(&self, name: &str) -> Option<&CountyEntry> {
        self.counties.get(name)
    }

    /// Question count for a county, zero when unknown.
    pub fn count_for(&self, name: &str) -> u32 {
        self.counties.get(name).map(|e| e.count).unwrap_or(0)
    }

    /// Fetch a county's entry, lazily inserting a zero-value placeholder
    /// when the county never appeared in the payload.
    pub fn ensure(&mut self, name: &str) -> &CountyEntry {
        self.counties
            .entry(name.to_string())
            .or_insert_with(|| CountyEntry::zero(name))
    }

    /// Name-ordered iteration over all county entries.
    pub fn counties(&self) -> impl Iterator<Item = &CountyEntry> {
        self.counties.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::CountyRecord;

    fn stat(type_name: &str, count: u32) -> FraudStat {
        FraudStat {
            type_name: type_name.to_string(),
            count,
        }
    }

    fn record(county: Option<&str>, count: u32, top5: Vec<FraudStat>) -> CountyRecord {
        CountyRecord {
            county: county.map(|c| c.to_string()),
            count,
            top5,
        }
    }

    #[test]
    fn test_from_payload_drops_nameless_records() {
        let payload = FraudStatsPayload {
            top5_types: Vec::new(),
            county_counts: vec![
                record(Some("臺北市"), 5, Vec::new()),
                record(None, 9, Vec::new()),
                record(Some(""), 2, Vec::new()),
            ],
        };
        let dataset = FraudDataset::from_payload(payload);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.count_for("臺北市"), 5);
    }

    #[test]
    fn test_top5_sorted_and_truncated() {
        let payload = FraudStatsPayload {
            top5_types: Vec::new(),
            county_counts: vec![record(
                Some("高雄市"),
                20,
                vec![
                    stat("a", 1),
                    stat("b", 9),
                    stat("c", 4),
                    stat("d", 9),
                    stat("e", 2),
                    stat("f", 7),
                ],
            )],
        };
        let dataset = FraudDataset::from_payload(payload);
        let entry = dataset.get("高雄市").unwrap();
        assert_eq!(entry.top5.len(), TOP5_LEN);
        let counts: Vec<u32> = entry.top5.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![9, 9, 7, 4, 2]);
        // Stable sort: the tie between b and d keeps payload order.
        assert_eq!(entry.top5[0].type_name, "b");
        assert_eq!(entry.top5[1].type_name, "d");
    }

    #[test]
    fn test_missing_top5_defaults_to_empty() {
        let payload = FraudStatsPayload {
            top5_types: Vec::new(),
            county_counts: vec![record(Some("基隆市"), 3, Vec::new())],
        };
        let dataset = FraudDataset::from_payload(payload);
        assert!(dataset.get("基隆市").unwrap().top5.is_empty());
    }

    #[test]
    fn test_ensure_inserts_zero_entry() {
        let mut dataset = FraudDataset::default();
        let entry = dataset.ensure("連江縣");
        assert_eq!(entry.count, 0);
        assert!(entry.top5.is_empty());
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_ensure_leaves_existing_entry_untouched() {
        let payload = FraudStatsPayload {
            top5_types: Vec::new(),
            county_counts: vec![record(Some("宜蘭縣"), 6, vec![stat("x", 2)])],
        };
        let mut dataset = FraudDataset::from_payload(payload);
        let entry = dataset.ensure("宜蘭縣");
        assert_eq!(entry.count, 6);
        assert_eq!(entry.top5.len(), 1);
    }

    #[test]
    fn test_counties_iterate_name_ordered() {
        let payload = FraudStatsPayload {
            top5_types: Vec::new(),
            county_counts: vec![
                record(Some("b"), 1, Vec::new()),
                record(Some("a"), 2, Vec::new()),
                record(Some("c"), 3, Vec::new()),
            ],
        };
        let dataset = FraudDataset::from_payload(payload);
        let names: Vec<&str> = dataset.counties().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
