//! Rankings behind the two dashboard tables.
//!
//! The nationwide table ranks counties by question count; the second
//! table ranks fraud methods by the number of counties whose top5
//! mentions them (county appearances, not summed case counts).

use std::collections::HashMap;

use crate::dataset::FraudDataset;
use crate::severity::SeverityTier;

/// Rows shown in the left column of the desktop table layout.
pub const LEFT_COLUMN_ROWS: usize = 11;
/// Number of fraud methods kept in the cross-county table.
pub const TOP_TYPES_LEN: usize = 5;

/// One row of the nationwide county table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCounty {
    pub name: String,
    pub count: u32,
    pub tier: SeverityTier,
}

/// One row of the cross-county fraud-method table.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAppearance {
    pub type_name: String,
    /// Number of counties whose top5 contains this method.
    pub counties: u32,
}

/// All counties sorted descending by question count.
///
/// The dataset iterates name-ordered and the sort is stable, so ties
/// come out ascending by county name.
pub fn nationwide_ranking(dataset: &FraudDataset) -> Vec<RankedCounty> {
    let mut entries: Vec<RankedCounty> = dataset
        .counties()
        .map(|e| RankedCounty {
            name: e.name.clone(),
            count: e.count,
            tier: SeverityTier::for_count(e.count),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Split the ranking into the desktop layout's two columns: the first
/// [`LEFT_COLUMN_ROWS`] rows on the left, the remainder on the right.
pub fn split_columns(entries: &[RankedCounty]) -> (&[RankedCounty], &[RankedCounty]) {
    entries.split_at(entries.len().min(LEFT_COLUMN_ROWS))
}

/// Rank fraud methods by how many counties carry them in their top5.
///
/// Methods with an empty name are skipped. Ties keep first-seen order
/// (counties are visited name-ordered), capped at [`TOP_TYPES_LEN`].
pub fn type_appearance_ranking(dataset: &FraudDataset) -> Vec<TypeAppearance> {
    let mut ranked: Vec<TypeAppearance> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in dataset.counties() {
        for stat in &entry.top5 {
            if stat.type_name.is_empty() {
                continue;
            }
            match index.get(&stat.type_name) {
                Some(&i) => ranked[i].counties += 1,
                None => {
                    index.insert(stat.type_name.clone(), ranked.len());
                    ranked.push(TypeAppearance {
                        type_name: stat.type_name.clone(),
                        counties: 1,
                    });
                }
            }
        }
    }

    ranked.sort_by(|a, b| b.counties.cmp(&a.counties));
    ranked.truncate(TOP_TYPES_LEN);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{CountyRecord, FraudStat, FraudStatsPayload};

    fn dataset(records: Vec<(&str, u32, Vec<(&str, u32)>)>) -> FraudDataset {
        FraudDataset::from_payload(FraudStatsPayload {
            top5_types: Vec::new(),
            county_counts: records
                .into_iter()
                .map(|(county, count, top5)| CountyRecord {
                    county: Some(county.to_string()),
                    count,
                    top5: top5
                        .into_iter()
                        .map(|(t, c)| FraudStat {
                            type_name: t.to_string(),
                            count: c,
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    #[test]
    fn test_nationwide_ranking_descending() {
        // The worked example: A(5) with x in top5, B(9) with x in top5.
        let ds = dataset(vec![
            ("A", 5, vec![("x", 3)]),
            ("B", 9, vec![("x", 1)]),
        ]);
        let ranking = nationwide_ranking(&ds);
        let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(ranking[0].count, 9);
        assert_eq!(ranking[0].tier, SeverityTier::High);
        assert_eq!(ranking[1].tier, SeverityTier::Mid);
    }

    #[test]
    fn test_ranking_ties_break_by_name() {
        let ds = dataset(vec![
            ("c", 4, vec![]),
            ("a", 4, vec![]),
            ("b", 8, vec![]),
        ]);
        let names: Vec<String> = nationwide_ranking(&ds)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let ds = dataset(vec![("A", 5, vec![("x", 3)]), ("B", 9, vec![])]);
        assert_eq!(nationwide_ranking(&ds), nationwide_ranking(&ds));
    }

    #[test]
    fn test_split_columns_at_eleven() {
        let ds = FraudDataset::from_payload(FraudStatsPayload {
            top5_types: Vec::new(),
            county_counts: (0..14)
                .map(|i| CountyRecord {
                    county: Some(format!("c{i:02}")),
                    count: i,
                    top5: Vec::new(),
                })
                .collect(),
        });
        let ranking = nationwide_ranking(&ds);
        let (left, right) = split_columns(&ranking);
        assert_eq!(left.len(), LEFT_COLUMN_ROWS);
        assert_eq!(right.len(), 3);
    }

    #[test]
    fn test_split_columns_short_list() {
        let ds = dataset(vec![("A", 1, vec![]), ("B", 2, vec![])]);
        let ranking = nationwide_ranking(&ds);
        let (left, right) = split_columns(&ranking);
        assert_eq!(left.len(), 2);
        assert!(right.is_empty());
    }

    #[test]
    fn test_type_appearances_count_counties_not_cases() {
        // x appears in both counties' top5 with very different case
        // counts; the appearance table must show 2, not 4.
        let ds = dataset(vec![
            ("A", 5, vec![("x", 3)]),
            ("B", 9, vec![("x", 1)]),
        ]);
        let ranking = type_appearance_ranking(&ds);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].type_name, "x");
        assert_eq!(ranking[0].counties, 2);
    }

    #[test]
    fn test_type_appearances_truncate_to_five() {
        let ds = dataset(vec![
            (
                "A",
                1,
                vec![("t1", 1), ("t2", 1), ("t3", 1), ("t4", 1), ("t5", 1)],
            ),
            ("B", 1, vec![("t6", 1), ("t1", 1)]),
        ]);
        let ranking = type_appearance_ranking(&ds);
        assert_eq!(ranking.len(), TOP_TYPES_LEN);
        assert_eq!(ranking[0].type_name, "t1");
        assert_eq!(ranking[0].counties, 2);
    }

    #[test]
    fn test_type_appearances_skip_empty_names() {
        let ds = dataset(vec![("A", 1, vec![("", 5), ("x", 1)])]);
        let ranking = type_appearance_ranking(&ds);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].type_name, "x");
    }

    #[test]
    fn test_empty_dataset_yields_empty_tables() {
        let ds = FraudDataset::default();
        assert!(nationwide_ranking(&ds).is_empty());
        assert!(type_appearance_ranking(&ds).is_empty());
    }
}
