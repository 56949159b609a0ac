//! Query/projection layer: the grouped, ordered view the client renders.
//!
//! A pure function of (full record set, filter criteria). No side effects and
//! no hidden state, so it is safe to recompute on every render and its output
//! is deterministic for identical inputs.
//!
//! Policy:
//!
//! 1. Keep records matching the filter (search AND size membership).
//! 2. Partition by `color`; order groups lexicographically by color.
//! 3. Within a group, order by canonical size rank (XS through XXL,
//!    case-insensitive). Unenumerated sizes sort after every enumerated one,
//!    ties among them breaking on the raw size string. The sort is stable:
//!    records with equal keys keep their original relative order.
//! 4. Expose the per-group quantity sum for display badges; it is computed
//!    here, never stored.

use crate::record::{ShirtRecord, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Client-supplied filter criteria.
///
/// A record passes iff it matches the search text AND the size set; the two
/// criteria are independent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Case-insensitive substring match against `color` OR `size`.
    /// Empty means "match everything".
    pub search: String,
    /// If non-empty, the record's size must be a member (exact match).
    pub sizes: Vec<String>,
}

impl Filter {
    /// Does this record pass the filter?
    #[must_use]
    pub fn matches(&self, record: &ShirtRecord) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || record.color.to_lowercase().contains(&needle)
            || record.size.to_lowercase().contains(&needle);

        let matches_size = self.sizes.is_empty() || self.sizes.contains(&record.size);

        matches_search && matches_size
    }
}

/// One color partition of the projected view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    /// The group's color label.
    pub color: String,
    /// Sum of quantities across the group's records.
    pub total_quantity: i64,
    /// The group's records, ordered by size rank.
    pub records: Vec<ShirtRecord>,
}

/// The full projected view plus the counts the filter summary line shows
/// ("Showing N of M").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Color groups, ordered lexicographically by color.
    pub groups: Vec<ColorGroup>,
    /// Number of records that passed the filter.
    pub visible: usize,
    /// Number of records before filtering.
    pub total: usize,
}

impl Projection {
    /// Computes the projection of `records` under `filter`.
    #[must_use]
    pub fn compute(records: &[ShirtRecord], filter: &Filter) -> Self {
        let total = records.len();

        // BTreeMap gives the lexicographic group order for free. Insertion
        // order within each group preserves the input's relative order, which
        // the stable sort below relies on.
        let mut by_color: BTreeMap<&str, Vec<&ShirtRecord>> = BTreeMap::new();
        for record in records.iter().filter(|r| filter.matches(r)) {
            by_color.entry(&record.color).or_default().push(record);
        }

        let mut visible = 0;
        let groups = by_color
            .into_values()
            .map(|group| {
                visible += group.len();
                build_group(&group)
            })
            .collect();

        Self {
            groups,
            visible,
            total,
        }
    }
}

fn build_group(members: &[&ShirtRecord]) -> ColorGroup {
    let mut records: Vec<ShirtRecord> = members.iter().copied().cloned().collect();
    records.sort_by(|a, b| size_key(&a.size).cmp(&size_key(&b.size)));

    ColorGroup {
        // Non-empty by construction: a group only exists because a record
        // carried this color.
        color: records.first().map(|r| r.color.clone()).unwrap_or_default(),
        total_quantity: records.iter().map(|r| i64::from(r.quantity)).sum(),
        records,
    }
}

/// Sort key for the in-group ordering.
///
/// Enumerated sizes compare by rank alone; unenumerated ones all share the
/// past-the-end rank and fall back to the raw label. `None < Some(_)` keeps
/// enumerated sizes from ever comparing on the label.
fn size_key(size: &str) -> (u8, Option<&str>) {
    // Rank 6 is past the end of the enumerated scale.
    Size::parse(size).map_or((6, Some(size)), |s| (s.rank(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordId, ShirtRecord};

    fn record(size: &str, color: &str, quantity: i32) -> ShirtRecord {
        ShirtRecord {
            id: RecordId::new(),
            size: size.to_string(),
            color: color.to_string(),
            quantity,
        }
    }

    fn sizes_of(group: &ColorGroup) -> Vec<&str> {
        group.records.iter().map(|r| r.size.as_str()).collect()
    }

    #[test]
    fn groups_are_ordered_by_color() {
        let records = vec![
            record("M", "Red", 1),
            record("M", "Blue", 1),
            record("M", "Green", 1),
        ];
        let projection = Projection::compute(&records, &Filter::default());
        let colors: Vec<&str> = projection.groups.iter().map(|g| g.color.as_str()).collect();
        assert_eq!(colors, vec!["Blue", "Green", "Red"]);
    }

    #[test]
    fn sizes_follow_the_canonical_rank() {
        let records = vec![
            record("XL", "Red", 1),
            record("XS", "Red", 1),
            record("M", "Red", 1),
        ];
        let projection = Projection::compute(&records, &Filter::default());
        assert_eq!(sizes_of(&projection.groups[0]), vec!["XS", "M", "XL"]);
    }

    #[test]
    fn size_rank_is_case_insensitive() {
        let records = vec![record("xl", "Red", 1), record("Xs", "Red", 1)];
        let projection = Projection::compute(&records, &Filter::default());
        assert_eq!(sizes_of(&projection.groups[0]), vec!["Xs", "xl"]);
    }

    #[test]
    fn unenumerated_sizes_sort_after_enumerated() {
        let records = vec![
            record("3XL", "Red", 1),
            record("M", "Red", 1),
            record("4XL", "Red", 1),
            record("XXL", "Red", 1),
        ];
        let projection = Projection::compute(&records, &Filter::default());
        assert_eq!(sizes_of(&projection.groups[0]), vec!["M", "XXL", "3XL", "4XL"]);
    }

    #[test]
    fn equal_ranks_keep_original_order() {
        let a = record("M", "Red", 1);
        let b = record("M", "Red", 2);
        let c = record("M", "Red", 3);
        let records = vec![a.clone(), b.clone(), c.clone()];
        let projection = Projection::compute(&records, &Filter::default());
        let ids: Vec<_> = projection.groups[0].records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn group_total_sums_quantities() {
        let records = vec![
            record("S", "Red", 2),
            record("M", "Red", 3),
            record("S", "Blue", 10),
        ];
        let projection = Projection::compute(&records, &Filter::default());
        let red = projection.groups.iter().find(|g| g.color == "Red").unwrap();
        assert_eq!(red.total_quantity, 5);
    }

    #[test]
    fn search_matches_color_or_size_case_insensitively() {
        let records = vec![
            record("M", "Crimson Red", 1),
            record("XL", "Blue", 1),
            record("S", "Navy", 1),
        ];

        let by_color = Projection::compute(
            &records,
            &Filter {
                search: "crimson".to_string(),
                sizes: vec![],
            },
        );
        assert_eq!(by_color.visible, 1);
        assert_eq!(by_color.groups[0].color, "Crimson Red");

        let by_size = Projection::compute(
            &records,
            &Filter {
                search: "xl".to_string(),
                sizes: vec![],
            },
        );
        assert_eq!(by_size.visible, 1);
        assert_eq!(by_size.groups[0].color, "Blue");
    }

    #[test]
    fn search_and_size_filter_are_anded() {
        let records = vec![record("M", "Red", 1), record("L", "Red", 1)];
        let filter = Filter {
            search: "red".to_string(),
            sizes: vec!["L".to_string()],
        };
        let projection = Projection::compute(&records, &filter);
        assert_eq!(projection.visible, 1);
        assert_eq!(sizes_of(&projection.groups[0]), vec!["L"]);
    }

    #[test]
    fn empty_size_set_means_no_size_filter() {
        let records = vec![record("M", "Red", 1), record("L", "Blue", 1)];
        let projection = Projection::compute(&records, &Filter::default());
        assert_eq!(projection.visible, 2);
        assert_eq!(projection.total, 2);
    }

    #[test]
    fn projection_is_deterministic() {
        let records = vec![
            record("3XL", "Red", 1),
            record("M", "Blue", 4),
            record("XS", "Red", 2),
            record("M", "Red", 0),
        ];
        let filter = Filter {
            search: "r".to_string(),
            sizes: vec![],
        };
        let first = Projection::compute(&records, &filter);
        let second = Projection::compute(&records, &filter);
        assert_eq!(first, second);
    }
}
