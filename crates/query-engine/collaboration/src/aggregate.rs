//! Count how often pairs of distinct attribute values appear together on a submission.

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use crate::record::{AuthorRecord, CollaborationType};

/// How many times a pair of attribute values collaborated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationCount {
    /// The canonical pair key, see [`pair_key`].
    pub pair: String,
    pub count: u64,
}

impl CollaborationCount {
    /// `{ <collaboration type>: pair, "value": count }`
    pub fn to_row(&self, collaboration_type: &CollaborationType) -> Map<String, Value> {
        let mut row = Map::new();
        row.insert(
            collaboration_type.name().to_string(),
            Value::String(self.pair.clone()),
        );
        row.insert("value".to_string(), Value::from(self.count));
        row
    }
}

/// The two values sorted and joined with a hyphen, so `(a, b)` and `(b, a)`
/// share a key.
pub fn pair_key(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    format!("{first}-{second}")
}

/// Count collaborations between the attribute values of authors sharing a
/// submission.
///
/// Values are deduplicated per submission: an author whose value was already
/// seen on the submission adds no pairs. The result is sorted by count,
/// highest first; equal counts keep the order in which their pair was first
/// seen. `None` records (nothing to aggregate) yield `None`.
pub fn aggregate(
    records: Option<&[AuthorRecord]>,
    collaboration_type: &CollaborationType,
) -> Option<Vec<CollaborationCount>> {
    let records = records?;

    let mut values_by_submission: IndexMap<&str, IndexSet<&str>> = IndexMap::new();
    let mut counts: IndexMap<String, u64> = IndexMap::new();

    for record in records {
        let value = collaboration_type.attribute(record);
        match values_by_submission.entry(record.submission_id.as_str()) {
            // the first author of a submission has nobody to collaborate with yet
            Entry::Vacant(entry) => {
                entry.insert(IndexSet::from([value]));
            }
            Entry::Occupied(mut entry) => {
                let values = entry.get_mut();
                if values.contains(value) {
                    continue;
                }
                for existing in values.iter() {
                    *counts.entry(pair_key(existing, value)).or_insert(0) += 1;
                }
                values.insert(value);
            }
        }
    }

    let mut counts: Vec<CollaborationCount> = counts
        .into_iter()
        .map(|(pair, count)| CollaborationCount { pair, count })
        .collect();
    // stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Some(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn author(submission_id: &str, country: &str) -> AuthorRecord {
        AuthorRecord {
            submission_id: submission_id.to_string(),
            country: country.to_string(),
            organisation: String::new(),
        }
    }

    fn counts(records: &[AuthorRecord]) -> Vec<(String, u64)> {
        aggregate(Some(records), &CollaborationType::Country)
            .unwrap()
            .into_iter()
            .map(|c| (c.pair, c.count))
            .collect()
    }

    #[test]
    fn pair_keys_are_commutative() {
        assert_eq!(pair_key("US", "SG"), pair_key("SG", "US"));
        assert_eq!(pair_key("US", "SG"), "SG-US");
    }

    #[test]
    fn repeated_values_on_a_submission_add_no_pairs() {
        let records = [author("1", "SG"), author("1", "US"), author("1", "SG")];
        assert_eq!(counts(&records), vec![("SG-US".to_string(), 1)]);
    }

    #[test]
    fn counts_add_up_across_submissions() {
        let records = [
            author("1", "SG"),
            author("1", "US"),
            author("2", "CN"),
            author("2", "JP"),
            author("3", "US"),
            author("3", "SG"),
        ];
        assert_eq!(
            counts(&records),
            vec![("SG-US".to_string(), 2), ("CN-JP".to_string(), 1)]
        );
    }

    #[test]
    fn a_new_value_pairs_with_every_value_already_seen() {
        let records = [author("1", "SG"), author("1", "US"), author("1", "CN")];
        assert_eq!(
            counts(&records),
            vec![
                ("SG-US".to_string(), 1),
                ("CN-SG".to_string(), 1),
                ("CN-US".to_string(), 1),
            ]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = [
            author("1", "B"),
            author("1", "C"),
            author("2", "A"),
            author("2", "B"),
            author("3", "A"),
            author("3", "B"),
            author("4", "B"),
            author("4", "C"),
        ];
        assert_eq!(
            counts(&records),
            vec![("B-C".to_string(), 2), ("A-B".to_string(), 2)]
        );
    }

    #[test]
    fn a_single_value_submission_contributes_nothing() {
        let records = [author("1", "SG"), author("1", "SG"), author("1", "SG")];
        assert!(counts(&records).is_empty());
    }

    #[test]
    fn empty_values_pair_like_any_other() {
        let records = [author("1", ""), author("1", "SG")];
        assert_eq!(counts(&records), vec![("-SG".to_string(), 1)]);
    }

    #[test]
    fn unrecognized_type_collapses_every_value() {
        let records = [author("1", "SG"), author("1", "US")];
        let result = aggregate(Some(&records[..]), &CollaborationType::from("continent")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn unavailable_records_are_not_an_empty_result() {
        assert_eq!(aggregate(None, &CollaborationType::Country), None);
        let no_records: [AuthorRecord; 0] = [];
        assert_eq!(
            aggregate(Some(&no_records[..]), &CollaborationType::Country),
            Some(Vec::new())
        );
    }

    #[test]
    fn rows_are_keyed_by_collaboration_type() {
        let count = CollaborationCount {
            pair: "A*STAR-NUS".to_string(),
            count: 4,
        };
        let row = count.to_row(&CollaborationType::Organization);
        assert_eq!(
            serde_json::Value::Object(row),
            serde_json::json!({ "organization": "A*STAR-NUS", "value": 4 })
        );
    }
}
