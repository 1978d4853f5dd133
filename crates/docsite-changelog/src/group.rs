use docsite_core::{ChangelogEntry, ChangelogGroup};
use indexmap::IndexMap;

/// Partitions entries by version. Groups appear in the order their version is
/// first seen; entries keep their relative order inside a group even when
/// other versions are interleaved with them.
#[must_use]
pub fn group_by_version(entries: &[ChangelogEntry]) -> Vec<ChangelogGroup> {
    let mut groups: IndexMap<&str, Vec<ChangelogEntry>> = IndexMap::new();

    for entry in entries {
        groups
            .entry(entry.version.as_str())
            .or_default()
            .push(entry.clone());
    }

    groups
        .into_iter()
        .map(|(version, entries)| ChangelogGroup {
            version: version.to_string(),
            entries,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_first_seen_order() {
        let entries = vec![
            ChangelogEntry::new("1.0", "first"),
            ChangelogEntry::new("2.0", "second"),
            ChangelogEntry::new("1.0", "third"),
        ];

        let groups = group_by_version(&entries);

        let versions: Vec<_> = groups.iter().map(|g| g.version.as_str()).collect();
        assert_eq!(versions, vec!["1.0", "2.0"]);

        let texts: Vec<_> = groups[0].entries.iter().map(|e| e.changelog.as_str()).collect();
        assert_eq!(texts, vec!["first", "third"]);
    }

    #[test]
    fn order_is_not_sorted_by_version() {
        let entries = vec![
            ChangelogEntry::new("10.0.0", "a"),
            ChangelogEntry::new("9.0.0", "b"),
            ChangelogEntry::new("2", "c"),
        ];

        let versions: Vec<_> = group_by_version(&entries)
            .into_iter()
            .map(|g| g.version)
            .collect();

        assert_eq!(versions, vec!["10.0.0", "9.0.0", "2"]);
    }

    #[test]
    fn every_entry_lands_in_exactly_one_group() {
        let entries = vec![
            ChangelogEntry::new("5.1.0", "a"),
            ChangelogEntry::new("5.0.1", "b"),
            ChangelogEntry::new("5.1.0", "c"),
            ChangelogEntry::new("5.0.0", "d"),
            ChangelogEntry::new("5.0.1", "e"),
        ];

        let groups = group_by_version(&entries);

        let total: usize = groups.iter().map(|g| g.entries.len()).sum();
        assert_eq!(total, entries.len());
        assert!(
            groups
                .iter()
                .all(|g| g.entries.iter().all(|e| e.version == g.version))
        );
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_version(&[]).is_empty());
    }
}
