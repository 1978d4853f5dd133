use docsite_core::{ChangelogEntry, MatchResult};
use docsite_version::DeprecationTable;
use serde::Serialize;

use crate::group::group_by_version;
use crate::list::{ListItem, build_list_items};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGroup {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub deprecation: MatchResult,
    pub items: Vec<ListItem>,
}

/// Everything the changelog drawer shows for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub component: String,
    pub groups: Vec<TimelineGroup>,
}

impl Timeline {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[must_use]
pub fn build_timeline(
    component: &str,
    entries: &[ChangelogEntry],
    deprecations: &DeprecationTable,
) -> Timeline {
    let groups = group_by_version(entries)
        .into_iter()
        .map(|group| TimelineGroup {
            deprecation: deprecations.match_version(&group.version),
            release_date: group.entries.iter().find_map(|e| e.release_date.clone()),
            items: build_list_items(&group.entries),
            version: group.version,
        })
        .collect();

    Timeline {
        component: component.to_string(),
        groups,
    }
}
