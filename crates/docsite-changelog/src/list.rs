use docsite_core::{ChangelogEntry, Segment};
use serde::Serialize;
use tracing::debug;

use crate::image::{ImageAttrs, extract_image, is_image_fragment};
use crate::inline::tokenize;
use crate::refs::RefLink;

/// One rendered line of a version's changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Position of the source entry within the version's entries.
    pub entry_index: usize,
    pub segments: Vec<Segment>,
    pub refs: Vec<RefLink>,
    /// Screenshot taken from the entry that immediately follows this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttrs>,
}

impl ListItem {
    fn from_entry(entry_index: usize, entry: &ChangelogEntry) -> Self {
        Self {
            entry_index,
            segments: tokenize(&entry.changelog),
            refs: entry.refs.iter().map(RefLink::new).collect(),
            image: None,
        }
    }
}

/// Turns a version's entries into list items.
///
/// An entry whose text is only an `<img>` fragment is folded into the item
/// before it instead of being rendered on its own line. The lookahead is one
/// entry deep: after a merge the scan resumes two entries later.
#[must_use]
pub fn build_list_items(entries: &[ChangelogEntry]) -> Vec<ListItem> {
    let mut items = Vec::with_capacity(entries.len());
    let mut i = 0;

    while i < entries.len() {
        let mut item = ListItem::from_entry(i, &entries[i]);

        match entries.get(i + 1) {
            Some(next) if is_image_fragment(&next.changelog) => {
                let image = extract_image(&next.changelog).unwrap_or_else(|| {
                    debug!(
                        version = %next.version,
                        "image fragment without a complete <img> element"
                    );
                    ImageAttrs::default()
                });
                item.image = Some(image);
                i += 2;
            }
            _ => i += 1,
        }

        items.push(item);
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> ChangelogEntry {
        ChangelogEntry::new("1.0", text)
    }

    #[test]
    fn image_entry_is_merged_into_previous_item() {
        let entries = vec![entry("fix bug"), entry("<img src='x.png' alt='y'/>")];

        let items = build_list_items(&entries);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].entry_index, 0);
        assert_eq!(items[0].segments, vec![Segment::Text("fix bug".into())]);
        let image = items[0].image.as_ref().expect("image attached");
        assert_eq!(image.src, "x.png");
        assert_eq!(image.alt, "y");
        assert_eq!(image.width, "");
    }

    #[test]
    fn plain_entries_map_one_to_one() {
        let entries = vec![entry("a"), entry("b"), entry("c")];

        let items = build_list_items(&entries);

        let indices: Vec<_> = items.iter().map(|i| i.entry_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(items.iter().all(|i| i.image.is_none()));
    }

    #[test]
    fn merge_is_one_entry_deep() {
        let entries = vec![
            entry("text"),
            entry("<img src=\"1.png\">"),
            entry("<img src=\"2.png\">"),
            entry("<img src=\"3.png\">"),
        ];

        let items = build_list_items(&entries);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].entry_index, 0);
        assert_eq!(
            items[0].image.as_ref().map(|i| i.src.as_str()),
            Some("1.png")
        );
        assert_eq!(items[1].entry_index, 2);
        assert_eq!(
            items[1].image.as_ref().map(|i| i.src.as_str()),
            Some("3.png")
        );
    }

    #[test]
    fn image_merges_into_the_entry_right_before_it() {
        let entries = vec![entry("text"), entry("more"), entry("<img src=\"z.png\">")];

        let items = build_list_items(&entries);

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].entry_index, 1);
        assert_eq!(
            items[1].image.as_ref().map(|i| i.src.as_str()),
            Some("z.png")
        );
    }

    #[test]
    fn leading_image_entry_is_a_regular_item() {
        let entries = vec![entry("<img src=\"a.png\">"), entry("text")];

        let items = build_list_items(&entries);

        assert_eq!(items.len(), 2);
        assert!(items[0].image.is_none());
    }

    #[test]
    fn broken_image_fragment_yields_empty_placeholder() {
        let entries = vec![entry("text"), entry("<img src=\"broken.png\"")];

        let items = build_list_items(&entries);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].image, Some(ImageAttrs::default()));
    }

    #[test]
    fn refs_become_labelled_links() {
        let entries = vec![
            entry("fix").with_refs(["https://github.com/org/repo/pull/12"]),
        ];

        let items = build_list_items(&entries);

        assert_eq!(items[0].refs[0].label, "#12");
    }

    #[test]
    fn code_spans_are_tokenized() {
        let items = build_list_items(&[entry("Fix `Select` overflow")]);

        assert!(items[0].segments[1].is_code());
    }
}
