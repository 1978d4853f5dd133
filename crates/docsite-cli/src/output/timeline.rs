use docsite_changelog::{ImageAttrs, ListItem, Timeline, TimelineGroup};
use docsite_core::Segment;

pub(crate) trait TimelineFormatter {
    fn format_timeline(&self, timeline: &Timeline) -> String;
}

pub(crate) struct PlainTextTimelineFormatter;

impl PlainTextTimelineFormatter {
    fn format_heading(output: &mut String, group: &TimelineGroup) {
        match &group.release_date {
            Some(date) => output.push_str(&format!("{} ({date})\n", group.version)),
            None => output.push_str(&format!("{}\n", group.version)),
        }
    }

    fn format_deprecation(output: &mut String, group: &TimelineGroup) {
        let Some(pattern) = &group.deprecation.matched_pattern else {
            return;
        };

        output.push_str(&format!(
            "  Warning: this version has known serious bugs (matches {pattern})\n"
        ));
        for reason in &group.deprecation.reasons {
            output.push_str(&format!("    - {reason}\n"));
        }
    }

    fn format_item(output: &mut String, item: &ListItem) {
        output.push_str("  - ");
        output.push_str(&Self::render_segments(&item.segments));

        if !item.refs.is_empty() {
            let labels: Vec<_> = item.refs.iter().map(|r| r.label.as_str()).collect();
            output.push_str(&format!(" ({})", labels.join(", ")));
        }
        output.push('\n');

        if let Some(image) = &item.image {
            output.push_str(&format!("    {}\n", Self::render_image(image)));
        }
    }

    fn render_segments(segments: &[Segment]) -> String {
        segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment {
                Segment::Text(text) => text.clone(),
                Segment::Code(code) => format!("`{code}`"),
            })
            .collect()
    }

    fn render_image(image: &ImageAttrs) -> String {
        let mut parts = vec![image.src.clone()];
        if !image.alt.is_empty() {
            parts.push(image.alt.clone());
        }
        if !image.width.is_empty() {
            parts.push(format!("width={}", image.width));
        }
        format!("[image: {}]", parts.join(" "))
    }
}

impl TimelineFormatter for PlainTextTimelineFormatter {
    fn format_timeline(&self, timeline: &Timeline) -> String {
        let mut output = String::new();

        output.push_str(&format!("Changelog for {}\n", timeline.component));

        for group in &timeline.groups {
            output.push('\n');
            Self::format_heading(&mut output, group);
            Self::format_deprecation(&mut output, group);
            for item in &group.items {
                Self::format_item(&mut output, item);
            }
        }

        output
    }
}
