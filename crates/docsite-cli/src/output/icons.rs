use docsite_icons::CategoryMatches;

pub(crate) trait IconsFormatter {
    fn format_matches(&self, matches: &[CategoryMatches]) -> String;
}

pub(crate) struct PlainTextIconsFormatter;

impl IconsFormatter for PlainTextIconsFormatter {
    fn format_matches(&self, matches: &[CategoryMatches]) -> String {
        if matches.is_empty() {
            return "No icons found.\n".to_string();
        }

        let mut output = String::new();
        for (index, category) in matches.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            output.push_str(&format!("{} ({}):\n", category.category, category.icons.len()));
            for icon in &category.icons {
                output.push_str(&format!("  {icon}\n"));
            }
        }
        output
    }
}
