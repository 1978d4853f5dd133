const COMPONENTS_SEGMENT: &str = "components";
const LOCALE_SUFFIX: &str = "-cn";

/// Extracts `<name>` from a documentation path of the form
/// `/components/<name>/...`, dropping the `-cn` suffix of localized pages.
#[must_use]
pub fn resolve_component_name(pathname: &str) -> Option<String> {
    let path = pathname.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    segments.find(|s| *s == COMPONENTS_SEGMENT)?;
    let segment = segments.next()?;
    let name = segment.strip_suffix(LOCALE_SUFFIX).unwrap_or(segment);

    (!name.is_empty()).then(|| name.to_string())
}

/// Key used to compare path segments with dataset keys: hyphens removed,
/// lowercased. `date-picker`, `DatePicker` and `datepicker` are equal.
#[must_use]
pub fn normalize_component_key(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
