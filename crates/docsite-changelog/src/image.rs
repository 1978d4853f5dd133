use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b([^>]*)>").expect("valid img tag regex"));

static IMG_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(?:^|\s)(src|alt|width)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#)
        .expect("valid img attribute regex")
});

/// Attributes of an image embedded in a changelog line. Missing attributes
/// are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ImageAttrs {
    pub src: String,
    pub alt: String,
    pub width: String,
}

/// Whether a changelog line is an image fragment rather than prose.
#[must_use]
pub fn is_image_fragment(changelog: &str) -> bool {
    changelog
        .trim_start()
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("<img"))
}

/// Pulls `src`, `alt` and `width` out of the first `<img>` element in
/// `fragment`. Returns `None` if there is no complete element.
#[must_use]
pub fn extract_image(fragment: &str) -> Option<ImageAttrs> {
    let tag = IMG_TAG.captures(fragment)?;
    let attributes = tag.get(1).map_or("", |m| m.as_str());

    let mut image = ImageAttrs::default();
    let mut seen = [false; 3];

    for caps in IMG_ATTR.captures_iter(attributes) {
        let Some(name) = caps.get(1) else { continue };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());

        let (slot, field) = match name.as_str().to_ascii_lowercase().as_str() {
            "src" => (0, &mut image.src),
            "alt" => (1, &mut image.alt),
            _ => (2, &mut image.width),
        };
        if !seen[slot] {
            seen[slot] = true;
            *field = value.to_string();
        }
    }

    Some(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_image_fragment_after_whitespace() {
        assert!(is_image_fragment("  <img src=\"a.png\" />"));
        assert!(is_image_fragment("<IMG src=\"a.png\">"));
    }

    #[test]
    fn prose_is_not_an_image_fragment() {
        assert!(!is_image_fragment("Fix <img> rendering"));
        assert!(!is_image_fragment("<im"));
        assert!(!is_image_fragment(""));
    }

    #[test]
    fn multibyte_prefix_does_not_panic() {
        assert!(!is_image_fragment("修复图片"));
    }

    #[test]
    fn extracts_single_quoted_attributes() {
        let image = extract_image("<img src='x.png' alt='y'/>").expect("has image");

        assert_eq!(image.src, "x.png");
        assert_eq!(image.alt, "y");
        assert_eq!(image.width, "");
    }

    #[test]
    fn extracts_double_quoted_and_unquoted_attributes() {
        let image =
            extract_image(r#"<img alt="demo" width=400 src="https://gw.example.com/a.png" />"#)
                .expect("has image");

        assert_eq!(image.src, "https://gw.example.com/a.png");
        assert_eq!(image.alt, "demo");
        assert_eq!(image.width, "400");
    }

    #[test]
    fn prefixed_attribute_names_are_ignored() {
        let image = extract_image(r#"<img data-src="lazy.png" src="real.png">"#).expect("has image");
        assert_eq!(image.src, "real.png");
    }

    #[test]
    fn first_occurrence_of_attribute_wins() {
        let image = extract_image(r#"<img src="one.png" src="two.png">"#).expect("has image");
        assert_eq!(image.src, "one.png");
    }

    #[test]
    fn unterminated_tag_has_no_image() {
        assert!(extract_image("<img src=\"x.png\"").is_none());
        assert!(extract_image("<imgx>").is_none());
    }

    #[test]
    fn element_without_attributes_has_empty_fields() {
        assert_eq!(extract_image("<img>"), Some(ImageAttrs::default()));
    }
}
