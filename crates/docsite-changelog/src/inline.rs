use docsite_core::Segment;

const DELIMITER: char = '`';

/// Splits a changelog line into plain text and backtick-delimited code spans.
///
/// Every backtick closes the current segment, even when that segment is empty,
/// so the output mirrors the structure of the input. Whatever follows the last
/// backtick is plain text, including the body of an unterminated span.
#[must_use]
pub fn tokenize(raw: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut in_code = false;

    for ch in raw.chars() {
        if ch == DELIMITER {
            let value = std::mem::take(&mut buffer);
            segments.push(if in_code {
                Segment::Code(value)
            } else {
                Segment::Text(value)
            });
            in_code = !in_code;
        } else {
            buffer.push(ch);
        }
    }

    segments.push(Segment::Text(buffer));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    fn code(s: &str) -> Segment {
        Segment::Code(s.to_string())
    }

    #[test]
    fn closed_span_becomes_code() {
        assert_eq!(tokenize("a`b`c"), vec![text("a"), code("b"), text("c")]);
    }

    #[test]
    fn unterminated_span_stays_text() {
        assert_eq!(tokenize("a`b"), vec![text("a"), text("b")]);
    }

    #[test]
    fn plain_line_is_single_text_segment() {
        assert_eq!(tokenize("Fix Button"), vec![text("Fix Button")]);
    }

    #[test]
    fn empty_input_yields_one_empty_text() {
        assert_eq!(tokenize(""), vec![text("")]);
    }

    #[test]
    fn leading_and_trailing_spans_keep_empty_text_around_them() {
        assert_eq!(tokenize("`x`"), vec![text(""), code("x"), text("")]);
    }

    #[test]
    fn adjacent_spans() {
        assert_eq!(
            tokenize("`a``b`"),
            vec![text(""), code("a"), text(""), code("b"), text("")]
        );
    }

    #[test]
    fn multibyte_characters_are_preserved() {
        assert_eq!(
            tokenize("修复 `Select` 问题"),
            vec![text("修复 "), code("Select"), text(" 问题")]
        );
    }

    #[test]
    fn trailing_lone_backtick_leaves_empty_tail() {
        assert_eq!(tokenize("abc`"), vec![text("abc"), text("")]);
    }
}
