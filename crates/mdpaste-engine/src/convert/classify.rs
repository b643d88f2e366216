use super::kinds::{CodeFence, FenceLang, Heading, ListItem};

/// Local facts about one input line, independent of fence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    raw: &'a str,
    trimmed: &'a str,
}

impl<'a> LineClass<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: raw.trim(),
        }
    }

    /// The line as it appeared in the input.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn trimmed(&self) -> &'a str {
        self.trimmed
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    pub fn is_indented(&self) -> bool {
        self.raw.starts_with(char::is_whitespace)
    }

    /// Looks like prose resuming after code: non-blank, not code-like, not
    /// indented, and starting with an ASCII capital.
    pub fn returns_to_prose(&self) -> bool {
        !self.is_blank()
            && !CodeFence::is_code_like(self.raw)
            && !self.is_indented()
            && self.trimmed.starts_with(|c: char| c.is_ascii_uppercase())
    }
}

/// Classification of a single line outside a fence.
///
/// Lines are classified from their own content only. Lines inside an open
/// fence are never classified; the assembler captures them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trimming.
    Blank,
    /// Opens a fence tagged with `lang`.
    CodeLike { lang: FenceLang },
    Heading,
    /// `rest` is the text after the bullet glyph.
    BulletItem { rest: &'a str },
    /// `number` is kept as written.
    OrderedItem { number: &'a str, rest: &'a str },
    /// Fallback: inline rewriting applies.
    Paragraph,
}

/// Classifies individual lines with an ordered cascade of heuristics.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies an untrimmed input line.
    ///
    /// Precedence: blank, code-like, heading, bullet, ordered item, paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if CodeFence::is_code_like(line) {
            return LineKind::CodeLike {
                lang: CodeFence::lang(trimmed),
            };
        }

        if Heading::matches(trimmed) {
            return LineKind::Heading;
        }

        if let Some(rest) = ListItem::bullet(trimmed) {
            return LineKind::BulletItem { rest };
        }

        if let Some((number, rest)) = ListItem::ordered(trimmed) {
            return LineKind::OrderedItem { number, rest };
        }

        LineKind::Paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(line: &str) -> LineKind<'_> {
        LineClassifier.classify(line)
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn blank(#[case] line: &str) {
        assert_eq!(classify(line), LineKind::Blank);
    }

    #[test]
    fn code_beats_heading() {
        // Capitalised and short, but ends in a source extension.
        assert_eq!(
            classify("Open globals.css"),
            LineKind::CodeLike {
                lang: FenceLang::Text
            }
        );
    }

    #[test]
    fn heading_beats_lists() {
        // `#` starts are headings even when they would be nothing else.
        assert_eq!(classify("# Notes"), LineKind::Heading);
    }

    #[test]
    fn bullet_item() {
        assert_eq!(
            classify("  • indented bullet"),
            LineKind::BulletItem {
                rest: "indented bullet"
            }
        );
    }

    #[test]
    fn ordered_item() {
        assert_eq!(
            classify("3) Deploy"),
            LineKind::OrderedItem {
                number: "3",
                rest: "Deploy"
            }
        );
    }

    #[rstest]
    #[case::capitalised("Done! Check README.", true)]
    #[case::indented("  Done", false)]
    #[case::lowercase("done", false)]
    #[case::blank("", false)]
    #[case::code_like("Main.tsx", false)]
    #[case::digit("1. Done", false)]
    fn prose_after_code(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(LineClass::new(line).returns_to_prose(), expected);
    }

    #[rstest]
    #[case::sentence("Visit https://example.com for info.")]
    #[case::lowercase("run the following command")]
    #[case::starts_with_the("The quick brown fox")]
    fn paragraph(#[case] line: &str) {
        assert_eq!(classify(line), LineKind::Paragraph);
    }
}
