/// Heading heuristic: a short, capitalised line with no sentence punctuation.
pub struct Heading;

impl Heading {
    pub const MARKER: &'static str = "#";

    /// Lines must be strictly shorter than this, counted in UTF-16 code
    /// units, so an emoji outside the BMP counts twice.
    pub const MAX_LEN: usize = 80;
    pub const MAX_TOKENS: usize = 10;
    pub const TERMINAL_PUNCTUATION: [char; 5] = ['.', '!', '?', ';', ':'];

    /// Lowercased prefixes of lines that read as sentences, not titles.
    /// English only.
    pub const SENTENCE_STARTERS: [&'static str; 3] = ["these", "then", "the "];

    /// Lines mentioning these are prose about the project, not headings.
    pub const EXCLUDED_NAMES: [&'static str; 2] = ["package.json", "Next.js"];

    pub fn matches(trimmed: &str) -> bool {
        let lowered = trimmed.to_lowercase();

        trimmed.encode_utf16().count() < Self::MAX_LEN
            && trimmed.starts_with(|c: char| c.is_ascii_uppercase() || c == '#')
            && !trimmed.ends_with(Self::TERMINAL_PUNCTUATION)
            && !trimmed.contains(['?', '"'])
            && !Self::SENTENCE_STARTERS
                .iter()
                .any(|s| lowered.starts_with(s))
            && trimmed.split_whitespace().count() <= Self::MAX_TOKENS
            && !Self::EXCLUDED_NAMES.iter().any(|n| trimmed.contains(n))
    }

    /// Renders a level-1 heading with the whole line upper-cased.
    pub fn render(trimmed: &str) -> String {
        format!("{} {}", Self::MARKER, trimmed.to_uppercase())
    }
}
