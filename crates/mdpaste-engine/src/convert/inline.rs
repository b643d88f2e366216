//! # Inline Rewriting
//!
//! Paragraph lines go through an ordered list of regex substitutions. Code
//! spans are raw zones: once a span is wrapped in backticks, later rules
//! only see the text around it. That keeps the filename, framework and
//! all-caps rules from wrapping the same token twice.
//!
//! Bare URLs are raw zones too for every rule except the one that links
//! them, so a path like `/docs/index.html` stays part of its link target.
//!
//! Rule order matters: code wrapping runs before bold and link rewriting.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Well-known project files, wrapped even when the extension rule missed them.
pub const KNOWN_FILES: [&str; 5] = [
    "package.json",
    "next.config.js",
    "next.config.ts",
    "layout.tsx",
    "page.tsx",
];

/// Framework and tool names rendered as code.
pub const KNOWN_FRAMEWORKS: [&str; 4] = ["Next.js", "React", "TypeScript", "ESLint"];

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid code span regex"));

/// Code spans or bare URLs; the leftmost one wins.
static CODE_SPAN_OR_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`|https?://\S+").expect("valid raw zone regex"));

struct Rule {
    regex: Regex,
    replacement: &'static str,
    /// Stretches of the line this rule never rewrites.
    raw: &'static Regex,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("valid inline rule regex"),
            replacement,
            raw: &CODE_SPAN_OR_URL,
        }
    }

    /// Same as [`Rule::new`] but only code spans are skipped.
    fn on_urls(pattern: &str, replacement: &'static str) -> Self {
        Self {
            raw: &CODE_SPAN,
            ..Self::new(pattern, replacement)
        }
    }

    /// Matches any of `words` literally, on word boundaries.
    fn any_of(words: &[&str], replacement: &'static str) -> Self {
        let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
        Self::new(&format!(r"\b({})\b", alternatives.join("|")), replacement)
    }

    fn apply(&self, line: &str) -> String {
        outside_raw_zones(line, self.raw, |text| {
            self.regex.replace_all(text, self.replacement)
        })
    }
}

static RULES: LazyLock<[Rule; 6]> = LazyLock::new(|| {
    [
        // Bare filenames
        Rule::new(
            r"\b([a-zA-Z0-9._-]+\.(js|ts|tsx|jsx|json|css|html|md))\b",
            "`${1}`",
        ),
        Rule::any_of(&KNOWN_FILES, "`${1}`"),
        Rule::any_of(&KNOWN_FRAMEWORKS, "`${1}`"),
        // ALL CAPS words of three letters or more
        Rule::new(r"\b[A-Z]{3,}\b", "**${0}**"),
        Rule::on_urls(r"(https?://[^\s]+)", "[${1}](${1})"),
        Rule::new(
            r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})",
            "[${1}](mailto:${1})",
        ),
    ]
});

/// Rewrites a trimmed paragraph line.
pub fn rewrite(trimmed: &str) -> String {
    let mut line = normalize_code_spans(trimmed).into_owned();
    for rule in RULES.iter() {
        line = rule.apply(&line);
    }
    line
}

/// Re-emits existing backtick spans unchanged.
fn normalize_code_spans(text: &str) -> Cow<'_, str> {
    CODE_SPAN.replace_all(text, "`${1}`")
}

/// Applies `f` to every stretch of `line` that `raw` does not match.
fn outside_raw_zones<'a, F>(line: &'a str, raw: &Regex, f: F) -> String
where
    F: Fn(&'a str) -> Cow<'a, str>,
{
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for zone in raw.find_iter(line) {
        out.push_str(&f(&line[last..zone.start()]));
        out.push_str(zone.as_str());
        last = zone.end();
    }
    out.push_str(&f(&line[last..]));
    out
}
