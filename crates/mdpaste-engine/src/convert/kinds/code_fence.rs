use std::{fmt, sync::LazyLock};

use regex::Regex;

/// `"key": ` at the start of a line.
static JSON_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"[^"]*":\s*"#).expect("valid json property regex"));

/// `key:` at the start of a line (only code-like when the line also holds a quote).
static KEY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+:").expect("valid key pair regex"));

/// Language hint written after the opening fence delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceLang {
    Json,
    Bash,
    JavaScript,
    Text,
}

impl FenceLang {
    pub fn tag(self) -> &'static str {
        match self {
            FenceLang::Json => "json",
            FenceLang::Bash => "bash",
            FenceLang::JavaScript => "javascript",
            FenceLang::Text => "text",
        }
    }
}

impl fmt::Display for FenceLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fenced code block type with owned delimiter and detection constants.
///
/// Fences are raw zones: once open, lines are captured verbatim and never
/// classified.
pub struct CodeFence;

impl CodeFence {
    pub const DELIMITER: &'static str = "```";

    /// Prefixes that mark a line as a command. Matched without a word
    /// boundary, so `github` and `cdn` count too.
    pub const COMMAND_PREFIXES: [&'static str; 7] =
        ["npx", "npm", "yarn", "git", "cd", "next", "create-"];

    /// Subset of [`Self::COMMAND_PREFIXES`] that selects the `bash` tag.
    pub const SHELL_PREFIXES: [&'static str; 5] = ["npx", "npm", "yarn", "git", "cd"];

    pub const SOURCE_EXTENSIONS: [&'static str; 7] =
        [".js", ".ts", ".tsx", ".jsx", ".json", ".css", ".html"];

    /// Whether a line looks like code and should open a fence.
    ///
    /// `line` is the untrimmed input line.
    pub fn is_code_like(line: &str) -> bool {
        let trimmed = line.trim();

        Self::looks_like_json(trimmed)
            || line.trim_start().starts_with(['"', '}'])
            || Self::COMMAND_PREFIXES.iter().any(|p| trimmed.starts_with(p))
            || Self::SOURCE_EXTENSIONS.iter().any(|e| trimmed.ends_with(e))
            || (KEY_PAIR.is_match(trimmed) && trimmed.contains('"'))
    }

    /// Picks the language tag for a fence opened by `trimmed`.
    pub fn lang(trimmed: &str) -> FenceLang {
        if trimmed.contains(".json") || Self::looks_like_json(trimmed) {
            FenceLang::Json
        } else if Self::SHELL_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            FenceLang::Bash
        } else if trimmed.contains(".js") || trimmed.contains(".ts") {
            FenceLang::JavaScript
        } else {
            FenceLang::Text
        }
    }

    /// A `json` fence closes on the line that ends the object or array.
    pub fn closes_on(lang: FenceLang, trimmed: &str) -> bool {
        lang == FenceLang::Json && trimmed.starts_with(['}', ']'])
    }

    pub fn opener(lang: FenceLang) -> String {
        format!("{}{lang}", Self::DELIMITER)
    }

    fn looks_like_json(trimmed: &str) -> bool {
        trimmed.starts_with(['{', '[']) || JSON_PROPERTY.is_match(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::object("{")]
    #[case::array("[1, 2, 3]")]
    #[case::json_property(r#""name": "test","#)]
    #[case::closing_brace("  },")]
    #[case::command("npm install next")]
    #[case::scaffold("create-next-app my-app")]
    #[case::unbounded_prefix("github is where the code lives")]
    #[case::source_file("src/app/page.tsx")]
    #[case::key_pair_with_quote(r#"name: "demo""#)]
    fn detects_code_like_lines(#[case] line: &str) {
        assert!(CodeFence::is_code_like(line));
    }

    #[rstest]
    #[case::prose("Run the following command")]
    #[case::key_pair_without_quote("Note: remember this")]
    #[case::extension_mid_line("index.js is the entry point")]
    #[case::capitalised_command("Npm is a package manager")]
    fn ignores_prose(#[case] line: &str) {
        assert!(!CodeFence::is_code_like(line));
    }

    #[rstest]
    #[case("{", FenceLang::Json)]
    #[case(r#""scripts": {"#, FenceLang::Json)]
    #[case("cat package.json", FenceLang::Json)]
    #[case("npm run dev", FenceLang::Bash)]
    #[case("cd my-app", FenceLang::Bash)]
    #[case("next build", FenceLang::Text)]
    #[case("create-next-app", FenceLang::Text)]
    #[case("src/index.ts", FenceLang::JavaScript)]
    #[case("styles/globals.css", FenceLang::Text)]
    fn picks_language(#[case] line: &str, #[case] expected: FenceLang) {
        assert_eq!(CodeFence::lang(line), expected);
    }

    #[test]
    fn only_json_fences_close_on_brackets() {
        assert!(CodeFence::closes_on(FenceLang::Json, "}"));
        assert!(CodeFence::closes_on(FenceLang::Json, "]"));
        assert!(!CodeFence::closes_on(FenceLang::Bash, "}"));
        assert!(!CodeFence::closes_on(FenceLang::Json, "\"a\": 1"));
    }

    #[test]
    fn opener_carries_tag() {
        assert_eq!(CodeFence::opener(FenceLang::JavaScript), "```javascript");
    }
}
