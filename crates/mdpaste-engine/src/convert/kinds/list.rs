use std::sync::LazyLock;

use regex::Regex;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*◦▪▫⁃]\s+").expect("valid bullet regex"));

static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)[.)]\s+(.+)$").expect("valid ordered item regex"));

/// Bullet and numbered list items. Items are flat: nesting is not detected.
pub struct ListItem;

impl ListItem {
    /// Canonical bullet every glyph is rewritten to.
    pub const BULLET: &'static str = "-";

    /// Text after the bullet glyph and its whitespace.
    pub fn bullet(trimmed: &str) -> Option<&str> {
        BULLET.find(trimmed).map(|m| &trimmed[m.end()..])
    }

    /// The original number and the text after `N.` or `N)`.
    pub fn ordered(trimmed: &str) -> Option<(&str, &str)> {
        let caps = ORDERED.captures(trimmed)?;
        let number = caps.get(1)?.as_str();
        let rest = caps.get(2)?.as_str();
        Some((number, rest))
    }

    pub fn render_bullet(rest: &str) -> String {
        format!("{} {rest}", Self::BULLET)
    }

    pub fn render_ordered(number: &str, rest: &str) -> String {
        format!("{number}. {rest}")
    }
}
