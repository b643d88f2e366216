//! # Text to Markdown Conversion
//!
//! Heuristic, single-pass conversion of pasted plain text into Markdown.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line outside a fence gets a
//!    [`LineKind`] from an ordered cascade of shape heuristics (length,
//!    punctuation, capitalisation, token count).
//!
//! 2. **Block Assembly** (`builder`): a [`BlockAssembler`] dispatches on the
//!    kind and carries the only state, an optional [`FenceState`]. Lines
//!    inside a fence are captured verbatim until a close condition fires.
//!
//! 3. **Inline Rewriting** (`inline`): paragraph lines get code spans, bold
//!    acronyms and links.
//!
//! ## Modules
//!
//! - **`kinds`**: per-construct constants and predicates (`CodeFence`,
//!   `Heading`, `ListItem`)
//! - **`classify`**: `LineClass` facts and the `LineClassifier` cascade
//! - **`builder`**: `FenceState` and `BlockAssembler`
//! - **`inline`**: paragraph rewrite rules
//!
//! ## Key Invariants
//!
//! - Every input line appears exactly once in the output
//! - Every opened fence is closed, at the latest at end of input
//! - Blank lines outside fences map one-to-one to blank output lines
//!
//! ## Known Limitations
//!
//! The heuristics are best-effort and deliberately literal. The heading
//! sentence-starter list is English only, acronyms are bolded wherever they
//! appear, and the fence lookahead inspects a single line, so one prose-like
//! line inside a run of code splits the block. Conversion is not
//! idempotent: converting converted output re-marks headings and bold text.

pub mod builder;
pub mod classify;
pub mod inline;
pub mod kinds;

#[cfg(test)]
mod tests;

pub use builder::{BlockAssembler, FenceState};
pub use classify::{LineClass, LineClassifier, LineKind};
pub use kinds::FenceLang;

/// Converts raw pasted text to Markdown.
///
/// Total over all input: whitespace-only text converts to an empty string.
pub fn convert(raw: &str) -> String {
    let lines: Vec<LineClass> = raw.trim().lines().map(LineClass::new).collect();
    let mut assembler = BlockAssembler::new();

    for (i, line) in lines.iter().enumerate() {
        assembler.push(line, lines.get(i + 1));
    }

    assembler.finish().join("\n")
}
