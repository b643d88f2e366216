//! End-to-end tests for `convert`.
//!
//! Scenario tests pin exact output; property tests run a small corpus of
//! awkward inputs through the converter and check the structural invariants.

mod properties;

use pretty_assertions::assert_eq;

use super::convert;

#[test]
fn empty_input() {
    assert_eq!(convert(""), "");
}

#[test]
fn whitespace_only_input() {
    assert_eq!(convert("  \n\t\n  "), "");
}

#[test]
fn title_then_instruction() {
    let out = convert("Getting Started\nRun the following command");
    assert!(out.starts_with("# GETTING STARTED\n"));
    // Short capitalised instructions without punctuation read as headings too
    assert_eq!(out, "# GETTING STARTED\n# RUN THE FOLLOWING COMMAND");
}

#[test]
fn title_then_sentence() {
    assert_eq!(
        convert("Getting Started\nRun the following command:"),
        "# GETTING STARTED\nRun the following command:"
    );
}

#[test]
fn mixed_bullet_glyphs() {
    assert_eq!(convert("- item one\n* item two"), "- item one\n- item two");
}

#[test]
fn ordered_items_keep_their_numbers() {
    assert_eq!(
        convert("1. Install deps\n2) Run tests\n7. Deploy"),
        "1. Install deps\n2. Run tests\n7. Deploy"
    );
}

#[test]
fn json_object_is_fenced() {
    assert_eq!(
        convert("{\n  \"name\": \"test\"\n}"),
        "```json\n{\n  \"name\": \"test\"\n}\n```"
    );
}

#[test]
fn bare_url_becomes_link() {
    assert_eq!(
        convert("Visit https://example.com for info."),
        "Visit [https://example.com](https://example.com) for info."
    );
}

#[test]
fn command_then_prose_closes_before_prose() {
    assert_eq!(
        convert("npm install next\nDone! Check README."),
        "```bash\nnpm install next\n```\nDone! Check **README**."
    );
}

#[test]
fn fence_keeps_indentation_verbatim() {
    assert_eq!(
        convert("const x = 1;\n[\n    1,\n  2\n]"),
        "const x = 1;\n```json\n[\n    1,\n  2\n]\n```"
    );
}

#[test]
fn one_prose_line_splits_a_code_run() {
    assert_eq!(
        convert("npm install\nThen run it\nnpm start"),
        "```bash\nnpm install\n```\nThen run it\n```bash\nnpm start\n```"
    );
}

#[test]
fn blank_line_does_not_end_a_fence() {
    // The lookahead only sees the blank line, so the prose after it is captured
    assert_eq!(
        convert("cd app\n\nDone"),
        "```bash\ncd app\n\nDone\n```"
    );
}

#[test]
fn closing_bracket_ends_json_fence() {
    assert_eq!(
        convert("[\n1\n]\nlowercase prose after"),
        "```json\n[\n1\n]\n```\nlowercase prose after"
    );
}

#[test]
fn single_line_array_keeps_json_fence_open() {
    // Only a line starting with the closing bracket ends a json fence
    assert_eq!(
        convert("[1, 2]\nlowercase prose after"),
        "```json\n[1, 2]\nlowercase prose after\n```"
    );
}

#[test]
fn surrounding_blank_lines_are_trimmed() {
    assert_eq!(convert("\n\n- a\n\n"), "- a");
}

#[test]
fn crlf_line_endings() {
    assert_eq!(convert("- a\r\n- b\r\n"), "- a\n- b");
}

#[test]
fn list_items_are_not_inline_rewritten() {
    assert_eq!(convert("- see https://example.com"), "- see https://example.com");
}

#[test]
fn headings_are_upper_cased_verbatim() {
    assert_eq!(convert("API Reference"), "# API REFERENCE");
}

#[test]
fn sentence_starters_are_not_headings() {
    assert_eq!(
        convert("The Config Loader\nThese Options\nThen Restart"),
        "The Config Loader\nThese Options\nThen Restart"
    );
}

#[test]
fn conversion_is_not_idempotent() {
    let once = convert("Getting Started\nCheck the README.");
    assert_eq!(once, "# GETTING STARTED\nCheck the **README**.");

    let twice = convert(&once);
    assert_eq!(twice, "# # GETTING STARTED\nCheck the ****README****.");
}
