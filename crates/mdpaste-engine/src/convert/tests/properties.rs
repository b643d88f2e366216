use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag};

use crate::convert::{FenceLang, convert, kinds::CodeFence};

/// Inputs chosen to hit every branch of the cascade, plus malformed text.
const CORPUS: &[&str] = &[
    "",
    "   ",
    "Getting Started\nRun the following command",
    "- item one\n* item two\n\n1) first\n2. second",
    "{\n  \"name\": \"test\"\n}",
    "{\n  \"unterminated\": true,",
    "npm install next\nDone! Check README.",
    "cd app\n\n\nnpm start\n\nDeploy Notes\nuse vercel",
    "name: \"x\"\nkey: value\n}\n]\nText",
    "Visit https://example.com or mail a@b.co\n\nWe USE the API.",
    "ünïcödé Überschrift\n• ▪ ◦ ⁃\n\u{a0}\u{a0}\n🎉 Party",
    "\"\n}\n\"\n}",
    "src/app/layout.tsx\n\n  indented\nTrailing",
];

/// Every fence opened in the output is closed, and only the four tags appear.
#[test]
fn fences_are_balanced() {
    let tags: Vec<String> = [
        FenceLang::Json,
        FenceLang::Bash,
        FenceLang::JavaScript,
        FenceLang::Text,
    ]
    .into_iter()
    .map(CodeFence::opener)
    .collect();

    for input in CORPUS {
        let out = convert(input);
        let mut open = false;
        for line in out.lines() {
            if !open && tags.iter().any(|t| t == line) {
                open = true;
            } else if open && line == CodeFence::DELIMITER {
                open = false;
            }
        }
        assert!(!open, "unterminated fence for {input:?}:\n{out}");
    }
}

/// Every input line survives exactly once, fence delimiters aside.
#[test]
fn content_lines_are_conserved() {
    for input in CORPUS {
        let out = convert(input);
        let expected = input.trim().lines().count();
        let content = out
            .lines()
            .filter(|l| !l.starts_with(CodeFence::DELIMITER))
            .count();
        assert_eq!(content, expected, "line count changed for {input:?}:\n{out}");
    }
}

/// Blank lines outside fences map one-to-one.
#[test]
fn blank_lines_are_conserved_outside_fences() {
    let input = "- a\n\n\n- b\n\nHeading Here\n\n\n\nlast line.";
    let out = convert(input);
    let blanks_in = input.lines().filter(|l| l.is_empty()).count();
    let blanks_out = out.lines().filter(|l| l.is_empty()).count();
    assert_eq!(blanks_in, blanks_out);
    assert_eq!(out, "- a\n\n\n- b\n\n# HEADING HERE\n\n\n\nlast line.");
}

/// A Markdown parser sees the emitted fences as fenced code blocks with the
/// inferred language.
#[test]
fn fences_parse_as_code_blocks() {
    let out = convert("Setup Steps\nnpm install next\nDone! Check README.\n{\n  \"a\": 1\n}");
    let langs: Vec<String> = Parser::new(&out)
        .filter_map(|event| match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => Some(info.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(langs, vec!["bash", "json"]);
}

#[test]
fn headings_and_links_parse() {
    let out = convert("Getting Started\nVisit https://example.com for info.");
    let events: Vec<Event> = Parser::new(&out).collect();

    assert!(
        events
            .iter()
            .any(|e| matches!(e, Event::Start(Tag::Heading { .. })))
    );
    assert!(events.iter().any(|e| matches!(
        e,
        Event::Start(Tag::Link { dest_url, .. }) if &**dest_url == "https://example.com"
    )));
}
