use super::{
    classify::{LineClass, LineClassifier, LineKind},
    inline,
    kinds::{CodeFence, FenceLang, Heading, ListItem},
};

/// An open fence: its language and the lines captured so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceState {
    lang: FenceLang,
    lines: Vec<String>,
}

impl FenceState {
    /// Opens a fence seeded with the line that triggered it.
    pub fn open(lang: FenceLang, first_line: &str) -> Self {
        Self {
            lang,
            lines: vec![first_line.to_string()],
        }
    }

    pub fn lang(&self) -> FenceLang {
        self.lang
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Captures a line verbatim. Blank lines are captured as empty strings.
    pub fn push(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(line.to_string());
        }
    }

    /// Whether the fence ends after the line just captured.
    ///
    /// Closes when the next line reads like prose again, when a `json` fence
    /// reaches its closing bracket, or when there is no next line. Only the
    /// immediately following line is inspected.
    pub fn should_close(&self, current: &LineClass, next: Option<&LineClass>) -> bool {
        match next {
            None => true,
            Some(next) => {
                next.returns_to_prose() || CodeFence::closes_on(self.lang, current.trimmed())
            }
        }
    }

    /// Emits the delimited block.
    pub fn flush_into(self, out: &mut Vec<String>) {
        out.push(CodeFence::opener(self.lang));
        out.extend(self.lines);
        out.push(CodeFence::DELIMITER.to_string());
    }
}

/// Single-pass assembler: dispatches each classified line and carries the
/// fence state between lines.
pub struct BlockAssembler {
    classifier: LineClassifier,
    fence: Option<FenceState>,
    out: Vec<String>,
}

impl BlockAssembler {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier,
            fence: None,
            out: vec![],
        }
    }

    pub fn in_fence(&self) -> bool {
        self.fence.is_some()
    }

    /// Consumes one line. `next` is the following input line, if any.
    pub fn push(&mut self, line: &LineClass, next: Option<&LineClass>) {
        if let Some(fence) = self.fence.as_mut() {
            fence.push(line.raw());
            if !line.is_blank() {
                self.close_fence_if_done(line, next);
            }
            return;
        }

        match self.classifier.classify(line.raw()) {
            LineKind::Blank => self.out.push(String::new()),
            LineKind::CodeLike { lang } => {
                self.fence = Some(FenceState::open(lang, line.raw()));
                self.close_fence_if_done(line, next);
            }
            LineKind::Heading => self.out.push(Heading::render(line.trimmed())),
            LineKind::BulletItem { rest } => self.out.push(ListItem::render_bullet(rest)),
            LineKind::OrderedItem { number, rest } => {
                self.out.push(ListItem::render_ordered(number, rest))
            }
            LineKind::Paragraph => self.out.push(inline::rewrite(line.trimmed())),
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush: a fence is never left unterminated
        self.flush_fence();
        self.out
    }

    fn close_fence_if_done(&mut self, line: &LineClass, next: Option<&LineClass>) {
        if self
            .fence
            .as_ref()
            .is_some_and(|fence| fence.should_close(line, next))
        {
            self.flush_fence();
        }
    }

    fn flush_fence(&mut self) {
        if let Some(fence) = self.fence.take() {
            fence.flush_into(&mut self.out);
        }
    }
}

impl Default for BlockAssembler {
    fn default() -> Self {
        Self::new()
    }
}
