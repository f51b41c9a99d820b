//! Envelope grammar for frontmatter documents.
//!
//! Recognizes only the `---` delimiter lines and partitions the text into
//! an optional front section and a body. The content of either region is
//! opaque here; [`crate::mixed`] routes it to the right grammar.

use crate::kind::NodeKind;
use crate::tree::SyntaxTree;

/// Grammar name carried by envelope nodes.
pub const NAME: &str = "nestml-frontmatter";

/// Whether a line (without its line break) delimits the front section.
#[must_use]
pub fn is_dash_line(line: &str) -> bool {
    line.trim() == "---"
}

/// Byte spans of the envelope regions of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Opening dash line, front content and closing dash line, if present.
    pub front: Option<Front>,
    /// Body span.
    pub body: (usize, usize),
}

/// Spans making up a delimited front section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Front {
    /// Opening dash line, line break excluded.
    pub open: (usize, usize),
    /// Text between the two dash lines.
    pub content: (usize, usize),
    /// Closing dash line, line break excluded.
    pub close: (usize, usize),
}

/// Locate the delimiters in `text`.
///
/// A front section exists only when the very first line is a dash line and
/// a later dash line closes it; otherwise the whole text is body.
#[must_use]
pub fn layout(text: &str) -> Layout {
    let mut lines = lines_with_offsets(text);
    let whole = Layout {
        front: None,
        body: (0, text.len()),
    };

    let Some((open_from, open_to, content_from)) = lines.next() else {
        return whole;
    };
    if !is_dash_line(&text[open_from..open_to]) {
        return whole;
    }
    for (from, to, next) in lines {
        if is_dash_line(&text[from..to]) {
            return Layout {
                front: Some(Front {
                    open: (open_from, open_to),
                    content: (content_from, from),
                    close: (from, to),
                }),
                body: (next, text.len()),
            };
        }
    }
    whole
}

/// Parse `text` into an envelope tree.
///
/// The root is `frontmatter_document`; its children are either `dash_line`,
/// `frontmatter_content`, `dash_line`, `body`, or a lone `body`.
#[must_use]
pub fn parse(text: &str) -> SyntaxTree {
    let layout = layout(text);
    let mut builder = SyntaxTree::builder(NAME).open(
        "frontmatter_document",
        NodeKind::Envelope,
        0,
        text.len(),
    );
    if let Some(front) = layout.front {
        builder = builder
            .leaf("dash_line", NodeKind::DashLine, front.open.0, front.open.1)
            .leaf(
                "frontmatter_content",
                NodeKind::FrontmatterContent,
                front.content.0,
                front.content.1,
            )
            .leaf("dash_line", NodeKind::DashLine, front.close.0, front.close.1);
    }
    builder
        .leaf("body", NodeKind::Body, layout.body.0, layout.body.1)
        .finish()
}

/// `(from, to, next)` for each line: content span without the line break
/// (`\n` or `\r\n`), and the offset where the following line starts.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= text.len() {
            return None;
        }
        let from = start;
        let (to, next) = match text[from..].find('\n') {
            Some(i) => (from + i, from + i + 1),
            None => (text.len(), text.len()),
        };
        start = next;
        let to = if to > from && text.as_bytes()[to - 1] == b'\r' {
            to - 1
        } else {
            to
        };
        Some((from, to, next))
    })
}

#[cfg(test)]
#[path = "tests/frontmatter.rs"]
mod tests;
