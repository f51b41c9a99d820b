//! Line-addressable view of a text buffer.
//!
//! The indentation queries need random access from a byte offset to the
//! line containing it, that line's leading whitespace, and tab-aware column
//! positions. `Document` precomputes the line starts once so those lookups
//! are a binary search.

/// A text buffer with a precomputed line-start table.
pub struct Document {
    text: String,
    line_starts: Vec<usize>,
}

/// One line of a [`Document`], without its line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Byte offset of the first character of the line.
    pub from: usize,
    /// Byte offset just before the line break (or the end of the text).
    pub to: usize,
    /// Line content, line break excluded.
    pub text: &'a str,
}

impl Document {
    /// Build the line table for `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Full buffer contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the buffer in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the buffer holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines (an empty buffer has one empty line).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The line containing `pos`. Offsets past the end resolve to the last line.
    #[must_use]
    pub fn line_at(&self, pos: usize) -> Line<'_> {
        let pos = pos.min(self.text.len());
        let index = match self.line_starts.binary_search(&pos) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        self.line(index + 1)
    }

    /// Line by 1-based number, clamped to the valid range.
    #[must_use]
    pub fn line(&self, number: usize) -> Line<'_> {
        let index = number.clamp(1, self.line_starts.len()) - 1;
        let from = self.line_starts[index];
        let mut to = self
            .line_starts
            .get(index + 1)
            .map_or(self.text.len(), |next| next - 1);
        if to > from && self.text.as_bytes()[to - 1] == b'\r' {
            to -= 1;
        }
        Line {
            number: index + 1,
            from,
            to,
            text: &self.text[from..to],
        }
    }

    /// `pos` clamped to the buffer and moved back to a character boundary.
    #[must_use]
    pub fn char_floor(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    /// Text between two byte offsets, each snapped with [`char_floor`](Self::char_floor).
    #[must_use]
    pub fn slice(&self, from: usize, to: usize) -> &str {
        let to = self.char_floor(to);
        &self.text[self.char_floor(from.min(to))..to]
    }
}

/// Column reached after the first `to` bytes of `text`, expanding tabs to
/// the next multiple of `tab_size`.
#[must_use]
pub fn count_column(text: &str, tab_size: usize, to: usize) -> usize {
    let mut column = 0;
    for (i, ch) in text.char_indices() {
        if i >= to {
            break;
        }
        if ch == '\t' && tab_size > 0 {
            column += tab_size - column % tab_size;
        } else {
            column += 1;
        }
    }
    column
}

/// Tab-aware width of the leading whitespace of `text`.
#[must_use]
pub fn indentation_width(text: &str, tab_size: usize) -> usize {
    let leading = text.len() - text.trim_start_matches([' ', '\t']).len();
    count_column(text, tab_size, leading)
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
