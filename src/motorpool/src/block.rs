//! Brace-delimited block extraction
//!
//! Component bodies and sub-tables are carved out of the input text by
//! counting braces from just past an already-consumed `{`. The count is
//! blind to quoted strings: a brace inside `"..."` moves the depth like any
//! other brace. Hardening against that changes output for inputs carrying
//! literal braces in string values, so the behavior is kept as-is.

/// Result of scanning for a matching close brace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text between the opening brace and its matching close brace.
    pub body: &'a str,
    /// Byte offset of the matching `}`, or the end of the text when the
    /// block is unterminated.
    pub close_offset: usize,
    /// False when end-of-text was reached before the depth returned to zero.
    pub terminated: bool,
}

/// Finds the close brace matching an opening brace that has already been
/// consumed.
///
/// `open_offset` points just past the `{`. Depth starts at 1, is bumped on
/// every `{` and dropped on every `}`, and the block ends where it reaches
/// zero. Running out of text yields the partial body with
/// `terminated = false` instead of reading past the buffer.
pub fn extract_block(text: &str, open_offset: usize) -> Block<'_> {
    let Some(rest) = text.get(open_offset..) else {
        return Block {
            body: "",
            close_offset: text.len(),
            terminated: false,
        };
    };

    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let close = open_offset + i;
                    return Block {
                        body: &text[open_offset..close],
                        close_offset: close,
                        terminated: true,
                    };
                }
            }
            _ => {}
        }
    }

    Block {
        body: rest,
        close_offset: text.len(),
        terminated: false,
    }
}
