//! Splits catalog text into per-course blocks on blank lines.

/// One course's raw lines, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    /// 1-based catalog line of the first line in the block.
    ///
    /// For an empty block this is the line where it would have started.
    pub first_line: usize,
    /// The block's lines with terminators removed.
    pub lines: Vec<&'a str>,
}

impl Block<'_> {
    /// Returns `true` if the block holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split catalog text into blocks.
///
/// Every blank line (a line that is empty once its `\n` or `\r\n` terminator
/// is removed) closes the current block and opens a new one. Runs of blank
/// lines, and blank lines at either end, therefore yield empty blocks;
/// callers skip them. A line holding only spaces is not blank.
#[must_use]
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = vec![Block {
        first_line: 1,
        lines: Vec::new(),
    }];

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if line.is_empty() {
            blocks.push(Block {
                first_line: line_number + 1,
                lines: Vec::new(),
            });
        } else if let Some(current) = blocks.last_mut() {
            current.lines.push(line);
        }
    }

    blocks
}
