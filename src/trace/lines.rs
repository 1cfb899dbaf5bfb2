//! Line source over a `make` debug trace.
//!
//! `make` signals nesting depth only through leading whitespace, so each line
//! is handed out with the number of whitespace characters that were stripped.

use std::io::{self, BufRead};

/// A single trimmed trace line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    /// One-based physical line number.
    pub number: usize,
    /// Count of leading whitespace characters removed from the line.
    pub indent: usize,
    /// Line text without leading whitespace or line terminator.
    pub text: String,
}

impl TraceLine {
    /// Split a raw line into its indent level and trimmed text.
    ///
    /// # Examples
    ///
    /// ```
    /// use make2graph::trace::TraceLine;
    ///
    /// let line = TraceLine::new(3, "   Pruning file 'a.c'.\r\n");
    /// assert_eq!(line.indent, 3);
    /// assert_eq!(line.text, "Pruning file 'a.c'.");
    /// ```
    #[must_use]
    pub fn new(number: usize, raw: &str) -> Self {
        let unterminated = raw.strip_suffix('\n').unwrap_or(raw);
        let content = unterminated.strip_suffix('\r').unwrap_or(unterminated);
        let text = content.trim_start();
        let indent = content.chars().take_while(|c| c.is_whitespace()).count();
        Self {
            number,
            indent,
            text: text.to_owned(),
        }
    }
}

/// Forward-only iterator of [`TraceLine`]s read from `R`.
///
/// Invalid UTF-8 is replaced rather than rejected so a stray byte in a
/// recipe echo cannot abort the scan.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    /// Wrap a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            number: 0,
            buf: Vec::new(),
        }
    }

    /// Number of the last line handed out.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.number
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<TraceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.number += 1;
                let raw = String::from_utf8_lossy(&self.buf);
                Some(Ok(TraceLine::new(self.number, &raw)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
