//! Input adapter that keeps blank lines visible to the CSV parser.
//!
//! The `csv` reader silently skips empty lines, which would drop rows from
//! the output. [`BlankLineReader`] rewrites every blank line outside a quoted
//! field as `""`, so it parses as a record with one empty field, and queues
//! the stream offset of each rewrite. The pipeline uses
//! [`BlankLineReader::take_marker_before`] to tell those records apart from a
//! genuine `""` row.

use std::collections::VecDeque;
use std::io::{self, Read};

const CHUNK_SIZE: usize = 8 * 1024;
const MARKER_LEN: usize = 2;

/// Just enough CSV lexing to know whether a byte starts a new line outside
/// a quoted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexer {
    LineStart { after_cr: bool },
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

impl Lexer {
    // The LF of a CRLF pair ends the previous line rather than opening a
    // blank one.
    const fn opens_blank_line(self, byte: u8) -> bool {
        match self {
            Self::LineStart { after_cr } => byte == b'\r' || (byte == b'\n' && !after_cr),
            _ => false,
        }
    }

    const fn advance(self, byte: u8) -> Self {
        match (self, byte) {
            (Self::Quoted, b'"') => Self::QuoteInQuoted,
            (Self::Quoted, _) => Self::Quoted,
            (Self::QuoteInQuoted, b'"') | (Self::LineStart { .. } | Self::FieldStart, b'"') => {
                Self::Quoted
            }
            (_, b'\r') => Self::LineStart { after_cr: true },
            (_, b'\n') => Self::LineStart { after_cr: false },
            (_, b',') => Self::FieldStart,
            _ => Self::Unquoted,
        }
    }
}

/// [`Read`] adapter that turns blank lines into `""` records.
pub(crate) struct BlankLineReader<R> {
    inner: R,
    chunk: Box<[u8]>,
    cursor: usize,
    filled: usize,
    lexer: Lexer,
    pending_quotes: usize,
    emitted: u64,
    markers: VecDeque<u64>,
}

impl<R: Read> BlankLineReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            chunk: vec![0; CHUNK_SIZE].into_boxed_slice(),
            cursor: 0,
            filled: 0,
            lexer: Lexer::LineStart { after_cr: false },
            pending_quotes: 0,
            emitted: 0,
            markers: VecDeque::new(),
        }
    }

    /// Consumes the oldest rewrite if it was emitted before `offset`.
    ///
    /// Called with the parser's byte position after each record, this
    /// reports whether that record came from a blank line.
    pub(crate) fn take_marker_before(&mut self, offset: u64) -> bool {
        if self.markers.front().is_some_and(|&marker| marker < offset) {
            self.markers.pop_front();
            return true;
        }
        false
    }

    fn next_byte(&mut self) -> Option<u8> {
        if self.pending_quotes > 0 {
            self.pending_quotes -= 1;
            self.emitted += 1;
            return Some(b'"');
        }
        let byte = self.chunk.get(self.cursor..self.filled)?.first().copied()?;
        if self.lexer.opens_blank_line(byte) {
            self.markers.push_back(self.emitted);
            self.pending_quotes = MARKER_LEN - 1;
            self.lexer = Lexer::QuoteInQuoted;
            self.emitted += 1;
            return Some(b'"');
        }
        self.lexer = self.lexer.advance(byte);
        self.cursor += 1;
        self.emitted += 1;
        Some(byte)
    }
}

impl<R: Read> Read for BlankLineReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }
        if self.cursor >= self.filled && self.pending_quotes == 0 {
            self.filled = self.inner.read(&mut self.chunk)?;
            self.cursor = 0;
        }
        let mut written = 0;
        for slot in out.iter_mut() {
            let Some(byte) = self.next_byte() else {
                break;
            };
            *slot = byte;
            written += 1;
        }
        Ok(written)
    }
}
