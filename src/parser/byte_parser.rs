//! Low-level byte-by-byte parser for line-oriented text.
//!
//! This module provides [ByteParser], which offers peeking, consuming and
//! token extraction on top of a [ByteSource], while keeping track of the
//! current line. It is the foundation of the GEDCOM reader.

use crate::parser::byte_source::{ByteSource, InMemoryByteSource};
use std::path::Path;

/// UTF-8 byte order mark, tolerated at the very start of a file
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser with support for peeking, consuming, and line tracking.
///
/// All matching is exact (case-sensitive), as GEDCOM tags and cross-reference
/// identifiers are. Text is extracted lossily as UTF-8.
///
/// # Example
/// ```
/// use sosatree::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("0 @I1@ INDI\n1 NAME Ada /Lovelace/\n");
/// assert_eq!(parser.parse_number(), Some(0));
/// parser.skip_inline_whitespace();
/// assert_eq!(parser.parse_token(), "@I1@");
/// parser.skip_inline_whitespace();
/// assert_eq!(parser.parse_token(), "INDI");
/// assert!(parser.consume_line_break());
/// assert_eq!(parser.line(), 2);
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
    /// 1-based number of the line the parser is currently on
    line: usize,
    /// Byte offset where the current line starts
    line_start: usize,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a byte slice by copying it into a Vec.
    pub fn for_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.to_vec()))
    }

    /// Creates a new `ByteParser` from a string slice by copying it into a Vec.
    pub fn for_str(input: &str) -> Self {
        Self::for_bytes(input.as_bytes())
    }

    /// Creates a new `ByteParser` reading the whole file into memory.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn for_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            line: 1,
            line_start: 0,
        }
    }

    /// Peeks at the current byte without consuming it.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    ///
    /// Consuming a line break (`\n`, or a `\r` not followed by `\n`)
    /// advances the line counter.
    #[inline]
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.source.next_byte()?;
        if byte == b'\n' || (byte == b'\r' && self.peek() != Some(b'\n')) {
            self.line += 1;
            self.line_start = self.source.position();
        }
        Some(byte)
    }

    /// Returns the 1-based line number of the current position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Checks if the current byte equals `ch`.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Checks if the following bytes equal `sequence`, without consuming them.
    #[inline]
    pub fn peek_is_sequence(&self, sequence: &[u8]) -> bool {
        self.source.peek_slice(sequence.len()) == sequence
    }

    /// Consumes the current byte if it equals `ch`.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next_byte();
            true
        } else {
            false
        }
    }

    /// Consumes the following bytes if they equal `sequence`.
    ///
    /// # Returns
    /// `true` if the sequence was matched and consumed, `false` otherwise
    pub fn consume_if_sequence(&mut self, sequence: &[u8]) -> bool {
        if !self.peek_is_sequence(sequence) {
            return false;
        }

        for _ in 0..sequence.len() {
            self.next_byte();
        }

        true
    }

    /// Skips a UTF-8 byte order mark if the parser sits on one.
    pub fn skip_bom(&mut self) -> bool {
        let skipped = self.consume_if_sequence(UTF8_BOM);
        if skipped {
            self.line_start = self.position();
        }
        skipped
    }

    /// Skips spaces and tabs, but not line breaks.
    pub fn skip_inline_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.next_byte();
        }
    }

    /// Skips all whitespace including line breaks, i.e. blank lines.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.next_byte();
        }
    }

    /// Consumes one line break (`\n`, `\r\n` or `\r`).
    ///
    /// # Returns
    /// `true` if a line break was consumed, `false` otherwise
    pub fn consume_line_break(&mut self) -> bool {
        if self.consume_if(b'\r') {
            self.consume_if(b'\n');
            true
        } else {
            self.consume_if(b'\n')
        }
    }

    /// Returns whether the parser sits at a line break or at EOF.
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(b'\n' | b'\r'))
    }

    /// Consumes bytes until the target byte is found.
    ///
    /// # Arguments
    /// * `target` - The byte to search for
    /// * `mode` - Whether to consume the target byte (`Inclusive`) or stop before it (`Exclusive`)
    ///
    /// # Returns
    /// `true` if the target was found, `false` if EOF was reached first
    pub fn consume_until(&mut self, target: u8, mode: ConsumeMode) -> bool {
        self.consume_until_any(&[target], mode).is_some()
    }

    /// Consumes bytes until any of the target bytes is found.
    ///
    /// # Returns
    /// `Some(u8)` with the found byte, or `None` if EOF was reached first
    pub fn consume_until_any(&mut self, targets: &[u8], mode: ConsumeMode) -> Option<u8> {
        while let Some(b) = self.peek() {
            if targets.contains(&b) {
                if mode == ConsumeMode::Inclusive {
                    self.next_byte();
                }
                return Some(b);
            }
            self.next_byte();
        }
        None
    }

    /// Parses a non-negative decimal number.
    ///
    /// # Returns
    /// The number, or `None` if no digit is at the current position
    /// (or the value does not fit into `usize`).
    pub fn parse_number(&mut self) -> Option<usize> {
        let start = self.position();
        let mut value: usize = 0;
        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            value = value.checked_mul(10)?.checked_add((b - b'0') as usize)?;
            self.next_byte();
        }

        if self.position() == start { None } else { Some(value) }
    }

    /// Parses a token, i.e. everything up to the next whitespace or line end.
    ///
    /// Returns an empty string if the parser sits on whitespace.
    pub fn parse_token(&mut self) -> String {
        let start = self.position();
        self.consume_until_any(b" \t\r\n", ConsumeMode::Exclusive);
        self.text_from(start)
    }

    /// Parses the remainder of the current line, without the line break.
    pub fn parse_rest_of_line(&mut self) -> String {
        let start = self.position();
        self.consume_until_any(b"\r\n", ConsumeMode::Exclusive);
        self.text_from(start)
    }

    /// Returns the text of the current line, up to `k` bytes, for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn line_context(&self, k: usize) -> String {
        let consumed = self.source.slice_from(self.line_start).unwrap_or(&[]);
        let mut context = String::from_utf8_lossy(consumed).into_owned();
        let ahead = self.source.peek_slice(k.saturating_sub(consumed.len()));
        let ahead_len = ahead
            .iter()
            .position(|b| *b == b'\n' || *b == b'\r')
            .unwrap_or(ahead.len());
        context.push_str(&String::from_utf8_lossy(&ahead[..ahead_len]));
        context.chars().take(k).collect()
    }

    fn text_from(&self, start: usize) -> String {
        let bytes = self.source.slice_from(start).unwrap_or(&[]);
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Specifies whether to consume or leave the target when using `consume_until` methods.
///
/// # Examples
/// ```
/// use sosatree::parser::{ByteParser, ConsumeMode};
///
/// let mut parser = ByteParser::for_str("1 FAMC @F1@");
///
/// // Inclusive: consume up to and including '@'
/// parser.consume_until(b'@', ConsumeMode::Inclusive);
/// assert_eq!(parser.peek(), Some(b'F'));
///
/// // Exclusive: stop right before '@'
/// parser.consume_until(b'@', ConsumeMode::Exclusive);
/// assert_eq!(parser.peek(), Some(b'@'));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConsumeMode {
    /// Consume the target byte along with everything before it.
    Inclusive,

    /// Stop before the target byte without consuming it.
    Exclusive,
}
