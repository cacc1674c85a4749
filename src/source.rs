//! Character source for the tagger
//!
//! The lexer and the skippers pull bytes one at a time from a [`CharSource`].
//! A source supports exactly one byte of pushback and reports the location
//! of the next unread byte, which is what gets recorded as a tag location.

use serde::{Deserialize, Serialize};

/// Opaque byte offset into the scanned input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePosition(u64);

impl FilePosition {
    pub fn new(offset: u64) -> Self {
        Self(offset)
    }

    pub fn offset(&self) -> u64 {
        self.0
    }
}

/// Byte-at-a-time input with one byte of pushback.
pub trait CharSource {
    /// Read the next byte, or `None` at end of input.
    fn get_char(&mut self) -> Option<u8>;

    /// Push back the byte just read. At most one byte may be pending.
    fn unget_char(&mut self, ch: u8);

    /// 1-based line number of the next unread byte.
    fn current_line(&self) -> u64;

    /// Byte offset of the next unread byte.
    fn current_position(&self) -> FilePosition;
}

/// [`CharSource`] over an in-memory byte slice.
#[derive(Debug)]
pub struct SourceReader<'a> {
    input: &'a [u8],
    offset: usize,
    line: u64,
    pushback: Option<u8>,
}

impl<'a> SourceReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            pushback: None,
        }
    }

    /// Returns `true` once every byte (including a pending pushback) is consumed.
    pub fn is_eof(&self) -> bool {
        self.pushback.is_none() && self.offset >= self.input.len()
    }
}

impl CharSource for SourceReader<'_> {
    fn get_char(&mut self) -> Option<u8> {
        let ch = match self.pushback.take() {
            Some(ch) => ch,
            None => *self.input.get(self.offset)?,
        };
        self.offset += 1;
        if ch == b'\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn unget_char(&mut self, ch: u8) {
        if self.pushback.is_some() || self.offset == 0 {
            tracing::warn!(byte = ch, offset = self.offset, "pushback slot unavailable, byte dropped");
            return;
        }
        self.offset -= 1;
        if ch == b'\n' {
            self.line -= 1;
        }
        self.pushback = Some(ch);
    }

    fn current_line(&self) -> u64 {
        self.line
    }

    fn current_position(&self) -> FilePosition {
        FilePosition(self.offset as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_bytes_in_order() {
        let mut src = SourceReader::new(b"ab");
        assert_eq!(src.get_char(), Some(b'a'));
        assert_eq!(src.get_char(), Some(b'b'));
        assert_eq!(src.get_char(), None);
        assert!(src.is_eof());
    }

    #[test]
    fn test_pushback_rereads_same_byte() {
        let mut src = SourceReader::new(b"xy");
        let ch = src.get_char().unwrap();
        src.unget_char(ch);
        assert_eq!(src.current_position().offset(), 0);
        assert_eq!(src.get_char(), Some(b'x'));
        assert_eq!(src.get_char(), Some(b'y'));
    }

    #[test]
    fn test_line_tracks_next_unread_byte() {
        let mut src = SourceReader::new(b"a\nb");
        assert_eq!(src.current_line(), 1);
        src.get_char();
        assert_eq!(src.current_line(), 1);
        src.get_char();
        assert_eq!(src.current_line(), 2);
        assert_eq!(src.current_position().offset(), 2);
    }

    #[test]
    fn test_pushed_back_newline_counts_once() {
        let mut src = SourceReader::new(b"\nz");
        let nl = src.get_char().unwrap();
        assert_eq!(src.current_line(), 2);
        src.unget_char(nl);
        assert_eq!(src.current_line(), 1);
        src.get_char();
        assert_eq!(src.current_line(), 2);
        assert_eq!(src.get_char(), Some(b'z'));
    }

    #[test]
    fn test_second_pushback_is_ignored() {
        let mut src = SourceReader::new(b"pq");
        let p = src.get_char().unwrap();
        src.unget_char(p);
        src.unget_char(b'!');
        assert_eq!(src.get_char(), Some(b'p'));
        assert_eq!(src.get_char(), Some(b'q'));
    }
}
