//! Token-level input reader with bounds checking.
//!
//! Validators read in [`Mode::Strict`]: every space and line break is part of
//! the grammar and has to be consumed explicitly. Checkers and solutions read
//! in [`Mode::Lax`], where any run of whitespace separates tokens.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Whitespace handling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Strict,
    Lax,
}

/// 1-based line/column of a byte in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("unexpected end of file at {position}: {expected} expected")]
    UnexpectedEof {
        expected: String,
        position: Position,
    },

    #[error("{expected} expected at {position}, but {found:?} found")]
    Expected {
        expected: &'static str,
        found: char,
        position: Position,
    },

    #[error("expected integer for '{label}' at {position}, but \"{token}\" found")]
    InvalidInt {
        label: String,
        token: String,
        position: Position,
    },

    #[error("'{label}' = {value} violates the range [{min}, {max}] at {position}")]
    OutOfBounds {
        label: String,
        value: i64,
        min: i64,
        max: i64,
        position: Position,
    },

    #[error("expected end of file at {position}")]
    ExpectedEof { position: Position },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// In-memory input with a cursor.
#[derive(Debug, Clone)]
pub struct InStream {
    data: Vec<u8>,
    pos: usize,
    line: usize,
    column: usize,
    mode: Mode,
}

impl InStream {
    pub fn new(data: impl Into<Vec<u8>>, mode: Mode) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            line: 1,
            column: 1,
            mode,
        }
    }

    pub fn strict(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data, Mode::Strict)
    }

    pub fn lax(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data, Mode::Lax)
    }

    pub fn from_path(path: &Path, mode: Mode) -> Result<Self, StreamError> {
        let data = std::fs::read(path).map_err(|source| StreamError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(data, mode))
    }

    pub fn from_reader(mut reader: impl Read, mode: Mode) -> io::Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::new(data, mode))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Read an integer in `lo..=hi`, labelled for diagnostics.
    pub fn read_int(&mut self, lo: i64, hi: i64, label: &str) -> Result<i64, StreamError> {
        self.skip_lax_whitespace();
        let position = self.position();
        let token = self.read_raw_token(label)?;
        let value = parse_int(&token).ok_or_else(|| StreamError::InvalidInt {
            label: label.to_string(),
            token: token.clone(),
            position,
        })?;
        if value < lo || value > hi {
            return Err(StreamError::OutOfBounds {
                label: label.to_string(),
                value,
                min: lo,
                max: hi,
                position,
            });
        }
        Ok(value)
    }

    /// Read a maximal run of non-whitespace bytes.
    pub fn read_word(&mut self) -> Result<String, StreamError> {
        self.read_token("word")
    }

    pub fn read_token(&mut self, expected: &str) -> Result<String, StreamError> {
        self.skip_lax_whitespace();
        self.read_raw_token(expected)
    }

    pub fn read_space(&mut self) -> Result<(), StreamError> {
        match self.mode {
            Mode::Strict => self.expect_byte(b' ', "space"),
            Mode::Lax => {
                self.skip_lax_whitespace();
                Ok(())
            }
        }
    }

    /// Consume a line break: `\n` or `\r\n`.
    pub fn read_eoln(&mut self) -> Result<(), StreamError> {
        match self.mode {
            Mode::Strict => {
                if self.peek() == Some(b'\r') {
                    self.bump();
                }
                self.expect_byte(b'\n', "end of line")
            }
            Mode::Lax => {
                self.skip_lax_whitespace();
                Ok(())
            }
        }
    }

    pub fn read_eof(&mut self) -> Result<(), StreamError> {
        self.skip_lax_whitespace();
        if self.pos < self.data.len() {
            return Err(StreamError::ExpectedEof {
                position: self.position(),
            });
        }
        Ok(())
    }

    /// Skip whitespace in any mode and report whether the data is exhausted.
    pub fn seek_eof(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.data.len()
    }

    fn read_raw_token(&mut self, expected: &str) -> Result<String, StreamError> {
        let position = self.position();
        match self.peek() {
            None => {
                return Err(StreamError::UnexpectedEof {
                    expected: expected.to_string(),
                    position,
                })
            }
            Some(b) if b.is_ascii_whitespace() => {
                return Err(StreamError::Expected {
                    expected: "token",
                    found: char::from(b),
                    position,
                })
            }
            Some(_) => {}
        }
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                break;
            }
            self.bump();
        }
        Ok(String::from_utf8_lossy(&self.data[start..self.pos]).into_owned())
    }

    fn expect_byte(&mut self, want: u8, expected: &'static str) -> Result<(), StreamError> {
        let position = self.position();
        match self.peek() {
            Some(b) if b == want => {
                self.bump();
                Ok(())
            }
            Some(b) => Err(StreamError::Expected {
                expected,
                found: char::from(b),
                position,
            }),
            None => Err(StreamError::UnexpectedEof {
                expected: expected.to_string(),
                position,
            }),
        }
    }

    fn skip_lax_whitespace(&mut self) {
        if self.mode == Mode::Lax {
            self.skip_whitespace();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }
}

/// Canonical decimal integer: optional `-`, no leading zeros, no `-0`.
fn parse_int(token: &str) -> Option<i64> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if negative && digits == "0" {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_grammar() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("-17"), Some(-17));
        assert_eq!(parse_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int("007"), None);
        assert_eq!(parse_int("-0"), None);
        assert_eq!(parse_int("+5"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("1e5"), None);
        assert_eq!(parse_int("9223372036854775808"), None);
    }

    #[test]
    fn test_position_tracks_lines() {
        let mut s = InStream::strict("12\n34");
        s.read_int(0, 100, "a").unwrap();
        s.read_eoln().unwrap();
        assert_eq!(s.position(), Position { line: 2, column: 1 });
        s.read_int(0, 100, "b").unwrap();
        assert_eq!(s.position(), Position { line: 2, column: 3 });
    }

    #[test]
    fn test_crlf_is_one_line_break() {
        let mut s = InStream::strict("1\r\n");
        s.read_int(1, 1, "x").unwrap();
        s.read_eoln().unwrap();
        s.read_eof().unwrap();
    }

    #[test]
    fn test_strict_rejects_leading_space() {
        let mut s = InStream::strict(" 1");
        let err = s.read_int(0, 9, "x").unwrap_err();
        assert!(matches!(err, StreamError::Expected { found: ' ', .. }));
    }

    #[test]
    fn test_lax_skips_whitespace() {
        let mut s = InStream::lax("  \n first\t\tsecond \n\n");
        assert_eq!(s.read_word().unwrap(), "first");
        assert_eq!(s.read_word().unwrap(), "second");
        assert!(s.seek_eof());
        s.read_eof().unwrap();
    }
}
