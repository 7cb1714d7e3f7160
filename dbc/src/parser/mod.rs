//! Grammar tokens — the lexical primitives the DBC parser is built from
//! (quoted strings, identifiers, signed/unsigned integers, floats, hex
//! frame ids). Hand-rolled rather than built on a parser-combinator crate:
//! the grammar is small and fixed, and a dependency buys nothing here.

pub mod keyword;

use crate::error::{Error, Result};

/// A cursor over a DBC source buffer, tracking line/column for diagnostics.
pub struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input: input.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
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

    /// Skips spaces and tabs only (not newlines).
    pub fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t') | Some(b'\r')) {
            self.advance();
        }
    }

    /// Skips any run of whitespace, including newlines and `//` line comments.
    pub fn skip_newlines_and_spaces(&mut self) {
        loop {
            match self.peek() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.advance();
                }
                Some(b'/') if self.input.get(self.pos + 1) == Some(&b'/') => {
                    self.skip_to_end_of_line();
                }
                _ => break,
            }
        }
    }

    pub fn skip_to_end_of_line(&mut self) {
        while !matches!(self.peek(), None | Some(b'\n')) {
            self.advance();
        }
    }

    pub fn starts_with(&self, literal: &str) -> bool {
        self.input[self.pos..].starts_with(literal.as_bytes())
    }

    /// Consumes `literal` if present at the cursor, erroring otherwise.
    pub fn expect(&mut self, literal: &str) -> Result<()> {
        if self.starts_with(literal) {
            for _ in 0..literal.len() {
                self.advance();
            }
            Ok(())
        } else {
            Err(Error::expected(literal.to_string(), self.line, self.column))
        }
    }

    /// Like [`Self::expect`] but returns `false` instead of erroring.
    pub fn accept(&mut self, literal: &str) -> bool {
        if self.starts_with(literal) {
            for _ in 0..literal.len() {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    pub fn parse_identifier(&mut self) -> Result<String> {
        let start = self.pos;
        if !matches!(self.peek(), Some(b) if b.is_ascii_alphabetic() || b == b'_') {
            return Err(Error::expected("identifier", self.line, self.column));
        }
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.advance();
        }
        Ok(String::from_utf8_lossy(&self.input[start..self.pos]).into_owned())
    }

    /// Parses a double-quoted string, honouring `\"` escapes.
    pub fn parse_quoted_string(&mut self) -> Result<String> {
        self.expect("\"")?;
        let mut out = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(Error::parse(
                        self.line,
                        self.column,
                        crate::error::messages::UNTERMINATED_STRING,
                    ));
                }
                Some(b'"') => {
                    self.advance();
                    break;
                }
                Some(b'\\') if self.input.get(self.pos + 1) == Some(&b'"') => {
                    self.advance();
                    self.advance();
                    out.push('"');
                }
                Some(_) => {
                    // Walk a full UTF-8 scalar so multi-byte text round-trips.
                    let rest = std::str::from_utf8(&self.input[self.pos..])
                        .unwrap_or_default();
                    if let Some(c) = rest.chars().next() {
                        for _ in 0..c.len_utf8() {
                            self.advance();
                        }
                        out.push(c);
                    } else {
                        self.advance();
                    }
                }
            }
        }
        Ok(out)
    }

    pub fn parse_i64(&mut self) -> Result<i64> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'-') | Some(b'+')) {
            self.advance();
        }
        let digits_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.advance();
        }
        if self.pos == digits_start {
            self.pos = start;
            return Err(Error::expected("integer", self.line, self.column));
        }
        let text = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or("");
        text.parse::<i64>()
            .map_err(|_| Error::parse(self.line, self.column, "invalid integer"))
    }

    pub fn parse_u64(&mut self) -> Result<u64> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.advance();
        }
        if self.pos == start {
            return Err(Error::expected("unsigned integer", self.line, self.column));
        }
        let text = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or("");
        text.parse::<u64>()
            .map_err(|_| Error::parse(self.line, self.column, "invalid unsigned integer"))
    }

    /// Parses a float, stopping before any trailing delimiter; if no digits
    /// are consumed at all the position is left unchanged and an error is
    /// returned (callers use this to detect "empty field" vs "malformed").
    pub fn parse_f64(&mut self) -> Result<f64> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'-') | Some(b'+')) {
            self.advance();
        }
        let mut saw_digit = false;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.advance();
            saw_digit = true;
        }
        if self.peek() == Some(b'.') {
            self.advance();
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.advance();
                saw_digit = true;
            }
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) && saw_digit {
            let mark = self.pos;
            self.advance();
            if matches!(self.peek(), Some(b'-') | Some(b'+')) {
                self.advance();
            }
            let exp_start = self.pos;
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.advance();
            }
            if self.pos == exp_start {
                self.pos = mark;
            }
        }
        if !saw_digit {
            self.pos = start;
            return Err(Error::expected("number", self.line, self.column));
        }
        let text = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or("");
        text.parse::<f64>()
            .map_err(|_| Error::parse(self.line, self.column, "invalid number"))
    }

    /// Parses an unsigned hexadecimal integer (no `0x` prefix), used for the
    /// CLI's candump-style frame ids.
    pub fn parse_hex_u32(&mut self) -> Result<u32> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_hexdigit()) {
            self.advance();
        }
        if self.pos == start {
            return Err(Error::expected("hex integer", self.line, self.column));
        }
        let text = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or("");
        u32::from_str_radix(text, 16)
            .map_err(|_| Error::parse(self.line, self.column, "invalid hex integer"))
    }

    /// Captures the remainder of the current line (not including the newline).
    pub fn capture_rest_of_line(&mut self) -> String {
        let start = self.pos;
        self.skip_to_end_of_line();
        String::from_utf8_lossy(&self.input[start..self.pos])
            .trim()
            .to_string()
    }

    /// Captures everything from the cursor up to (not including) the next
    /// unquoted `;`, then consumes that `;`. Used for attribute/value-table
    /// records this crate preserves verbatim rather than interpreting; the
    /// terminating `;` itself is never part of the returned text, since
    /// callers re-append it on emit.
    pub fn capture_until_semicolon(&mut self) -> Result<String> {
        let start = self.pos;
        let mut in_string = false;
        let mut end = self.pos;
        loop {
            match self.peek() {
                None => {
                    return Err(Error::UnexpectedEof {
                        line: self.line,
                        column: self.column,
                    });
                }
                Some(b'"') => {
                    in_string = !in_string;
                    self.advance();
                }
                Some(b'\\') if in_string && self.input.get(self.pos + 1) == Some(&b'"') => {
                    self.advance();
                    self.advance();
                }
                Some(b';') if !in_string => {
                    end = self.pos;
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        Ok(String::from_utf8_lossy(&self.input[start..end])
            .trim()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_and_whitespace() {
        let mut p = Parser::new("  \n  FooBar_1 rest");
        p.skip_newlines_and_spaces();
        assert_eq!(p.parse_identifier().unwrap(), "FooBar_1");
    }

    #[test]
    fn quoted_string_with_escape() {
        let mut p = Parser::new(r#""hello \"world\"""#);
        assert_eq!(p.parse_quoted_string().unwrap(), "hello \"world\"");
    }

    #[test]
    fn signed_and_unsigned_integers() {
        let mut p = Parser::new("-42 7");
        assert_eq!(p.parse_i64().unwrap(), -42);
        p.skip_spaces();
        assert_eq!(p.parse_u64().unwrap(), 7);
    }

    #[test]
    fn floats_with_exponent() {
        let mut p = Parser::new("0.0001 -1e-3");
        assert_eq!(p.parse_f64().unwrap(), 0.0001);
        p.skip_spaces();
        assert_eq!(p.parse_f64().unwrap(), -1e-3);
    }

    #[test]
    fn capture_until_semicolon_respects_strings() {
        let mut p = Parser::new(r#" "a; b" rest; tail"#);
        let captured = p.capture_until_semicolon().unwrap();
        assert_eq!(captured, r#""a; b" rest"#);
    }
}
