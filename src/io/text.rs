//! Whitespace-delimited text input for vectors and matrices.
//!
//! Input is a plain stream of tokens separated by any whitespace, including
//! newlines; there is no length prefix or other framing. A vector consumes
//! exactly `size()` tokens in index order, a matrix consumes its rows one
//! after the other. Each token is parsed with the element type's `FromStr`.
//!
//! Reads are all-or-nothing: tokens are parsed into scratch storage and the
//! container is only overwritten once every element parsed.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{DmError, Result};
use crate::matrix::DynamicMatrix;
use crate::vector::DynamicVector;

/// Pulls whitespace-separated tokens out of a buffered reader, line by line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new() }
    }

    /// Next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Parse the next `count` tokens as `T`.
    pub fn parse_elements<T: FromStr>(&mut self, count: usize) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(count);
        for index in 0..count {
            let token = self
                .next_token()?
                .ok_or(DmError::UnexpectedEof { expected: count, read: index })?;
            match token.parse::<T>() {
                Ok(value) => out.push(value),
                Err(_) => return Err(DmError::Parse { index, token }),
            }
        }
        Ok(out)
    }

    /// Give back the underlying reader. Tokens already split off the current line are dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Containers that can be populated from a token stream.
pub trait TextRead {
    /// Overwrite every element from `tokens`, in index order.
    fn read_text<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<()>;

    /// Convenience wrapper that reads from a fresh reader.
    fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let mut tokens = TokenReader::new(reader);
        self.read_text(&mut tokens)
    }
}

impl<T: FromStr> TextRead for DynamicVector<T> {
    fn read_text<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<()> {
        let values = tokens.parse_elements(self.size())?;
        self.replace_contents(values)
    }
}

impl<T: FromStr + Clone> TextRead for DynamicMatrix<T> {
    fn read_text<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<()> {
        let mut staged = self.clone();
        for row in staged.rows_mut() {
            row.read_text(tokens)?;
        }
        *self = staged;
        Ok(())
    }
}
