// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded-length text values.

use super::constants::MAX_TOKEN_LENGTH;
use std::fmt;

/// A short text value compared with ordinary string ordering.
///
/// Construction keeps at most `MAX_TOKEN_LENGTH` characters (or a caller
/// supplied limit); anything longer is dropped without error.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(text: &str) -> Self {
        Self::with_limit(text, MAX_TOKEN_LENGTH)
    }

    /// Create a token holding at most `limit` characters of `text`.
    pub fn with_limit(text: &str, limit: usize) -> Self {
        match text.char_indices().nth(limit) {
            Some((cut, _)) => Token(text[..cut].to_string()),
            None => Token(text.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters held.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
