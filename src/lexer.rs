//! Kotlin token scanner
//!
//! Produces one classified [`Token`] per call. Only the shape needed to find
//! top-level declarations is recognized: punctuation that matters for
//! brackets and dots, comment openers, numbers, and delimiter-terminated
//! words resolved against the keyword table.

use crate::delimiters::DelimiterSet;
use crate::keywords::{Keyword, KeywordTable, LanguageId};
use crate::skip::{self, Bracket};
use crate::source::{CharSource, FilePosition};

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    /// Reserved; string literals are scanned as words.
    String,
    Number,
    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    AngleOpen,
    AngleClose,
    Semicolon,
    Comma,
    Dot,
    Colon,
    Dollar,
    CommentLineStart,
    CommentBlockStart,
    EndOfInput,
    Other,
}

/// One scanned token with the location of its first byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Set only when `kind` is [`TokenKind::Keyword`]
    pub keyword: Option<Keyword>,
    pub text: String,
    pub line: u64,
    pub position: FilePosition,
}

impl Token {
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword == Some(keyword)
    }
}

/// Shared, read-only tables a lexer is built from.
#[derive(Debug, Clone, Copy)]
pub struct LexerConfig<'t> {
    pub delimiters: &'t DelimiterSet,
    pub keywords: &'t KeywordTable,
    pub language: LanguageId,
}

/// Pull-based tokenizer over a [`CharSource`].
pub struct Lexer<'t, S> {
    src: S,
    config: LexerConfig<'t>,
    buffer: Vec<u8>,
}

impl<'t, S: CharSource> Lexer<'t, S> {
    pub fn new(src: S, config: LexerConfig<'t>) -> Self {
        Self {
            src,
            config,
            buffer: Vec::with_capacity(64),
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.buffer.clear();

        let (first, line, position) = loop {
            let line = self.src.current_line();
            let position = self.src.current_position();
            match self.src.get_char() {
                None => return self.finish(TokenKind::EndOfInput, line, position),
                Some(b' ' | b'\r' | b'\n' | b'\t') => continue,
                Some(ch) => break (ch, line, position),
            }
        };

        self.buffer.push(first);
        let kind = match first {
            b'(' => TokenKind::ParenOpen,
            b')' => TokenKind::ParenClose,
            b'{' => TokenKind::BraceOpen,
            b'}' => TokenKind::BraceClose,
            b'[' => TokenKind::BracketOpen,
            b']' => TokenKind::BracketClose,
            b'.' => TokenKind::Dot,
            b',' => TokenKind::Comma,
            b'<' => TokenKind::AngleOpen,
            b'>' => TokenKind::AngleClose,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'$' => TokenKind::Dollar,
            b'/' => self.scan_slash(),
            b'0'..=b'9' => self.scan_number(),
            _ => return self.scan_word(line, position),
        };

        self.finish(kind, line, position)
    }

    /// Skip a comment whose opener was just returned as a token.
    pub fn skip_comment(&mut self, kind: TokenKind) {
        match kind {
            TokenKind::CommentLineStart => skip::skip_line_comment(&mut self.src),
            TokenKind::CommentBlockStart => skip::skip_block_comment(&mut self.src),
            _ => {}
        }
    }

    /// Skip until `bracket` (already opened) is balanced again.
    pub fn skip_balanced(&mut self, bracket: Bracket) -> bool {
        skip::skip_balanced(&mut self.src, bracket)
    }

    pub fn skip_until_eol(&mut self) {
        skip::skip_until_eol(&mut self.src);
    }

    fn scan_slash(&mut self) -> TokenKind {
        match self.src.get_char() {
            Some(b'/') => {
                self.buffer.push(b'/');
                TokenKind::CommentLineStart
            }
            Some(b'*') => {
                self.buffer.push(b'*');
                TokenKind::CommentBlockStart
            }
            Some(other) => {
                self.src.unget_char(other);
                TokenKind::Other
            }
            None => TokenKind::Other,
        }
    }

    /// Digits and underscores, then optionally `.`, more digits and a
    /// trailing `f`. Exponents and radix prefixes are left to the next token.
    fn scan_number(&mut self) -> TokenKind {
        self.take_digits();
        match self.src.get_char() {
            Some(b'.') => {
                self.buffer.push(b'.');
                self.take_digits();
                match self.src.get_char() {
                    Some(b'f') => self.buffer.push(b'f'),
                    Some(other) => self.src.unget_char(other),
                    None => {}
                }
            }
            Some(other) => self.src.unget_char(other),
            None => {}
        }
        TokenKind::Number
    }

    fn take_digits(&mut self) {
        while let Some(ch) = self.src.get_char() {
            if ch.is_ascii_digit() || ch == b'_' {
                self.buffer.push(ch);
            } else {
                self.src.unget_char(ch);
                return;
            }
        }
    }

    fn scan_word(&mut self, line: u64, position: FilePosition) -> Token {
        while let Some(ch) = self.src.get_char() {
            if self.config.delimiters.contains(ch) {
                self.src.unget_char(ch);
                break;
            }
            self.buffer.push(ch);
        }

        let text = String::from_utf8_lossy(&self.buffer).into_owned();
        let keyword = self.config.keywords.lookup(&text, self.config.language);
        Token {
            kind: if keyword.is_some() {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            },
            keyword,
            text,
            line,
            position,
        }
    }

    fn finish(&self, kind: TokenKind, line: u64, position: FilePosition) -> Token {
        Token {
            kind,
            keyword: None,
            text: String::from_utf8_lossy(&self.buffer).into_owned(),
            line,
            position,
        }
    }
}
