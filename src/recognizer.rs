//! Top-level declaration recognizer
//!
//! The driver pulls tokens and, on a keyword, hands control to the
//! production [`Rule`] for that keyword. A rule reads at most a few tokens
//! of lookahead and reports a [`Step`]: emit a tag, skip ahead, or carry on.
//! Anything the rules do not understand is recovered from by discarding the
//! rest of the line, so malformed input can only cost tags, never abort.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::keywords::Keyword;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::skip::Bracket;
use crate::source::CharSource;
use crate::tag::{Tag, TagKind, TagSink};

/// Token stream the rules and the driver consume.
pub trait TokenCursor {
    fn next_token(&mut self) -> Token;

    /// Skip until `bracket`, whose opener was the last token, is closed.
    /// Returns `false` when input ran out first.
    fn skip_balanced(&mut self, bracket: Bracket) -> bool;

    /// Discard the body of a comment whose opener was the last token.
    fn skip_comment(&mut self, kind: TokenKind);

    fn skip_until_eol(&mut self);
}

impl<S: CharSource> TokenCursor for Lexer<'_, S> {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }

    fn skip_balanced(&mut self, bracket: Bracket) -> bool {
        Lexer::skip_balanced(self, bracket)
    }

    fn skip_comment(&mut self, kind: TokenKind) {
        Lexer::skip_comment(self, kind)
    }

    fn skip_until_eol(&mut self) {
        Lexer::skip_until_eol(self)
    }
}

/// How far to discard input before resuming the top-level scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipTo {
    EndOfLine,
    EndOfInput,
}

/// Outcome of applying one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Emitted { tag: Tag, then: Option<SkipTo> },
    Skip(SkipTo),
}

/// Production selected by a top-level keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `public`, `open`, `suspend`, ...: wait for the declaration keyword
    Modifier,
    /// `class` / `interface` / `object` NAME
    ClassLike,
    /// `typealias` NAME
    TypeAlias,
    /// `const` `val` NAME
    Const,
    /// `fun` [`<...>`] NAME `(` | `fun` [`<...>`] RECEIVER `.` NAME
    Function,
    /// `package`, `import`, `val`, `var`, `enum`
    SkipLine,
}

impl Rule {
    pub fn for_keyword(keyword: Keyword) -> Rule {
        match keyword {
            Keyword::Public
            | Keyword::Internal
            | Keyword::Private
            | Keyword::Protected
            | Keyword::Abstract
            | Keyword::Open
            | Keyword::Final
            | Keyword::Override
            | Keyword::Sealed
            | Keyword::Suspend => Rule::Modifier,
            Keyword::Class | Keyword::Interface | Keyword::Object => Rule::ClassLike,
            Keyword::TypeAlias => Rule::TypeAlias,
            Keyword::Const => Rule::Const,
            Keyword::Fun => Rule::Function,
            Keyword::Package | Keyword::Import | Keyword::Val | Keyword::Var | Keyword::Enum => {
                Rule::SkipLine
            }
        }
    }

    /// Maximum number of tokens the rule reads past its keyword, not
    /// counting a skipped type-parameter list.
    pub fn lookahead(&self) -> usize {
        match self {
            Rule::Modifier | Rule::SkipLine => 0,
            Rule::ClassLike | Rule::TypeAlias => 1,
            Rule::Const => 2,
            Rule::Function => 3,
        }
    }

    pub fn apply<C: TokenCursor + ?Sized>(&self, cursor: &mut C) -> Step {
        match self {
            Rule::Modifier => Step::Continue,
            Rule::SkipLine => Step::Skip(SkipTo::EndOfLine),
            Rule::ClassLike => {
                let name = cursor.next_token();
                if name.is_identifier() {
                    emit(name, TagKind::Class, Some(SkipTo::EndOfLine))
                } else {
                    Step::Skip(SkipTo::EndOfLine)
                }
            }
            Rule::TypeAlias => {
                // The `= Type` tail is left to the top-level scan
                let name = cursor.next_token();
                if name.is_identifier() {
                    emit(name, TagKind::TypeAlias, None)
                } else {
                    Step::Continue
                }
            }
            Rule::Const => {
                if !cursor.next_token().is_keyword(Keyword::Val) {
                    return Step::Skip(SkipTo::EndOfLine);
                }
                let name = cursor.next_token();
                if name.is_identifier() {
                    emit(name, TagKind::Const, Some(SkipTo::EndOfLine))
                } else {
                    Step::Skip(SkipTo::EndOfLine)
                }
            }
            Rule::Function => function(cursor),
        }
    }
}

fn function<C: TokenCursor + ?Sized>(cursor: &mut C) -> Step {
    let mut candidate = cursor.next_token();
    if candidate.kind == TokenKind::AngleOpen {
        if !cursor.skip_balanced(Bracket::Angle) {
            return Step::Skip(SkipTo::EndOfInput);
        }
        candidate = cursor.next_token();
    }

    if !candidate.is_identifier() {
        return Step::Skip(SkipTo::EndOfLine);
    }

    let follow = cursor.next_token();
    match follow.kind {
        // `candidate` was the receiver type; the receiver is never tagged
        TokenKind::Dot => {
            let name = cursor.next_token();
            if name.is_identifier() {
                emit(name, TagKind::Function, None)
            } else {
                Step::Skip(SkipTo::EndOfLine)
            }
        }
        TokenKind::ParenOpen => emit(candidate, TagKind::Function, None),
        _ => Step::Skip(SkipTo::EndOfLine),
    }
}

fn emit(token: Token, kind: TagKind, then: Option<SkipTo>) -> Step {
    Step::Emitted {
        tag: Tag {
            name: token.text,
            kind,
            line: token.line,
            position: token.position,
        },
        then,
    }
}

/// Flat driver loop over a [`TokenCursor`].
pub struct Recognizer<C> {
    cursor: C,
}

impl<C: TokenCursor> Recognizer<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Scan to end of input, emitting every recognized declaration into
    /// `sink` in source order. Returns the number of tags emitted.
    pub fn run<K: TagSink + ?Sized>(&mut self, sink: &mut K) -> usize {
        let mut emitted = 0;

        loop {
            let token = self.cursor.next_token();
            let step = match token.kind {
                TokenKind::EndOfInput => break,
                TokenKind::CommentLineStart | TokenKind::CommentBlockStart => {
                    self.cursor.skip_comment(token.kind);
                    continue;
                }
                TokenKind::Keyword => match token.keyword {
                    Some(keyword) => Rule::for_keyword(keyword).apply(&mut self.cursor),
                    None => Step::Continue,
                },
                // Stray identifiers and punctuation at top level
                _ => Step::Continue,
            };

            let recovery = match step {
                Step::Continue => None,
                Step::Emitted { tag, then } => {
                    trace!(name = %tag.name, kind = tag.kind.name(), line = tag.line, "tag");
                    sink.emit(tag);
                    emitted += 1;
                    then
                }
                Step::Skip(to) => Some(to),
            };

            if let Some(to) = recovery {
                if self.recover(to).is_break() {
                    break;
                }
            }
        }

        emitted
    }

    fn recover(&mut self, to: SkipTo) -> ControlFlow<()> {
        match to {
            SkipTo::EndOfLine => {
                self.cursor.skip_until_eol();
                ControlFlow::Continue(())
            }
            SkipTo::EndOfInput => {
                debug!("unterminated bracket, abandoning rest of input");
                ControlFlow::Break(())
            }
        }
    }
}
