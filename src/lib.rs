//! kotlin-tags: top-level declaration tagger for Kotlin
//!
//! Finds classes, interfaces, objects, functions (including extension and
//! generic functions), type aliases and `const val` constants in Kotlin
//! sources without a full parse. A hand-written lexer feeds a small
//! keyword-driven recognizer; anything it does not understand is skipped to
//! the end of the line.
//!
//! # Example
//!
//! ```
//! use kotlin_tags::{KotlinParser, LanguageId, TagKind};
//!
//! let parser = KotlinParser::initialize(LanguageId(0));
//! let tags = parser.tags(b"fun String.shout(): String = uppercase()\n");
//!
//! assert_eq!(tags.len(), 1);
//! assert_eq!(tags[0].name, "shout");
//! assert_eq!(tags[0].kind, TagKind::Function);
//! ```

pub mod cli;
pub mod config;
pub mod delimiters;
pub mod error;
pub mod indexing;
pub mod keywords;
pub mod lang;
pub mod lexer;
pub mod output;
pub mod recognizer;
pub mod skip;
pub mod source;
pub mod tag;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::{FileConfig, Settings};
pub use error::{KtagsError, Result};
pub use keywords::{Keyword, KeywordTable, LanguageId};
pub use lang::{KindDefinition, KotlinParser, Lang, ParserDefinition};
pub use lexer::{Lexer, LexerConfig, Token, TokenKind};
pub use recognizer::{Recognizer, Rule, SkipTo, Step, TokenCursor};
pub use source::{CharSource, FilePosition, SourceReader};
pub use tag::{Tag, TagKind, TagSink};
