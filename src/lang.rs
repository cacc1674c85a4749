//! Language detection and parser registration
//!
//! [`ParserDefinition`] is what the host sees when registering the Kotlin
//! tagger: file extensions, the kind table and the keyword spellings.
//! [`KotlinParser::initialize`] is the initialization hook; the returned
//! parser owns every table the tagger reads and is shared read-only across
//! files.

use std::path::Path;

use crate::delimiters::DelimiterSet;
use crate::error::{KtagsError, Result};
use crate::keywords::{Keyword, KeywordTable, LanguageId, KOTLIN_KEYWORDS};
use crate::lexer::{Lexer, LexerConfig};
use crate::recognizer::Recognizer;
use crate::source::SourceReader;
use crate::tag::{Tag, TagKind, TagSink};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Kotlin,
    KotlinScript,
}

impl Lang {
    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| KtagsError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "kt" => Ok(Self::Kotlin),
            "kts" => Ok(Self::KotlinScript),
            _ => Err(KtagsError::UnsupportedLanguage {
                extension: ext.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Kotlin => "kotlin",
            Self::KotlinScript => "kotlin-script",
        }
    }
}

/// One entry of the kind table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindDefinition {
    pub enabled: bool,
    pub letter: char,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: TagKind,
}

impl From<TagKind> for KindDefinition {
    fn from(kind: TagKind) -> Self {
        Self {
            enabled: true,
            letter: kind.letter(),
            name: kind.name(),
            description: kind.description(),
            kind,
        }
    }
}

/// Registration record handed to the host
#[derive(Debug, Clone)]
pub struct ParserDefinition {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub kinds: Vec<KindDefinition>,
    pub keywords: &'static [(&'static str, Keyword)],
}

impl ParserDefinition {
    pub fn kotlin() -> Self {
        Self {
            name: "Kotlin",
            extensions: &["kt", "kts"],
            kinds: TagKind::ALL.into_iter().map(KindDefinition::from).collect(),
            keywords: KOTLIN_KEYWORDS,
        }
    }

    pub fn handles_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Initialized Kotlin tagger.
///
/// Immutable while tagging, so a single instance can serve many files at
/// once; every [`KotlinParser::find_tags`] call builds its own lexer state.
#[derive(Debug, Clone)]
pub struct KotlinParser {
    language: LanguageId,
    keywords: KeywordTable,
    delimiters: &'static DelimiterSet,
    kinds: Vec<KindDefinition>,
}

impl KotlinParser {
    pub fn definition() -> ParserDefinition {
        ParserDefinition::kotlin()
    }

    /// Initialization hook: remember the host's language id and register
    /// the keyword spellings under it.
    pub fn initialize(language: LanguageId) -> Self {
        let definition = Self::definition();
        let mut keywords = KeywordTable::new();
        keywords.register(language, definition.keywords);

        Self {
            language,
            keywords,
            delimiters: DelimiterSet::kotlin(),
            kinds: definition.kinds,
        }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn kinds(&self) -> &[KindDefinition] {
        &self.kinds
    }

    pub fn is_kind_enabled(&self, kind: TagKind) -> bool {
        self.kinds.iter().any(|k| k.kind == kind && k.enabled)
    }

    pub fn set_kind_enabled(&mut self, kind: TagKind, enabled: bool) {
        for def in self.kinds.iter_mut().filter(|k| k.kind == kind) {
            def.enabled = enabled;
        }
    }

    /// Enable exactly the listed kinds
    pub fn enable_only(&mut self, kinds: &[TagKind]) {
        for def in &mut self.kinds {
            def.enabled = kinds.contains(&def.kind);
        }
    }

    /// Tag one source buffer. Tags of disabled kinds never reach `sink`.
    /// Returns the number of tags delivered.
    pub fn find_tags<K: TagSink + ?Sized>(&self, source: &[u8], sink: &mut K) -> usize {
        let config = LexerConfig {
            delimiters: self.delimiters,
            keywords: &self.keywords,
            language: self.language,
        };
        let lexer = Lexer::new(SourceReader::new(source), config);

        let mut filter = EnabledKinds {
            parser: self,
            inner: sink,
            delivered: 0,
        };
        Recognizer::new(lexer).run(&mut filter);
        filter.delivered
    }

    /// Convenience wrapper collecting tags into a vector
    pub fn tags(&self, source: &[u8]) -> Vec<Tag> {
        let mut tags = Vec::new();
        self.find_tags(source, &mut tags);
        tags
    }
}

struct EnabledKinds<'a, K: ?Sized> {
    parser: &'a KotlinParser,
    inner: &'a mut K,
    delivered: usize,
}

impl<K: TagSink + ?Sized> TagSink for EnabledKinds<'_, K> {
    fn emit(&mut self, tag: Tag) {
        if self.parser.is_kind_enabled(tag.kind) {
            self.inner.emit(tag);
            self.delivered += 1;
        }
    }
}
