//! Kotlin reserved words and the host keyword lookup table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Language handle assigned by the host at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageId(pub u32);

/// Reserved words the recognizer cares about.
///
/// Only declaration keywords and modifiers are listed; every other word of
/// the language is scanned as a plain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Package,
    Import,
    Class,
    Interface,
    Object,
    TypeAlias,
    Fun,
    Val,
    Var,

    Private,
    Protected,
    Public,
    Internal,
    Sealed,
    Enum,
    Abstract,
    Open,
    Override,
    Final,
    Suspend,
    Const,
}

impl Keyword {
    /// Source spelling of the keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Import => "import",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::TypeAlias => "typealias",
            Self::Fun => "fun",
            Self::Val => "val",
            Self::Var => "var",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Sealed => "sealed",
            Self::Enum => "enum",
            Self::Abstract => "abstract",
            Self::Open => "open",
            Self::Override => "override",
            Self::Final => "final",
            Self::Suspend => "suspend",
            Self::Const => "const",
        }
    }
}

/// Spelling table registered for Kotlin.
pub const KOTLIN_KEYWORDS: &[(&str, Keyword)] = &[
    ("package", Keyword::Package),
    ("import", Keyword::Import),
    ("class", Keyword::Class),
    ("interface", Keyword::Interface),
    ("object", Keyword::Object),
    ("typealias", Keyword::TypeAlias),
    ("fun", Keyword::Fun),
    ("val", Keyword::Val),
    ("var", Keyword::Var),
    ("private", Keyword::Private),
    ("protected", Keyword::Protected),
    ("public", Keyword::Public),
    ("internal", Keyword::Internal),
    ("sealed", Keyword::Sealed),
    ("enum", Keyword::Enum),
    ("abstract", Keyword::Abstract),
    ("open", Keyword::Open),
    ("override", Keyword::Override),
    ("final", Keyword::Final),
    ("suspend", Keyword::Suspend),
    ("const", Keyword::Const),
];

/// Keyword lookup keyed by language.
#[derive(Debug, Default, Clone)]
pub struct KeywordTable {
    languages: HashMap<LanguageId, HashMap<&'static str, Keyword>>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or extend) the reserved words of `language`.
    pub fn register(&mut self, language: LanguageId, entries: &[(&'static str, Keyword)]) {
        let words = self.languages.entry(language).or_default();
        words.extend(entries.iter().copied());
    }

    /// Look up `text` among the reserved words of `language`.
    pub fn lookup(&self, text: &str, language: LanguageId) -> Option<Keyword> {
        self.languages.get(&language)?.get(text).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_spellings_round_trip() {
        for (spelling, keyword) in KOTLIN_KEYWORDS {
            assert_eq!(keyword.as_str(), *spelling);
        }
        assert_eq!(KOTLIN_KEYWORDS.len(), 21);
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let lang = LanguageId(3);
        let mut table = KeywordTable::new();
        table.register(lang, KOTLIN_KEYWORDS);

        assert_eq!(table.lookup("fun", lang), Some(Keyword::Fun));
        assert_eq!(table.lookup("typealias", lang), Some(Keyword::TypeAlias));
        assert_eq!(table.lookup("Fun", lang), None);
        assert_eq!(table.lookup("data", lang), None);
    }

    #[test]
    fn test_lookup_is_per_language() {
        let mut table = KeywordTable::new();
        table.register(LanguageId(1), KOTLIN_KEYWORDS);
        assert_eq!(table.lookup("class", LanguageId(2)), None);
    }
}
