//! Tag records handed to the output sink

use serde::{Deserialize, Serialize};

use crate::source::FilePosition;

/// Kind of a recognized declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Class,
    Function,
    TypeAlias,
    Const,
}

impl TagKind {
    pub const ALL: [TagKind; 4] = [Self::Class, Self::Function, Self::TypeAlias, Self::Const];

    /// Single-letter kind used in ctags output
    pub fn letter(&self) -> char {
        match self {
            Self::Class => 'c',
            Self::Function => 'f',
            Self::TypeAlias => 't',
            Self::Const => 'C',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::TypeAlias => "typealias",
            Self::Const => "const",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Class => "classes",
            Self::Function => "functions",
            Self::TypeAlias => "typealiases",
            Self::Const => "constants",
        }
    }

    /// Resolve a kind from its letter or its name
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == text || kind.letter().to_string() == text)
    }
}

/// One recognized top-level declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    pub line: u64,
    pub position: FilePosition,
}

/// Receiver of emitted tags
pub trait TagSink {
    fn emit(&mut self, tag: Tag);
}

impl TagSink for Vec<Tag> {
    fn emit(&mut self, tag: Tag) {
        self.push(tag);
    }
}

impl<T: TagSink + ?Sized> TagSink for &mut T {
    fn emit(&mut self, tag: Tag) {
        (**self).emit(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_letter_or_name() {
        assert_eq!(TagKind::parse("c"), Some(TagKind::Class));
        assert_eq!(TagKind::parse("C"), Some(TagKind::Const));
        assert_eq!(TagKind::parse("typealias"), Some(TagKind::TypeAlias));
        assert_eq!(TagKind::parse("functions"), None);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TagKind::TypeAlias).unwrap();
        assert_eq!(json, "\"typealias\"");
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink: Vec<Tag> = Vec::new();
        for (i, name) in ["a", "b"].iter().enumerate() {
            sink.emit(Tag {
                name: name.to_string(),
                kind: TagKind::Function,
                line: i as u64 + 1,
                position: FilePosition::new(0),
            });
        }
        let names: Vec<_> = sink.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
