//! Character-level skippers: balanced brackets, comments, rest of line
//!
//! These read the [`CharSource`] directly, below the token layer. Reaching
//! end of input while skipping is a normal stop, never an error.

use crate::source::CharSource;

/// The four bracket kinds tracked while skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Paren,
    Brace,
    Square,
    Angle,
}

impl Bracket {
    const ALL: [Bracket; 4] = [Bracket::Paren, Bracket::Brace, Bracket::Square, Bracket::Angle];

    pub fn open(self) -> u8 {
        match self {
            Self::Paren => b'(',
            Self::Brace => b'{',
            Self::Square => b'[',
            Self::Angle => b'<',
        }
    }

    pub fn close(self) -> u8 {
        match self {
            Self::Paren => b')',
            Self::Brace => b'}',
            Self::Square => b']',
            Self::Angle => b'>',
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Consume input until the bracket opened just before the call is closed.
///
/// All four bracket kinds are counted independently; the skip ends when
/// `expected`'s closing byte is read and every counter is back at zero.
/// Comments met along the way are skipped whole. Brackets inside string
/// literals are counted like any other.
///
/// Returns `false` if end of input was reached first.
pub fn skip_balanced<S: CharSource>(src: &mut S, expected: Bracket) -> bool {
    let mut depth = [0i32; 4];
    depth[expected.index()] += 1;

    while let Some(ch) = src.get_char() {
        if ch == b'/' {
            match src.get_char() {
                Some(b'/') => skip_line_comment(src),
                Some(b'*') => skip_block_comment(src),
                Some(other) => src.unget_char(other),
                None => return false,
            }
            continue;
        }

        for bracket in Bracket::ALL {
            if ch == bracket.open() {
                depth[bracket.index()] += 1;
            } else if ch == bracket.close() {
                depth[bracket.index()] -= 1;
            }
        }

        if ch == expected.close() && depth.iter().all(|d| *d == 0) {
            return true;
        }
    }

    false
}

/// Discard through the end of the current line.
pub fn skip_line_comment<S: CharSource>(src: &mut S) {
    skip_until_eol(src);
}

/// Discard through the first `*/`.
///
/// Block comments are not treated as nesting: `/* a /* b */` ends at the
/// first terminator.
pub fn skip_block_comment<S: CharSource>(src: &mut S) {
    let mut saw_star = false;
    while let Some(ch) = src.get_char() {
        if saw_star && ch == b'/' {
            return;
        }
        saw_star = ch == b'*';
    }
}

/// Discard everything up to and including the next newline.
pub fn skip_until_eol<S: CharSource>(src: &mut S) {
    while let Some(ch) = src.get_char() {
        if ch == b'\n' {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceReader;

    fn rest(src: &mut SourceReader<'_>) -> String {
        let mut out = Vec::new();
        while let Some(ch) = src.get_char() {
            out.push(ch);
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_skip_generic_parameter_list() {
        // Opening `<` already consumed by the caller
        let mut src = SourceReader::new(b"T : Comparable<T>> max(a: T)");
        assert!(skip_balanced(&mut src, Bracket::Angle));
        assert_eq!(rest(&mut src), " max(a: T)");
    }

    #[test]
    fn test_skip_counts_other_kinds_independently() {
        let mut src = SourceReader::new(b"a, (b), [c], {d}> tail");
        assert!(skip_balanced(&mut src, Bracket::Angle));
        assert_eq!(rest(&mut src), " tail");
    }

    #[test]
    fn test_skip_requires_all_counters_zero() {
        // `)` is read while the brace is still open, so the skip runs on
        let mut src = SourceReader::new(b"{ ) } tail");
        assert!(!skip_balanced(&mut src, Bracket::Paren));
        assert!(src.is_eof());
    }

    #[test]
    fn test_arrow_closes_angle_early() {
        // `->` is not distinguished from a closing angle bracket
        let mut src = SourceReader::new(b"R : (Int) -> Unit> tail");
        assert!(skip_balanced(&mut src, Bracket::Angle));
        assert_eq!(rest(&mut src), " Unit> tail");
    }

    #[test]
    fn test_skip_ignores_brackets_in_comments() {
        let mut src = SourceReader::new(b"x /* { ( */ y // ) }\n) done");
        assert!(skip_balanced(&mut src, Bracket::Paren));
        assert_eq!(rest(&mut src), " done");
    }

    #[test]
    fn test_skip_single_slash_is_ordinary() {
        let mut src = SourceReader::new(b"a / b) rest");
        assert!(skip_balanced(&mut src, Bracket::Paren));
        assert_eq!(rest(&mut src), " rest");
    }

    #[test]
    fn test_skip_truncates_at_eof() {
        let mut src = SourceReader::new(b"T, List<T");
        assert!(!skip_balanced(&mut src, Bracket::Angle));
        assert!(src.is_eof());
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        let mut src = SourceReader::new(b" outer /* inner */ still outer */");
        skip_block_comment(&mut src);
        assert_eq!(rest(&mut src), " still outer */");
    }

    #[test]
    fn test_block_comment_star_runs() {
        let mut src = SourceReader::new(b"*** doc ***/next");
        skip_block_comment(&mut src);
        assert_eq!(rest(&mut src), "next");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut src = SourceReader::new(b" never closed *");
        skip_block_comment(&mut src);
        assert!(src.is_eof());
    }

    #[test]
    fn test_line_comment_stops_after_newline() {
        let mut src = SourceReader::new(b" note ( {\nclass");
        skip_line_comment(&mut src);
        assert_eq!(src.current_line(), 2);
        assert_eq!(rest(&mut src), "class");
    }

    #[test]
    fn test_skip_until_eol_without_newline() {
        let mut src = SourceReader::new(b"no newline");
        skip_until_eol(&mut src);
        assert!(src.is_eof());
    }
}
