//! Delimiter classification for bare word scanning
//!
//! A word (identifier or keyword) runs until the first byte marked here.

use once_cell::sync::Lazy;

static KOTLIN: Lazy<DelimiterSet> = Lazy::new(|| {
    DelimiterSet::from_bytes(b" \r\n\t;,(){}<>.")
});

/// Fixed membership table over the low 128 byte values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    table: [bool; 128],
}

impl DelimiterSet {
    /// Build a set marking exactly `bytes`. Non-ASCII bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = [false; 128];
        for &b in bytes {
            if let Some(slot) = table.get_mut(b as usize) {
                *slot = true;
            }
        }
        Self { table }
    }

    /// The shared Kotlin delimiter set.
    pub fn kotlin() -> &'static DelimiterSet {
        &KOTLIN
    }

    pub fn contains(&self, ch: u8) -> bool {
        self.table.get(ch as usize).copied().unwrap_or(false)
    }
}
