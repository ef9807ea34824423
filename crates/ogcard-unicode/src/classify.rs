// this_file: crates/ogcard-unicode/src/classify.rs

//! The fixed code-point table that decides what counts as an emoji.
//!
//! The table is deliberately coarse: it matches what the card's emoji image
//! host can serve rather than the Unicode `Emoji` property. The wide
//! `U+2011..=U+26FF` row also covers general punctuation such as `’`, `—`
//! and `€`, which therefore render as images too.

use std::ops::RangeInclusive;

/// A named, inclusive range of Unicode scalar values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRange {
    pub name: &'static str,
    pub range: RangeInclusive<char>,
}

impl CodepointRange {
    const fn new(name: &'static str, start: char, end: char) -> Self {
        Self {
            name,
            range: start..=end,
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.range.contains(&ch)
    }
}

/// Every range whose code points start an emoji segment
pub static EMOJI_RANGES: [CodepointRange; 6] = [
    CodepointRange::new("Dingbats", '\u{2700}', '\u{27BF}'),
    CodepointRange::new("Private Use Area", '\u{E000}', '\u{F8FF}'),
    // Supplementary Multilingual Plane, high surrogate D83C
    CodepointRange::new("Mahjong Tiles to Pictographs", '\u{1F000}', '\u{1F3FF}'),
    // Supplementary Multilingual Plane, high surrogate D83D
    CodepointRange::new("Pictographs to Geometric Shapes Extended", '\u{1F400}', '\u{1F7FF}'),
    CodepointRange::new("Punctuation to Miscellaneous Symbols", '\u{2011}', '\u{26FF}'),
    CodepointRange::new("Supplemental Symbols and Pictographs", '\u{1F910}', '\u{1F9FF}'),
];

/// Presentation selectors absorbed into the preceding emoji
pub static VARIATION_SELECTORS: RangeInclusive<char> = '\u{FE00}'..='\u{FE0F}';

/// Is `ch` inside any [`EMOJI_RANGES`] row?
pub fn is_emoji(ch: char) -> bool {
    EMOJI_RANGES.iter().any(|row| row.contains(ch))
}

/// The range `ch` was classified by, if any
pub fn emoji_range(ch: char) -> Option<&'static CodepointRange> {
    EMOJI_RANGES.iter().find(|row| row.contains(ch))
}

pub fn is_variation_selector(ch: char) -> bool {
    VARIATION_SELECTORS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_edges() {
        for ch in ['\u{2700}', '\u{27BF}', '\u{E000}', '\u{F8FF}', '\u{1F000}', '\u{1F7FF}'] {
            assert!(is_emoji(ch), "{:?} should be an emoji", ch);
        }
        assert!(is_emoji('\u{1F910}'));
        assert!(is_emoji('\u{1F9FF}'));
        assert!(is_emoji('\u{2011}'));
    }

    #[test]
    fn test_outside_ranges() {
        for ch in ['a', ' ', '\u{2010}', '\u{1F800}', '\u{1F90F}', '\u{1FA00}', 'é', '漢'] {
            assert!(!is_emoji(ch), "{:?} should not be an emoji", ch);
        }
    }

    #[test]
    fn test_common_emoji() {
        assert_eq!(emoji_range('🚗').map(|r| r.name), Some("Pictographs to Geometric Shapes Extended"));
        assert_eq!(emoji_range('🏠').map(|r| r.name), Some("Mahjong Tiles to Pictographs"));
        assert_eq!(emoji_range('🤔').map(|r| r.name), Some("Supplemental Symbols and Pictographs"));
        assert_eq!(emoji_range('☀').map(|r| r.name), Some("Punctuation to Miscellaneous Symbols"));
        assert_eq!(emoji_range('✨').map(|r| r.name), Some("Dingbats"));
    }

    #[test]
    fn test_variation_selectors() {
        assert!(is_variation_selector('\u{FE0F}'));
        assert!(is_variation_selector('\u{FE00}'));
        assert!(!is_variation_selector('\u{FE10}'));
        assert!(!is_emoji('\u{FE0F}'));
    }
}
