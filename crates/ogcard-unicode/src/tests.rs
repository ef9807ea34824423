// this_file: crates/ogcard-unicode/src/tests.rs

use super::*;

#[test]
fn test_empty_text() {
    assert!(segment("", 32).is_empty());
}

#[test]
fn test_plain_text_is_one_segment() {
    let result = segment("Hello World", 32);
    assert_eq!(result, vec![Segment::text("Hello World")]);
}

#[test]
fn test_single_emoji() {
    assert_eq!(segment("🚗", 40), vec![Segment::emoji("🚗", 40)]);
}

#[test]
fn test_mixed_text_and_emoji() {
    let result = segment("Hi 🚗 there 🏠!", 40);
    assert_eq!(
        result,
        vec![
            Segment::text("Hi "),
            Segment::emoji("🚗", 40),
            Segment::text(" there "),
            Segment::emoji("🏠", 40),
            Segment::text("!"),
        ]
    );
}

#[test]
fn test_leading_and_trailing_emoji() {
    let result = segment("🏠 home 🚗", 34);
    assert_eq!(result.first(), Some(&Segment::emoji("🏠", 34)));
    assert_eq!(result.last(), Some(&Segment::emoji("🚗", 34)));
    assert_eq!(result.len(), 3);
}

#[test]
fn test_adjacent_emoji_stay_separate() {
    let result = segment("🚗🏠", 20);
    assert_eq!(result, vec![Segment::emoji("🚗", 20), Segment::emoji("🏠", 20)]);
}

#[test]
fn test_variation_selector_is_absorbed() {
    let result = segment("I ❤\u{FE0F} it", 24);
    assert_eq!(
        result,
        vec![
            Segment::text("I "),
            Segment::emoji("❤\u{FE0F}", 24),
            Segment::text(" it"),
        ]
    );
}

#[test]
fn test_only_one_variation_selector_is_absorbed() {
    let result = segment("☀\u{FE0F}\u{FE0E}", 24);
    assert_eq!(
        result,
        vec![Segment::emoji("☀\u{FE0F}", 24), Segment::text("\u{FE0E}")]
    );
}

#[test]
fn test_stray_variation_selector_is_text() {
    assert_eq!(segment("a\u{FE0F}b", 24), vec![Segment::text("a\u{FE0F}b")]);
}

#[test]
fn test_skin_tone_modifier_is_its_own_segment() {
    // U+1F44D thumbs up, U+1F3FD medium skin tone: both in classified ranges
    let result = segment("👍🏽", 24);
    assert_eq!(result, vec![Segment::emoji("👍", 24), Segment::emoji("🏽", 24)]);
}

#[test]
fn test_punctuation_in_wide_range_is_emoji() {
    // U+2014 em dash falls inside U+2011..=U+26FF
    let result = segment("a—b", 16);
    assert_eq!(
        result,
        vec![Segment::text("a"), Segment::emoji("—", 16), Segment::text("b")]
    );
}

#[test]
fn test_cap_drops_later_emoji() {
    let segmenter = EmojiSegmenter::new().with_max_emoji_segments(Some(2));
    let result = segmenter.segment("🚗 🏠 🌲", 144);
    assert_eq!(
        result,
        vec![
            Segment::emoji("🚗", 144),
            Segment::text(" "),
            Segment::emoji("🏠", 144),
            Segment::text(" "),
        ]
    );
}

#[test]
fn test_cap_keeps_text_runs_split() {
    let segmenter = EmojiSegmenter::new().with_max_emoji_segments(Some(0));
    let result = segmenter.segment("a🚗b", 10);
    assert_eq!(result, vec![Segment::text("a"), Segment::text("b")]);
}

#[test]
fn test_uncapped_by_default() {
    let segmenter = EmojiSegmenter::new();
    assert_eq!(segmenter.max_emoji_segments(), None);
    let emoji_count = segmenter
        .segment(&"🚗".repeat(50), 10)
        .iter()
        .filter(|s| s.is_emoji())
        .count();
    assert_eq!(emoji_count, 50);
}

#[test]
fn test_utf16_round_trip() {
    let units: Vec<u16> = "Hi 🚗".encode_utf16().collect();
    let result = EmojiSegmenter::new().segment_utf16(&units, 12);
    assert_eq!(result, vec![Segment::text("Hi "), Segment::emoji("🚗", 12)]);
}

#[test]
fn test_unpaired_surrogate_fails_open() {
    // Lone high surrogate D83D followed by 'x'
    let units = [0xD83D, 0x0078];
    let result = EmojiSegmenter::new().segment_utf16(&units, 12);
    assert_eq!(result, vec![Segment::text("\u{FFFD}x")]);
}

#[test]
fn test_join_segments_restores_input() {
    let input = "Weather: ☀️ 23°, battery 🔋 80%";
    assert_eq!(join_segments(&segment(input, 34)), input);
}
