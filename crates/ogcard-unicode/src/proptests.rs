use super::*;
use proptest::prelude::*;

/// Short ASCII runs interleaved with emoji, selectors and edge-range code points
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 .,!?]{1,6}",
            prop::sample::select(vec![
                "🚗", "🏠", "❤\u{FE0F}", "☀", "🤔", "\u{FE0F}", "—", "\u{E000}", "👍🏽",
            ])
            .prop_map(String::from),
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

// Property: joining segment values reproduces the input exactly
proptest! {
    #[test]
    fn prop_lossless_round_trip(s in "\\PC*", size in 1u32..256) {
        prop_assert_eq!(join_segments(&segment(&s, size)), s);
    }

    #[test]
    fn prop_lossless_round_trip_mixed(s in mixed_text()) {
        prop_assert_eq!(join_segments(&segment(&s, 32)), s);
    }
}

// Property: emoji-free input is one text segment equal to the input
proptest! {
    #[test]
    fn prop_emoji_free_is_single_text(
        s in "\\PC{1,40}".prop_filter("no emoji", |s| !s.chars().any(is_emoji))
    ) {
        let result = segment(&s, 32);
        prop_assert_eq!(result, vec![Segment::text(s)]);
    }
}

// Property: segments are never empty and text runs are never adjacent
proptest! {
    #[test]
    fn prop_segments_well_formed(s in mixed_text()) {
        let result = segment(&s, 32);
        for seg in &result {
            prop_assert!(!seg.value().is_empty());
        }
        for pair in result.windows(2) {
            prop_assert!(pair[0].is_emoji() || pair[1].is_emoji());
        }
    }
}

// Property: every emoji segment is one classified char plus at most one selector
proptest! {
    #[test]
    fn prop_emoji_segment_shape(s in mixed_text(), size in 1u32..512) {
        for seg in segment(&s, size) {
            if let Segment::Emoji(emoji) = seg {
                let chars: Vec<char> = emoji.value.chars().collect();
                prop_assert!(is_emoji(chars[0]));
                prop_assert!(chars.len() <= 2);
                if chars.len() == 2 {
                    prop_assert!(is_variation_selector(chars[1]));
                }
                prop_assert_eq!(emoji.render_size, size);
            }
        }
    }
}

// Property: the cap bounds the emoji count and never drops text
proptest! {
    #[test]
    fn prop_cap_bounds_emoji(s in mixed_text(), cap in 0usize..4) {
        let uncapped = segment(&s, 32);
        let capped = EmojiSegmenter::new()
            .with_max_emoji_segments(Some(cap))
            .segment(&s, 32);

        let emoji_count = capped.iter().filter(|seg| seg.is_emoji()).count();
        let uncapped_count = uncapped.iter().filter(|seg| seg.is_emoji()).count();
        prop_assert_eq!(emoji_count, uncapped_count.min(cap));

        let text = |segments: &[Segment]| -> String {
            segments.iter().filter(|seg| !seg.is_emoji()).map(Segment::value).collect()
        };
        prop_assert_eq!(text(&capped), text(&uncapped));
    }
}

// Property: segmentation is deterministic
proptest! {
    #[test]
    fn prop_segmentation_deterministic(s in mixed_text()) {
        prop_assert_eq!(segment(&s, 40), segment(&s, 40));
    }
}

/// One code point from every classification row, row picked uniformly
fn classified_char() -> impl Strategy<Value = char> {
    (0..EMOJI_RANGES.len(), any::<u32>()).prop_filter_map("valid scalar", |(row, offset)| {
        let range = &EMOJI_RANGES[row].range;
        let start = *range.start() as u32;
        let span = *range.end() as u32 - start + 1;
        char::from_u32(start + offset % span)
    })
}

// Property: a lone classified char, with or without FE0F, is exactly one emoji segment
proptest! {
    #[test]
    fn prop_single_classified_char_is_one_emoji(
        ch in classified_char(),
        selector in any::<bool>(),
        size in 1u32..256,
    ) {
        let mut s = ch.to_string();
        if selector {
            s.push('\u{FE0F}');
        }
        prop_assert_eq!(segment(&s, size), vec![Segment::emoji(s.clone(), size)]);
    }
}

#[test]
fn test_every_row_boundary_is_one_emoji() {
    for row in &EMOJI_RANGES {
        for ch in [*row.range.start(), *row.range.end()] {
            for s in [ch.to_string(), format!("{ch}\u{FE0F}")] {
                assert_eq!(segment(&s, 32), vec![Segment::emoji(s.clone(), 32)], "{}", row.name);
            }
        }
    }
}
