// this_file: crates/ogcard-unicode/src/lib.rs

//! Emoji-aware text segmentation.
//!
//! Card text is drawn by the rasterizer's font, but emoji are swapped for
//! images so every card shows the same glyph style. [`EmojiSegmenter`] splits
//! a string into alternating text and emoji [`Segment`]s using the fixed
//! table in [`classify`].

pub mod classify;

pub use classify::{is_emoji, is_variation_selector, CodepointRange, EMOJI_RANGES};
pub use ogcard_core::types::Segment;

/// Splits strings into text and emoji segments.
///
/// Every emoji code point becomes its own segment, together with one
/// variation selector when one follows it directly. Text between emoji is
/// kept verbatim and empty text runs are never emitted, so joining the
/// segment values gives back the input.
///
/// ```
/// use ogcard_unicode::{EmojiSegmenter, Segment};
///
/// let segments = EmojiSegmenter::new().segment("Hi 🚗!", 40);
/// assert_eq!(
///     segments,
///     vec![Segment::text("Hi "), Segment::emoji("🚗", 40), Segment::text("!")]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmojiSegmenter {
    max_emoji_segments: Option<usize>,
}

impl EmojiSegmenter {
    /// A segmenter that keeps every emoji
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the first `limit` emoji; later ones are dropped from the
    /// output entirely. `None` removes the cap.
    pub fn with_max_emoji_segments(mut self, limit: Option<usize>) -> Self {
        self.max_emoji_segments = limit;
        self
    }

    pub fn max_emoji_segments(&self) -> Option<usize> {
        self.max_emoji_segments
    }

    /// Segment `text`, tagging each emoji with `render_size` pixels
    pub fn segment(&self, text: &str, render_size: u32) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut text_start = 0;
        let mut emoji_seen = 0usize;
        let mut chars = text.char_indices().peekable();

        while let Some((start, ch)) = chars.next() {
            if !is_emoji(ch) {
                continue;
            }

            let mut end = start + ch.len_utf8();
            if let Some(&(selector_start, next)) = chars.peek() {
                if is_variation_selector(next) {
                    end = selector_start + next.len_utf8();
                    chars.next();
                }
            }

            if start > text_start {
                segments.push(Segment::text(&text[text_start..start]));
            }

            if self.allows(emoji_seen) {
                segments.push(Segment::emoji(&text[start..end], render_size));
            } else {
                log::trace!("dropping emoji {:?} past the cap", &text[start..end]);
            }
            emoji_seen += 1;
            text_start = end;
        }

        if text_start < text.len() {
            segments.push(Segment::text(&text[text_start..]));
        }

        log::trace!(
            "segmented {} bytes into {} segments ({} emoji found)",
            text.len(),
            segments.len(),
            emoji_seen
        );
        segments
    }

    /// Segment UTF-16 input. Unpaired surrogates decode to U+FFFD and are
    /// treated as plain text.
    pub fn segment_utf16(&self, units: &[u16], render_size: u32) -> Vec<Segment> {
        self.segment(&String::from_utf16_lossy(units), render_size)
    }

    fn allows(&self, emoji_seen: usize) -> bool {
        match self.max_emoji_segments {
            Some(limit) => emoji_seen < limit,
            None => true,
        }
    }
}

/// Segment with no emoji cap
pub fn segment(text: &str, render_size: u32) -> Vec<Segment> {
    EmojiSegmenter::new().segment(text, render_size)
}

/// Concatenate segment values back into a string
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(Segment::value).collect()
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
