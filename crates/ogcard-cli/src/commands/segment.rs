//! Segment command implementation

use ogcard_core::error::Result;
use ogcard_unicode::EmojiSegmenter;

use crate::cli::SegmentArgs;

pub fn run(args: &SegmentArgs) -> Result<()> {
    let segments = EmojiSegmenter::new()
        .with_max_emoji_segments(args.max_emoji)
        .segment(&args.text, args.size);

    log::debug!("{} segments", segments.len());

    let json = if args.pretty {
        serde_json::to_string_pretty(&segments)?
    } else {
        serde_json::to_string(&segments)?
    };
    println!("{}", json);
    Ok(())
}
