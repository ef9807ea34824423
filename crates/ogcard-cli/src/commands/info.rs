//! Info command implementation
//!
//! Displays the layout presets and the emoji classification table.

use ogcard::{CanvasHeight, CardLayout};
use ogcard_core::error::Result;
use ogcard_unicode::classify::{EMOJI_RANGES, VARIATION_SELECTORS};

use crate::cli::{InfoArgs, Variant};

pub fn run(args: &InfoArgs) -> Result<()> {
    // If no specific flags, show all info
    let show_all = !args.presets && !args.ranges;

    println!("ogcard v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if show_all || args.presets {
        print_presets();
        if show_all {
            println!();
        }
    }

    if show_all || args.ranges {
        print_ranges();
    }

    Ok(())
}

fn print_presets() {
    println!("Layout presets:");
    for (variant, layout) in [
        (Variant::Fixed, CardLayout::fixed()),
        (Variant::Dynamic, CardLayout::dynamic()),
    ] {
        let height = match layout.height {
            CanvasHeight::Fixed { height } => layout.scaled_px(height as f64).to_string(),
            CanvasHeight::Dynamic {
                static_chrome,
                buffer,
            } => format!(
                "{} + title + description",
                layout.scaled_px(static_chrome.saturating_add(buffer) as f64)
            ),
        };
        let cap = layout
            .strip_max_emoji
            .map_or_else(|| "all".to_string(), |n| n.to_string());
        println!(
            "  {:<8} - {}x{}, strip emoji: {}",
            variant.as_str(),
            layout.canvas_width(),
            height,
            cap
        );
    }
}

fn print_ranges() {
    println!("Emoji code-point ranges:");
    for row in EMOJI_RANGES.iter() {
        println!(
            "  U+{:04X}..U+{:04X}  {}",
            *row.range.start() as u32,
            *row.range.end() as u32,
            row.name
        );
    }
    println!(
        "  U+{:04X}..U+{:04X}  Variation selectors (absorbed into the preceding emoji)",
        *VARIATION_SELECTORS.start() as u32,
        *VARIATION_SELECTORS.end() as u32
    );
}
