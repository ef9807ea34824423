//! CLI argument definitions using Clap v4

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ogcard_layout::WrapStrategy;

/// ogcard - lay out Open Graph preview cards from the command line
#[derive(Parser, Debug)]
#[command(name = "ogcard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split text into text and emoji segments
    #[command(alias = "s")]
    Segment(SegmentArgs),

    /// Estimate the rendered height of a block of text
    #[command(alias = "e")]
    Estimate(EstimateArgs),

    /// Lay out a whole card and write it as JSON
    #[command(alias = "l")]
    Layout(LayoutArgs),

    /// Lay out many cards from a JSONL file
    Batch(BatchArgs),

    /// Display the layout presets and emoji code-point ranges
    #[command(alias = "i")]
    Info(InfoArgs),
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Segment(args) => args.verbose,
            Commands::Estimate(args) => args.verbose,
            Commands::Layout(args) => args.verbose,
            Commands::Batch(args) => args.verbose,
            Commands::Info(_) => false,
        }
    }
}

/// Arguments for the segment command
#[derive(Parser, Debug)]
pub struct SegmentArgs {
    /// Text to segment
    pub text: String,

    /// Render size given to emoji segments, in pixels
    #[arg(short = 's', long = "size", default_value = "32")]
    pub size: u32,

    /// Keep at most this many emoji
    #[arg(long = "max-emoji")]
    pub max_emoji: Option<usize>,

    /// Pretty-print the JSON
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Arguments for the estimate command
#[derive(Parser, Debug)]
pub struct EstimateArgs {
    /// Text to measure
    pub text: String,

    /// Container width in pixels
    #[arg(short = 'w', long = "width")]
    pub width: f64,

    /// Font size in pixels
    #[arg(short = 's', long = "font-size")]
    pub font_size: f64,

    /// Line height as a multiple of the font size
    #[arg(short = 'L', long = "line-height", default_value = "1.0")]
    pub line_height: f64,

    /// Use the bold average glyph width
    #[arg(long = "bold")]
    pub bold: bool,

    /// How lines are counted
    #[arg(long = "strategy", value_enum, default_value = "word-wrap")]
    pub strategy: StrategyArg,

    /// Print lines, chars per line and height as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Arguments for the layout command
#[derive(Parser, Debug)]
pub struct LayoutArgs {
    /// Request parameter as key=value (repeatable), e.g. -p title=Hello
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Layout preset
    #[arg(long = "variant", value_enum, default_value = "fixed")]
    pub variant: Variant,

    /// Layout JSON file; overrides --variant
    #[arg(long = "layout")]
    pub layout: Option<PathBuf>,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Single-line JSON instead of pretty-printed
    #[arg(long = "compact")]
    pub compact: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input JSONL file, one object of request parameters per line (stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output JSONL file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Layout preset
    #[arg(long = "variant", value_enum, default_value = "fixed")]
    pub variant: Variant,

    /// Layout JSON file; overrides --variant
    #[arg(long = "layout")]
    pub layout: Option<PathBuf>,

    /// Silent mode
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// List the layout presets
    #[arg(long)]
    pub presets: bool,

    /// List the emoji code-point ranges
    #[arg(long)]
    pub ranges: bool,
}

/// Layout presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// 1200x1300, every emoji in the strip
    Fixed,
    /// 1200 wide, height from the estimated text, two strip emoji
    Dynamic,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Dynamic => "dynamic",
        }
    }
}

/// Line counting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Greedy word packing
    WordWrap,
    /// Characters divided by characters per line
    CharacterCount,
}

impl From<StrategyArg> for WrapStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::WordWrap => WrapStrategy::WordWrap,
            StrategyArg::CharacterCount => WrapStrategy::CharacterCount,
        }
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {:?}", s))?;
    if key.is_empty() {
        return Err(format!("empty key in {:?}", s));
    }
    Ok((key.to_string(), value.to_string()))
}
