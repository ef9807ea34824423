//! Layout command implementation
//!
//! Composes one card with no asset provider, so the output lists no fonts
//! or images, and writes what the JSON rasterizer produces.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use ogcard::{CardComposer, CardLayout, CardParams, JsonRasterizer};
use ogcard_core::error::Result;

use crate::cli::{LayoutArgs, Variant};

pub fn run(args: &LayoutArgs) -> Result<()> {
    let composer = CardComposer::new(load_layout(args.variant, args.layout.as_deref())?)?;
    let params = CardParams::from_pairs(args.params.iter().cloned());

    let rasterizer = if args.compact {
        JsonRasterizer::new()
    } else {
        JsonRasterizer::pretty()
    };
    let mut bytes = composer.render(&params, &rasterizer)?;
    bytes.push(b'\n');

    write_output(args.output.as_deref(), &bytes)
}

/// The layout file when given, the preset otherwise
pub fn load_layout(variant: Variant, path: Option<&Path>) -> Result<CardLayout> {
    match path {
        Some(path) => {
            log::debug!("loading layout from {}", path.display());
            CardLayout::from_path(path)
        },
        None => Ok(match variant {
            Variant::Fixed => CardLayout::fixed(),
            Variant::Dynamic => CardLayout::dynamic(),
        }),
    }
}

/// Write to `path`, or stdout when there is none
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(bytes)?;
            log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        },
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        },
    }
    Ok(())
}
