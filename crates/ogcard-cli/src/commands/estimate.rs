//! Estimate command implementation

use ogcard_core::error::{OgCardError, Result};
use ogcard_core::types::{LayoutBudget, WeightClass};
use ogcard_layout::{max_chars_per_line, HeightEstimator};
use serde::Serialize;

use crate::cli::EstimateArgs;

#[derive(Debug, Serialize)]
struct Estimate {
    lines: usize,
    max_chars_per_line: usize,
    height: u32,
}

pub fn run(args: &EstimateArgs) -> Result<()> {
    for (name, value) in [
        ("width", args.width),
        ("font-size", args.font_size),
        ("line-height", args.line_height),
    ] {
        if !value.is_finite() {
            return Err(OgCardError::Config(format!("--{} must be a finite number", name)));
        }
    }

    let weight = if args.bold {
        WeightClass::Bold
    } else {
        WeightClass::Normal
    };
    let budget = LayoutBudget::new(args.width, args.font_size)
        .with_line_height(args.line_height)
        .with_weight(weight);
    let estimator = HeightEstimator::with_strategy(args.strategy.into());

    let estimate = Estimate {
        lines: estimator.line_count(&args.text, &budget),
        max_chars_per_line: max_chars_per_line(&budget),
        height: estimator.estimate(&args.text, &budget),
    };

    if args.json {
        println!("{}", serde_json::to_string(&estimate)?);
    } else {
        println!("{}", estimate.height);
    }
    Ok(())
}
