//! Batch command implementation
//!
//! Reads one JSON object of request parameters per line, lays the cards out
//! in parallel and writes one result line per job, in input order.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use ogcard::json::JsonCard;
use ogcard::{CardComposer, CardMetrics, CardParams};
use ogcard_core::error::{OgCardError, Result};
use rayon::prelude::*;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::cli::BatchArgs;
use crate::commands::layout::load_layout;

/// One output line
#[derive(Debug, Serialize)]
struct JobResult {
    /// 1-based line number in the input
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<CardMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<JsonCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JobResult {
    fn failed(line: usize, error: String) -> Self {
        Self {
            line,
            metrics: None,
            card: None,
            error: Some(error),
        }
    }
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let composer = CardComposer::new(load_layout(args.variant, args.layout.as_deref())?)?;

    let reader: Box<dyn BufRead> = if let Some(ref input_path) = args.input {
        Box::new(BufReader::new(File::open(input_path)?))
    } else {
        if !args.quiet {
            eprintln!("Reading jobs from stdin...");
        }
        Box::new(BufReader::new(io::stdin()))
    };

    let mut jobs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        jobs.push((idx + 1, line));
    }

    let results: Vec<JobResult> = jobs
        .par_iter()
        .map(|(line, json)| process_job(&composer, *line, json))
        .collect();

    let mut out: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    for result in &results {
        serde_json::to_writer(&mut out, result)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    let error_count = results.iter().filter(|r| r.error.is_some()).count();
    if !args.quiet {
        eprintln!("Batch processing complete:");
        eprintln!("  Total jobs: {}", results.len());
        eprintln!("  Successful: {}", results.len() - error_count);
        eprintln!("  Failed: {}", error_count);
    }

    if error_count > 0 {
        Err(OgCardError::Other(format!("{} jobs failed", error_count)))
    } else {
        Ok(())
    }
}

/// A job's fields in input order, duplicates kept, so the first
/// occurrence of a key wins as it does for query strings
#[derive(Debug)]
struct JobFields(Vec<(String, String)>);

impl<'de> Deserialize<'de> for JobFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = JobFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of string values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<JobFields, A::Error> {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    fields.push(entry);
                }
                Ok(JobFields(fields))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

fn process_job(composer: &CardComposer, line: usize, json: &str) -> JobResult {
    let fields = match serde_json::from_str::<JobFields>(json) {
        Ok(JobFields(fields)) => fields,
        Err(e) => {
            log::warn!("job on line {} is not an object of strings: {}", line, e);
            return JobResult::failed(line, e.to_string());
        },
    };

    let card = composer.compose(&CardParams::from_pairs(fields));
    if card.request.width == 0 || card.request.height == 0 {
        return JobResult::failed(
            line,
            format!(
                "invalid dimensions {}x{}",
                card.request.width, card.request.height
            ),
        );
    }

    log::debug!(
        "line {}: {}x{} card",
        line,
        card.request.width,
        card.request.height
    );
    JobResult {
        line,
        card: Some(JsonCard::from(&card.request)),
        metrics: Some(card.metrics),
        error: None,
    }
}
