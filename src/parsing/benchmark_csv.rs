use std::collections::HashSet;
use std::path::Path;

use crate::catalog::exclusion::ExclusionList;
use crate::core::record::{BenchmarkRecord, BenchmarkScores};
use crate::core::types::Benchmark;
use crate::parsing::ParseError;

/// Number of leading label columns before the first model column
const LABEL_COLUMNS: usize = 3;

/// Parse a wide benchmark table from a file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if the header names no models.
pub fn parse_benchmark_csv_file(
    path: &Path,
    exclusions: &ExclusionList,
) -> Result<Vec<BenchmarkRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_benchmark_csv(&content, exclusions)
}

/// Parse a wide benchmark table.
///
/// The header row lists model names from the fourth column on. Every other
/// row carries a dataset label in its second column and one value per model.
/// Blank lines and `#` comments are skipped. Unparseable cells become 0.0,
/// datasets absent from the table leave the matching score at 0.0, and
/// `MMLU-pro` fractions are scaled onto the 0-100 scale.
///
/// Records come back in header order, without excluded or duplicate models.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the header has fewer than four columns.
pub fn parse_benchmark_csv(
    text: &str,
    exclusions: &ExclusionList,
) -> Result<Vec<BenchmarkRecord>, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let Some((_, header)) = lines.next() else {
        return Ok(Vec::new());
    };

    let header_columns: Vec<&str> = header.split(',').collect();
    if header_columns.len() <= LABEL_COLUMNS {
        return Err(ParseError::InvalidFormat(format!(
            "header has {} columns, expected model names from column {} on",
            header_columns.len(),
            LABEL_COLUMNS + 1
        )));
    }

    let model_names: Vec<&str> = header_columns[LABEL_COLUMNS..]
        .iter()
        .map(|name| name.trim())
        .collect();
    let mut scores = vec![BenchmarkScores::default(); model_names.len()];

    for (line_num, line) in lines {
        let columns: Vec<&str> = line.split(',').collect();
        if columns.len() <= LABEL_COLUMNS {
            tracing::warn!("Skipping line {line_num}: fewer than {} columns", LABEL_COLUMNS + 1);
            continue;
        }

        let dataset = columns[1].trim();
        let Some(benchmark) = Benchmark::from_dataset_label(dataset) else {
            tracing::debug!("Ignoring unknown dataset '{dataset}' on line {line_num}");
            continue;
        };

        // Values past the last model column are ignored
        for (model_scores, raw) in scores.iter_mut().zip(&columns[LABEL_COLUMNS..]) {
            model_scores.set(benchmark, parse_score(raw, benchmark.is_fractional()));
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut records = Vec::with_capacity(model_names.len());

    for (name, model_scores) in model_names.into_iter().zip(scores) {
        if name.is_empty() {
            tracing::warn!("Skipping model column with an empty name");
            continue;
        }
        if exclusions.contains(name) {
            tracing::debug!("Excluding legacy model {name}");
            continue;
        }
        if !seen.insert(name) {
            tracing::warn!("Duplicate model column '{name}', keeping the first");
            continue;
        }
        records.push(BenchmarkRecord::new(name, model_scores));
    }

    tracing::debug!("Parsed {} models from benchmark table", records.len());
    Ok(records)
}

/// Parse one cell onto the 0-100 scale.
///
/// A single trailing `%` is allowed. Non-numeric or non-finite cells become
/// 0.0 and negative values clamp to 0.0.
fn parse_score(raw: &str, fractional: bool) -> f64 {
    let trimmed = raw.trim();
    let value = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let parsed = if fractional {
        shift_decimal_two_places(value).or_else(|| value.parse::<f64>().ok().map(|v| v * 100.0))
    } else {
        value.parse::<f64>().ok()
    };

    match parsed {
        Some(v) if v.is_finite() => v.max(0.0),
        _ => 0.0,
    }
}

/// Multiply a plain decimal by 100 by moving its decimal point, so `0.285`
/// becomes exactly `28.5` instead of picking up binary rounding error.
///
/// Returns `None` for anything other than digits with an optional point.
fn shift_decimal_two_places(value: &str) -> Option<f64> {
    let (int_part, frac_part) = value.split_once('.').unwrap_or((value, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
    {
        return None;
    }

    let padded = format!("{frac_part:0<2}");
    let (moved, rest) = padded.split_at(2);
    let rest = if rest.is_empty() { "0" } else { rest };

    format!("{int_part}{moved}.{rest}").parse().ok()
}
