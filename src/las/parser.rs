//! LAS 2.0 Parser
//!
//! Reads Log ASCII Standard files into a [`LasLog`]. A LAS file is a set of
//! sections, each introduced by a line starting with `~`:
//!
//! - `~V` version information (`VERS`, `WRAP`)
//! - `~W` well information (`STRT`, `STOP`, `STEP`, `NULL`, `COMP`, `WELL`, ...)
//! - `~C` curve definitions, one per data column
//! - `~P` parameters
//! - `~O` free text
//! - `~A` the data, whitespace separated, one depth step per line
//!   (or spread over several lines when `WRAP. YES`)
//!
//! Header lines follow `MNEM.UNIT  VALUE : DESCRIPTION`. The unit is the run
//! of non-space characters directly after the first period; the description
//! starts after the last colon.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{Curve, DepthUnit, HeaderEntry, LasLog};

/// LAS reader errors
#[derive(Debug, Error)]
pub enum LasError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a LAS file: no section headers found")]
    NotLas,

    #[error("Malformed header line {line} in {section} section: {content}")]
    MalformedHeaderLine {
        line: usize,
        section: &'static str,
        content: String,
    },

    #[error("Invalid number '{value}' on line {line}")]
    InvalidNumber { line: usize, value: String },

    #[error("Data line {line} has {found} values, expected {expected}")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Depth index {mnemonic} has unit '{unit}', expected metres or feet")]
    UnknownDepthUnit { mnemonic: String, unit: String },
}

/// Tolerance when matching samples against the NULL sentinel.
const NULL_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Version,
    Well,
    Curves,
    Parameters,
    Other,
    Ascii,
    Unknown,
}

impl Section {
    fn from_header(line: &str) -> Self {
        match line
            .trim_start_matches('~')
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
        {
            Some('V') => Self::Version,
            Some('W') => Self::Well,
            Some('C') => Self::Curves,
            Some('P') => Self::Parameters,
            Some('O') => Self::Other,
            Some('A') => Self::Ascii,
            _ => Self::Unknown,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Version => "~V",
            Self::Well => "~W",
            Self::Curves => "~C",
            Self::Parameters => "~P",
            Self::Other => "~O",
            Self::Ascii => "~A",
            Self::Unknown => "unknown",
        }
    }
}

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy value group so the description starts after the last colon.
    RE.get_or_init(|| {
        Regex::new(r"^\s*([^.]*?)\s*\.(\S*)\s*(?:(.*):(.*)|(.*))$")
            .unwrap_or_else(|e| unreachable!("static header regex is valid: {e}"))
    })
}

/// Parse one `MNEM.UNIT VALUE : DESCRIPTION` line.
fn parse_header_line(line: &str, line_no: usize, section: Section) -> Result<HeaderEntry, LasError> {
    let malformed = || LasError::MalformedHeaderLine {
        line: line_no,
        section: section.name(),
        content: line.trim().to_string(),
    };

    let caps = header_regex().captures(line).ok_or_else(malformed)?;
    let mnemonic = caps.get(1).map_or("", |m| m.as_str().trim());
    if mnemonic.is_empty() {
        return Err(malformed());
    }

    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str().trim()).to_string();
    let (value, description) = if caps.get(3).is_some() {
        (field(3), field(4))
    } else {
        (field(5), String::new())
    };

    Ok(HeaderEntry {
        mnemonic: mnemonic.to_string(),
        unit: field(2),
        value,
        description,
    })
}

fn parse_sample(token: &str, line_no: usize) -> Result<f64, LasError> {
    token.parse::<f64>().map_err(|_| LasError::InvalidNumber {
        line: line_no,
        value: token.to_string(),
    })
}

/// Rename repeated mnemonics to `MNEM:1`, `MNEM:2`, ... keeping the original.
fn dedupe_mnemonics(curves: &mut [Curve]) {
    let mut totals = std::collections::HashMap::<String, usize>::new();
    for curve in curves.iter() {
        *totals.entry(curve.original_mnemonic.clone()).or_default() += 1;
    }

    let mut seen = std::collections::HashMap::<String, usize>::new();
    for curve in curves.iter_mut() {
        if totals.get(&curve.original_mnemonic).copied().unwrap_or(0) > 1 {
            let n = seen.entry(curve.original_mnemonic.clone()).or_default();
            *n += 1;
            curve.mnemonic = format!("{}:{}", curve.original_mnemonic, n);
        }
    }
}

/// Parse LAS text into a log.
pub fn parse_str(text: &str) -> Result<LasLog, LasError> {
    let mut log = LasLog::default();
    let mut section: Option<Section> = None;
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut pending: Vec<f64> = Vec::new();
    let mut last_data_line = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();
        let trimmed = line.trim_start();

        if trimmed.starts_with('~') {
            section = Some(Section::from_header(trimmed));
            continue;
        }

        if trimmed.is_empty() || (trimmed.starts_with('#') && section != Some(Section::Other)) {
            continue;
        }

        let Some(current) = section else {
            // Text before the first section header is not LAS.
            return Err(LasError::NotLas);
        };

        match current {
            Section::Version => log.version.push(parse_header_line(line, line_no, current)?),
            Section::Well => log.well.push(parse_header_line(line, line_no, current)?),
            Section::Parameters => log
                .parameters
                .push(parse_header_line(line, line_no, current)?),
            Section::Curves => {
                let entry = parse_header_line(line, line_no, current)?;
                log.curves.push(Curve::new(
                    &entry.mnemonic,
                    &entry.unit,
                    &entry.description,
                    Vec::new(),
                ));
            }
            Section::Other => log.other.push(line.to_string()),
            Section::Ascii => {
                let expected = log.curves.len();
                for token in trimmed.split_whitespace() {
                    pending.push(parse_sample(token, line_no)?);
                }
                last_data_line = line_no;

                if log.is_wrapped() {
                    while expected > 0 && pending.len() >= expected {
                        let rest = pending.split_off(expected);
                        rows.push(std::mem::replace(&mut pending, rest));
                    }
                } else {
                    if pending.len() != expected {
                        return Err(LasError::ColumnMismatch {
                            line: line_no,
                            expected,
                            found: pending.len(),
                        });
                    }
                    rows.push(std::mem::take(&mut pending));
                }
            }
            Section::Unknown => {}
        }
    }

    if section.is_none() {
        return Err(LasError::NotLas);
    }

    if !pending.is_empty() {
        return Err(LasError::ColumnMismatch {
            line: last_data_line,
            expected: log.curves.len(),
            found: pending.len(),
        });
    }

    // Charts plot depth in feet, so the index must be convertible.
    if let Some(index) = log.index_curve() {
        if log.depth_unit() == DepthUnit::Unknown {
            return Err(LasError::UnknownDepthUnit {
                mnemonic: index.mnemonic.clone(),
                unit: index.unit.clone(),
            });
        }
    }

    dedupe_mnemonics(&mut log.curves);
    log.null_value = log
        .well
        .iter()
        .find(|e| e.mnemonic.eq_ignore_ascii_case("NULL"))
        .and_then(|e| e.value.parse::<f64>().ok());

    let null = log.null_value;
    for row in rows {
        for (curve, value) in log.curves.iter_mut().zip(row) {
            let is_null = null.is_some_and(|n| (value - n).abs() < NULL_EPSILON);
            curve.data.push(if is_null { f64::NAN } else { value });
        }
    }

    debug!(
        curves = log.curves.len(),
        samples = log.depth().len(),
        wrapped = log.is_wrapped(),
        "Parsed LAS text"
    );
    Ok(log)
}

/// Read and parse a LAS file from disk.
///
/// Non-UTF-8 bytes (common in older files) are replaced rather than rejected.
pub fn read_file(path: &Path) -> Result<LasLog, LasError> {
    let bytes = std::fs::read(path).map_err(|source| LasError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let log = parse_str(&text)?;

    info!(
        path = %path.display(),
        version = log.version_description().unwrap_or("unknown"),
        well_entries = log.well.len(),
        curves = log.curves.len(),
        samples = log.depth().len(),
        "Loaded LAS file"
    );
    Ok(log)
}
