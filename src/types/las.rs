//! Loaded LAS log types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unit value meaning "no unit" for a curve.
pub const UNITLESS: &str = "NONE";

/// Metres to feet (international foot, 0.3048 m)
pub const M_TO_FT: f64 = 1.0 / 0.3048;

/// A single header line: `MNEM.UNIT  VALUE : DESCRIPTION`
///
/// Used for the `~V`, `~W` and `~P` sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
}

/// Well metadata entry from the `~W` section.
pub type WellEntry = HeaderEntry;

/// A depth-indexed curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Unique mnemonic within the log (duplicates carry a `:n` suffix)
    pub mnemonic: String,
    /// Mnemonic exactly as written in the file
    pub original_mnemonic: String,
    /// Unit, `NONE` when unitless
    pub unit: String,
    pub description: String,
    /// One sample per depth index; NULL samples are NaN
    pub data: Vec<f64>,
}

impl Curve {
    /// Build a curve whose original mnemonic equals its mnemonic.
    pub fn new(mnemonic: &str, unit: &str, description: &str, data: Vec<f64>) -> Self {
        Self {
            mnemonic: mnemonic.to_string(),
            original_mnemonic: mnemonic.to_string(),
            unit: unit.to_string(),
            description: description.to_string(),
            data,
        }
    }
}

/// Unit of the depth index curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthUnit {
    Feet,
    Metres,
    Unknown,
}

impl DepthUnit {
    /// Classify a LAS unit string.
    pub fn from_unit(unit: &str) -> Self {
        match unit.trim().to_ascii_uppercase().as_str() {
            "M" | "METER" | "METERS" | "METRE" | "METRES" => Self::Metres,
            "F" | "FT" | "FEET" | "FOOT" => Self::Feet,
            _ => Self::Unknown,
        }
    }
}

/// Lookup of curves by mnemonic.
///
/// Membership is all the chart resolver needs from a log; anything holding
/// curves can be resolved without building a full [`LasLog`].
pub trait CurveLookup {
    fn curve(&self, mnemonic: &str) -> Option<&Curve>;

    fn contains(&self, mnemonic: &str) -> bool {
        self.curve(mnemonic).is_some()
    }
}

impl CurveLookup for [Curve] {
    fn curve(&self, mnemonic: &str) -> Option<&Curve> {
        self.iter().find(|c| c.mnemonic == mnemonic)
    }
}

impl CurveLookup for Vec<Curve> {
    fn curve(&self, mnemonic: &str) -> Option<&Curve> {
        self.as_slice().curve(mnemonic)
    }
}

impl CurveLookup for HashMap<String, Curve> {
    fn curve(&self, mnemonic: &str) -> Option<&Curve> {
        self.get(mnemonic)
    }
}

/// A fully loaded LAS file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LasLog {
    /// `~V` entries (VERS, WRAP, ...)
    pub version: Vec<HeaderEntry>,
    /// `~W` entries, file order
    pub well: Vec<WellEntry>,
    /// `~P` entries, file order
    pub parameters: Vec<HeaderEntry>,
    /// `~O` free text lines
    pub other: Vec<String>,
    /// Curves in `~C` order; the first one is the depth index
    pub curves: Vec<Curve>,
    /// NULL sentinel declared in `~W`, if any
    pub null_value: Option<f64>,
}

impl LasLog {
    /// Version entry by mnemonic.
    pub fn version_entry(&self, mnemonic: &str) -> Option<&HeaderEntry> {
        self.version.iter().find(|e| e.mnemonic == mnemonic)
    }

    /// Description of the `VERS` entry (e.g. "CWLS LOG ASCII STANDARD - VERSION 2.0").
    pub fn version_description(&self) -> Option<&str> {
        self.version_entry("VERS").map(|e| e.description.as_str())
    }

    /// Whether the data section is wrapped (`WRAP. YES`).
    pub fn is_wrapped(&self) -> bool {
        self.version_entry("WRAP")
            .is_some_and(|e| e.value.trim().eq_ignore_ascii_case("YES"))
    }

    /// The depth index curve.
    pub fn index_curve(&self) -> Option<&Curve> {
        self.curves.first()
    }

    pub fn depth_unit(&self) -> DepthUnit {
        self.index_curve()
            .map_or(DepthUnit::Unknown, |c| DepthUnit::from_unit(&c.unit))
    }

    /// Depth index as written in the file.
    pub fn depth(&self) -> &[f64] {
        self.index_curve()
            .map(|c| c.data.as_slice())
            .unwrap_or(&[])
    }

    /// Depth index in feet. Metre logs are converted.
    ///
    /// The reader rejects any other index unit, so `Unknown` only shows up on
    /// logs assembled by hand, which pass through unchanged.
    pub fn depth_ft(&self) -> Vec<f64> {
        match self.depth_unit() {
            DepthUnit::Metres => self.depth().iter().map(|d| d * M_TO_FT).collect(),
            DepthUnit::Feet | DepthUnit::Unknown => self.depth().to_vec(),
        }
    }

    /// Mnemonics of all curves, in file order.
    pub fn mnemonics(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.mnemonic.as_str()).collect()
    }
}

impl CurveLookup for LasLog {
    fn curve(&self, mnemonic: &str) -> Option<&Curve> {
        self.curves.as_slice().curve(mnemonic)
    }
}
