//! Chart description types produced by the curve resolver

use serde::{Deserialize, Serialize};

/// Stroke colour of a curve trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeColor {
    Black,
    Red,
    Green,
    Blue,
    Magenta,
}

impl StrokeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
        }
    }
}

/// Dash pattern of a curve trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashPattern {
    Solid,
    Dash,
    Dot,
    DashDot,
}

impl DashPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dash => "dash",
            Self::Dot => "dot",
            Self::DashDot => "dashdot",
        }
    }
}

/// Visual style of one curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: StrokeColor,
    pub dash: DashPattern,
    pub width: u8,
}

impl LineStyle {
    pub const fn new(color: StrokeColor, dash: DashPattern) -> Self {
        Self { color, dash, width: 1 }
    }

    pub const fn solid(color: StrokeColor) -> Self {
        Self::new(color, DashPattern::Solid)
    }
}

/// Which of the two vertical axes a curve is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSlot {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    Left,
    Right,
}

/// A vertical axis of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub title: String,
    pub scale: AxisScale,
    pub side: AxisSide,
    pub show_grid: bool,
}

impl AxisSpec {
    /// Left-side axis with gridlines.
    pub fn new(title: impl Into<String>, scale: AxisScale) -> Self {
        Self {
            title: title.into(),
            scale,
            side: AxisSide::Left,
            show_grid: true,
        }
    }

    /// Move the axis to the right and drop its gridlines so it can sit on
    /// top of another axis.
    pub fn overlay(mut self) -> Self {
        self.side = AxisSide::Right;
        self.show_grid = false;
        self
    }
}

/// Shared horizontal depth axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthAxis {
    pub title: String,
    pub scale: AxisScale,
}

impl Default for DepthAxis {
    fn default() -> Self {
        Self {
            title: "depth [ft]".to_string(),
            scale: AxisScale::Linear,
        }
    }
}

/// One curve placed on a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCurve {
    /// Mnemonic of the curve in the log
    pub mnemonic: String,
    /// Curve description, used as the legend label
    pub description: String,
    pub style: LineStyle,
    pub slot: AxisSlot,
}

/// A fully composed chart, ready to be encoded for a charting backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    /// Stable identifier, e.g. `las-curves-rp`
    pub id: String,
    /// Human label of the curve group
    pub label: String,
    pub curves: Vec<PlacedCurve>,
    pub primary: AxisSpec,
    pub secondary: Option<AxisSpec>,
    pub x_axis: DepthAxis,
}

impl ChartDescriptor {
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }
}
