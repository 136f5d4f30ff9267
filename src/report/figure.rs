//! Plotly figure encoding
//!
//! Turns a [`ChartDescriptor`] plus the log's samples into the JSON object
//! `Plotly.newPlot` expects. Depth runs along x, the curves along y against
//! `y` (primary) or `y2` (secondary, overlaid).

use serde::Serialize;

use crate::types::{
    AxisScale, AxisSide, AxisSlot, AxisSpec, ChartDescriptor, CurveLookup, DashPattern, LasLog,
    PlacedCurve, StrokeColor,
};

const TRANSPARENT: &str = "rgba(0,0,0,0)";

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    /// NaN samples are `None` so they serialize as `null` and draw as gaps.
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub line: TraceLine,
    pub yaxis: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceLine {
    pub color: StrokeColor,
    pub dash: DashPattern,
    pub width: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub hovermode: &'static str,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub showlegend: bool,
    pub margin: Margin,
    pub xaxis: LayoutAxis,
    pub yaxis: LayoutAxis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<LayoutAxis>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutAxis {
    pub title: AxisTitle,
    #[serde(rename = "type")]
    pub kind: AxisScale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<AxisSide>,
    pub showgrid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<&'static str>,
}

impl LayoutAxis {
    fn vertical(spec: &AxisSpec, overlaying: Option<&'static str>) -> Self {
        Self {
            title: AxisTitle {
                text: spec.title.clone(),
            },
            kind: spec.scale,
            side: Some(spec.side),
            showgrid: spec.show_grid,
            overlaying,
        }
    }
}

fn samples(values: &[f64]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|v| if v.is_finite() { Some(*v) } else { None })
        .collect()
}

fn trace(placed: &PlacedCurve, depth: &[Option<f64>], log: &LasLog) -> Trace {
    let name = if placed.description.trim().is_empty() {
        placed.mnemonic.clone()
    } else {
        placed.description.clone()
    };
    let y = log
        .curve(&placed.mnemonic)
        .map(|c| samples(&c.data))
        .unwrap_or_default();

    Trace {
        kind: "scatter",
        mode: "lines",
        name,
        x: depth.to_vec(),
        y,
        line: TraceLine {
            color: placed.style.color,
            dash: placed.style.dash,
            width: placed.style.width,
        },
        yaxis: match placed.slot {
            AxisSlot::Primary => "y",
            AxisSlot::Secondary => "y2",
        },
    }
}

/// Encode one chart.
pub fn figure(chart: &ChartDescriptor, log: &LasLog) -> Figure {
    let depth = samples(&log.depth_ft());

    Figure {
        data: chart
            .curves
            .iter()
            .map(|placed| trace(placed, &depth, log))
            .collect(),
        layout: Layout {
            hovermode: "x",
            paper_bgcolor: TRANSPARENT,
            plot_bgcolor: TRANSPARENT,
            showlegend: true,
            margin: Margin {
                l: 60,
                // Room for the right-hand overlay axis labels.
                r: if chart.has_secondary() { 60 } else { 20 },
                t: 20,
                b: 40,
            },
            xaxis: LayoutAxis {
                title: AxisTitle {
                    text: chart.x_axis.title.clone(),
                },
                kind: chart.x_axis.scale,
                side: None,
                showgrid: true,
                overlaying: None,
            },
            yaxis: LayoutAxis::vertical(&chart.primary, None),
            yaxis2: chart
                .secondary
                .as_ref()
                .map(|spec| LayoutAxis::vertical(spec, Some("y"))),
        },
    }
}
