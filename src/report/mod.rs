//! Report composition
//!
//! - `paginate`: fixed-size page splitting
//! - `builder`: header, well pages and chart pages
//! - `nav`: page navigation and display options
//! - `figure`: Plotly figure encoding for one chart
//! - `render`: the HTML document

pub mod builder;
pub mod figure;
pub mod nav;
pub mod paginate;
pub mod render;

pub use builder::{
    Page, PageContent, PageSummary, Report, ReportBuilder, ReportHeader, SectionKind, WellRow,
};
pub use figure::{figure, Figure};
pub use nav::{Medium, NavAction, NavQuery, NavState, PageSize, ViewMode};
pub use paginate::paginate;
pub use render::{render_report, RenderError};
