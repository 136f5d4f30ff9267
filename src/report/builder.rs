//! Report assembly
//!
//! A report is a header plus a flat list of numbered pages: the well
//! metadata pages first, then the curve chart pages. Numbering runs across
//! both sections starting at 1.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use super::paginate::paginate;
use crate::config::PagingConfig;
use crate::curves::resolve;
use crate::types::{ChartDescriptor, LasLog, WellEntry};

pub const REPORT_TITLE: &str = "LAS Report";

/// Shown when the log has no `VERS` entry.
pub const UNKNOWN_VERSION: &str = "(unknown version)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub title: String,
    /// Base name of the LAS file
    pub filename: String,
    /// `(VERS description)`
    pub description: String,
}

impl ReportHeader {
    pub fn new(path: &str, log: &LasLog) -> Self {
        let filename = Path::new(path)
            .file_name()
            .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned());
        let description = log
            .version_description()
            .map_or_else(|| UNKNOWN_VERSION.to_string(), |d| format!("({d})"));

        Self {
            title: REPORT_TITLE.to_string(),
            filename,
            description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Well,
    Curves,
}

impl SectionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Well => "well",
            Self::Curves => "curves",
        }
    }
}

/// One row of the well metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellRow {
    pub description: String,
    /// `[unit]`, empty when the entry has no unit
    pub unit_label: String,
    pub value: String,
}

impl From<&WellEntry> for WellRow {
    fn from(entry: &WellEntry) -> Self {
        let unit = entry.unit.trim();
        Self {
            description: entry.description.clone(),
            unit_label: if unit.is_empty() {
                String::new()
            } else {
                format!("[{unit}]")
            },
            value: entry.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum PageContent {
    WellTable(Vec<WellRow>),
    Charts(Vec<ChartDescriptor>),
}

impl PageContent {
    pub fn len(&self) -> usize {
        match self {
            Self::WellTable(rows) => rows.len(),
            Self::Charts(charts) => charts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based, across all sections
    pub number: usize,
    pub section: SectionKind,
    pub content: PageContent,
}

impl Page {
    /// DOM id, `page{n}`
    pub fn id(&self) -> String {
        format!("page{}", self.number)
    }

    pub fn title(&self) -> String {
        format!("Section: {} (page {})", self.section.label(), self.number)
    }

    pub fn class(&self) -> String {
        format!("las-{} page", self.section.label())
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary {
            id: self.id(),
            number: self.number,
            section: self.section,
            title: self.title(),
            items: self.content.len(),
        }
    }
}

/// Page without its content, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub id: String,
    pub number: usize,
    pub section: SectionKind,
    pub title: String,
    pub items: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub header: ReportHeader,
    pub pages: Vec<Page>,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, number: usize) -> Option<&Page> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    pub fn pages_in(&self, section: SectionKind) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(move |p| p.section == section)
    }

    /// Every chart, in page order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartDescriptor> {
        self.pages.iter().flat_map(|p| match &p.content {
            PageContent::Charts(charts) => charts.as_slice(),
            PageContent::WellTable(_) => &[][..],
        })
    }

    pub fn chart(&self, id: &str) -> Option<&ChartDescriptor> {
        self.charts().find(|c| c.id == id)
    }
}

/// Builds reports with a fixed page layout.
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder {
    well_rows_per_page: usize,
    charts_per_page: usize,
}

impl ReportBuilder {
    pub const fn new(well_rows_per_page: usize, charts_per_page: usize) -> Self {
        Self {
            well_rows_per_page,
            charts_per_page,
        }
    }

    pub const fn from_config(paging: &PagingConfig) -> Self {
        Self::new(paging.well_rows_per_page, paging.charts_per_page)
    }

    /// Compose the full report for `log`, read from `path`.
    pub fn build(&self, log: &LasLog, path: &str) -> Report {
        let well_pages = paginate(log.well.iter().map(WellRow::from), self.well_rows_per_page)
            .into_iter()
            .map(|rows| (SectionKind::Well, PageContent::WellTable(rows)));
        let chart_pages = paginate(resolve(log), self.charts_per_page)
            .into_iter()
            .map(|charts| (SectionKind::Curves, PageContent::Charts(charts)));

        let pages: Vec<Page> = well_pages
            .chain(chart_pages)
            .enumerate()
            .map(|(i, (section, content))| Page {
                number: i + 1,
                section,
                content,
            })
            .collect();

        debug!(
            pages = pages.len(),
            well_rows = log.well.len(),
            "Built report"
        );

        Report {
            header: ReportHeader::new(path, log),
            pages,
            generated_at: Utc::now(),
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::from_config(&PagingConfig::default())
    }
}
