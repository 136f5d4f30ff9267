//! HTML rendering
//!
//! Produces the complete report document. Every page is rendered; the
//! [`NavState`] only decides which ones are displayed. Charts are empty
//! containers filled in the browser by `static/report.js` from the figure
//! JSON embedded at the end of the body.

use std::collections::BTreeMap;
use std::fmt::Write;
use thiserror::Error;

use super::builder::{Page, PageContent, Report, ReportHeader, WellRow};
use super::figure::{figure, Figure};
use super::nav::{Medium, NavAction, NavState, PageSize, ViewMode};
use crate::config::ChartConfig;
use crate::types::{ChartDescriptor, LasLog};

/// DOM id of the embedded figure JSON.
pub const FIGURES_ELEMENT_ID: &str = "las-figures";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("HTML formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Figure encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole report as an HTML document.
pub fn render_report(
    report: &Report,
    log: &LasLog,
    nav: &NavState,
    charts: &ChartConfig,
) -> Result<String, RenderError> {
    let mut html = String::with_capacity(16 * 1024);
    let filename = escape_html(&report.header.filename);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{}: {filename}</title>", escape_html(&report.header.title))?;
    writeln!(html, "<link rel=\"stylesheet\" href=\"/static/report.css\">")?;
    writeln!(html, "<script src=\"{}\"></script>", escape_html(&charts.plotly_src))?;
    writeln!(html, "<script src=\"/static/report.js\" defer></script>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(
        html,
        "<div id=\"report\" class=\"{} {} view-{}\">",
        nav.page_size, nav.medium, nav.view
    )?;

    render_nav(&mut html, nav)?;

    let height = nav.medium.chart_height(charts);
    for page in &report.pages {
        render_page(
            &mut html,
            &report.header,
            page,
            nav.is_visible(page.number),
            &height,
        )?;
    }
    if report.pages.is_empty() {
        render_header(&mut html, &report.header)?;
        writeln!(html, "<p class=\"las-empty\">No well information or known curves in this file.</p>")?;
    }

    writeln!(html, "</div>")?;

    let figures: BTreeMap<&str, Figure> = report
        .charts()
        .map(|chart| (chart.id.as_str(), figure(chart, log)))
        .collect();
    // "</" would close the script element early.
    let json = serde_json::to_string(&figures)?.replace("</", "<\\/");
    writeln!(
        html,
        "<script type=\"application/json\" id=\"{FIGURES_ELEMENT_ID}\">{json}</script>"
    )?;

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn render_option<T: std::fmt::Display + PartialEq>(
    html: &mut String,
    value: T,
    label: &str,
    current: T,
) -> std::fmt::Result {
    let selected = if value == current { " selected" } else { "" };
    writeln!(html, "<option value=\"{value}\"{selected}>{label}</option>")
}

/// Prev/Next at either end still link (to the same page) but are marked inert.
const fn disabled_unless(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " aria-disabled=\"true\""
    }
}

fn render_nav(html: &mut String, nav: &NavState) -> std::fmt::Result {
    writeln!(html, "<nav class=\"las-nav no-print\">")?;
    writeln!(
        html,
        "<button type=\"button\" class=\"las-print\" onclick=\"window.print()\">Print</button>"
    )?;

    // Display options
    writeln!(html, "<form class=\"las-options\" method=\"get\" action=\"/\">")?;
    writeln!(html, "<input type=\"hidden\" name=\"page\" value=\"{}\">", nav.page_index)?;
    writeln!(html, "<select name=\"size\" aria-label=\"Page size\">")?;
    render_option(html, PageSize::A4, "A4", nav.page_size)?;
    render_option(html, PageSize::Letter, "Letter", nav.page_size)?;
    writeln!(html, "</select>")?;
    writeln!(html, "<select name=\"view\" aria-label=\"View\">")?;
    render_option(html, ViewMode::One, "One page", nav.view)?;
    render_option(html, ViewMode::All, "All pages", nav.view)?;
    writeln!(html, "</select>")?;
    writeln!(html, "<select name=\"medium\" aria-label=\"Medium\">")?;
    render_option(html, Medium::Print, "Print", nav.medium)?;
    render_option(html, Medium::Web, "Web", nav.medium)?;
    writeln!(html, "</select>")?;
    writeln!(html, "<button type=\"submit\">Apply</button>")?;
    writeln!(html, "</form>")?;

    if nav.shows_move_controls() && nav.page_count > 0 {
        writeln!(html, "<div class=\"las-move\">")?;
        writeln!(
            html,
            "<a class=\"las-first\" href=\"{}\">&laquo; First</a>",
            escape_html(&nav.link(NavAction::First))
        )?;
        writeln!(
            html,
            "<a class=\"las-prev\"{} href=\"{}\">&lsaquo; Prev</a>",
            disabled_unless(nav.has_prev()),
            escape_html(&nav.link(NavAction::Prev))
        )?;
        writeln!(html, "<form class=\"las-index\" method=\"get\" action=\"/\">")?;
        writeln!(html, "<input type=\"hidden\" name=\"view\" value=\"{}\">", nav.view)?;
        writeln!(html, "<input type=\"hidden\" name=\"size\" value=\"{}\">", nav.page_size)?;
        writeln!(html, "<input type=\"hidden\" name=\"medium\" value=\"{}\">", nav.medium)?;
        writeln!(
            html,
            "<input type=\"number\" name=\"page\" min=\"1\" max=\"{}\" value=\"{}\" aria-label=\"Page\">",
            nav.page_count, nav.page_index
        )?;
        writeln!(html, "<span>of {}</span>", nav.page_count)?;
        writeln!(html, "</form>")?;
        writeln!(
            html,
            "<a class=\"las-next\"{} href=\"{}\">Next &rsaquo;</a>",
            disabled_unless(nav.has_next()),
            escape_html(&nav.link(NavAction::Next))
        )?;
        writeln!(
            html,
            "<a class=\"las-last\" href=\"{}\">Last &raquo;</a>",
            escape_html(&nav.link(NavAction::Last))
        )?;
        writeln!(html, "</div>")?;
    }

    writeln!(html, "</nav>")
}

/// Title block repeated at the top of every page so each printed sheet carries it.
fn render_header(html: &mut String, header: &ReportHeader) -> std::fmt::Result {
    writeln!(html, "<header class=\"las-header\">")?;
    writeln!(html, "<h1>{}</h1>", escape_html(&header.title))?;
    writeln!(html, "<p class=\"las-file\">{}</p>", escape_html(&header.filename))?;
    writeln!(
        html,
        "<p class=\"las-version\">{}</p>",
        escape_html(&header.description)
    )?;
    writeln!(html, "</header>")
}

fn render_page(
    html: &mut String,
    header: &ReportHeader,
    page: &Page,
    visible: bool,
    chart_height: &str,
) -> std::fmt::Result {
    let display = if visible { "block" } else { "none" };
    writeln!(
        html,
        "<section id=\"{}\" class=\"{}\" style=\"display:{display}\">",
        page.id(),
        page.class()
    )?;
    render_header(html, header)?;
    writeln!(html, "<h2>{}</h2>", escape_html(&page.title()))?;

    match &page.content {
        PageContent::WellTable(rows) => render_well_table(html, rows)?,
        PageContent::Charts(charts) => {
            for chart in charts {
                render_chart(html, chart, chart_height)?;
            }
        }
    }

    writeln!(html, "</section>")
}

fn render_well_table(html: &mut String, rows: &[WellRow]) -> std::fmt::Result {
    writeln!(html, "<table class=\"las-well-table\">")?;
    writeln!(html, "<tbody>")?;
    for row in rows {
        writeln!(
            html,
            "<tr><td><b>{}</b></td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.description),
            escape_html(&row.unit_label),
            escape_html(&row.value)
        )?;
    }
    writeln!(html, "</tbody>")?;
    writeln!(html, "</table>")
}

fn render_chart(html: &mut String, chart: &ChartDescriptor, height: &str) -> std::fmt::Result {
    writeln!(html, "<figure class=\"las-chart-block\">")?;
    writeln!(html, "<figcaption>{}</figcaption>", escape_html(&chart.label))?;
    writeln!(
        html,
        "<div class=\"las-chart\" id=\"{}\" data-figure=\"{}\" style=\"height:{height}\"></div>",
        escape_html(&chart.id),
        escape_html(&chart.id)
    )?;
    writeln!(html, "</figure>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PagingConfig;
    use crate::report::builder::ReportBuilder;
    use crate::types::{Curve, HeaderEntry};

    fn log() -> LasLog {
        LasLog {
            version: vec![HeaderEntry {
                mnemonic: "VERS".to_string(),
                unit: String::new(),
                value: "2.0".to_string(),
                description: "CWLS LOG ASCII STANDARD - VERSION 2.0".to_string(),
            }],
            well: vec![HeaderEntry {
                mnemonic: "COMP".to_string(),
                unit: String::new(),
                value: "Smith & Sons <Drilling>".to_string(),
                description: "COMPANY".to_string(),
            }],
            curves: vec![
                Curve::new("DEPT", "F", "Depth", vec![1.0, 2.0]),
                Curve::new("TNPS", "V/V", "Neutron </script>", vec![0.1, 0.2]),
            ],
            ..LasLog::default()
        }
    }

    fn render(nav: impl FnOnce(NavState) -> NavState) -> String {
        let log = log();
        let report = ReportBuilder::default().build(&log, "/tmp/well.las");
        let state = nav(NavState::new(report.page_count(), &PagingConfig::default()));
        render_report(&report, &log, &state, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }

    #[test]
    fn test_header_and_pages() {
        let html = render(|s| s);
        assert!(html.contains("<h1>LAS Report</h1>"));
        assert!(html.contains("<p class=\"las-file\">well.las</p>"));
        assert!(html.contains("(CWLS LOG ASCII STANDARD - VERSION 2.0)"));
        assert!(html.contains(
            "<section id=\"page1\" class=\"las-well page\" style=\"display:block\">"
        ));
        assert!(html.contains(
            "<section id=\"page2\" class=\"las-curves page\" style=\"display:none\">"
        ));
        assert!(html.contains("<h2>Section: well (page 1)</h2>"));
    }

    #[test]
    fn test_every_page_carries_header() {
        let mut log = log();
        log.well = (0..60)
            .map(|i| HeaderEntry {
                mnemonic: format!("W{i:02}"),
                unit: String::new(),
                value: format!("{i}"),
                description: format!("Entry {i}"),
            })
            .collect();
        let report = ReportBuilder::default().build(&log, "/tmp/well.las");
        let nav = NavState::new(report.page_count(), &PagingConfig::default())
            .apply(NavAction::SetView(ViewMode::All));
        let html = render_report(&report, &log, &nav, &ChartConfig::default()).unwrap();

        let sections: Vec<&str> = html.split("<section ").skip(1).collect();
        assert_eq!(sections.len(), 3);
        for section in sections {
            let body = section.split("</section>").next().unwrap();
            assert!(body.contains("<h1>LAS Report</h1>"));
            assert!(body.contains("<p class=\"las-file\">well.las</p>"));
            assert!(body.contains("<p class=\"las-version\">(CWLS LOG ASCII STANDARD - VERSION 2.0)</p>"));
        }
        assert_eq!(html.matches("<h1>").count(), 3);
    }

    #[test]
    fn test_well_values_escaped() {
        let html = render(|s| s);
        assert!(html.contains("<td><b>COMPANY</b></td><td></td><td>Smith &amp; Sons &lt;Drilling&gt;</td>"));
    }

    #[test]
    fn test_figure_json_cannot_close_script() {
        let html = render(|s| s);
        assert_eq!(html.matches("</script>").count(), 3);
        assert!(html.contains("Neutron <\\/script>"));
    }

    #[test]
    fn test_all_view_shows_everything_without_moves() {
        let html = render(|s| s.apply(NavAction::SetView(ViewMode::All)));
        assert!(!html.contains("display:none"));
        assert!(!html.contains("las-move"));
        assert!(html.contains("class=\"a4 print view-all\""));
    }

    #[test]
    fn test_move_links() {
        let html = render(|s| s);
        assert!(html.contains("href=\"?page=2&amp;view=one&amp;size=a4&amp;medium=print\">Next"));
        assert!(html.contains("href=\"?page=1&amp;view=one&amp;size=a4&amp;medium=print\">&lsaquo; Prev"));
        assert!(html.contains("max=\"2\" value=\"1\""));
        assert!(html.contains("<a class=\"las-prev\" aria-disabled=\"true\" href="));
        assert!(html.contains("<a class=\"las-next\" href="));

        let last = render(|s| s.apply(NavAction::Last));
        assert!(last.contains("<a class=\"las-prev\" href="));
        assert!(last.contains("<a class=\"las-next\" aria-disabled=\"true\" href="));
    }

    #[test]
    fn test_chart_height_follows_medium() {
        assert!(render(|s| s).contains("style=\"height:115mm\""));
        let web = render(|s| s.apply(NavAction::SetMedium(Medium::Web)));
        assert!(web.contains("style=\"height:450px\""));
        assert!(web.contains("<option value=\"web\" selected>Web</option>"));
    }

    #[test]
    fn test_empty_report() {
        let log = LasLog::default();
        let report = ReportBuilder::default().build(&log, "empty.las");
        let nav = NavState::new(0, &PagingConfig::default());
        let html = render_report(&report, &log, &nav, &ChartConfig::default()).unwrap();
        assert!(html.contains("(unknown version)"));
        assert_eq!(html.matches("<h1>").count(), 1);
        assert!(html.contains("las-empty"));
        assert!(html.contains(">{}</script>"));
    }
}
