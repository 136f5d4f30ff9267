//! Report navigation
//!
//! The browser never holds navigation state of its own. Every control on the
//! page is a link or form carrying a [`NavQuery`]; the server rebuilds the
//! [`NavState`] from it, applies the requested [`NavAction`], and renders the
//! report with the matching page visible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{ChartConfig, PagingConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct NavParseError {
    pub kind: &'static str,
    pub value: String,
}

impl NavParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Display options
// ============================================================================

/// Paper size the report is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A4 => "a4",
            Self::Letter => "letter",
        }
    }
}

impl FromStr for PageSize {
    type Err = NavParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "letter" => Ok(Self::Letter),
            _ => Err(NavParseError::new("page size", s)),
        }
    }
}

/// One page at a time, or every page stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    One,
    All,
}

impl ViewMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::All => "all",
        }
    }
}

impl FromStr for ViewMode {
    type Err = NavParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one" => Ok(Self::One),
            "all" => Ok(Self::All),
            _ => Err(NavParseError::new("view", s)),
        }
    }
}

/// Target medium; controls chart height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    #[default]
    Print,
    Web,
}

impl Medium {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Web => "web",
        }
    }

    /// CSS height of one chart: millimetres for print, pixels on screen.
    pub fn chart_height(self, charts: &ChartConfig) -> String {
        match self {
            Self::Print => format!("{}mm", charts.print_height_mm),
            Self::Web => format!("{}px", charts.web_height_px),
        }
    }
}

impl FromStr for Medium {
    type Err = NavParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "print" => Ok(Self::Print),
            "web" => Ok(Self::Web),
            _ => Err(NavParseError::new("medium", s)),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
    /// Jump to a 1-based page index; out-of-range values are clamped.
    Goto(i64),
    SetView(ViewMode),
    SetPageSize(PageSize),
    SetMedium(Medium),
}

impl FromStr for NavAction {
    type Err = NavParseError;

    /// Parses the `move` query value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "prev" | "previous" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            "last" => Ok(Self::Last),
            _ => Err(NavParseError::new("move", s)),
        }
    }
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavState {
    /// 1-based index of the visible page in single-page view
    pub page_index: usize,
    pub page_count: usize,
    pub view: ViewMode,
    pub page_size: PageSize,
    pub medium: Medium,
}

impl NavState {
    /// First page, with the configured display defaults.
    pub const fn new(page_count: usize, paging: &PagingConfig) -> Self {
        Self {
            page_index: 1,
            page_count,
            view: paging.default_view,
            page_size: paging.default_page_size,
            medium: paging.default_medium,
        }
    }

    /// Clamp a requested index into `1..=page_count`.
    ///
    /// A report without pages keeps index 1.
    pub fn clamp(&self, index: i64) -> usize {
        let last = self.page_count.max(1);
        usize::try_from(index).map_or(1, |i| i.clamp(1, last))
    }

    /// Apply one action, returning the new state.
    #[must_use]
    pub fn apply(self, action: NavAction) -> Self {
        let last = self.page_count.max(1);
        match action {
            NavAction::First => Self {
                page_index: 1,
                ..self
            },
            NavAction::Prev => Self {
                page_index: self.page_index.saturating_sub(1).max(1),
                ..self
            },
            NavAction::Next => Self {
                page_index: (self.page_index + 1).min(last),
                ..self
            },
            NavAction::Last => Self {
                page_index: last,
                ..self
            },
            NavAction::Goto(n) => Self {
                page_index: self.clamp(n),
                ..self
            },
            NavAction::SetView(view) => Self { view, ..self },
            NavAction::SetPageSize(page_size) => Self { page_size, ..self },
            NavAction::SetMedium(medium) => Self { medium, ..self },
        }
    }

    /// Whether page `number` (1-based) is shown.
    pub fn is_visible(&self, number: usize) -> bool {
        self.view == ViewMode::All || number == self.page_index
    }

    /// First/prev/index/next/last only make sense one page at a time.
    pub fn shows_move_controls(&self) -> bool {
        self.view == ViewMode::One
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.page_count
    }

    /// Rebuild state from a request query.
    ///
    /// Missing or unrecognised values fall back to the configured defaults;
    /// `move` is applied after `page`.
    pub fn from_query(query: &NavQuery, page_count: usize, paging: &PagingConfig) -> Self {
        fn parse_or<T: FromStr>(value: Option<&String>, default: T) -> T {
            value.and_then(|v| v.parse().ok()).unwrap_or(default)
        }

        let base = Self::new(page_count, paging);
        let mut state = Self {
            view: parse_or(query.view.as_ref(), base.view),
            page_size: parse_or(query.size.as_ref(), base.page_size),
            medium: parse_or(query.medium.as_ref(), base.medium),
            ..base
        };
        if let Some(page) = query.page.as_ref().and_then(|p| p.trim().parse::<i64>().ok()) {
            state = state.apply(NavAction::Goto(page));
        }
        if let Some(action) = query.move_to.as_ref().and_then(|m| m.parse().ok()) {
            state = state.apply(action);
        }
        state
    }

    /// Query string reproducing this state, without the leading `?`.
    pub fn to_query(&self) -> String {
        format!(
            "page={}&view={}&size={}&medium={}",
            self.page_index, self.view, self.page_size, self.medium
        )
    }

    /// Link target for the state after `action`.
    pub fn link(&self, action: NavAction) -> String {
        format!("?{}", self.apply(action).to_query())
    }
}

/// Navigation parameters as they arrive in the URL.
///
/// Fields stay strings so a bad value degrades to a default instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavQuery {
    pub page: Option<String>,
    pub view: Option<String>,
    pub size: Option<String>,
    pub medium: Option<String>,
    #[serde(rename = "move")]
    pub move_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(index: usize, count: usize) -> NavState {
        NavState {
            page_index: index,
            ..NavState::new(count, &PagingConfig::default())
        }
    }

    fn query(pairs: &[(&str, &str)]) -> NavQuery {
        let mut q = NavQuery::default();
        for (k, v) in pairs {
            let v = Some((*v).to_string());
            match *k {
                "page" => q.page = v,
                "view" => q.view = v,
                "size" => q.size = v,
                "medium" => q.medium = v,
                "move" => q.move_to = v,
                _ => unreachable!(),
            }
        }
        q
    }

    #[test]
    fn test_moves_clamp_at_both_ends() {
        assert_eq!(state(1, 5).apply(NavAction::Prev).page_index, 1);
        assert_eq!(state(5, 5).apply(NavAction::Next).page_index, 5);
        assert_eq!(state(3, 5).apply(NavAction::Prev).page_index, 2);
        assert_eq!(state(3, 5).apply(NavAction::Next).page_index, 4);
        assert_eq!(state(3, 5).apply(NavAction::First).page_index, 1);
        assert_eq!(state(3, 5).apply(NavAction::Last).page_index, 5);
    }

    #[test]
    fn test_goto_clamps() {
        let s = state(2, 4);
        assert_eq!(s.apply(NavAction::Goto(0)).page_index, 1);
        assert_eq!(s.apply(NavAction::Goto(-7)).page_index, 1);
        assert_eq!(s.apply(NavAction::Goto(3)).page_index, 3);
        assert_eq!(s.apply(NavAction::Goto(99)).page_index, 4);
    }

    #[test]
    fn test_zero_pages_keeps_index_one() {
        let s = state(1, 0);
        for action in [
            NavAction::First,
            NavAction::Prev,
            NavAction::Next,
            NavAction::Last,
            NavAction::Goto(3),
        ] {
            assert_eq!(s.apply(action).page_index, 1, "{action:?}");
        }
        assert!(!s.has_next());
    }

    #[test]
    fn test_all_view_shows_every_page_and_hides_moves() {
        let s = state(2, 3).apply(NavAction::SetView(ViewMode::All));
        assert!((1..=3).all(|n| s.is_visible(n)));
        assert!(!s.shows_move_controls());

        let one = s.apply(NavAction::SetView(ViewMode::One));
        assert!(one.is_visible(2));
        assert!(!one.is_visible(1));
        assert!(one.shows_move_controls());
    }

    #[test]
    fn test_setters_leave_index_alone() {
        let s = state(3, 5)
            .apply(NavAction::SetPageSize(PageSize::Letter))
            .apply(NavAction::SetMedium(Medium::Web));
        assert_eq!(s.page_index, 3);
        assert_eq!(s.page_size, PageSize::Letter);
        assert_eq!(s.medium, Medium::Web);
    }

    #[test]
    fn test_from_query_defaults() {
        let s = NavState::from_query(&NavQuery::default(), 4, &PagingConfig::default());
        assert_eq!(s, NavState::new(4, &PagingConfig::default()));
        assert_eq!(s.page_index, 1);
        assert_eq!(s.view, ViewMode::One);
        assert_eq!(s.page_size, PageSize::A4);
        assert_eq!(s.medium, Medium::Print);
    }

    #[test]
    fn test_from_query_applies_move_after_page() {
        let q = query(&[("page", "2"), ("move", "next"), ("size", "letter")]);
        let s = NavState::from_query(&q, 4, &PagingConfig::default());
        assert_eq!(s.page_index, 3);
        assert_eq!(s.page_size, PageSize::Letter);
    }

    #[test]
    fn test_from_query_bad_values_fall_back() {
        let q = query(&[
            ("page", "abc"),
            ("view", "sideways"),
            ("medium", "tv"),
            ("move", "up"),
        ]);
        let paging = PagingConfig {
            default_view: ViewMode::All,
            ..PagingConfig::default()
        };
        let s = NavState::from_query(&q, 4, &paging);
        assert_eq!(s.page_index, 1);
        assert_eq!(s.view, ViewMode::All);
        assert_eq!(s.medium, Medium::Print);
    }

    #[test]
    fn test_query_round_trip() {
        let s = state(3, 5)
            .apply(NavAction::SetView(ViewMode::All))
            .apply(NavAction::SetMedium(Medium::Web));
        assert_eq!(s.to_query(), "page=3&view=all&size=a4&medium=web");

        let q = query(&[("page", "3"), ("view", "all"), ("size", "a4"), ("medium", "web")]);
        assert_eq!(NavState::from_query(&q, 5, &PagingConfig::default()), s);
    }

    #[test]
    fn test_link_applies_action() {
        assert_eq!(
            state(1, 3).link(NavAction::Last),
            "?page=3&view=one&size=a4&medium=print"
        );
    }

    #[test]
    fn test_chart_height_by_medium() {
        let charts = ChartConfig::default();
        assert_eq!(Medium::Print.chart_height(&charts), "115mm");
        assert_eq!(Medium::Web.chart_height(&charts), "450px");
    }

    #[test]
    fn test_parse_errors() {
        let err = "huge".parse::<PageSize>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown page size 'huge'");
        assert_eq!("Letter".parse::<PageSize>(), Ok(PageSize::Letter));
        assert_eq!("previous".parse::<NavAction>(), Ok(NavAction::Prev));
    }
}
