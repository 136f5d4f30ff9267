//! Config validation: unknown-key detection with Levenshtein suggestions
//! and layout sanity checks.
//!
//! Unknown keys are found by parsing the raw TOML into `toml::Value`,
//! walking the key tree and comparing against the known field names.
//! Warnings never break a config; only `ReportConfig::validate` rejects one.

use std::collections::HashSet;

use super::ReportConfig;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path for `ReportConfig`.
///
/// Kept by hand alongside the structs in `report_config.rs`.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [server]
        "server",
        "server.addr",
        // [report]
        "report",
        "report.well_rows_per_page",
        "report.charts_per_page",
        "report.default_page_size",
        "report.default_view",
        "report.default_medium",
        // [charts]
        "charts",
        "charts.print_height_mm",
        "charts.web_height_px",
        "charts.plotly_src",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (*k, levenshtein(unknown, k)))
        .filter(|(_, dist)| *dist <= 3)
        // Tie-break on the key so the suggestion does not depend on hash order.
        .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Never fails: TOML syntax errors are reported by the serde pass.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Layout Sanity Checks
// ============================================================================

/// Values that are legal but almost certainly a mistake.
pub fn check_layout(config: &ReportConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut warn_if = |cond: bool, field: &str, message: String| {
        if cond {
            warnings.push(ValidationWarning {
                field: field.to_string(),
                message,
                suggestion: None,
            });
        }
    };

    warn_if(
        config.report.charts_per_page > 6,
        "report.charts_per_page",
        format!(
            "report.charts_per_page = {} will not fit on one printed page",
            config.report.charts_per_page
        ),
    );
    warn_if(
        config.report.well_rows_per_page > 200,
        "report.well_rows_per_page",
        format!(
            "report.well_rows_per_page = {} will overflow a printed page",
            config.report.well_rows_per_page
        ),
    );
    // Letter is 279 mm tall, A4 297 mm.
    warn_if(
        config.charts.print_height_mm > 279,
        "charts.print_height_mm",
        format!(
            "charts.print_height_mm = {} is taller than a printed page",
            config.charts.print_height_mm
        ),
    );

    warnings
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("hello", "hello"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein("charts_per_pag", "charts_per_page"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_walk_toml_keys_nested() {
        let toml: toml::Value = r#"
            [charts]
            print_height_mm = 100
        "#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&toml, "");
        assert_eq!(keys, vec!["charts", "charts.print_height_mm"]);
    }

    #[test]
    fn test_typo_key_produces_warning_with_suggestion() {
        let toml_str = r#"
[report]
well_row_per_page = 40
"#;
        let warnings = validate_unknown_keys(toml_str);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "report.well_row_per_page");
        assert_eq!(
            warnings[0].suggestion.as_deref(),
            Some("report.well_rows_per_page")
        );
        assert_eq!(
            warnings[0].to_string(),
            "Unknown config key 'report.well_row_per_page' (did you mean 'report.well_rows_per_page'?)"
        );
    }

    #[test]
    fn test_all_valid_keys_produce_zero_warnings() {
        let toml_str = r#"
[server]
addr = "0.0.0.0:9000"

[report]
well_rows_per_page = 40
charts_per_page = 3
default_page_size = "letter"
default_view = "all"
default_medium = "web"

[charts]
print_height_mm = 100
web_height_px = 500
plotly_src = "/static/plotly.min.js"
"#;
        let warnings = validate_unknown_keys(toml_str);
        assert!(warnings.is_empty(), "Expected 0 warnings, got: {warnings:?}");
    }

    #[test]
    fn test_unknown_section_produces_warning() {
        let warnings = validate_unknown_keys("[thresholds]\nfoo = 1\n");
        assert!(warnings.iter().any(|w| w.field == "thresholds"));
        assert!(warnings.iter().any(|w| w.field == "thresholds.foo"));
    }

    #[test]
    fn test_syntax_error_produces_no_warnings() {
        assert!(validate_unknown_keys("[report\n").is_empty());
    }

    #[test]
    fn test_suggest_correction_no_match_for_garbage() {
        let known = known_config_keys();
        assert!(suggest_correction("completely_unrelated_garbage_key_xyz", &known).is_none());
    }

    #[test]
    fn test_layout_defaults_clean() {
        assert!(check_layout(&ReportConfig::default()).is_empty());
    }

    #[test]
    fn test_layout_flags_oversized_values() {
        let mut config = ReportConfig::default();
        config.report.charts_per_page = 12;
        config.charts.print_height_mm = 400;
        let fields: Vec<_> = check_layout(&config)
            .into_iter()
            .map(|w| w.field)
            .collect();
        assert_eq!(fields, ["report.charts_per_page", "charts.print_height_mm"]);
    }
}
