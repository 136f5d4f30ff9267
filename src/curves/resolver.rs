//! Curve group resolution
//!
//! Walks the chart group table in order and builds one [`ChartDescriptor`]
//! per group that has at least one of its curves in the log. Missing curves
//! are the normal case for logs from different tool strings, so nothing
//! here can fail: a log with none of the known mnemonics simply yields no
//! charts.

use tracing::debug;

use super::axis::{assign, PresentCurve};
use super::groups::{GroupSpec, CHART_GROUPS};
use crate::types::{ChartDescriptor, CurveLookup, DepthAxis};

/// Build every chart the log supports, in report order.
pub fn resolve<C: CurveLookup + ?Sized>(curves: &C) -> Vec<ChartDescriptor> {
    let charts: Vec<ChartDescriptor> = CHART_GROUPS
        .iter()
        .filter_map(|group| resolve_group(group, curves))
        .collect();
    debug!(charts = charts.len(), "Resolved curve charts");
    charts
}

/// Build the chart for one group, or `None` when none of its curves exist.
pub fn resolve_group<C: CurveLookup + ?Sized>(
    group: &GroupSpec,
    curves: &C,
) -> Option<ChartDescriptor> {
    // Group order, not log order.
    let present: Vec<PresentCurve<'_>> = group
        .candidates()
        .into_iter()
        .filter_map(|candidate| {
            curves
                .curve(candidate.mnemonic)
                .map(|curve| PresentCurve { candidate, curve })
        })
        .collect();

    let Some(assignment) = assign(group, &present) else {
        debug!(group = group.id(), "No curves present, skipping chart");
        return None;
    };

    Some(ChartDescriptor {
        id: group.id().to_string(),
        label: group.label().to_string(),
        curves: assignment.curves,
        primary: assignment.primary,
        secondary: assignment.secondary,
        x_axis: DepthAxis::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::groups::RESISTIVITY_AXIS_TITLE;
    use crate::types::{AxisScale, AxisSide, AxisSlot, Curve, DashPattern, StrokeColor};

    const RP_MEMBERS: [&str; 4] = ["R09P", "R15P", "R27P", "R39P"];

    fn curves(mnemonics: &[&str]) -> Vec<Curve> {
        mnemonics
            .iter()
            .map(|m| Curve::new(m, "UNIT", &format!("{m} description"), vec![0.0; 3]))
            .collect()
    }

    fn ids(charts: &[ChartDescriptor]) -> Vec<&str> {
        charts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_example_gamma_and_neutron() {
        let charts = resolve(&curves(&["BTVPVS", "DGRC", "TNPS"]));
        assert_eq!(ids(&charts), ["las-curves-dgr", "las-curves-ctn"]);

        let dgr = &charts[0];
        assert!(dgr.secondary.is_some());
        assert_eq!(dgr.curves.len(), 2);

        let ctn = &charts[1];
        assert!(ctn.secondary.is_none());
        assert_eq!(ctn.curves[0].slot, AxisSlot::Primary);
    }

    #[test]
    fn test_empty_log_yields_no_charts() {
        assert!(resolve(&Vec::<Curve>::new()).is_empty());
    }

    #[test]
    fn test_unrelated_curves_yield_no_charts() {
        assert!(resolve(&curves(&["DEPT", "CALI", "SP"])).is_empty());
    }

    #[test]
    fn test_two_curve_groups_missing_both() {
        for (pair, id) in [
            (["BTVPVS", "DGRC"], "las-curves-dgr"),
            (["ALDCLC", "ALCDLC"], "las-curves-ald"),
            (["BTCSS", "BTCS"], "las-curves-bat"),
        ] {
            let mut all: Vec<&str> = vec!["TNPS", "EWXT"];
            all.extend(
                ["BTVPVS", "DGRC", "ALDCLC", "ALCDLC", "BTCSS", "BTCS"]
                    .iter()
                    .filter(|m| !pair.contains(*m)),
            );
            let charts = resolve(&curves(&all));
            assert!(!ids(&charts).contains(&id), "{id} should be absent");
        }
    }

    #[test]
    fn test_two_curve_groups_secondary_only_is_promoted() {
        for (secondary, id) in [
            ("DGRC", "las-curves-dgr"),
            ("ALCDLC", "las-curves-ald"),
            ("BTCS", "las-curves-bat"),
        ] {
            let charts = resolve(&curves(&[secondary]));
            assert_eq!(ids(&charts), [id]);
            let chart = &charts[0];
            assert!(chart.secondary.is_none());
            assert_eq!(chart.curves.len(), 1);
            assert_eq!(chart.curves[0].mnemonic, secondary);
            assert_eq!(chart.curves[0].slot, AxisSlot::Primary);
            assert_eq!(chart.primary.title, format!("{secondary} [UNIT]"));
        }
    }

    #[test]
    fn test_two_curve_groups_both_present() {
        for pair in [["BTVPVS", "DGRC"], ["ALDCLC", "ALCDLC"], ["BTCSS", "BTCS"]] {
            let charts = resolve(&curves(&pair));
            assert_eq!(charts.len(), 1);
            let chart = &charts[0];
            assert_eq!(chart.primary.side, AxisSide::Left);
            assert!(chart.primary.show_grid);
            let secondary = chart.secondary.as_ref().unwrap();
            assert_eq!(secondary.side, AxisSide::Right);
            assert!(!secondary.show_grid);
            assert_eq!(chart.curves[0].mnemonic, pair[0]);
            assert_eq!(chart.curves[1].slot, AxisSlot::Secondary);
        }
    }

    #[test]
    fn test_declared_order_not_log_order() {
        let charts = resolve(&curves(&["DGRC", "BTVPVS"]));
        assert_eq!(charts[0].curves[0].mnemonic, "BTVPVS");
        assert_eq!(charts[0].curves[0].slot, AxisSlot::Primary);
        assert_eq!(charts[0].curves[1].mnemonic, "DGRC");
    }

    #[test]
    fn test_resistivity_every_subset() {
        for mask in 0u8..16 {
            let subset: Vec<&str> = RP_MEMBERS
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, m)| *m)
                .collect();

            for with_ewxt in [false, true] {
                let mut mnemonics = subset.clone();
                if with_ewxt {
                    mnemonics.push("EWXT");
                }
                let charts = resolve(&curves(&mnemonics));
                let rp = charts.iter().find(|c| c.id == "las-curves-rp");

                if subset.is_empty() && !with_ewxt {
                    assert!(rp.is_none(), "mask={mask}: no chart expected");
                    continue;
                }
                let rp = rp.unwrap();

                let member_slots: Vec<AxisSlot> = rp
                    .curves
                    .iter()
                    .filter(|c| c.mnemonic != "EWXT")
                    .map(|c| c.slot)
                    .collect();
                assert_eq!(member_slots.len(), subset.len());

                if subset.is_empty() {
                    assert!(rp.secondary.is_none());
                    assert_eq!(rp.primary.scale, AxisScale::Log);
                    continue;
                }

                let shared = if with_ewxt {
                    assert!(member_slots.iter().all(|s| *s == AxisSlot::Secondary));
                    rp.secondary.as_ref().unwrap()
                } else {
                    assert!(member_slots.iter().all(|s| *s == AxisSlot::Primary));
                    assert!(rp.secondary.is_none());
                    &rp.primary
                };
                assert_eq!(shared.title, RESISTIVITY_AXIS_TITLE);
                assert_eq!(shared.scale, AxisScale::Log);
                assert_eq!(rp.primary.scale, AxisScale::Log);
            }
        }
    }

    #[test]
    fn test_resistivity_styles() {
        let charts = resolve(&curves(&["EWXT", "R09P", "R15P", "R27P", "R39P"]));
        let styles: Vec<_> = charts[0]
            .curves
            .iter()
            .map(|c| (c.style.color, c.style.dash))
            .collect();
        assert_eq!(
            styles,
            [
                (StrokeColor::Magenta, DashPattern::DashDot),
                (StrokeColor::Green, DashPattern::DashDot),
                (StrokeColor::Black, DashPattern::Solid),
                (StrokeColor::Blue, DashPattern::Dot),
                (StrokeColor::Red, DashPattern::Dash),
            ]
        );
    }

    #[test]
    fn test_all_groups_present() {
        let charts = resolve(&curves(&[
            "BTVPVS", "DGRC", "EWXT", "R09P", "ALDCLC", "ALCDLC", "TNPS", "BTCSS", "BTCS",
        ]));
        assert_eq!(charts.len(), 5);
        assert!(charts.iter().all(|c| c.x_axis.title == "depth [ft]"));
    }
}
