//! Chart group table
//!
//! Each chart in the curve section is described declaratively here: which
//! mnemonics it plots, in which order, with which style. The resolver and
//! axis assigner only interpret this table.

use crate::types::{AxisScale, DashPattern, LineStyle, StrokeColor};

/// Title of the axis shared by the `RxxP` resistivity curves.
pub const RESISTIVITY_AXIS_TITLE: &str = "RxxP [ohmm]";

/// A curve a group will plot if the log has it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub mnemonic: &'static str,
    pub style: LineStyle,
    pub scale: AxisScale,
}

impl Candidate {
    pub const fn linear(mnemonic: &'static str, style: LineStyle) -> Self {
        Self {
            mnemonic,
            style,
            scale: AxisScale::Linear,
        }
    }

    pub const fn log(mnemonic: &'static str, style: LineStyle) -> Self {
        Self {
            mnemonic,
            style,
            scale: AxisScale::Log,
        }
    }
}

/// Group with one axis per curve: a primary candidate and an optional
/// secondary candidate that is promoted when the primary is missing.
#[derive(Debug, Clone, Copy)]
pub struct SlotGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub primary: Candidate,
    pub secondary: Option<Candidate>,
}

/// Group with an optional lead curve on its own axis and any number of
/// member curves sharing a single fixed-title axis.
#[derive(Debug, Clone, Copy)]
pub struct SharedAxisGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub lead: Candidate,
    pub members: &'static [Candidate],
    pub shared_title: &'static str,
    pub shared_scale: AxisScale,
}

#[derive(Debug, Clone, Copy)]
pub enum GroupSpec {
    Slots(SlotGroup),
    SharedAxis(SharedAxisGroup),
}

impl GroupSpec {
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Slots(g) => g.id,
            Self::SharedAxis(g) => g.id,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Slots(g) => g.label,
            Self::SharedAxis(g) => g.label,
        }
    }

    /// All candidates in declared order.
    pub fn candidates(&self) -> Vec<&Candidate> {
        match self {
            Self::Slots(g) => std::iter::once(&g.primary)
                .chain(g.secondary.iter())
                .collect(),
            Self::SharedAxis(g) => std::iter::once(&g.lead).chain(g.members).collect(),
        }
    }

    /// All candidate mnemonics in declared order.
    pub fn mnemonics(&self) -> Vec<&'static str> {
        self.candidates().iter().map(|c| c.mnemonic).collect()
    }
}

const fn style(color: StrokeColor, dash: DashPattern) -> LineStyle {
    LineStyle::new(color, dash)
}

const RESISTIVITY_MEMBERS: [Candidate; 4] = [
    Candidate::log("R09P", style(StrokeColor::Green, DashPattern::DashDot)),
    Candidate::log("R15P", style(StrokeColor::Black, DashPattern::Solid)),
    Candidate::log("R27P", style(StrokeColor::Blue, DashPattern::Dot)),
    Candidate::log("R39P", style(StrokeColor::Red, DashPattern::Dash)),
];

/// The five chart groups, in report order.
pub static CHART_GROUPS: [GroupSpec; 5] = [
    GroupSpec::Slots(SlotGroup {
        id: "las-curves-dgr",
        label: "Gamma ray / porosity",
        primary: Candidate::linear("BTVPVS", LineStyle::solid(StrokeColor::Magenta)),
        secondary: Some(Candidate::linear(
            "DGRC",
            LineStyle::solid(StrokeColor::Green),
        )),
    }),
    GroupSpec::SharedAxis(SharedAxisGroup {
        id: "las-curves-rp",
        label: "Resistivity",
        lead: Candidate::log("EWXT", style(StrokeColor::Magenta, DashPattern::DashDot)),
        members: &RESISTIVITY_MEMBERS,
        shared_title: RESISTIVITY_AXIS_TITLE,
        shared_scale: AxisScale::Log,
    }),
    GroupSpec::Slots(SlotGroup {
        id: "las-curves-ald",
        label: "Density",
        primary: Candidate::linear("ALDCLC", style(StrokeColor::Black, DashPattern::Dash)),
        secondary: Some(Candidate::linear(
            "ALCDLC",
            LineStyle::solid(StrokeColor::Red),
        )),
    }),
    GroupSpec::Slots(SlotGroup {
        id: "las-curves-ctn",
        label: "Neutron porosity",
        primary: Candidate::linear("TNPS", LineStyle::solid(StrokeColor::Blue)),
        secondary: None,
    }),
    GroupSpec::Slots(SlotGroup {
        id: "las-curves-bat",
        label: "Sonic / caliper",
        primary: Candidate::linear("BTCSS", LineStyle::solid(StrokeColor::Magenta)),
        secondary: Some(Candidate::linear(
            "BTCS",
            LineStyle::solid(StrokeColor::Green),
        )),
    }),
];

/// Look up a group by chart id.
pub fn group_by_id(id: &str) -> Option<&'static GroupSpec> {
    CHART_GROUPS.iter().find(|g| g.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_group_order() {
        let ids: Vec<_> = CHART_GROUPS.iter().map(GroupSpec::id).collect();
        assert_eq!(
            ids,
            [
                "las-curves-dgr",
                "las-curves-rp",
                "las-curves-ald",
                "las-curves-ctn",
                "las-curves-bat"
            ]
        );
    }

    #[test]
    fn test_mnemonics_unique_across_groups() {
        let mut seen = HashSet::new();
        for group in &CHART_GROUPS {
            for m in group.mnemonics() {
                assert!(seen.insert(m), "{m} appears in more than one group");
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_resistivity_members_declared_order() {
        let rp = group_by_id("las-curves-rp").unwrap();
        assert_eq!(rp.mnemonics(), ["EWXT", "R09P", "R15P", "R27P", "R39P"]);
    }

    #[test]
    fn test_group_by_id_unknown() {
        assert!(group_by_id("las-curves-xyz").is_none());
    }
}
