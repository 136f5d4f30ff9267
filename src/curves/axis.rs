//! Axis assignment within a chart group
//!
//! Axes are handed out in order: the first axis requested becomes the
//! primary, the second becomes the secondary. A group whose primary
//! candidate is missing therefore promotes its next present curve to the
//! primary axis, and a chart never ends up with only a secondary axis.
//! When both axes exist, the secondary is drawn on the right without
//! gridlines so it overlays the primary cleanly.

use super::groups::{Candidate, GroupSpec, SharedAxisGroup, SlotGroup};
use crate::types::{AxisSlot, AxisSpec, Curve, PlacedCurve, UNITLESS};

/// A candidate curve that the log actually contains.
#[derive(Debug, Clone, Copy)]
pub struct PresentCurve<'a> {
    pub candidate: &'a Candidate,
    pub curve: &'a Curve,
}

impl PresentCurve<'_> {
    fn placed(&self, slot: AxisSlot) -> PlacedCurve {
        PlacedCurve {
            mnemonic: self.curve.mnemonic.clone(),
            description: self.curve.description.clone(),
            style: self.candidate.style,
            slot,
        }
    }

    fn own_axis(&self) -> AxisSpec {
        AxisSpec::new(
            axis_title(&self.curve.original_mnemonic, &self.curve.unit),
            self.candidate.scale,
        )
    }
}

/// Result of assigning a group's present curves to axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisAssignment {
    pub primary: AxisSpec,
    pub secondary: Option<AxisSpec>,
    pub curves: Vec<PlacedCurve>,
}

/// Axis title for a single curve: `MNEM [unit]`, or just `MNEM` when unitless.
pub fn axis_title(mnemonic: &str, unit: &str) -> String {
    if unit == UNITLESS {
        mnemonic.to_string()
    } else {
        format!("{mnemonic} [{unit}]")
    }
}

/// Hands out the primary axis first, then the secondary.
#[derive(Debug, Default)]
struct AxisSlots {
    primary: Option<AxisSpec>,
    secondary: Option<AxisSpec>,
}

impl AxisSlots {
    fn place(&mut self, axis: AxisSpec) -> AxisSlot {
        if self.primary.is_none() {
            self.primary = Some(axis);
            AxisSlot::Primary
        } else {
            self.secondary = Some(axis);
            AxisSlot::Secondary
        }
    }

    fn finish(self, curves: Vec<PlacedCurve>) -> Option<AxisAssignment> {
        let primary = self.primary?;
        Some(AxisAssignment {
            primary,
            secondary: self.secondary.map(AxisSpec::overlay),
            curves,
        })
    }
}

/// Assign the present curves of a group to axes.
///
/// Slots follow the group's declaration, whatever order `present` is in.
/// Returns `None` when nothing is present.
pub fn assign(group: &GroupSpec, present: &[PresentCurve<'_>]) -> Option<AxisAssignment> {
    match group {
        GroupSpec::Slots(g) => assign_slots(g, present),
        GroupSpec::SharedAxis(g) => assign_shared(g, present),
    }
}

fn find<'p, 'a>(present: &'p [PresentCurve<'a>], candidate: &Candidate) -> Option<&'p PresentCurve<'a>> {
    present
        .iter()
        .find(|p| p.candidate.mnemonic == candidate.mnemonic)
}

/// One axis per curve: the declared primary first, then the secondary.
fn assign_slots(group: &SlotGroup, present: &[PresentCurve<'_>]) -> Option<AxisAssignment> {
    let mut slots = AxisSlots::default();
    let curves: Vec<PlacedCurve> = std::iter::once(&group.primary)
        .chain(group.secondary.iter())
        .filter_map(|candidate| find(present, candidate))
        .map(|p| {
            let slot = slots.place(p.own_axis());
            p.placed(slot)
        })
        .collect();
    slots.finish(curves)
}

/// Lead curve on its own axis, every member on one shared axis.
fn assign_shared(group: &SharedAxisGroup, present: &[PresentCurve<'_>]) -> Option<AxisAssignment> {
    let mut slots = AxisSlots::default();
    let mut curves = Vec::with_capacity(present.len());

    if let Some(lead) = find(present, &group.lead) {
        let slot = slots.place(lead.own_axis());
        curves.push(lead.placed(slot));
    }

    let members: Vec<_> = present
        .iter()
        .filter(|p| p.candidate.mnemonic != group.lead.mnemonic)
        .collect();
    if !members.is_empty() {
        let slot = slots.place(AxisSpec::new(group.shared_title, group.shared_scale));
        curves.extend(members.iter().map(|p| p.placed(slot)));
    }

    slots.finish(curves)
}
