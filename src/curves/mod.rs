//! Curve grouping and chart composition
//!
//! - `groups`: the fixed table of petrophysical chart groups
//! - `axis`: primary/secondary axis assignment within a group
//! - `resolver`: builds chart descriptors for the groups a log supports

pub mod axis;
pub mod groups;
pub mod resolver;

pub use axis::{assign, axis_title, AxisAssignment, PresentCurve};
pub use groups::{group_by_id, GroupSpec, CHART_GROUPS, RESISTIVITY_AXIS_TITLE};
pub use resolver::{resolve, resolve_group};
