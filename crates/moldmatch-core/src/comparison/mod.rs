//! Grouping of comparable machines across manufacturers.
//!
//! raw records → classification → grouping → (dedup for the representative
//! view) → ordering.

pub mod classify;
pub mod dedup;
pub mod grouping;
pub mod key;
pub mod normalize;
pub mod ordering;

use crate::model::{ComparisonResult, ComparisonViews, Group, MachineRecord, ProductType};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which rendering of a comparison to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// One record per manufacturer per group, the most recently checked.
    Representative,
    /// Every record.
    Entire,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Representative => f.write_str("representative"),
            View::Entire => f.write_str("entire"),
        }
    }
}

/// Group one product family and apply the view's passes.
pub fn build_groups(machines: &[MachineRecord], view: View) -> Vec<Group> {
    if machines.is_empty() {
        return Vec::new();
    }
    let mut groups = grouping::group_machines(machines);
    if view == View::Representative {
        dedup::keep_latest_per_manufacturer(&mut groups);
    }
    ordering::sort_groups(&mut groups);
    groups
}

pub fn compare_machines(machines: &[MachineRecord], view: View) -> ComparisonResult {
    let hydraulic = classify::machines_of_type(machines, ProductType::Hydraulic);
    let electric = classify::machines_of_type(machines, ProductType::Electric);
    debug!(
        "{} view: {} hydraulic, {} electric, {} unclassified",
        view,
        hydraulic.len(),
        electric.len(),
        machines.len() - hydraulic.len() - electric.len(),
    );

    ComparisonResult {
        hydraulic: build_groups(&hydraulic, view),
        electric: build_groups(&electric, view),
    }
}

pub fn compare_views(machines: &[MachineRecord]) -> ComparisonViews {
    ComparisonViews {
        representative: compare_machines(machines, View::Representative),
        entire: compare_machines(machines, View::Entire),
    }
}
