use crate::model::{Group, MachineRecord};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use tracing::trace;

/// Month a price was checked, parsed from "MM.YYYY".
///
/// Anything else parses to the earliest possible period, so it sorts behind
/// every well-formed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CheckedPeriod(Option<NaiveDate>);

impl CheckedPeriod {
    pub const EARLIEST: CheckedPeriod = CheckedPeriod(None);

    pub fn parse(text: &str) -> Self {
        let parts: Vec<&str> = text.trim().split('.').collect();
        if parts.len() != 2 {
            return Self::EARLIEST;
        }
        let month = parts[0].trim().parse::<u32>().ok();
        let year = parts[1].trim().parse::<i32>().ok();
        match (month, year) {
            (Some(month), Some(year)) => CheckedPeriod(NaiveDate::from_ymd_opt(year, month, 1)),
            _ => Self::EARLIEST,
        }
    }
}

impl fmt::Display for CheckedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{:02}.{}", date.month(), date.year()),
            None => f.write_str("unknown"),
        }
    }
}

/// Index of the most recently checked machine. Ties keep the earliest index.
pub fn latest_index(machines: &[MachineRecord]) -> Option<usize> {
    let mut best: Option<(usize, CheckedPeriod)> = None;
    for (i, machine) in machines.iter().enumerate() {
        let period = CheckedPeriod::parse(&machine.checked_time);
        match best {
            Some((_, best_period)) if period <= best_period => {}
            _ => best = Some((i, period)),
        }
    }
    best.map(|(i, _)| i)
}

/// Collapse every manufacturer bucket to its most recently checked machine.
///
/// Reference specs and the set of manufacturers are left untouched.
pub fn keep_latest_per_manufacturer(groups: &mut [Group]) {
    for group in groups.iter_mut() {
        for models in group.manufacturers.iter_mut() {
            if models.machines.len() <= 1 {
                continue;
            }
            if let Some(i) = latest_index(&models.machines) {
                let keep = models.machines.swap_remove(i);
                trace!(
                    "{}: keeping {} checked {} over {} older",
                    models.manufacturer,
                    keep.model_name,
                    CheckedPeriod::parse(&keep.checked_time),
                    models.machines.len(),
                );
                models.machines = vec![keep];
            }
        }
    }
}
