use super::key::{force_bucket, performance_tier, shot_bucket, shot_size_value, GroupKey};
use super::normalize::to_number;
use crate::model::{Group, MachineRecord, ManufacturerModels, PerformanceTier, ReferenceSpecs};
use std::collections::HashMap;
use tracing::trace;

/// A group under construction, with an index over its manufacturer buckets.
struct GroupBuilder {
    group: Group,
    manufacturer_index: HashMap<String, usize>,
}

impl GroupBuilder {
    fn new(reference_specs: ReferenceSpecs) -> Self {
        Self {
            group: Group::new(reference_specs),
            manufacturer_index: HashMap::new(),
        }
    }

    fn push(&mut self, machine: &MachineRecord) {
        let manufacturer = machine.manufacturer_key();
        let slot = match self.manufacturer_index.get(manufacturer) {
            Some(&slot) => slot,
            None => {
                let slot = self.group.manufacturers.len();
                self.group.manufacturers.push(ManufacturerModels {
                    manufacturer: manufacturer.to_string(),
                    machines: Vec::new(),
                });
                self.manufacturer_index.insert(manufacturer.to_string(), slot);
                slot
            }
        };
        self.group.manufacturers[slot].machines.push(machine.clone());
    }
}

/// Reference specs taken from the first machine placed in a group.
pub fn reference_specs_for(machine: &MachineRecord) -> ReferenceSpecs {
    let tier = performance_tier(machine.performance_text());
    ReferenceSpecs {
        clamping_force: force_bucket(to_number(&machine.clamping_force)),
        shot_size: shot_bucket(shot_size_value(&machine.shot_size, tier)),
        screw_type: machine.screw_type.clone(),
        performance: match tier {
            PerformanceTier::Standard => None,
            other => Some(other),
        },
    }
}

/// Partition machines into groups keyed by their bucketed specs.
///
/// Single forward pass. Groups come out in the order their key was first
/// seen; within a group, manufacturers and their machines keep input order.
pub fn group_machines(machines: &[MachineRecord]) -> Vec<Group> {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut builders: Vec<GroupBuilder> = Vec::new();

    for machine in machines {
        let key = GroupKey::for_machine(machine);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                trace!("New group {}", key);
                let slot = builders.len();
                builders.push(GroupBuilder::new(reference_specs_for(machine)));
                index.insert(key, slot);
                slot
            }
        };
        builders[slot].push(machine);
    }

    builders.into_iter().map(|b| b.group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(manufacturer: &str, force: &str, screw: &str, shot: &str) -> MachineRecord {
        MachineRecord {
            manufacturer: manufacturer.to_string(),
            product_type: "Hydraulic".to_string(),
            clamping_force: force.to_string(),
            screw_type: screw.to_string(),
            shot_size: shot.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(group_machines(&[]).is_empty());
    }

    #[test]
    fn test_same_bucket_same_group() {
        let machines = vec![
            machine("A", "410", "Standard", "48"),
            machine("B", "415", "standard", "52"),
            machine("A", "390", "STANDARD ", "46"),
        ];
        let groups = group_machines(&machines);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].models("A").len(), 2);
        assert_eq!(groups[0].models("B").len(), 1);
        assert_eq!(groups[0].manufacturer_names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_reference_specs_from_first_machine() {
        let machines = vec![
            machine("A", "410", "Barrier", "48"),
            machine("B", "415", "barrier", "52"),
        ];
        let groups = group_machines(&machines);
        assert_eq!(groups.len(), 1);
        let specs = &groups[0].reference_specs;
        assert_eq!(specs.clamping_force, 400.0);
        assert_eq!(specs.shot_size, 50.0);
        assert_eq!(specs.screw_type, "Barrier");
        assert_eq!(specs.performance, None);
    }

    #[test]
    fn test_blank_manufacturer_is_unknown() {
        let machines = vec![machine("", "100", "Std", "10"), machine("  ", "100", "Std", "10")];
        let groups = group_machines(&machines);
        assert_eq!(groups[0].models("Unknown").len(), 2);
    }

    #[test]
    fn test_reserved_looking_manufacturer_is_ordinary() {
        let machines = vec![machine("referenceSpecs", "100", "Std", "10")];
        let groups = group_machines(&machines);
        assert_eq!(groups[0].models("referenceSpecs").len(), 1);
        assert_eq!(groups[0].reference_specs.clamping_force, 100.0);
    }

    #[test]
    fn test_multi_tier_reference_specs() {
        let mut m = machine("A", "600", "Std", "120/40");
        m.performance = Some("Multi/2K".to_string());
        let groups = group_machines(&[m]);
        assert_eq!(groups[0].reference_specs.shot_size, 120.0);
        assert_eq!(groups[0].reference_specs.performance, Some(PerformanceTier::Multi));
    }

    #[test]
    fn test_huge_forces_do_not_merge() {
        let machines = vec![
            machine("A", "100000000000000000000000", "Std", "10"),
            machine("B", "300000000000000000000000", "Std", "10"),
        ];
        let groups = group_machines(&machines);
        assert_eq!(groups.len(), 2);
        assert!(groups[0].reference_specs.clamping_force < groups[1].reference_specs.clamping_force);
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let machines = vec![
            machine("A", "900", "Std", "10"),
            machine("A", "100", "Std", "10"),
            machine("B", "900", "Std", "10"),
        ];
        let groups = group_machines(&machines);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].reference_specs.clamping_force, 900.0);
        assert_eq!(groups[0].machine_count(), 2);
    }
}
