use super::normalize::{round_half_up, to_number};
use crate::model::{MachineRecord, PerformanceTier};
use std::fmt;
use std::hash::{Hash, Hasher};

pub const CLAMPING_FORCE_STEP: f64 = 50.0;
pub const SHOT_SIZE_STEP: f64 = 10.0;

const KEY_SEPARATOR: char = '\u{1f}';

/// Composite grouping key of one machine.
///
/// Buckets compare by their exact bit pattern (with `-0.0` folded into
/// `0.0`), so two keys are equal exactly when their buckets are.
#[derive(Debug, Clone)]
pub struct GroupKey {
    pub force_bucket: f64,
    pub screw_type: String,
    pub shot_bucket: f64,
    pub tier: PerformanceTier,
}

fn bucket_bits(bucket: f64) -> u64 {
    (bucket + 0.0).to_bits()
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        bucket_bits(self.force_bucket) == bucket_bits(other.force_bucket)
            && bucket_bits(self.shot_bucket) == bucket_bits(other.shot_bucket)
            && self.screw_type == other.screw_type
            && self.tier == other.tier
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bucket_bits(self.force_bucket).hash(state);
        self.screw_type.hash(state);
        bucket_bits(self.shot_bucket).hash(state);
        self.tier.hash(state);
    }
}

impl GroupKey {
    pub fn for_machine(machine: &MachineRecord) -> Self {
        let tier = performance_tier(machine.performance_text());
        Self {
            force_bucket: force_bucket(to_number(&machine.clamping_force)),
            screw_type: normalize_screw_type(&machine.screw_type),
            shot_bucket: shot_bucket(shot_size_value(&machine.shot_size, tier)),
            tier,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let screw: String = self
            .screw_type
            .chars()
            .filter(|c| *c != KEY_SEPARATOR)
            .collect();
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.force_bucket,
            screw,
            self.shot_bucket,
            self.tier.as_key(),
            sep = KEY_SEPARATOR
        )
    }
}

/// Nearest multiple of 50.
pub fn force_bucket(clamping_force: f64) -> f64 {
    round_half_up(clamping_force / CLAMPING_FORCE_STEP) * CLAMPING_FORCE_STEP
}

/// Nearest multiple of 10.
pub fn shot_bucket(shot_size: f64) -> f64 {
    round_half_up(shot_size / SHOT_SIZE_STEP) * SHOT_SIZE_STEP
}

pub fn normalize_screw_type(screw_type: &str) -> String {
    screw_type.trim().to_lowercase()
}

/// "high" on an exact (case-insensitive) match, "multi" on containment, else standard.
pub fn performance_tier(performance: &str) -> PerformanceTier {
    let value = performance.trim().to_lowercase();
    if value == "high" {
        PerformanceTier::High
    } else if value.contains("multi") {
        PerformanceTier::Multi
    } else {
        PerformanceTier::Standard
    }
}

/// Shot size of a machine. Multi-injection machines list one size per unit
/// ("50/30"); only the first unit counts.
pub fn shot_size_value(raw: &str, tier: PerformanceTier) -> f64 {
    if tier == PerformanceTier::Multi {
        if let Some((first, _)) = raw.split_once('/') {
            return to_number(first);
        }
    }
    to_number(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(force: &str, screw: &str, shot: &str, performance: Option<&str>) -> MachineRecord {
        MachineRecord {
            clamping_force: force.to_string(),
            screw_type: screw.to_string(),
            shot_size: shot.to_string(),
            performance: performance.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_force_bucket() {
        assert_eq!(force_bucket(410.0), 400.0);
        assert_eq!(force_bucket(435.0), 450.0);
        assert_eq!(force_bucket(425.0), 450.0);
        assert_eq!(force_bucket(0.0), 0.0);
    }

    #[test]
    fn test_shot_bucket() {
        assert_eq!(shot_bucket(48.0), 50.0);
        assert_eq!(shot_bucket(52.0), 50.0);
        assert_eq!(shot_bucket(55.0), 60.0);
    }

    #[test]
    fn test_performance_tier() {
        assert_eq!(performance_tier("High"), PerformanceTier::High);
        assert_eq!(performance_tier(" HIGH "), PerformanceTier::High);
        assert_eq!(performance_tier("Multi/2K"), PerformanceTier::Multi);
        assert_eq!(performance_tier("multi"), PerformanceTier::Multi);
        assert_eq!(performance_tier("High speed"), PerformanceTier::Standard);
        assert_eq!(performance_tier(""), PerformanceTier::Standard);
    }

    #[test]
    fn test_multi_shot_size_uses_first_unit() {
        assert_eq!(shot_size_value("50/30", PerformanceTier::Multi), 50.0);
        assert_eq!(shot_size_value("50/30", PerformanceTier::Standard), 5030.0);
        assert_eq!(shot_size_value("45 oz", PerformanceTier::Multi), 45.0);
    }

    #[test]
    fn test_key_for_machine() {
        let key = GroupKey::for_machine(&machine("410", " Standard ", "48", None));
        assert_eq!(
            key,
            GroupKey {
                force_bucket: 400.0,
                screw_type: "standard".to_string(),
                shot_bucket: 50.0,
                tier: PerformanceTier::Standard,
            }
        );
    }

    #[test]
    fn test_key_distinguishes_tier() {
        let standard = GroupKey::for_machine(&machine("410", "Standard", "48", None));
        let high = GroupKey::for_machine(&machine("410", "Standard", "48", Some("high")));
        assert_ne!(standard, high);
    }

    #[test]
    fn test_huge_buckets_stay_distinct() {
        let a = GroupKey::for_machine(&machine("100000000000000000000000", "Std", "10", None));
        let b = GroupKey::for_machine(&machine("200000000000000000000000", "Std", "10", None));
        assert_ne!(a, b);
        assert!(a.force_bucket < b.force_bucket);
    }

    #[test]
    fn test_negative_zero_bucket_matches_zero() {
        let negative = GroupKey::for_machine(&machine("-0", "Std", "-0", None));
        let zero = GroupKey::for_machine(&machine("0", "Std", "0", None));
        assert_eq!(negative, zero);
        let mut seen = std::collections::HashSet::new();
        seen.insert(zero);
        assert!(seen.contains(&negative));
    }

    #[test]
    fn test_key_display_is_unambiguous() {
        let key = GroupKey::for_machine(&machine("400", "a\u{1f}b", "40", Some("multi")));
        let text = key.to_string();
        assert_eq!(text.matches('\u{1f}').count(), 3);
        assert!(text.starts_with("400\u{1f}ab\u{1f}40"));
        assert!(text.ends_with("multi"));
    }
}
