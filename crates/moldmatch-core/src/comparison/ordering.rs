use crate::model::Group;

/// Sort by clamping force, then shot size, both ascending.
///
/// The sort is stable: groups with equal buckets keep the order in which
/// their key was first seen.
pub fn sort_groups(groups: &mut [Group]) {
    groups.sort_by(|a, b| {
        let (a, b) = (&a.reference_specs, &b.reference_specs);
        a.clamping_force
            .total_cmp(&b.clamping_force)
            .then_with(|| a.shot_size.total_cmp(&b.shot_size))
    });
}
