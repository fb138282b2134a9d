use crate::instance::Instance;
use crate::state::Placement;

/// Lower bound on the rounds needed to deliver everything.
///
/// Trucks act in parallel so only the slowest package counts (max, not sum).
/// Each package needs to be reached by its nearest truck and picked up (unless it's held already),
/// then carried to its destination and dropped off.
pub(crate) fn remaining_cost(instance: &Instance, placement: &Placement) -> u32 {
    let mut max_cost: u32 = 0;
    for (package, &pos) in placement.packages.iter().enumerate() {
        if placement.is_delivered(package, &instance.destinations) {
            continue;
        }

        // +1 for the dropoff
        let dest_dist = pos.manhattan(instance.destinations[package]) + 1;

        let pickup_dist = if placement.is_held(package) {
            0
        } else {
            // +1 for the pickup
            placement
                .trucks
                .iter()
                .map(|&truck| pos.manhattan(truck))
                .min()
                .unwrap_or(0)
                + 1
        };

        max_cost = max_cost.max(pickup_dist + dest_dist);
    }
    max_cost
}
