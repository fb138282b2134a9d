use crate::actions::{Action, Round, TruckAction};
use crate::data::Location;
use crate::state::{Placement, State};

/// States from the initial one to a goal, in order.
#[derive(Debug, Clone)]
pub struct Plan {
    states: Vec<State>,
}

impl Plan {
    pub(crate) fn new(states: Vec<State>) -> Self {
        assert!(!states.is_empty(), "A plan needs at least the initial state");
        Plan { states }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of states, one more than the number of rounds.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn initial(&self) -> &State {
        &self.states[0]
    }

    pub fn goal(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    pub fn cost(&self) -> u32 {
        self.goal().cost
    }

    pub fn moves(&self) -> u32 {
        self.goal().moves
    }

    pub fn truck_path(&self, truck: usize) -> Vec<Location> {
        self.states
            .iter()
            .map(|s| s.placement.trucks[truck])
            .collect()
    }

    pub fn package_path(&self, package: usize) -> Vec<Location> {
        self.states
            .iter()
            .map(|s| s.placement.packages[package])
            .collect()
    }

    /// What each truck did between consecutive states.
    pub fn rounds(&self) -> Vec<Round> {
        self.states
            .windows(2)
            .map(|pair| round_between(&pair[0].placement, &pair[1].placement))
            .collect()
    }

    /// Applies every round to the initial placement.
    /// Must end up in the goal placement.
    pub fn replay(&self) -> Placement {
        let mut placement = self.initial().placement.clone();
        for round in self.rounds() {
            placement.apply_round(&round);
        }
        placement
    }
}

/// A truck either moved, or changed the holder of exactly one package, or did nothing.
fn round_between(old: &Placement, new: &Placement) -> Round {
    let mut actions = Vec::new();
    for truck in 0..old.trucks.len() {
        if old.trucks[truck] != new.trucks[truck] {
            actions.push(TruckAction::new(truck, Action::Move(new.trucks[truck])));
            continue;
        }

        let changed = (0..old.holders.len()).find_map(|package| {
            match (old.holders[package], new.holders[package]) {
                (None, Some(t)) if t == truck => Some(Action::Pickup(package)),
                (Some(t), None) if t == truck => Some(Action::Dropoff(package)),
                _ => None,
            }
        });
        if let Some(action) = changed {
            actions.push(TruckAction::new(truck, action));
        }
    }
    Round::new(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Config;
    use crate::instance::Instance;
    use crate::Solve;

    fn loc(x: i32, y: i32) -> Location {
        Location::new(x, y)
    }

    fn two_cells_plan() -> Plan {
        let config = Config::new(2, 1, 1, 1).unwrap();
        let instance = Instance::new(config, vec![loc(0, 0)], vec![loc(1, 0)], vec![loc(0, 0)]).unwrap();
        instance.solve(None, false).unwrap().plan.unwrap()
    }

    #[test]
    fn projections() {
        let plan = two_cells_plan();
        assert_eq!(plan.len(), 5);
        assert!(!plan.is_empty());
        assert_eq!(plan.cost(), 4);
        assert_eq!(plan.moves(), 4);
        assert_eq!(
            plan.truck_path(0),
            vec![loc(0, 0), loc(1, 0), loc(1, 0), loc(0, 0), loc(0, 0)]
        );
        assert_eq!(
            plan.package_path(0),
            vec![loc(1, 0), loc(1, 0), loc(1, 0), loc(0, 0), loc(0, 0)]
        );
    }

    #[test]
    fn derived_rounds() {
        let plan = two_cells_plan();
        let rounds: Vec<_> = plan.rounds().iter().map(|r| r.to_string()).collect();
        assert_eq!(
            rounds,
            vec![
                "T0 move (1,0)",
                "T0 pick up P0",
                "T0 move (0,0)",
                "T0 drop off P0",
            ]
        );
    }

    #[test]
    fn replay_reaches_goal() {
        let plan = two_cells_plan();
        assert_eq!(&plan.replay(), plan.goal().placement());
        assert_eq!(plan.initial().cost(), 0);
        assert_eq!(plan.goal().cost(), plan.rounds().len() as u32);
    }

    #[test]
    #[should_panic]
    fn empty_plan() {
        Plan::new(Vec::new());
    }
}
