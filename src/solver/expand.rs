use crate::actions::{Action, TruckAction};
use crate::instance::Instance;
use crate::state::State;

use super::StateId;

/// Everything one truck can do in the next round, judged by the state before the round.
pub(crate) fn truck_actions(instance: &Instance, state: &State, truck: usize) -> Vec<Action> {
    let placement = &state.placement;
    let truck_pos = placement.trucks[truck];

    let mut actions: Vec<_> = instance
        .grid
        .neighbors(truck_pos)
        .iter()
        .map(|&dest| Action::Move(dest))
        .collect();

    for (package, &pos) in placement.packages.iter().enumerate() {
        match placement.holders[package] {
            // delivered packages are never touched again
            None if pos == truck_pos && !placement.is_delivered(package, &instance.destinations) => {
                actions.push(Action::Pickup(package))
            }
            Some(holder) if holder == truck && pos == instance.destinations[package] => {
                actions.push(Action::Dropoff(package))
            }
            _ => {}
        }
    }

    actions
}

/// One successor per combination of truck actions.
///
/// Trucks without any action sit the round out. All trucks act in the same round
/// so each successor costs exactly 1 more than `state`.
pub(crate) fn expand(instance: &Instance, state: &State, id: StateId) -> Vec<State> {
    let choices: Vec<(usize, Vec<Action>)> = (0..state.placement.trucks.len())
        .map(|truck| (truck, truck_actions(instance, state, truck)))
        .filter(|(_, actions)| !actions.is_empty())
        .collect();

    let mut new_states = Vec::new();
    if choices.is_empty() {
        // dead end
        return new_states;
    }

    // odometer over the action lists, the last truck changes fastest
    let mut indices = vec![0; choices.len()];
    let mut round = Vec::with_capacity(choices.len());
    'combinations: loop {
        round.clear();
        round.extend(
            choices
                .iter()
                .zip(&indices)
                .map(|((truck, actions), &i)| TruckAction::new(*truck, actions[i])),
        );

        if !picks_up_twice(&round) {
            let mut new_state = state.clone();
            for ta in &round {
                new_state.placement.apply(ta.truck, ta.action);
            }
            new_state.cost += 1;
            new_state.moves += round.len() as u32;
            new_state.remaining = 0;
            new_state.parent = Some(id);
            new_states.push(new_state);
        }

        let mut digit = indices.len();
        loop {
            if digit == 0 {
                break 'combinations;
            }
            digit -= 1;
            indices[digit] += 1;
            if indices[digit] < choices[digit].1.len() {
                break;
            }
            indices[digit] = 0;
        }
    }

    new_states
}

/// Two trucks on the same cell can't both take the same package.
fn picks_up_twice(round: &[TruckAction]) -> bool {
    round.iter().enumerate().any(|(i, a)| match a.action {
        Action::Pickup(package) => round[i + 1..]
            .iter()
            .any(|b| b.action == Action::Pickup(package)),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Config;
    use crate::data::Location;
    use crate::solver::tree::SearchTree;

    fn loc(x: i32, y: i32) -> Location {
        Location::new(x, y)
    }

    fn instance(
        width: usize,
        height: usize,
        trucks: Vec<Location>,
        packages: Vec<Location>,
        destinations: Vec<Location>,
    ) -> Instance {
        let config = Config::new(width, height, trucks.len(), packages.len()).unwrap();
        Instance::new(config, trucks, packages, destinations).unwrap()
    }

    fn expand_initial(instance: &Instance) -> (SearchTree, StateId, Vec<State>) {
        let mut tree = SearchTree::new();
        let id = tree.add(instance.initial_state().clone());
        let new_states = expand(instance, &tree[id], id);
        (tree, id, new_states)
    }

    #[test]
    fn single_truck_moves() {
        let instance = instance(2, 1, vec![loc(0, 0)], vec![loc(1, 0)], vec![loc(0, 0)]);
        let (tree, id, new_states) = expand_initial(&instance);
        assert_eq!(new_states.len(), 1);

        let next = &new_states[0];
        assert_eq!(next.truck_positions(), &[loc(1, 0)]);
        assert_eq!(next.cost(), tree[id].cost() + 1);
        assert_eq!(next.moves(), 1);
        assert_eq!(next.parent(), Some(id));
    }

    #[test]
    fn cartesian_product_over_trucks() {
        // center has 4 moves, corner has 2
        let instance = instance(
            3,
            3,
            vec![loc(1, 1), loc(0, 0)],
            vec![loc(2, 2)],
            vec![loc(2, 0)],
        );
        let (_, id, new_states) = expand_initial(&instance);
        assert_eq!(new_states.len(), 8);
        for state in &new_states {
            assert_eq!(state.cost(), 1);
            // both trucks acted
            assert_eq!(state.moves(), 2);
            assert_eq!(state.parent(), Some(id));
        }

        // last truck changes fastest
        assert_eq!(new_states[0].truck_positions(), &[loc(1, 0), loc(1, 0)]);
        assert_eq!(new_states[1].truck_positions(), &[loc(1, 0), loc(0, 1)]);
    }

    #[test]
    fn pickup_and_dropoff_options() {
        // truck on a package and holding another that's at its destination
        let instance = instance(
            3,
            1,
            vec![loc(0, 0)],
            vec![loc(0, 0), loc(2, 0)],
            vec![loc(2, 0), loc(0, 0)],
        );
        let mut state = instance.initial_state().clone();
        state.placement.holders[1] = Some(0);
        state.placement.packages[1] = loc(0, 0);

        let actions = truck_actions(&instance, &state, 0);
        assert_eq!(
            actions,
            vec![Action::Move(loc(1, 0)), Action::Pickup(0), Action::Dropoff(1)]
        );
    }

    #[test]
    fn no_dropoff_away_from_destination() {
        let instance = instance(3, 1, vec![loc(1, 0)], vec![loc(1, 0)], vec![loc(2, 0)]);
        let mut state = instance.initial_state().clone();
        state.placement.holders[0] = Some(0);

        let actions = truck_actions(&instance, &state, 0);
        assert_eq!(actions, vec![Action::Move(loc(2, 0)), Action::Move(loc(0, 0))]);

        let mut tree = SearchTree::new();
        let id = tree.add(state.clone());
        for next in expand(&instance, &state, id) {
            // the package goes wherever the truck goes
            assert_eq!(next.package_positions()[0], next.truck_positions()[0]);
            assert!(next.placement().is_held(0));
        }
    }

    #[test]
    fn delivered_package_is_inert() {
        let instance = instance(2, 1, vec![loc(0, 0)], vec![loc(0, 0)], vec![loc(0, 0)]);
        let actions = truck_actions(&instance, instance.initial_state(), 0);
        assert_eq!(actions, vec![Action::Move(loc(1, 0))]);
    }

    #[test]
    fn one_package_two_trucks() {
        let instance = instance(
            2,
            1,
            vec![loc(0, 0), loc(0, 0)],
            vec![loc(0, 0)],
            vec![loc(1, 0)],
        );
        let (_, _, new_states) = expand_initial(&instance);
        // (move, pickup) x (move, pickup) without both picking up
        assert_eq!(new_states.len(), 3);
        for state in &new_states {
            assert!(state.placement().is_consistent());
        }
        assert_eq!(
            new_states
                .iter()
                .filter(|s| s.placement().holder(0) == Some(0))
                .count(),
            1
        );
        assert_eq!(
            new_states
                .iter()
                .filter(|s| s.placement().holder(0) == Some(1))
                .count(),
            1
        );
    }

    #[test]
    fn truck_without_actions_sits_out() {
        // 1x1: no moves, truck 1 has nothing, truck 0 can pick up
        let instance = instance(
            1,
            1,
            vec![loc(0, 0), loc(0, 0)],
            vec![loc(0, 0)],
            vec![loc(0, 0)],
        );
        let mut state = instance.initial_state().clone();
        state.placement.holders[0] = Some(0);

        let mut tree = SearchTree::new();
        let id = tree.add(state.clone());
        let new_states = expand(&instance, &state, id);
        assert_eq!(new_states.len(), 1);
        assert_eq!(new_states[0].moves(), 1);
        assert!(new_states[0].is_goal(instance.destinations()));
    }

    #[test]
    fn dead_end() {
        let instance = instance(1, 1, vec![loc(0, 0)], vec![loc(0, 0)], vec![loc(0, 0)]);
        let (_, _, new_states) = expand_initial(&instance);
        assert!(new_states.is_empty());
    }
}
