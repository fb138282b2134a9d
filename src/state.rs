use crate::data::Location;
use crate::solver::StateId;

/// Where everything is. Each state owns its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    pub(crate) trucks: Vec<Location>,
    /// `None` means the package is on the ground.
    pub(crate) holders: Vec<Option<usize>>,
    pub(crate) packages: Vec<Location>,
}

impl Placement {
    pub(crate) fn new(trucks: Vec<Location>, packages: Vec<Location>) -> Self {
        let holders = vec![None; packages.len()];
        Placement {
            trucks,
            holders,
            packages,
        }
    }

    pub fn truck_positions(&self) -> &[Location] {
        &self.trucks
    }

    pub fn package_positions(&self) -> &[Location] {
        &self.packages
    }

    pub fn holder(&self, package: usize) -> Option<usize> {
        self.holders[package]
    }

    pub fn is_held(&self, package: usize) -> bool {
        self.holders[package].is_some()
    }

    pub fn is_delivered(&self, package: usize, destinations: &[Location]) -> bool {
        self.packages[package] == destinations[package] && !self.is_held(package)
    }

    pub fn is_goal(&self, destinations: &[Location]) -> bool {
        (0..self.packages.len()).all(|p| self.is_delivered(p, destinations))
    }

    /// Held packages must sit on their holder and the holder must exist.
    pub(crate) fn is_consistent(&self) -> bool {
        self.holders
            .iter()
            .zip(&self.packages)
            .all(|(holder, &pos)| match *holder {
                None => true,
                Some(truck) => truck < self.trucks.len() && self.trucks[truck] == pos,
            })
    }
}

/// A node of the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub(crate) placement: Placement,
    /// Rounds taken from the initial state.
    pub(crate) cost: u32,
    /// Heuristic estimate of the rounds still needed.
    pub(crate) remaining: u32,
    /// Individual truck actions taken from the initial state.
    pub(crate) moves: u32,
    pub(crate) parent: Option<StateId>,
}

impl State {
    pub(crate) fn initial(placement: Placement) -> Self {
        State {
            placement,
            cost: 0,
            remaining: 0,
            moves: 0,
            parent: None,
        }
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn truck_positions(&self) -> &[Location] {
        self.placement.truck_positions()
    }

    pub fn package_positions(&self) -> &[Location] {
        self.placement.package_positions()
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn remaining_cost(&self) -> u32 {
        self.remaining
    }

    pub fn total_cost(&self) -> u32 {
        self.cost + self.remaining
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    pub fn is_goal(&self, destinations: &[Location]) -> bool {
        self.placement.is_goal(destinations)
    }
}
