use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Location;
use crate::state::Placement;

// Terminology:
// action = one truck moving one cell, picking up or dropping off one package
// round = every truck doing at most one action, costs 1

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Location),
    Pickup(usize),
    Dropoff(usize),
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Action::Move(loc) => write!(f, "move {}", loc),
            Action::Pickup(package) => write!(f, "pick up P{}", package),
            Action::Dropoff(package) => write!(f, "drop off P{}", package),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TruckAction {
    pub truck: usize,
    pub action: Action,
}

impl TruckAction {
    pub(crate) fn new(truck: usize, action: Action) -> Self {
        TruckAction { truck, action }
    }
}

impl Display for TruckAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "T{} {}", self.truck, self.action)
    }
}

impl Debug for TruckAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Round(Vec<TruckAction>);

impl Round {
    pub(crate) fn new(actions: Vec<TruckAction>) -> Self {
        Round(actions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, TruckAction> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Round {
    type Item = &'a TruckAction;
    type IntoIter = ::std::slice::Iter<'a, TruckAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, action) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl Debug for Round {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Placement {
    pub(crate) fn apply(&mut self, truck: usize, action: Action) {
        match action {
            Action::Move(dest) => {
                self.trucks[truck] = dest;
                for (holder, pos) in self.holders.iter().zip(self.packages.iter_mut()) {
                    if *holder == Some(truck) {
                        *pos = dest;
                    }
                }
            }
            Action::Pickup(package) => self.holders[package] = Some(truck),
            Action::Dropoff(package) => self.holders[package] = None,
        }
    }

    pub(crate) fn apply_round(&mut self, round: &Round) {
        for ta in round {
            self.apply(ta.truck, ta.action);
        }
    }
}
