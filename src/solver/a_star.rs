use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::state::State;

use super::StateId;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    repeated_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    /// Expanded again because the tree search doesn't prune repeated placements.
    pub fn total_repeated(&self) -> usize {
        self.repeated_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, state: &State) -> bool {
        Self::add(&mut self.created_states, state)
    }

    pub(crate) fn add_unique_visited(&mut self, state: &State) -> bool {
        Self::add(&mut self.visited_states, state)
    }

    pub(crate) fn add_repeated(&mut self, state: &State) -> bool {
        Self::add(&mut self.repeated_states, state)
    }

    fn add(counts: &mut Vec<usize>, state: &State) -> bool {
        let mut ret = false;

        // while because the first state reached at some depth might be a repeat
        while state.cost as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[state.cost as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "repeated by depth: {:?}", self.repeated_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total unique visited: {}", self.total_unique_visited().separated_string())?;
        writeln!(f, "total repeated: {}", self.total_repeated().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let repeated = self.total_repeated();
        let left = created - visited - repeated;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Repeated total: {}", repeated.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Unique", "Repeated", "Unknown (not reached)"
        )?;
        // created_states is always the longest
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let repeated = self.repeated_states.get(depth).cloned().unwrap_or(0);
            let left = created - visited - repeated;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                repeated.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}

/// Entry of the open set. The state itself lives in the `SearchTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub(crate) id: StateId,
    pub(crate) total: u32,
    pub(crate) remaining: u32,
    pub(crate) moves: u32,
}

impl SearchNode {
    pub(crate) fn new(id: StateId, state: &State) -> Self {
        Self {
            id,
            total: state.total_cost(),
            remaining: state.remaining,
            moves: state.moves,
        }
    }
}

impl Ord for SearchNode {
    /// Lower total first, then lower remaining estimate, then fewer individual moves
    /// (no pointless wandering in the plan), then older.
    fn cmp(&self, other: &Self) -> Ordering {
        self.total
            .cmp(&other.total)
            .then(self.remaining.cmp(&other.remaining))
            .then(self.moves.cmp(&other.moves))
            .then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
