pub(crate) mod a_star;
mod expand;
pub(crate) mod heuristic;
mod tree;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use fnv::{FnvHashSet, FnvHasher};
use log::{debug, trace};

use crate::instance::Instance;
use crate::plan::Plan;
use crate::state::{Placement, State};
use crate::Solve;

use self::a_star::SearchNode;
use self::tree::SearchTree;

pub use self::a_star::Stats;
pub use self::tree::StateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    StateLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::StateLimit(limit) => {
                write!(f, "Gave up after creating more than {} states", limit)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` if the open set ran out before reaching a goal.
    pub plan: Option<Plan>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(plan: Option<Plan>, stats: Stats) -> Self {
        Self { plan, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.plan {
            None => writeln!(f, "No solution")?,
            Some(ref plan) => writeln!(f, "Cost: {}", plan.cost())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Instance {
    fn solve(&self, max_states: Option<usize>, print_status: bool) -> Result<SolverOk, SolverErr> {
        search(
            self,
            max_states,
            print_status,
            expand::expand,
            heuristic::remaining_cost,
        )
    }
}

fn search<Expand, Heuristic>(
    instance: &Instance,
    max_states: Option<usize>,
    print_status: bool,
    expand: Expand,
    heuristic: Heuristic,
) -> Result<SolverOk, SolverErr>
where
    Expand: Fn(&Instance, &State, StateId) -> Vec<State>,
    Heuristic: Fn(&Instance, &Placement) -> u32,
{
    debug!("Search called");

    let mut stats = Stats::new();
    let mut tree = SearchTree::new();
    let mut to_visit = BinaryHeap::new();
    // only for stats - repeats are expanded anyway so a collision just miscounts
    let mut visited = FnvHashSet::default();

    let mut start = instance.initial.clone();
    start.remaining = heuristic(instance, &start.placement);
    let start_id = tree.add(start);
    stats.add_created(&tree[start_id]);
    to_visit.push(Reverse(SearchNode::new(start_id, &tree[start_id])));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        let cur_state = &tree[cur_node.id];

        if visited.insert(placement_hash(&cur_state.placement)) {
            if stats.add_unique_visited(cur_state) && print_status {
                println!("Visited new depth: {}", cur_state.cost);
                println!("{:?}", stats);
            }
        } else {
            stats.add_repeated(cur_state);
        }

        if cur_state.is_goal(&instance.destinations) {
            debug!("Solved with cost {}, backtracking path", cur_state.cost);
            let plan = Plan::new(tree.path(cur_node.id));
            return Ok(SolverOk::new(Some(plan), stats));
        }

        let new_states = expand(instance, cur_state, cur_node.id);
        trace!("Expanded {:?} into {} states", cur_node, new_states.len());

        for mut new_state in new_states {
            new_state.remaining = heuristic(instance, &new_state.placement);
            let new_id = tree.add(new_state);
            stats.add_created(&tree[new_id]);
            to_visit.push(Reverse(SearchNode::new(new_id, &tree[new_id])));
        }

        if let Some(limit) = max_states {
            if tree.len() > limit {
                debug!("State limit {} exceeded", limit);
                return Err(SolverErr::StateLimit(limit));
            }
        }
    }

    debug!("Open set empty, no solution");
    Ok(SolverOk::new(None, stats))
}

fn placement_hash(placement: &Placement) -> u64 {
    let mut hasher = FnvHasher::default();
    placement.hash(&mut hasher);
    hasher.finish()
}
