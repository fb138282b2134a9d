use std::ops::Index;

use crate::state::State;

/// Handle of a state in the `SearchTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

/// Owns every state created during one search.
/// States refer to their parent by handle so there are no cycles to worry about.
#[derive(Debug, Default)]
pub(crate) struct SearchTree {
    states: Vec<State>,
}

impl SearchTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, state: State) -> StateId {
        assert!(
            state.placement.is_consistent(),
            "Held package not on its truck: {:?}",
            state.placement
        );
        if let Some(parent) = state.parent {
            assert!(parent.0 < self.states.len(), "Unknown parent {:?}", parent);
        }

        self.states.push(state);
        StateId(self.states.len() - 1)
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// States from the root to `last`, both included.
    pub(crate) fn path(&self, last: StateId) -> Vec<State> {
        let mut ret = Vec::new();
        let mut cur = Some(last);
        while let Some(id) = cur {
            let state = &self[id];
            ret.push(state.clone());
            cur = state.parent;
        }
        ret.reverse();
        ret
    }
}

impl Index<StateId> for SearchTree {
    type Output = State;

    fn index(&self, id: StateId) -> &State {
        &self.states[id.0]
    }
}
