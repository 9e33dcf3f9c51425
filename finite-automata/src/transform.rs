use crate::{Automaton, StateId, StateSet, TransitionFunction};
use std::collections::{BTreeMap, VecDeque};

impl Automaton {
    /// Subset construction.
    ///
    /// Each state of the result stands for an epsilon-closed set of states of `self`,
    /// numbered in the order they are discovered: breadth first, symbols ascending. The
    /// initial state is always `0`. A symbol leading to the empty set gets no transition,
    /// so the result may be incomplete.
    pub fn determinize(&self) -> Automaton {
        let initial = self.initial_closure();

        let mut subset_ids: BTreeMap<StateSet, StateId> = BTreeMap::new();
        let mut final_states = StateSet::new();
        let mut transition_function = TransitionFunction::new();
        let mut work_list = VecDeque::new();

        subset_ids.insert(initial.clone(), 0);
        work_list.push_back(initial);

        while let Some(subset) = work_list.pop_front() {
            let id = subset_ids[&subset];
            if self.is_accepting(&subset) {
                final_states.insert(id);
            }

            for &symbol in &self.alphabet {
                let next = self.step(&subset, symbol);
                if next.is_empty() {
                    continue;
                }

                let next_id = match subset_ids.get(&next) {
                    Some(&next_id) => next_id,
                    None => {
                        let next_id = subset_ids.len();
                        subset_ids.insert(next.clone(), next_id);
                        work_list.push_back(next);
                        next_id
                    }
                };
                transition_function.insert((id, symbol), StateSet::from([next_id]));
            }
        }

        log::debug!(
            "determinized {} states into {} subsets",
            self.states.len(),
            subset_ids.len()
        );

        Automaton::new_unchecked(
            self.alphabet.clone(),
            (0..subset_ids.len()).collect(),
            StateSet::from([0]),
            final_states,
            transition_function,
        )
    }

    /// Adds a single error state that receives every missing transition and loops to
    /// itself. The error state gets the id after the largest state, or the smallest free
    /// id if that one would overflow. Returns an unchanged copy if no transition is missing.
    pub fn complete(&self) -> Automaton {
        let Some(sink) = self.fresh_states().next() else {
            // every id is taken, so no transition can be missing either
            return self.clone();
        };
        let mut transition_function = self.transition_function.clone();
        let mut missing = false;

        for &state in &self.states {
            for &symbol in &self.alphabet {
                let targets = transition_function.entry((state, symbol)).or_default();
                if targets.is_empty() {
                    targets.insert(sink);
                    missing = true;
                }
            }
        }

        if !missing {
            return self.clone();
        }

        for &symbol in &self.alphabet {
            transition_function.insert((sink, symbol), StateSet::from([sink]));
        }
        let mut states = self.states.clone();
        states.insert(sink);

        Automaton::new_unchecked(
            self.alphabet.clone(),
            states,
            self.initial_states.clone(),
            self.final_states.clone(),
            transition_function,
        )
    }

    /// Accepts exactly the reversed words of `self`.
    pub fn reverse(&self) -> Automaton {
        let mut transition_function = TransitionFunction::new();
        for (&(from, symbol), targets) in &self.transition_function {
            for &to in targets {
                transition_function
                    .entry((to, symbol))
                    .or_default()
                    .insert(from);
            }
        }

        Automaton::new_unchecked(
            self.alphabet.clone(),
            self.states.clone(),
            self.final_states.clone(),
            self.initial_states.clone(),
            transition_function,
        )
    }

    /// Brzozowski's algorithm: determinizing the reversal of a reversed, determinized
    /// automaton yields the minimal DFA.
    pub fn minimize(&self) -> Automaton {
        let minimal = self.reverse().determinize().reverse().determinize();
        log::debug!(
            "minimized {} states into {}",
            self.states.len(),
            minimal.states.len()
        );
        minimal
    }

    /// Accepts exactly the words over the alphabet that `self` rejects.
    pub fn complement(&self) -> Automaton {
        let complete = self.determinize().complete();
        let final_states = complete
            .states
            .difference(&complete.final_states)
            .copied()
            .collect();

        Automaton {
            final_states,
            ..complete
        }
    }
}
