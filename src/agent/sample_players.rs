//! Baseline opponents for benchmarking the search agent.
//!
//! Neither player looks further than one ply, so both answer instantly and
//! always publish exactly one action.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::ai::random_action;
use super::player::{ActionSink, Player};
use crate::game_repr::GameState;

/// Picks a uniformly random legal action.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl<S: GameState> Player<S> for RandomPlayer {
    fn get_action(&mut self, state: &S, sink: &mut dyn ActionSink<S::Action>) {
        if let Some(action) = random_action(state, &mut self.rng) {
            sink.put(action);
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Picks the action that leaves its own piece the most liberties.
///
/// Ties go to the first such action in `actions()` order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPlayer;

impl GreedyPlayer {
    pub fn new() -> Self {
        Self
    }

    fn choose<S: GameState>(state: &S) -> Option<S::Action> {
        let me = state.player();
        let mut best: Option<(S::Action, usize)> = None;

        for action in state.actions() {
            let next = state.result(action);
            let mobility = next.liberties(next.location(me)).len();
            if best.map_or(true, |(_, m)| mobility > m) {
                best = Some((action, mobility));
            }
        }
        best.map(|(action, _)| action)
    }
}

impl<S: GameState> Player<S> for GreedyPlayer {
    fn get_action(&mut self, state: &S, sink: &mut dyn ActionSink<S::Action>) {
        if let Some(action) = Self::choose(state) {
            sink.put(action);
        }
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
