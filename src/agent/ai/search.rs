// Iterative Deepening Driver
//
// Runs the selected searcher at increasing depths and yields the best move of
// every completed depth. The driver is a lazy iterator: nothing is searched
// until the caller pulls the next item, and each item is a fully searched
// depth. A host that stops pulling (for example because its time budget ran
// out) keeps the last move it received, which is always legal.
//
// Two cases never search:
// - the opening, while fewer than `opening_random_plies` plies have been played
// - the `random` technique (also what unknown technique names map to)
// Both yield exactly one uniformly random legal move.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

use super::technique::{Searcher, Technique};
use crate::config::SearchConfig;
use crate::game_repr::GameState;

/// Best move found by one completed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<A> {
    pub best_move: A,
    /// Depth searched; 0 for a random move
    pub depth: i32,
}

/// Lazy sequence of best-move estimates for one turn
pub struct Search<'a, S: GameState, R: Rng + ?Sized> {
    state: &'a S,
    rng: &'a mut R,
    technique: Technique,
    plan: Plan<S>,
}

enum Plan<S: GameState> {
    Random,
    Deepen {
        searcher: Searcher<S>,
        depths: RangeInclusive<i32>,
    },
    Done,
}

/// Start a search of `state` with the technique in `config`.
///
/// Terminal states have no legal move, so the returned iterator is empty and
/// no searcher is ever called on them.
pub fn search<'a, S, R>(state: &'a S, config: &SearchConfig, rng: &'a mut R) -> Search<'a, S, R>
where
    S: GameState,
    R: Rng + ?Sized,
{
    let technique = config.technique;
    let plan = if state.terminal_test() {
        debug!("no search: position is terminal at ply {}", state.ply_count());
        Plan::Done
    } else if state.ply_count() < config.opening_random_plies {
        Plan::Random
    } else {
        match technique.searcher::<S>() {
            Some(searcher) => Plan::Deepen {
                searcher,
                depths: technique.depths(config),
            },
            None => Plan::Random,
        }
    };

    Search {
        state,
        rng,
        technique,
        plan,
    }
}

/// Uniformly random legal action, `None` if there is none.
pub fn random_action<S, R>(state: &S, rng: &mut R) -> Option<S::Action>
where
    S: GameState,
    R: Rng + ?Sized,
{
    state.actions().choose(rng).copied()
}

impl<'a, S, R> Iterator for Search<'a, S, R>
where
    S: GameState,
    R: Rng + ?Sized,
{
    type Item = SearchResult<S::Action>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.plan, Plan::Done) {
            Plan::Done => None,
            Plan::Random => {
                let best_move = random_action(self.state, self.rng)?;
                debug!("random move {:?} at ply {}", best_move, self.state.ply_count());
                Some(SearchResult { best_move, depth: 0 })
            }
            Plan::Deepen {
                searcher,
                mut depths,
            } => {
                let depth = depths.next()?;
                let best_move = searcher(self.state, depth)?;
                debug!("{} depth {} best {:?}", self.technique, depth, best_move);

                self.plan = Plan::Deepen { searcher, depths };
                Some(SearchResult { best_move, depth })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Action, Isolation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn midgame() -> Isolation {
        Isolation::new()
            .result(Action::Place(Isolation::cell(4, 5)))
            .result(Action::Place(Isolation::cell(2, 2)))
    }

    #[test]
    fn test_opening_is_single_random_move() {
        let state = Isolation::new();
        let mut rng = StdRng::seed_from_u64(1);

        let results: Vec<_> = search(&state, &SearchConfig::default(), &mut rng).collect();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].depth, 0);
        assert!(state.actions().contains(&results[0].best_move));
    }

    #[test]
    fn test_opening_random_move_follows_rng() {
        let state = Isolation::new();
        let config = SearchConfig::default();

        let first = search(&state, &config, &mut StdRng::seed_from_u64(9)).next();
        let second = search(&state, &config, &mut StdRng::seed_from_u64(9)).next();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterative_techniques_yield_every_depth() {
        let state = midgame();

        for technique in [Technique::Pvs, Technique::AlphaBetaIterative] {
            let config = SearchConfig::with_technique(technique);
            let mut rng = StdRng::seed_from_u64(0);
            let results: Vec<_> = search(&state, &config, &mut rng).collect();

            let depths: Vec<i32> = results.iter().map(|r| r.depth).collect();
            assert_eq!(depths, vec![1, 2, 3, 4, 5]);
            let legal = state.actions();
            assert!(results.iter().all(|r| legal.contains(&r.best_move)));
        }
    }

    #[test]
    fn test_non_positive_depth_limit_still_yields_a_move() {
        let state = midgame();

        for technique in [Technique::Pvs, Technique::AlphaBetaIterative] {
            for depth_limit in [0, -1] {
                let config = SearchConfig {
                    depth_limit,
                    ..SearchConfig::with_technique(technique)
                };
                let mut rng = StdRng::seed_from_u64(0);
                let results: Vec<_> = search(&state, &config, &mut rng).collect();

                assert_eq!(results.len(), 1, "{} with limit {}", technique, depth_limit);
                assert_eq!(results[0].depth, depth_limit);
                assert!(state.actions().contains(&results[0].best_move));
            }
        }
    }

    #[test]
    fn test_fixed_depth_techniques_yield_once() {
        let state = midgame();
        let mut rng = StdRng::seed_from_u64(0);

        let config = SearchConfig::with_technique(Technique::Minimax);
        let minimax: Vec<_> = search(&state, &config, &mut rng).collect();
        assert_eq!(minimax.len(), 1);
        assert_eq!(minimax[0].depth, 3);

        let config = SearchConfig::with_technique(Technique::AlphaBeta);
        let alphabeta: Vec<_> = search(&state, &config, &mut rng).collect();
        assert_eq!(alphabeta.len(), 1);
        assert_eq!(alphabeta[0].depth, 5);
    }

    #[test]
    fn test_random_technique_after_opening() {
        let state = midgame();
        let mut rng = StdRng::seed_from_u64(4);

        let config = SearchConfig::with_technique(Technique::from_name("does-not-exist"));
        let results: Vec<_> = search(&state, &config, &mut rng).collect();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].depth, 0);
        assert!(state.actions().contains(&results[0].best_move));
    }

    #[test]
    fn test_custom_opening_length() {
        let state = midgame();
        let config = SearchConfig {
            opening_random_plies: 3,
            ..SearchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(2);

        let results: Vec<_> = search(&state, &config, &mut rng).collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].depth, 0);
    }

    #[test]
    fn test_search_is_lazy() {
        let state = midgame();
        let config = SearchConfig::default();
        let mut rng = StdRng::seed_from_u64(0);

        // Taking the first estimate only runs the depth-1 search
        let first = search(&state, &config, &mut rng).next();
        assert_eq!(first.map(|r| r.depth), Some(1));
    }
}
