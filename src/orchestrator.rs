//! Match harness: plays timed games of Isolation between two players.
//!
//! Each turn the active player runs on its own scoped thread and publishes
//! actions into a channel. The harness keeps the most recent action received
//! before the turn's time budget runs out, then hangs up. A search player sees
//! the closed channel at its next publish and returns, so the thread is joined
//! at the end of the depth it was working on.
//!
//! # Game Flow
//!
//! ```text
//! [Empty board] -> [Spawn turn thread] -> [Collect actions until deadline]
//!   -> [Validate latest action] -> [Apply] -> [Terminal?] -> [Next turn] ...
//! ```
//!
//! The deadline decides which action counts, not when the turn ends. The turn
//! thread is joined before the game moves on, so a turn lasts until the
//! player returns: at the latest, when the depth it was searching at the
//! deadline completes.
//!
//! A player that publishes nothing in time, or whose latest action is illegal,
//! forfeits the game.

use log::{debug, info, warn};
use rayon::prelude::*;
use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::agent::player::Player;
use crate::config::MatchConfig;
use crate::game_repr::{Action, GameState, Isolation, PlayerId};

/// A player the harness can move onto a turn thread
pub type BoxedPlayer = Box<dyn Player<Isolation> + Send>;

/// Why a player lost by forfeit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forfeit {
    /// Nothing was published before the deadline
    Timeout,
    /// The latest published action was not legal
    IllegalAction(Action),
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player to move had no legal action
    Isolated,
    Forfeit(Forfeit),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Isolated => write!(f, "isolation"),
            Outcome::Forfeit(Forfeit::Timeout) => write!(f, "timeout"),
            Outcome::Forfeit(Forfeit::IllegalAction(action)) => {
                write!(f, "illegal action {}", action)
            }
        }
    }
}

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Seat that won
    pub winner: PlayerId,
    pub outcome: Outcome,
    /// Every applied action, in order
    pub history: Vec<Action>,
    /// Plies played before the game ended
    pub plies: u32,
}

/// Results of a match between two competitors.
///
/// Competitor 0 is the first player returned by the match factory, whichever
/// seat it actually played from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub games: usize,
    pub wins: [usize; 2],
}

impl MatchSummary {
    /// Fraction of games won by competitor 0
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins[0] as f64 / self.games as f64
    }
}

/// Run one turn and return the latest action published before the deadline.
fn take_turn(
    player: &mut (dyn Player<Isolation> + Send),
    state: &Isolation,
    time_limit: Duration,
) -> Option<Action> {
    let (mut tx, rx) = mpsc::channel::<Action>();
    let deadline = Instant::now() + time_limit;

    thread::scope(|scope| {
        scope.spawn(move || player.get_action(state, &mut tx));

        let mut latest = None;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok(action) => latest = Some(action),
                // Player returned; nothing more is coming
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => break,
            }
        }
        // Hang up so the player stops at its next publish
        drop(rx);
        latest
    })
}

/// Play one game from the empty board; `players[0]` moves first.
pub fn play_game(players: &mut [BoxedPlayer; 2], config: &MatchConfig) -> GameRecord {
    let mut state = Isolation::new();
    let mut history = Vec::new();

    let (winner, outcome) = loop {
        if state.terminal_test() {
            break (state.player().opponent(), Outcome::Isolated);
        }

        let mover = state.player();
        let player = players[mover.index()].as_mut();

        let Some(action) = take_turn(player, &state, config.time_limit) else {
            warn!("{} ({}) published no action in time", mover, player.name());
            break (mover.opponent(), Outcome::Forfeit(Forfeit::Timeout));
        };

        match state.try_result(action) {
            Ok(next) => {
                debug!("ply {}: {} plays {}", state.ply_count(), mover, action);
                history.push(action);
                state = next;
            }
            Err(err) => {
                warn!("{} ({}) forfeits: {}", mover, player.name(), err);
                break (mover.opponent(), Outcome::Forfeit(Forfeit::IllegalAction(action)));
            }
        }
    };

    GameRecord {
        winner,
        outcome,
        history,
        plies: state.ply_count(),
    }
}

/// Play `config.games()` games in parallel.
///
/// `make_players(game)` builds fresh competitors for each game, competitor 0
/// first. With `config.fair` every odd-numbered game swaps the seats, so each
/// round is played once from each side.
pub fn run_match<F>(make_players: F, config: &MatchConfig) -> MatchSummary
where
    F: Fn(usize) -> [BoxedPlayer; 2] + Sync,
{
    let games = config.games();
    info!(
        "playing {} games ({} rounds, fair: {}, {:?} per turn)",
        games, config.rounds, config.fair, config.time_limit
    );

    let winners: Vec<usize> = (0..games)
        .into_par_iter()
        .map(|game| {
            let swapped = config.fair && game % 2 == 1;
            let mut players = make_players(game);
            if swapped {
                players.swap(0, 1);
            }

            let record = play_game(&mut players, config);
            let seat = record.winner.index();
            let competitor = if swapped { 1 - seat } else { seat };
            info!(
                "game {}: {} won by {} after {} plies",
                game,
                players[seat].name(),
                record.outcome,
                record.plies
            );
            competitor
        })
        .collect();

    let mut summary = MatchSummary {
        games,
        ..MatchSummary::default()
    };
    for competitor in winners {
        summary.wins[competitor] += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::player::ActionSink;
    use crate::agent::{GreedyPlayer, RandomPlayer};
    use crate::game_repr::Direction;

    /// Publishes a fixed list of actions every turn
    struct ScriptedPlayer(Vec<Action>);

    impl Player<Isolation> for ScriptedPlayer {
        fn get_action(&mut self, _state: &Isolation, sink: &mut dyn ActionSink<Action>) {
            for &action in &self.0 {
                if !sink.put(action) {
                    return;
                }
            }
        }
    }

    fn quick() -> MatchConfig {
        MatchConfig {
            time_limit: Duration::from_millis(500),
            ..MatchConfig::default()
        }
    }

    #[test]
    fn test_game_history_replays_to_the_end() {
        let mut players: [BoxedPlayer; 2] = [
            Box::new(GreedyPlayer::new()),
            Box::new(RandomPlayer::new(Some(4))),
        ];
        let record = play_game(&mut players, &quick());

        assert_eq!(record.outcome, Outcome::Isolated);
        assert_eq!(record.history.len() as u32, record.plies);

        let mut state = Isolation::new();
        for &action in &record.history {
            state = state.try_result(action).expect("recorded actions are legal");
        }
        assert!(state.terminal_test());
        assert_eq!(record.winner, state.player().opponent());
    }

    #[test]
    fn test_silent_player_times_out() {
        let mut players: [BoxedPlayer; 2] = [
            Box::new(ScriptedPlayer(Vec::new())),
            Box::new(GreedyPlayer::new()),
        ];
        let record = play_game(&mut players, &quick());

        assert_eq!(record.winner, PlayerId::Second);
        assert_eq!(record.outcome, Outcome::Forfeit(Forfeit::Timeout));
        assert!(record.history.is_empty());
    }

    #[test]
    fn test_illegal_action_forfeits() {
        // Nobody can jump before being placed
        let jump = Action::Jump(Direction::NNE);
        let mut players: [BoxedPlayer; 2] = [
            Box::new(ScriptedPlayer(vec![jump])),
            Box::new(GreedyPlayer::new()),
        ];
        let record = play_game(&mut players, &quick());

        assert_eq!(record.winner, PlayerId::Second);
        assert_eq!(record.outcome, Outcome::Forfeit(Forfeit::IllegalAction(jump)));
        assert_eq!(record.plies, 0);
    }

    #[test]
    fn test_latest_action_wins() {
        let first = Action::Place(Isolation::cell(0, 0));
        let second = Action::Place(Isolation::cell(4, 5));
        let mut players: [BoxedPlayer; 2] = [
            Box::new(ScriptedPlayer(vec![first, second])),
            Box::new(ScriptedPlayer(Vec::new())),
        ];
        let record = play_game(&mut players, &quick());

        assert_eq!(record.history, vec![second]);
        assert_eq!(record.winner, PlayerId::First);
    }

    #[test]
    fn test_fair_match_plays_both_seats() {
        let config = MatchConfig {
            rounds: 2,
            ..quick()
        };
        let summary = run_match(
            |game| -> [BoxedPlayer; 2] {
                [
                    Box::new(ScriptedPlayer(Vec::new())),
                    Box::new(RandomPlayer::new(Some(game as u64))),
                ]
            },
            &config,
        );

        // The silent competitor forfeits from either seat
        assert_eq!(summary.games, 4);
        assert_eq!(summary.wins, [0, 4]);
        assert_eq!(summary.win_rate(), 0.0);
    }

    #[test]
    fn test_unfair_match_keeps_seats() {
        let config = MatchConfig {
            rounds: 3,
            fair: false,
            ..quick()
        };
        let summary = run_match(
            |_| -> [BoxedPlayer; 2] {
                [
                    Box::new(GreedyPlayer::new()),
                    Box::new(ScriptedPlayer(Vec::new())),
                ]
            },
            &config,
        );

        assert_eq!(summary.games, 3);
        assert_eq!(summary.wins, [3, 0]);
        assert_eq!(summary.win_rate(), 1.0);
    }

    #[test]
    fn test_empty_summary_rate() {
        assert_eq!(MatchSummary::default().win_rate(), 0.0);
    }
}
