//! Player trait and the publish channel players answer through.
//!
//! A turn is driven by the host, not by the player. The host hands the player
//! the current position and an [`ActionSink`], then keeps only the most recent
//! action published before its time budget runs out. Players are expected to
//! publish early (any legal move) and refine as they go.
//!
//! # Cancellation
//!
//! The host never interrupts a player mid-computation. Once it stops
//! listening, the next [`ActionSink::put`] returns `false` and the player
//! should return. A search player therefore stops between completed depths.

use std::sync::mpsc::Sender;

use crate::game_repr::GameState;

/// Where a player publishes its current best action.
pub trait ActionSink<A> {
    /// Publish `action`; the latest published action wins.
    ///
    /// Returns `false` once the host has stopped listening.
    fn put(&mut self, action: A) -> bool;
}

impl<A> ActionSink<A> for Sender<A> {
    fn put(&mut self, action: A) -> bool {
        self.send(action).is_ok()
    }
}

/// Collects every published action; the last element is the one that counts.
impl<A> ActionSink<A> for Vec<A> {
    fn put(&mut self, action: A) -> bool {
        self.push(action);
        true
    }
}

/// Trait for anything that can choose moves in a game.
///
/// `get_action` may publish any number of times but must publish at least once
/// for every non-terminal state it is given.
pub trait Player<S: GameState> {
    /// Choose an action for the side to move in `state`.
    fn get_action(&mut self, state: &S, sink: &mut dyn ActionSink<S::Action>);

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink: Vec<i32> = Vec::new();
        assert!(sink.put(1));
        assert!(sink.put(2));
        assert_eq!(sink, vec![1, 2]);
    }

    #[test]
    fn test_sender_sink_reports_closed_channel() {
        let (mut tx, rx) = channel();
        assert!(tx.put(7u8));
        assert_eq!(rx.recv(), Ok(7));

        drop(rx);
        assert!(!tx.put(8u8));
    }
}
