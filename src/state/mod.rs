//! The immutable game state snapshot.
//!
//! ## Lifecycle
//!
//! A `State` is created once by [`new_game`](crate::new_game) and then
//! replaced, never mutated, by each accepted action: every transition
//! consumes `&self` and returns a fresh `State`. Rejected actions
//! leave the caller's state untouched. Persistent `im` collections
//! make each replacement an O(1)-ish structural-sharing copy.
//!
//! ## Invariants
//!
//! - Each card sits in exactly one of: deck, a hand, a table unit, a
//!   capture pile.
//! - `player_order` is a permutation of the roster at all times;
//!   rotation reorders, never adds or removes.
//! - Every table unit holds a value in `1..=CAPTURE_CAP` (valueless
//!   units only for trailed face cards).
//! - Only the head player's hand may lose a card in a transition.

mod actions;
mod deal;

pub use deal::{new_game, new_game_with_config};

use im::Vector;

use crate::cards::Card;
use crate::config::GameConfig;
use crate::player::{Player, PlayerId, PlayerMap};
use crate::unit::Unit;

/// Full immutable snapshot of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    config: GameConfig,
    /// Undealt cards; draws pop from the back (tail).
    deck: Vector<Card>,
    /// Units in play, insertion-ordered so indices are stable.
    table: Vector<Unit>,
    /// Roster, indexed by seat (`PlayerId`).
    players: Vector<Player>,
    /// Cards held, insertion-ordered per hand.
    hands: PlayerMap<Vector<Card>>,
    /// Cards won so far, per player.
    captures: PlayerMap<Vector<Card>>,
    /// Turn rotation; front = current player.
    player_order: Vector<PlayerId>,
}

impl State {
    pub(crate) fn from_parts(
        config: GameConfig,
        deck: Vector<Card>,
        table: Vector<Unit>,
        players: Vector<Player>,
        hands: PlayerMap<Vector<Card>>,
        captures: PlayerMap<Vector<Card>>,
        player_order: Vector<PlayerId>,
    ) -> Self {
        Self {
            config,
            deck,
            table,
            players,
            hands,
            captures,
            player_order,
        }
    }

    /// Engine configuration for this game.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Undealt cards, in draw order (back = next draw).
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Units currently in play, in insertion order.
    #[must_use]
    pub fn table(&self) -> &Vector<Unit> {
        &self.table
    }

    /// The roster, in seat order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// A player by seat identity.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The first player whose display name matches, if any.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// A player's hand, in insertion order.
    ///
    /// "Card at index N" is defined against this order; draws append
    /// at the back, so indices are stable between transitions.
    #[must_use]
    pub fn hand(&self, id: PlayerId) -> &Vector<Card> {
        &self.hands[id]
    }

    /// A player's capture pile.
    #[must_use]
    pub fn captures(&self, id: PlayerId) -> &Vector<Card> {
        &self.captures[id]
    }

    /// The turn rotation; front is the current player.
    #[must_use]
    pub fn player_order(&self) -> &Vector<PlayerId> {
        &self.player_order
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        *self
            .player_order
            .front()
            .expect("player_order is a non-empty permutation of the roster")
    }

    /// Whether play can continue.
    ///
    /// The hand is over once the deck is exhausted (auto-replenish
    /// makes a draw part of every action) or every hand is empty.
    #[must_use]
    pub fn is_hand_over(&self) -> bool {
        self.deck.is_empty() || self.hands.iter().all(|(_, h)| h.is_empty())
    }

    /// Fold scored totals into the players' points counters.
    ///
    /// Produces a new state; the scored totals typically come from
    /// [`score`](crate::scoring::score) on a terminal state.
    #[must_use]
    pub fn with_points_awarded(&self, totals: &PlayerMap<u32>) -> State {
        let mut next = self.clone();
        for (id, points) in totals.iter() {
            let mut player = next.players[id.index()].clone();
            player.points += points;
            next.players.set(id.index(), player);
        }
        next
    }

    // Internal mutators for building the next snapshot. Callers clone
    // first and discard the clone wholesale on any error, so partial
    // mutation is never observable.

    pub(crate) fn rotated(&self) -> State {
        let mut next = self.clone();
        if let Some(head) = next.player_order.pop_front() {
            next.player_order.push_back(head);
        }
        next
    }

    pub(crate) fn hands_mut(&mut self) -> &mut PlayerMap<Vector<Card>> {
        &mut self.hands
    }

    pub(crate) fn captures_mut(&mut self) -> &mut PlayerMap<Vector<Card>> {
        &mut self.captures
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Vector<Card> {
        &mut self.deck
    }

    pub(crate) fn table_mut(&mut self) -> &mut Vector<Unit> {
        &mut self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_state() -> State {
        new_game(&["Hyacinth", "Boonsri"], 0).unwrap()
    }

    #[test]
    fn test_accessors() {
        let state = two_player_state();

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.player(PlayerId::new(0)).name, "Hyacinth");
        assert_eq!(state.player_by_name("Boonsri").unwrap().id, PlayerId::new(1));
        assert!(state.player_by_name("Rose").is_none());
        assert_eq!(state.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_rotation_is_permutation_preserving() {
        let state = two_player_state();
        let rotated = state.rotated();

        assert_eq!(rotated.current_player(), PlayerId::new(1));
        assert_eq!(rotated.player_order().len(), 2);

        let twice = rotated.rotated();
        assert_eq!(twice.player_order(), state.player_order());
    }

    #[test]
    fn test_rotation_does_not_touch_cards() {
        let state = two_player_state();
        let rotated = state.rotated();

        assert_eq!(rotated.deck(), state.deck());
        assert_eq!(rotated.table(), state.table());
        for id in PlayerId::all(2) {
            assert_eq!(rotated.hand(id), state.hand(id));
            assert_eq!(rotated.captures(id), state.captures(id));
        }
    }

    #[test]
    fn test_with_points_awarded() {
        let state = two_player_state();
        let mut totals = PlayerMap::with_value(2, 0u32);
        totals[PlayerId::new(0)] = 6;
        totals[PlayerId::new(1)] = 2;

        let scored = state.with_points_awarded(&totals);

        assert_eq!(scored.player(PlayerId::new(0)).points, 6);
        assert_eq!(scored.player(PlayerId::new(1)).points, 2);
        // Input untouched
        assert_eq!(state.player(PlayerId::new(0)).points, 0);
    }

    #[test]
    fn test_is_hand_over_on_fresh_deal() {
        let state = two_player_state();
        assert!(!state.is_hand_over());
    }

    #[test]
    fn test_hand_indexing_is_stable() {
        let state = two_player_state();
        let hand = state.hand(PlayerId::new(0));

        // Same state, same materialization order
        let again = state.hand(PlayerId::new(0));
        let cards: Vec<Card> = hand.iter().copied().collect();
        let cards_again: Vec<Card> = again.iter().copied().collect();
        assert_eq!(cards, cards_again);
        assert_eq!(cards.len(), 4);
    }
}
