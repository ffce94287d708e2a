//! The three player actions: discard (trail), build, capture.
//!
//! ## Turn acquisition
//!
//! Every action first resolves the actor through
//! [`State::try_acquire_turn`]: look the name up in the roster, check
//! it against the head of the rotation, and hand back the actor plus a
//! state whose rotation has already advanced. Rotation is part of the
//! returned value, never a deferred side effect.
//!
//! ## Rejection
//!
//! A failed action returns [`Rejection`] carrying both the error kind
//! and the state the caller should adopt: under the default
//! rotate-on-attempt policy that state has the rotation advanced by
//! one, so a player who keeps submitting invalid actions still burns
//! their turns. The input state is never mutated either way, and no
//! partially applied deck/table/hand change is ever observable.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::config::TurnPolicy;
use crate::error::{ActionError, Rejection};
use crate::player::PlayerId;
use crate::unit::Unit;

use super::State;

/// Resolved table target indices. Four targets cover the common case
/// without heap allocation.
type TargetIndices = SmallVec<[usize; 4]>;

impl State {
    /// Resolve whose turn it is and advance the rotation.
    ///
    /// Returns the acting player's id and a new state with the head of
    /// `player_order` moved to the tail.
    ///
    /// # Errors
    ///
    /// [`ActionError::UnknownPlayer`] if no roster entry matches the
    /// name; [`ActionError::OutOfTurn`] if the matched player is not
    /// at the head of the rotation.
    pub fn try_acquire_turn(&self, player_name: &str) -> Result<(PlayerId, State), ActionError> {
        let actor = self
            .player_by_name(player_name)
            .ok_or(ActionError::UnknownPlayer)?
            .id;

        if actor != self.current_player() {
            return Err(ActionError::OutOfTurn);
        }

        Ok((actor, self.rotated()))
    }

    /// Discard (trail): place a hand card on the table as a new
    /// singleton unit and draw a replacement.
    ///
    /// # Errors
    ///
    /// Rejects with `UnknownPlayer`, `OutOfTurn`,
    /// `CardIndexOutOfRange`, or `DeckExhausted`.
    pub fn with_discard(&self, player_name: &str, hand_index: usize) -> Result<State, Rejection> {
        self.attempt(player_name, |next, actor| {
            let card = take_hand_card(next, actor, hand_index)?;
            next.table_mut().push_back(Unit::from_card(card));
            draw_replacement(next, actor)
        })
    }

    /// Build: merge a hand card with one or more table units into a
    /// single unit worth their summed value.
    ///
    /// Duplicate target indices collapse (set semantics). The merge is
    /// all-or-nothing: if any step is invalid the whole action is
    /// rejected and the table is unchanged.
    ///
    /// # Errors
    ///
    /// Rejects with `UnknownPlayer`, `OutOfTurn`,
    /// `CardIndexOutOfRange`, `TargetIndexOutOfRange`,
    /// `InvalidCombination`, or `DeckExhausted`.
    pub fn with_build(
        &self,
        player_name: &str,
        hand_index: usize,
        target_indices: &[usize],
    ) -> Result<State, Rejection> {
        self.attempt(player_name, |next, actor| {
            let card = take_hand_card(next, actor, hand_index)?;
            let targets = resolve_targets(next, target_indices)?;

            let mut build = Unit::from_card(card);
            for &index in &targets {
                let target = next.table_mut().remove(index);
                build = build.merge(&target)?;
            }
            next.table_mut().push_back(build);

            draw_replacement(next, actor)
        })
    }

    /// Capture: claim one or more table units whose value exactly
    /// matches the played card's value.
    ///
    /// All targets must match; a single mismatch rejects the entire
    /// action. The captured units' cards and the played card all join
    /// the actor's capture pile.
    ///
    /// # Errors
    ///
    /// Rejects with `UnknownPlayer`, `OutOfTurn`,
    /// `CardIndexOutOfRange`, `TargetIndexOutOfRange`,
    /// `ValueMismatch`, or `DeckExhausted`.
    pub fn with_capture(
        &self,
        player_name: &str,
        hand_index: usize,
        target_indices: &[usize],
    ) -> Result<State, Rejection> {
        self.attempt(player_name, |next, actor| {
            let card = take_hand_card(next, actor, hand_index)?;
            let targets = resolve_targets(next, target_indices)?;

            // A face card has no value and can never capture.
            let value = card.value().ok_or(ActionError::ValueMismatch)?;
            for &index in &targets {
                if next.table()[index].value() != Some(value) {
                    return Err(ActionError::ValueMismatch);
                }
            }

            for &index in &targets {
                let unit = next.table_mut().remove(index);
                for captured in unit.cards() {
                    next.captures_mut()[actor].push_back(*captured);
                }
            }
            next.captures_mut()[actor].push_back(card);

            draw_replacement(next, actor)
        })
    }

    /// Run one attempted action: acquire the turn, apply `body` to a
    /// working copy of the rotated state, and package any failure as a
    /// [`Rejection`] per the configured turn policy.
    fn attempt(
        &self,
        player_name: &str,
        body: impl FnOnce(&mut State, PlayerId) -> Result<(), ActionError>,
    ) -> Result<State, Rejection> {
        let outcome = self.try_acquire_turn(player_name).and_then(|(actor, acquired)| {
            let mut next = acquired;
            body(&mut next, actor)?;
            Ok(next)
        });

        outcome.map_err(|error| {
            let state = match self.config().turn_policy {
                TurnPolicy::RotateOnAttempt => self.rotated(),
                TurnPolicy::RotateOnSuccess => self.clone(),
            };
            Rejection { state, error }
        })
    }
}

/// Remove the card at `hand_index` from the actor's hand.
fn take_hand_card(state: &mut State, actor: PlayerId, hand_index: usize) -> Result<Card, ActionError> {
    let hand = &mut state.hands_mut()[actor];
    if hand_index >= hand.len() {
        return Err(ActionError::CardIndexOutOfRange);
    }
    Ok(hand.remove(hand_index))
}

/// Validate target indices against the table and return them deduped,
/// highest first, so removal never shifts a pending index.
fn resolve_targets(state: &State, target_indices: &[usize]) -> Result<TargetIndices, ActionError> {
    if target_indices.is_empty() {
        return Err(ActionError::TargetIndexOutOfRange);
    }

    let mut targets: TargetIndices = SmallVec::from_slice(target_indices);
    for &index in &targets {
        if index >= state.table().len() {
            return Err(ActionError::TargetIndexOutOfRange);
        }
    }

    targets.sort_unstable_by(|a, b| b.cmp(a));
    targets.dedup();
    Ok(targets)
}

/// Draw the auto-replenish card from the deck tail into the hand.
fn draw_replacement(state: &mut State, actor: PlayerId) -> Result<(), ActionError> {
    let card = state.deck_mut().pop_back().ok_or(ActionError::DeckExhausted)?;
    state.hands_mut()[actor].push_back(card);
    Ok(())
}
