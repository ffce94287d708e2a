//! Error types for game operations.
//!
//! Every failure is a typed result returned to the immediate caller.
//! The core never logs, never retries, and never swallows an error.

use thiserror::Error;

use crate::state::State;

/// Errors that can occur while creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than 2 or more than 6 players were supplied.
    #[error("invalid player count: {count} (must be 2-6)")]
    InvalidPlayerCount {
        /// The offending player count.
        count: usize,
    },
    /// The deck cannot cover the initial deal.
    #[error("too few cards for the deal: need {required}, have {available}")]
    TooFewCards {
        /// Cards the deal requires.
        required: usize,
        /// Cards available in the deck.
        available: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No player with the given name exists in this game.
    #[error("player not found")]
    UnknownPlayer,
    /// Action attempted by a player who is not at the head of rotation.
    #[error("not this player's turn")]
    OutOfTurn,
    /// Hand card index does not resolve against the acting player's hand.
    #[error("hand card index out of range")]
    CardIndexOutOfRange,
    /// A target index does not resolve against the table.
    #[error("table target index out of range")]
    TargetIndexOutOfRange,
    /// The requested build is valueless or exceeds the capture cap.
    #[error("units cannot be combined")]
    InvalidCombination,
    /// A targeted unit's value does not match the played card's value.
    #[error("target value does not match played card")]
    ValueMismatch,
    /// The deck is empty; the hand cannot continue.
    #[error("deck is exhausted")]
    DeckExhausted,
}

impl ActionError {
    /// Whether this error ends the hand.
    ///
    /// Only [`ActionError::DeckExhausted`] is fatal: no further play is
    /// possible without redealing, so callers should invoke scoring.
    /// Every other kind is recoverable with corrected input.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, ActionError::DeckExhausted)
    }
}

/// Errors that can occur rehydrating a portable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PortableError {
    /// The record was written by a newer protocol version.
    #[error("unsupported portable record version {version}")]
    UnsupportedVersion {
        /// The version found in the record.
        version: u32,
    },
    /// The record violates the state invariants.
    #[error("malformed portable record: {0}")]
    Malformed(&'static str),
}

/// A rejected action: the error kind plus the state the rejection
/// leaves behind.
///
/// Under [`TurnPolicy::RotateOnAttempt`](crate::TurnPolicy), the
/// carried state has the rotation advanced by one even though the
/// action's effect was refused; under `RotateOnSuccess` it is
/// identical to the input. Callers adopt `state` (or not) exactly as
/// they would a successful result — the input state is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// State to adopt if the rejection should still consume the turn.
    pub state: State,
    /// What went wrong.
    pub error: ActionError,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_deck_exhaustion_is_fatal() {
        assert!(ActionError::DeckExhausted.is_fatal());
        assert!(!ActionError::UnknownPlayer.is_fatal());
        assert!(!ActionError::OutOfTurn.is_fatal());
        assert!(!ActionError::CardIndexOutOfRange.is_fatal());
        assert!(!ActionError::TargetIndexOutOfRange.is_fatal());
        assert!(!ActionError::InvalidCombination.is_fatal());
        assert!(!ActionError::ValueMismatch.is_fatal());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ActionError::OutOfTurn.to_string(), "not this player's turn");
        assert_eq!(
            SetupError::InvalidPlayerCount { count: 1 }.to_string(),
            "invalid player count: 1 (must be 2-6)"
        );
    }
}
