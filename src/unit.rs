//! Table units: loose cards and built piles.
//!
//! A `Unit` is a non-empty pile of cards on the table with a single
//! combined capture value. A loose (trailed) card is a singleton unit;
//! a build is the merge of two or more units whose summed value stays
//! within [`CAPTURE_CAP`].

use im::Vector;

use crate::cards::{Card, CAPTURE_CAP};
use crate::error::ActionError;

/// A pile of one or more cards sharing a combined capture value.
///
/// Units are immutable: merging produces a fresh unit and leaves both
/// operands untouched. The card order inside a unit is membership
/// order only; it carries no game meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    cards: Vector<Card>,
    value: Option<u8>,
}

impl Unit {
    /// Create a singleton unit from a single card.
    ///
    /// The unit's value is the card's capture value; a face card
    /// yields a valueless unit that can never be built on or captured.
    #[must_use]
    pub fn from_card(card: Card) -> Self {
        Self {
            cards: Vector::unit(card),
            value: card.value(),
        }
    }

    /// Combined capture value, or `None` if any constituent card has none.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// The cards in this unit.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of cards in this unit.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Merge two units into a build.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidCombination`] if either unit is
    /// valueless or the summed value exceeds [`CAPTURE_CAP`].
    pub fn merge(&self, other: &Unit) -> Result<Unit, ActionError> {
        let (a, b) = match (self.value, other.value) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(ActionError::InvalidCombination),
        };

        let sum = a + b;
        if sum > CAPTURE_CAP {
            return Err(ActionError::InvalidCombination);
        }

        let mut cards = self.cards.clone();
        cards.append(other.cards.clone());
        Ok(Unit {
            cards,
            value: Some(sum),
        })
    }

    /// Reconstruct a unit from raw parts (portable-record rehydration).
    pub(crate) fn from_parts(cards: Vector<Card>, value: Option<u8>) -> Self {
        Self { cards, value }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "【")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "】")
    }
}
