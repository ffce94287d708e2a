//! Card identity: suits, ranks, and the capture-value table.
//!
//! ## Value policy
//!
//! Ace counts 1, pip cards count face value, and the face cards
//! (Jack/Queen/King) have no capture value at all: they can be
//! trailed onto the table but never built on or captured by value.
//! The policy lives in [`RANK_VALUES`] so there is exactly one place
//! where the arithmetic of the game is defined.

use serde::{Deserialize, Serialize};

/// Card suit. Nominal: suits carry no ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds (♦).
    Diamond,
    /// Clubs (♣).
    Club,
    /// Hearts (♥).
    Heart,
    /// Spades (♠).
    Spade,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade];

    /// Unicode symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

/// Card rank. Nominal: ordering is irrelevant to the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks, in deck-construction order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Capture value of this rank, or `None` for face cards.
    #[must_use]
    pub fn capture_value(self) -> Option<u8> {
        RANK_VALUES
            .iter()
            .find(|(rank, _)| *rank == self)
            .and_then(|(_, value)| *value)
    }

    /// Short display glyph ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// The capture-value table.
///
/// Face cards map to `None`: they cannot participate in builds or
/// value captures.
pub const RANK_VALUES: [(Rank, Option<u8>); 13] = [
    (Rank::Ace, Some(1)),
    (Rank::Two, Some(2)),
    (Rank::Three, Some(3)),
    (Rank::Four, Some(4)),
    (Rank::Five, Some(5)),
    (Rank::Six, Some(6)),
    (Rank::Seven, Some(7)),
    (Rank::Eight, Some(8)),
    (Rank::Nine, Some(9)),
    (Rank::Ten, Some(10)),
    (Rank::Jack, None),
    (Rank::Queen, None),
    (Rank::King, None),
];

/// Largest single-card capture value; builds may never exceed it.
pub const CAPTURE_CAP: u8 = 10;

/// Number of cards in the standard deck.
pub const DECK_SIZE: usize = 52;

/// An immutable playing card. Equality and hashing by (rank, suit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Capture value of this card, or `None` for a face card.
    #[must_use]
    pub fn value(self) -> Option<u8> {
        self.rank.capture_value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.glyph(), self.suit.symbol())
    }
}

/// Build the standard 52-card deck: `Rank` × `Suit`, rank-major.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.capture_value(), Some(1));
        assert_eq!(Rank::Two.capture_value(), Some(2));
        assert_eq!(Rank::Ten.capture_value(), Some(10));
        assert_eq!(Rank::Jack.capture_value(), None);
        assert_eq!(Rank::Queen.capture_value(), None);
        assert_eq!(Rank::King.capture_value(), None);
    }

    #[test]
    fn test_capture_cap_is_table_maximum() {
        let max = RANK_VALUES.iter().filter_map(|(_, v)| *v).max();
        assert_eq!(max, Some(CAPTURE_CAP));
    }

    #[test]
    fn test_standard_deck_is_52_distinct_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let distinct: std::collections::HashSet<_> = deck.iter().copied().collect();
        assert_eq!(distinct.len(), DECK_SIZE);
    }

    #[test]
    fn test_card_equality_by_rank_and_suit() {
        let a = Card::new(Rank::Ace, Suit::Spade);
        let b = Card::new(Rank::Ace, Suit::Spade);
        let c = Card::new(Rank::Ace, Suit::Heart);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spade).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamond).to_string(), "10♦");
    }

    #[test]
    fn test_suit_serializes_as_variant_name() {
        let json = serde_json::to_string(&Suit::Spade).unwrap();
        assert_eq!(json, "\"Spade\"");

        let json = serde_json::to_string(&Rank::Ten).unwrap();
        assert_eq!(json, "\"Ten\"");
    }
}
