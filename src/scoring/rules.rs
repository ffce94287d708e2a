//! The standard Cassino scoring rules.

use crate::cards::{Card, Rank, Suit};
use crate::player::PlayerId;
use crate::state::State;

use super::{Claim, ScoringRule};

const MOST_CARDS_POINTS: u32 = 3;
const MOST_SPADES_POINTS: u32 = 1;
const BIG_CASSINO_POINTS: u32 = 2;
const LITTLE_CASSINO_POINTS: u32 = 1;
const ACE_POINTS: u32 = 1;

/// The player holding a strict maximum of `count`, if any.
///
/// A tie for first awards nobody.
fn strict_leader(state: &State, count: impl Fn(PlayerId) -> usize) -> Option<PlayerId> {
    let mut leader: Option<(PlayerId, usize)> = None;
    let mut tied = false;

    for player in PlayerId::all(state.player_count()) {
        let n = count(player);
        match leader {
            Some((_, best)) if n > best => {
                leader = Some((player, n));
                tied = false;
            }
            Some((_, best)) if n == best => tied = true,
            None => leader = Some((player, n)),
            _ => {}
        }
    }

    match (leader, tied) {
        (Some((player, _)), false) => Some(player),
        _ => None,
    }
}

/// Three points for strictly the most captured cards.
pub struct MostCards;

impl ScoringRule for MostCards {
    fn name(&self) -> &'static str {
        "most cards"
    }

    fn claims(&self, state: &State) -> Vec<Claim> {
        strict_leader(state, |player| state.captures(player).len())
            .map(|player| Claim {
                player,
                rule: self.name(),
                points: MOST_CARDS_POINTS,
            })
            .into_iter()
            .collect()
    }
}

/// One point for strictly the most captured spades.
pub struct MostSpades;

impl ScoringRule for MostSpades {
    fn name(&self) -> &'static str {
        "most spades"
    }

    fn claims(&self, state: &State) -> Vec<Claim> {
        strict_leader(state, |player| {
            state
                .captures(player)
                .iter()
                .filter(|c| c.suit == Suit::Spade)
                .count()
        })
        .map(|player| Claim {
            player,
            rule: self.name(),
            points: MOST_SPADES_POINTS,
        })
        .into_iter()
        .collect()
    }
}

/// Fixed points for capturing one specific card.
///
/// Covers both cassino bonuses; any other single-card bonus is one
/// more constructor away.
pub struct CardBonus {
    name: &'static str,
    card: Card,
    points: u32,
}

impl CardBonus {
    /// Two points for the Ten of Diamonds.
    #[must_use]
    pub const fn big_cassino() -> Self {
        Self {
            name: "big cassino",
            card: Card::new(Rank::Ten, Suit::Diamond),
            points: BIG_CASSINO_POINTS,
        }
    }

    /// One point for the Two of Spades.
    #[must_use]
    pub const fn little_cassino() -> Self {
        Self {
            name: "little cassino",
            card: Card::new(Rank::Two, Suit::Spade),
            points: LITTLE_CASSINO_POINTS,
        }
    }
}

impl ScoringRule for CardBonus {
    fn name(&self) -> &'static str {
        self.name
    }

    fn claims(&self, state: &State) -> Vec<Claim> {
        PlayerId::all(state.player_count())
            .filter(|&player| state.captures(player).contains(&self.card))
            .map(|player| Claim {
                player,
                rule: self.name,
                points: self.points,
            })
            .collect()
    }
}

/// One point per captured ace, to its capturer.
pub struct Aces;

impl ScoringRule for Aces {
    fn name(&self) -> &'static str {
        "aces"
    }

    fn claims(&self, state: &State) -> Vec<Claim> {
        let mut claims = Vec::new();
        for player in PlayerId::all(state.player_count()) {
            for card in state.captures(player) {
                if card.rank == Rank::Ace {
                    claims.push(Claim {
                        player,
                        rule: self.name(),
                        points: ACE_POINTS,
                    });
                }
            }
        }
        claims
    }
}

/// The standard rule set, in no particular order.
#[must_use]
pub fn standard_rules() -> Vec<Box<dyn ScoringRule>> {
    vec![
        Box::new(MostCards),
        Box::new(MostSpades),
        Box::new(CardBonus::big_cassino()),
        Box::new(CardBonus::little_cassino()),
        Box::new(Aces),
    ]
}
