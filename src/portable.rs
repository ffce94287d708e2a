//! Portable state records for the persistence boundary.
//!
//! The core never decides how a game is stored; it hands the
//! persistence layer a [`PortableState`] built only from primitives
//! and string-named enums, and accepts one back. Rehydration validates
//! the record against the state invariants (card conservation, order
//! permutation, unit values) so a corrupt or hand-edited blob cannot
//! smuggle an illegal state into the engine.
//!
//! Records carry a `version`; [`from_portable`] accepts the current
//! version and older ones of the same shape, and refuses newer ones.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit, CAPTURE_CAP, DECK_SIZE};
use crate::config::{GameConfig, TurnPolicy};
use crate::error::PortableError;
use crate::player::{Player, PlayerId, PlayerMap};
use crate::state::State;
use crate::unit::Unit;

/// Current portable record version.
pub const PORTABLE_VERSION: u32 = 1;

/// A card as stored: rank and suit by variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableCard {
    pub rank: Rank,
    pub suit: Suit,
}

impl From<Card> for PortableCard {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
        }
    }
}

impl From<PortableCard> for Card {
    fn from(card: PortableCard) -> Self {
        Card::new(card.rank, card.suit)
    }
}

/// A table unit as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableUnit {
    pub cards: Vec<PortableCard>,
    pub value: Option<u8>,
}

/// A roster entry as stored. Seat identity is positional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortablePlayer {
    pub name: String,
    pub points: u32,
}

/// The full structured record handed to the persistence layer.
///
/// `hands`, `captures`, and `player_order` are per-seat, positionally
/// aligned with `players`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableState {
    pub version: u32,
    pub turn_policy: TurnPolicy,
    pub deck: Vec<PortableCard>,
    pub table: Vec<PortableUnit>,
    pub players: Vec<PortablePlayer>,
    pub hands: Vec<Vec<PortableCard>>,
    pub captures: Vec<Vec<PortableCard>>,
    pub player_order: Vec<u8>,
}

/// Flatten a state into its portable record.
#[must_use]
pub fn to_portable(state: &State) -> PortableState {
    PortableState {
        version: PORTABLE_VERSION,
        turn_policy: state.config().turn_policy,
        deck: state.deck().iter().map(|&c| c.into()).collect(),
        table: state
            .table()
            .iter()
            .map(|unit| PortableUnit {
                cards: unit.cards().iter().map(|&c| c.into()).collect(),
                value: unit.value(),
            })
            .collect(),
        players: state
            .players()
            .iter()
            .map(|p| PortablePlayer {
                name: p.name.clone(),
                points: p.points,
            })
            .collect(),
        hands: PlayerId::all(state.player_count())
            .map(|id| state.hand(id).iter().map(|&c| c.into()).collect())
            .collect(),
        captures: PlayerId::all(state.player_count())
            .map(|id| state.captures(id).iter().map(|&c| c.into()).collect())
            .collect(),
        player_order: state.player_order().iter().map(|id| id.0).collect(),
    }
}

/// Rebuild a state from its portable record.
///
/// # Errors
///
/// [`PortableError::UnsupportedVersion`] for records newer than
/// [`PORTABLE_VERSION`]; [`PortableError::Malformed`] when the record
/// violates the state invariants.
pub fn from_portable(record: PortableState) -> Result<State, PortableError> {
    if record.version > PORTABLE_VERSION {
        return Err(PortableError::UnsupportedVersion {
            version: record.version,
        });
    }

    let count = record.players.len();
    if count == 0 || count > u8::MAX as usize {
        return Err(PortableError::Malformed("roster size out of range"));
    }
    if record.hands.len() != count || record.captures.len() != count {
        return Err(PortableError::Malformed("hand/capture maps do not match roster"));
    }

    // The order must be a permutation of the seats.
    if record.player_order.len() != count {
        return Err(PortableError::Malformed("player order does not match roster"));
    }
    let mut seats: Vec<u8> = record.player_order.clone();
    seats.sort_unstable();
    if seats.iter().enumerate().any(|(i, &s)| s as usize != i) {
        return Err(PortableError::Malformed("player order is not a permutation"));
    }

    // Card conservation: every card at most once across all zones,
    // and the zones jointly hold the full standard deck.
    let mut seen: FxHashSet<Card> = FxHashSet::default();
    let mut total = 0usize;
    {
        let mut observe = |card: Card| -> Result<(), PortableError> {
            total += 1;
            if !seen.insert(card) {
                return Err(PortableError::Malformed("duplicate card"));
            }
            Ok(())
        };

        for &c in &record.deck {
            observe(c.into())?;
        }
        for unit in &record.table {
            for &c in &unit.cards {
                observe(c.into())?;
            }
        }
        for pile in record.hands.iter().chain(record.captures.iter()) {
            for &c in pile {
                observe(c.into())?;
            }
        }
    }
    if total != DECK_SIZE {
        return Err(PortableError::Malformed("card set is not the standard deck"));
    }

    let table = record
        .table
        .into_iter()
        .map(rebuild_unit)
        .collect::<Result<Vector<Unit>, _>>()?;

    let players: Vector<Player> = record
        .players
        .into_iter()
        .enumerate()
        .map(|(seat, p)| Player {
            id: PlayerId::new(seat as u8),
            name: p.name,
            points: p.points,
        })
        .collect();

    let hands = rebuild_piles(record.hands);
    let captures = rebuild_piles(record.captures);

    Ok(State::from_parts(
        GameConfig {
            turn_policy: record.turn_policy,
        },
        record.deck.into_iter().map(Card::from).collect(),
        table,
        players,
        hands,
        captures,
        record.player_order.into_iter().map(PlayerId::new).collect(),
    ))
}

fn rebuild_piles(piles: Vec<Vec<PortableCard>>) -> PlayerMap<Vector<Card>> {
    let piles: Vec<Vector<Card>> = piles
        .into_iter()
        .map(|pile| pile.into_iter().map(Card::from).collect())
        .collect();
    PlayerMap::new(piles.len(), |id| piles[id.index()].clone())
}

fn rebuild_unit(unit: PortableUnit) -> Result<Unit, PortableError> {
    if unit.cards.is_empty() {
        return Err(PortableError::Malformed("empty table unit"));
    }

    let cards: Vector<Card> = unit.cards.into_iter().map(Card::from).collect();

    // The stored value must agree with the constituent cards.
    let mut expected: Option<u16> = Some(0);
    for card in &cards {
        expected = match (expected, card.value()) {
            (Some(sum), Some(v)) => Some(sum + u16::from(v)),
            _ => None,
        };
    }
    if cards.len() > 1 && expected.is_none() {
        return Err(PortableError::Malformed("build contains a valueless card"));
    }
    if unit.value.map(u16::from) != expected {
        return Err(PortableError::Malformed("unit value does not match its cards"));
    }
    if let Some(value) = unit.value {
        if value == 0 || value > CAPTURE_CAP {
            return Err(PortableError::Malformed("unit value out of range"));
        }
    }

    Ok(Unit::from_parts(cards, unit.value))
}
