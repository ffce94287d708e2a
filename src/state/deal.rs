//! Game factory: deterministic shuffle and the initial deal.

use im::Vector;

use crate::cards::{standard_deck, Card};
use crate::config::GameConfig;
use crate::error::SetupError;
use crate::player::{Player, PlayerId, PlayerMap};
use crate::rng::GameRng;
use crate::unit::Unit;

use super::State;

/// Cards dealt to each hand.
const HAND_SIZE: usize = 4;
/// Singleton units dealt to the table.
const TABLE_SIZE: usize = 4;
/// Deal rounds; each round deals half a hand per player then half the table.
const DEAL_ROUNDS: usize = 2;

const MIN_PLAYERS: usize = 2;
const MAX_PLAYERS: usize = 6;

/// Create a ready-to-play state with the default configuration.
///
/// Shuffles the standard deck with the seed (same seed, same game),
/// deals four cards per player and four singleton units to the table,
/// and seats players in the order given.
///
/// # Errors
///
/// [`SetupError::InvalidPlayerCount`] outside 2–6 players;
/// [`SetupError::TooFewCards`] if the deck cannot cover the deal.
pub fn new_game(player_names: &[&str], seed: u64) -> Result<State, SetupError> {
    new_game_with_config(player_names, seed, GameConfig::default())
}

/// Create a ready-to-play state with an explicit configuration.
///
/// # Errors
///
/// Same as [`new_game`].
pub fn new_game_with_config(
    player_names: &[&str],
    seed: u64,
    config: GameConfig,
) -> Result<State, SetupError> {
    let count = player_names.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(SetupError::InvalidPlayerCount { count });
    }

    let mut cards = standard_deck();
    let required = HAND_SIZE * count + TABLE_SIZE;
    if cards.len() < required {
        return Err(SetupError::TooFewCards {
            required,
            available: cards.len(),
        });
    }

    GameRng::new(seed).shuffle(&mut cards);
    let mut deck: Vector<Card> = cards.into_iter().collect();

    let players: Vector<Player> = player_names
        .iter()
        .enumerate()
        .map(|(seat, name)| Player::new(PlayerId::new(seat as u8), *name))
        .collect();

    // Two interleaved rounds: two cards to each hand, then two units
    // to the table, always drawing from the deck tail.
    let mut hands: PlayerMap<Vector<Card>> = PlayerMap::with_default(count);
    let mut table: Vector<Unit> = Vector::new();
    for _ in 0..DEAL_ROUNDS {
        for seat in PlayerId::all(count) {
            for _ in 0..HAND_SIZE / DEAL_ROUNDS {
                let card = deck.pop_back().expect("deal size was validated");
                hands[seat].push_back(card);
            }
        }
        for _ in 0..TABLE_SIZE / DEAL_ROUNDS {
            let card = deck.pop_back().expect("deal size was validated");
            table.push_back(Unit::from_card(card));
        }
    }

    Ok(State::from_parts(
        config,
        deck,
        table,
        players,
        hands,
        PlayerMap::with_default(count),
        PlayerId::all(count).collect(),
    ))
}
