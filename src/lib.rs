//! # cassino
//!
//! A Cassino-style trick/build/capture card game engine for 2–6
//! players.
//!
//! ## Design Principles
//!
//! 1. **Immutable state machine**: every action consumes `&State` and
//!    produces a fresh `State` (or a typed rejection). Persistent
//!    `im` collections make each snapshot a cheap structural copy.
//!
//! 2. **Typed rejections, no partial mutation**: every failure is a
//!    concrete error kind returned to the caller; a rejected action
//!    never leaves a half-applied table or hand behind.
//!
//! 3. **Explicit over ambient**: scoring rules are a list passed to
//!    [`score`], rule constants live on [`GameConfig`] /
//!    [`ScoreConfig`], and shuffling is seeded — the same seed replays
//!    the same game.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, the capture-value table, the standard deck
//! - `unit`: table piles (loose cards and builds) with merge rules
//! - `player`: opaque seat identity and per-player storage
//! - `state`: the immutable snapshot, the three actions, the factory
//! - `scoring`: pluggable end-of-hand rule engine
//! - `portable`: structured records for the persistence boundary
//! - `render`: human-readable display lines
//!
//! ## Example
//!
//! ```
//! use cassino::{new_game, scoring, PlayerId, ScoreConfig};
//!
//! let state = new_game(&["Hyacinth", "Boonsri"], 0).unwrap();
//! let state = state.with_discard("Hyacinth", 0).unwrap();
//!
//! let totals = scoring::score(&state, &scoring::standard_rules(), &ScoreConfig::default());
//! assert_eq!(totals[PlayerId::new(0)], 0);
//! ```

pub mod cards;
pub mod config;
pub mod error;
pub mod player;
pub mod portable;
pub mod render;
pub mod rng;
pub mod scoring;
pub mod state;
pub mod unit;

// Re-export commonly used types
pub use crate::cards::{standard_deck, Card, Rank, Suit, CAPTURE_CAP, DECK_SIZE, RANK_VALUES};
pub use crate::config::{GameConfig, ScoreConfig, TurnPolicy};
pub use crate::error::{ActionError, PortableError, Rejection, SetupError};
pub use crate::player::{Player, PlayerId, PlayerMap};
pub use crate::portable::{from_portable, to_portable, PortableState, PORTABLE_VERSION};
pub use crate::render::render;
pub use crate::rng::GameRng;
pub use crate::scoring::{score, standard_rules, Claim, ScoringRule};
pub use crate::state::{new_game, new_game_with_config, State};
pub use crate::unit::Unit;
