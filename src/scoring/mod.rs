//! End-of-hand scoring: independent rule evaluators over capture piles.
//!
//! A rule is a pure function from a terminal [`State`] to zero or more
//! [`Claim`]s, each attributing a fixed point value to one player.
//! Rules are independent and order-insensitive; [`score`] evaluates an
//! explicit list of them, sums claims per player, and applies the
//! sweep bonus. There is no global registry: the rule set in force is
//! exactly the slice handed to `score`, which keeps rules testable in
//! isolation and extension a matter of pushing one more boxed impl.

mod rules;

pub use rules::{standard_rules, Aces, CardBonus, MostCards, MostSpades};

use crate::config::ScoreConfig;
use crate::player::{PlayerId, PlayerMap};
use crate::state::State;

/// A scored claim: one rule awarding points to one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    /// Who the points go to.
    pub player: PlayerId,
    /// The awarding rule's name.
    pub rule: &'static str,
    /// Points awarded by this claim.
    pub points: u32,
}

/// A single scoring rule evaluated against a terminal state.
///
/// Implementations must be pure: same state, same claims, and no
/// dependence on other rules or evaluation order.
pub trait ScoringRule {
    /// Stable rule name, used in claims.
    fn name(&self) -> &'static str;

    /// Scan the capture piles and yield claims.
    fn claims(&self, state: &State) -> Vec<Claim>;
}

/// Evaluate every rule and total the claims per player.
///
/// After summing, any player whose total reaches
/// `config.sweep_threshold` receives `config.sweep_bonus` on top.
#[must_use]
pub fn score(state: &State, rules: &[Box<dyn ScoringRule>], config: &ScoreConfig) -> PlayerMap<u32> {
    let mut totals: PlayerMap<u32> = PlayerMap::with_value(state.player_count(), 0);

    for rule in rules {
        for claim in rule.claims(state) {
            totals[claim.player] += claim.points;
        }
    }

    for player in PlayerId::all(state.player_count()) {
        if totals[player] >= config.sweep_threshold {
            totals[player] += config.sweep_bonus;
        }
    }

    totals
}
