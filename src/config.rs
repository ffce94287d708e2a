//! Rule constants as explicit configuration.
//!
//! Behaviors the rules leave open are configured here rather than
//! hardcoded: when the turn rotation advances, and where the sweep
//! bonus triggers.

use serde::{Deserialize, Serialize};

/// When the turn rotation advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPolicy {
    /// Rotation advances exactly once per attempted action, rejected
    /// attempts included. A player who keeps submitting invalid
    /// actions cannot stall the rotation.
    #[default]
    RotateOnAttempt,
    /// Only accepted actions consume a turn; a rejected action leaves
    /// the rotation where it was.
    RotateOnSuccess,
}

/// Engine configuration carried by every [`State`](crate::State).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Turn rotation policy.
    pub turn_policy: TurnPolicy,
}

/// Scoring configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Total at or above which the sweep bonus applies.
    pub sweep_threshold: u32,
    /// Flat bonus added when the threshold is reached.
    pub sweep_bonus: u32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            sweep_threshold: 11,
            sweep_bonus: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(GameConfig::default().turn_policy, TurnPolicy::RotateOnAttempt);

        let score = ScoreConfig::default();
        assert_eq!(score.sweep_threshold, 11);
        assert_eq!(score.sweep_bonus, 1);
    }
}
