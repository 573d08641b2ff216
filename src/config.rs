use serde::Deserialize;

use crate::error::RulesError;
use crate::grid::NUM_NODES;

pub const DEFAULT_TURN_LIMIT: u32 = 100;
pub const DEFAULT_MAJORITY: u8 = 19;
/// Smallest strict majority of the board.
const MIN_MAJORITY: u8 = (NUM_NODES / 2 + 1) as u8;

/// Game thresholds. Always valid: built through [`Rules::new`], [`Default`]
/// or a deserializer that runs the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRules")]
pub struct Rules {
    turn_limit: u32,
    majority: u8,
}

/// Wire shape of [`Rules`]. Missing fields fall back to the defaults.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawRules {
    turn_limit: u32,
    majority: u8,
}

impl Default for RawRules {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
            majority: DEFAULT_MAJORITY,
        }
    }
}

impl TryFrom<RawRules> for Rules {
    type Error = RulesError;

    fn try_from(raw: RawRules) -> Result<Self, Self::Error> {
        Rules::new(raw.turn_limit, raw.majority)
    }
}

impl Rules {
    pub fn new(turn_limit: u32, majority: u8) -> Result<Self, RulesError> {
        if turn_limit == 0 {
            return Err(RulesError::ZeroTurnLimit);
        }
        if !(MIN_MAJORITY..=NUM_NODES as u8).contains(&majority) {
            return Err(RulesError::MajorityOutOfRange {
                min: MIN_MAJORITY,
                max: NUM_NODES as u8,
                got: majority,
            });
        }
        Ok(Self {
            turn_limit,
            majority,
        })
    }

    /// The game is scored once a move completes at this turn count.
    pub fn turn_limit(&self) -> u32 {
        self.turn_limit
    }

    /// Nodes (temp + confirmed) needed for a majority win.
    pub fn majority(&self) -> u8 {
        self.majority
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
            majority: DEFAULT_MAJORITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let rules = Rules::default();
        assert_eq!(rules.turn_limit(), 100);
        assert_eq!(rules.majority(), 19);
        assert_eq!(Rules::new(100, 19), Ok(rules));
    }

    #[test]
    fn rejects_majority_that_both_players_could_reach() {
        let err = Rules::new(100, 18).unwrap_err();
        assert_eq!(
            err,
            RulesError::MajorityOutOfRange {
                min: 19,
                max: 36,
                got: 18
            }
        );
        assert!(Rules::new(100, 0).is_err());
        assert!(Rules::new(100, 37).is_err());
        assert_eq!(Rules::new(0, 19).unwrap_err(), RulesError::ZeroTurnLimit);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let rules: Rules = serde_json::from_str(r#"{"turnLimit": 40}"#).unwrap();
        assert_eq!(rules, Rules::new(40, 19).unwrap());

        let rules: Rules = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, Rules::default());
    }

    #[test]
    fn json_with_invalid_thresholds_is_rejected() {
        let err = serde_json::from_str::<Rules>(r#"{"majority": 1, "turnLimit": 0}"#).unwrap_err();
        assert!(err.to_string().contains("turn limit"));

        let err = serde_json::from_str::<Rules>(r#"{"majority": 0}"#).unwrap_err();
        assert!(err.to_string().contains("majority"));
    }
}
