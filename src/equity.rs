use std::fmt;

use serde::Serialize;

use crate::cards::GameStage;

/// Street the draw is evaluated from; decides how many cards are to come.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn from_stage(stage: GameStage) -> Option<Street> {
        match stage {
            GameStage::Preflop => None,
            GameStage::Flop => Some(Street::Flop),
            GameStage::Turn => Some(Street::Turn),
            GameStage::River => Some(Street::River),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Percent chance to hit with `outs` 1..=15: (two cards to come, one card to come).
pub static OUTS_EQUITY: [(u8, u8); 15] = [
    (4, 2),
    (8, 4),
    (13, 7),
    (17, 9),
    (20, 11),
    (24, 13),
    (28, 15),
    (31, 17),
    (35, 19),
    (38, 22),
    (42, 24),
    (45, 26),
    (48, 28),
    (51, 30),
    (54, 33),
];

/// Rule of 4 and 2, capped at 100.
pub fn rule_of_four_and_two(outs: u8, street: Street) -> u8 {
    let multiplier = match street {
        Street::Flop => 4,
        Street::Turn | Street::River => 2,
    };
    outs.saturating_mul(multiplier).min(100)
}

/// Table lookup for 1..=15 outs, rule of 4 and 2 otherwise. The river has
/// nothing to come and is read as the turn.
pub fn accurate_odds(outs: u8, street: Street) -> u8 {
    let entry = usize::from(outs)
        .checked_sub(1)
        .and_then(|i| OUTS_EQUITY.get(i));
    match (entry, street) {
        (Some(&(flop, _)), Street::Flop) => flop,
        (Some(&(_, turn)), Street::Turn | Street::River) => turn,
        (None, _) => rule_of_four_and_two(outs, street),
    }
}

/// Odds against hitting, e.g. 31% -> "2.2:1".
pub fn odds_against(percentage: u8) -> String {
    match percentage {
        0 => "no chance".to_string(),
        100..=u8::MAX => "certain".to_string(),
        p => {
            let ratio = f64::from(100 - p) / f64::from(p);
            if (ratio - ratio.round()).abs() < 0.05 {
                format!("{:.0}:1", ratio)
            } else {
                format!("{:.1}:1", ratio)
            }
        }
    }
}
