use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::cards::{hand_notation, Card, HoleCards, Position};
use crate::recommendation::{Action, Confidence};

pub const UNPLAYABLE_TIER: u8 = 10;

/// Sklansky-Chubukov starting-hand groups, tier 1 (premium) to tier 9 (marginal).
pub static SKLANSKY_TIERS: [&[&str]; 9] = [
    &["AA", "KK", "QQ", "JJ", "AKs"],
    &["TT", "AQs", "AJs", "KQs", "AKo"],
    &["99", "ATs", "KJs", "QJs", "JTs", "AQo"],
    &["88", "KTs", "QTs", "J9s", "T9s", "98s", "AJo", "KQo"],
    &[
        "77", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "Q9s", "T8s", "97s", "87s",
        "76s", "KJo", "QJo", "JTo",
    ],
    &["66", "55", "K9s", "J8s", "86s", "75s", "54s", "ATo", "KTo", "QTo"],
    &[
        "44", "33", "22", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s", "Q8s", "T7s", "64s",
        "53s", "43s", "J9o", "T9o", "98o",
    ],
    &[
        "J7s", "96s", "85s", "74s", "42s", "32s", "A9o", "K9o", "Q9o", "J8o", "T8o", "87o", "76o",
        "65o",
    ],
    &[
        "Q7s", "Q6s", "Q5s", "Q4s", "Q3s", "Q2s", "J6s", "J5s", "J4s", "J3s", "J2s", "T6s", "95s",
        "84s", "73s", "63s", "52s",
    ],
];

static TIER_BY_NOTATION: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    SKLANSKY_TIERS
        .iter()
        .zip(1u8..)
        .flat_map(|(hands, tier)| hands.iter().map(move |&hand| (hand, tier)))
        .collect()
});

pub fn tier_for_notation(notation: &str) -> u8 {
    TIER_BY_NOTATION
        .get(notation)
        .copied()
        .unwrap_or(UNPLAYABLE_TIER)
}

pub fn sklansky_tier(hole: &HoleCards) -> u8 {
    tier_for_notation(&hand_notation(hole[0], hole[1]))
}

pub fn tier_confidence(tier: u8) -> Confidence {
    match tier {
        0..=3 => Confidence::High,
        4..=6 => Confidence::Medium,
        _ => Confidence::Low,
    }
}

/// "Pocket Kings", "Ace-King suited", "Seven-Two offsuit".
pub fn describe_starting_hand(first: Card, second: Card) -> String {
    let (hi, lo) = if first.rank >= second.rank {
        (first, second)
    } else {
        (second, first)
    };
    if hi.rank == lo.rank {
        return format!("Pocket {}", hi.rank.plural());
    }
    let kind = if hi.suit == lo.suit { "suited" } else { "offsuit" };
    format!("{}-{} {}", hi.rank.name(), lo.rank.name(), kind)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreFlopAdvice {
    pub action: Action,
    pub reasoning: String,
    pub tier: u8,
    pub notation: String,
    pub hand_description: String,
    pub position: Position,
}

fn seat(position: Position) -> String {
    match position {
        Position::Blinds => "the Blinds".to_string(),
        p => format!("{} position", p.label()),
    }
}

pub fn preflop_recommendation(hole: &HoleCards, position: Position) -> PreFlopAdvice {
    let notation = hand_notation(hole[0], hole[1]);
    let tier = tier_for_notation(&notation);
    let from = seat(position);

    let (action, reasoning) = match tier {
        1..=2 => (
            Action::Raise,
            format!(
                "{notation} is a premium hand (Tier {tier}) from {from}. Raise to build the pot and protect your hand."
            ),
        ),
        3..=4 if position == Position::Early && tier == 4 => (
            Action::Call,
            format!(
                "{notation} is a strong hand (Tier {tier}), but {from} acts first with the whole table behind. Call rather than open-raise."
            ),
        ),
        3..=4 => (
            Action::Raise,
            format!("{notation} is a strong hand (Tier {tier}). Raise from {from}."),
        ),
        5..=6 => match position {
            Position::Early => (
                Action::Fold,
                format!(
                    "{notation} is a playable hand (Tier {tier}) but too loose for {from}. Fold and wait for a stronger spot."
                ),
            ),
            Position::Late => (
                Action::Raise,
                format!(
                    "{notation} is a playable hand (Tier {tier}). From {from} you act last, so raise and take the initiative."
                ),
            ),
            _ => (
                Action::Call,
                format!(
                    "{notation} is a playable hand (Tier {tier}) from {from}. Call to see the flop, but be cautious."
                ),
            ),
        },
        7..=8 => match position {
            Position::Late => (
                Action::Call,
                format!(
                    "{notation} is a marginal hand (Tier {tier}). {from} makes it cheap to see a flop, so a call is fine."
                ),
            ),
            Position::Blinds => (
                Action::Check,
                format!(
                    "{notation} is a marginal hand (Tier {tier}). From {from}, check if nobody has raised, otherwise let it go."
                ),
            ),
            _ => (
                Action::Fold,
                format!(
                    "{notation} is a marginal hand (Tier {tier}). From {from} it is not worth playing; fold."
                ),
            ),
        },
        _ => match position {
            Position::Blinds => (
                Action::Check,
                format!(
                    "{notation} is a weak hand. From {from}, take the free flop if nobody has raised, but do not put more money in."
                ),
            ),
            _ => (
                Action::Fold,
                format!("{notation} is a weak hand. Fold from {from} and wait for a better opportunity."),
            ),
        },
    };

    PreFlopAdvice {
        action,
        reasoning,
        tier,
        notation,
        hand_description: describe_starting_hand(hole[0], hole[1]),
        position,
    }
}
