use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::cards::{Card, Rank, Suit};

/// Structural snapshot of the community cards alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardTexture {
    pub wet: bool,
    pub four_flush: bool,
    pub three_flush: bool,
    pub four_straight: bool,
    pub three_straight: bool,
    pub flush_suit: Option<Suit>,
    /// Ranks that would fill a five-card straight window the board already holds four of.
    pub missing_straight_cards: Vec<Rank>,
    pub is_rainbow: bool,
    pub is_monotone: bool,
    pub high_card: Rank,
    pub is_paired: bool,
}

impl Default for BoardTexture {
    fn default() -> Self {
        BoardTexture {
            wet: false,
            four_flush: false,
            three_flush: false,
            four_straight: false,
            three_straight: false,
            flush_suit: None,
            missing_straight_cards: Vec::new(),
            is_rainbow: true,
            is_monotone: false,
            high_card: Rank::Two,
            is_paired: false,
        }
    }
}

impl BoardTexture {
    pub fn category(&self) -> String {
        let mut parts = Vec::new();
        if self.is_monotone {
            parts.push("monotone");
        } else if self.is_rainbow {
            parts.push("rainbow");
        } else if self.four_flush {
            parts.push("four-flush");
        } else if self.three_flush {
            parts.push("three-flush");
        }
        if self.four_straight {
            parts.push("four-straight");
        } else if self.three_straight {
            parts.push("connected");
        }
        if self.is_paired {
            parts.push("paired");
        }
        parts.push(if self.wet { "wet" } else { "dry" });
        format!("{} {}-high", parts.join(" "), self.high_card.to_char())
    }
}

pub fn suit_counts(cards: &[Card]) -> HashMap<Suit, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.suit).or_insert(0) += 1;
    }
    counts
}

/// Sorted distinct rank values, plus 1 for the ace when a 2-5 is also present.
pub fn straight_values(cards: &[Card]) -> Vec<u8> {
    let mut values: BTreeSet<u8> = cards.iter().map(|c| c.value()).collect();
    if values.contains(&14) && values.range(2..=5).next().is_some() {
        values.insert(1);
    }
    values.into_iter().collect()
}

fn longest_run(values: &[u8]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut longest = 1;
    let mut current = 1;
    for w in values.windows(2) {
        if w[1] == w[0] + 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

pub fn analyze_board_texture(community: &[Card]) -> BoardTexture {
    if community.is_empty() {
        return BoardTexture::default();
    }

    let suits = suit_counts(community);
    let max_suit = suits.values().copied().max().unwrap_or(0);
    let flush_suit = suits
        .iter()
        .filter(|&(_, &count)| count >= 3)
        .max_by_key(|&(_, &count)| count)
        .map(|(&suit, _)| suit);

    let run = longest_run(&straight_values(community));

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in community {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    let is_paired = rank_counts.values().any(|&n| n >= 2);

    let high_card = community
        .iter()
        .map(|c| c.rank)
        .max()
        .unwrap_or(Rank::Two);

    let three_flush = max_suit == 3;
    let three_straight = run >= 3;

    BoardTexture {
        wet: three_flush || three_straight,
        four_flush: max_suit >= 4,
        three_flush,
        four_straight: run >= 4,
        three_straight,
        flush_suit,
        missing_straight_cards: missing_straight_cards(community),
        is_rainbow: suits.len() == community.len(),
        is_monotone: community.len() >= 3 && suits.len() == 1,
        high_card,
        is_paired,
    }
}

/// Scans the ten straight windows (A-5 through T-A) for ones holding exactly
/// four board values and returns the completing ranks in window order.
pub fn missing_straight_cards(community: &[Card]) -> Vec<Rank> {
    let values = straight_values(community);
    let mut missing: Vec<Rank> = Vec::new();

    for start in 1..=10u8 {
        let absent: Vec<u8> = (start..start + 5).filter(|v| !values.contains(v)).collect();
        if absent.len() != 1 {
            continue;
        }
        if let Some(rank) = Rank::from_value(absent[0]) {
            if !missing.contains(&rank) {
                missing.push(rank);
            }
        }
    }

    missing
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickerStrength {
    Strong,
    Medium,
    Weak,
}

/// The hole card not making the pair; the higher hole card when neither or both pair.
pub fn kicker(hole: &[Card; 2], community: &[Card]) -> Rank {
    let on_board = |card: &Card| community.iter().any(|c| c.rank == card.rank);
    match (on_board(&hole[0]), on_board(&hole[1])) {
        (true, false) => hole[1].rank,
        (false, true) => hole[0].rank,
        _ => hole[0].rank.max(hole[1].rank),
    }
}

pub fn kicker_strength(kicker: Rank) -> KickerStrength {
    match kicker.value() {
        11..=u8::MAX => KickerStrength::Strong,
        8..=10 => KickerStrength::Medium,
        _ => KickerStrength::Weak,
    }
}

/// Rank of the pair the player holds: a pocket pair, or the highest hole card
/// matching the board. `None` means any pair is on the board alone.
pub fn pair_rank(hole: &[Card; 2], community: &[Card]) -> Option<Rank> {
    if hole[0].rank == hole[1].rank {
        return Some(hole[0].rank);
    }
    hole.iter()
        .map(|c| c.rank)
        .filter(|&r| community.iter().any(|c| c.rank == r))
        .max()
}

pub fn count_overcards(community: &[Card], pair: Rank) -> usize {
    community.iter().filter(|c| c.rank > pair).count()
}

pub fn is_overpair(hole: &[Card; 2], community: &[Card]) -> bool {
    hole[0].rank == hole[1].rank && community.iter().all(|c| c.rank < hole[0].rank)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairPosition {
    Over,
    Top,
    Second,
    Middle,
    Bottom,
}

impl PairPosition {
    pub fn label(self) -> &'static str {
        match self {
            PairPosition::Over => "overpair",
            PairPosition::Top => "top pair",
            PairPosition::Second => "second pair",
            PairPosition::Middle => "middle pair",
            PairPosition::Bottom => "bottom pair",
        }
    }
}

/// Ranks `pair` against the distinct board values, highest first.
pub fn pair_position(pair: Rank, community: &[Card]) -> PairPosition {
    let distinct: BTreeSet<Rank> = community.iter().map(|c| c.rank).collect();
    let above = distinct.iter().filter(|&&r| r > pair).count();
    let on_board = distinct.contains(&pair);

    let lowest = if on_board {
        distinct.len().saturating_sub(1)
    } else {
        distinct.len()
    };

    match above {
        0 if on_board => PairPosition::Top,
        0 => PairPosition::Over,
        n if n >= lowest => PairPosition::Bottom,
        1 => PairPosition::Second,
        _ => PairPosition::Middle,
    }
}

pub fn holds_suit(hole: &[Card; 2], suit: Option<Suit>) -> bool {
    suit.is_some_and(|s| hole.iter().any(|c| c.suit == s))
}

pub fn completes_straight(hole: &[Card; 2], missing: &[Rank]) -> bool {
    hole.iter().any(|c| missing.contains(&c.rank))
}
