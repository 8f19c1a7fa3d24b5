use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::cards::{Card, Rank};
use crate::error::{AdvisorError, AdvisorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HandResult {
    pub rank: u8,
    pub category: HandCategory,
    pub kickers: Vec<u8>,
    pub cards: Vec<Card>,
}

impl HandResult {
    pub fn new(category: HandCategory, kickers: Vec<u8>, cards: &[Card]) -> Self {
        HandResult {
            rank: category as u8,
            category,
            kickers,
            cards: cards.to_vec(),
        }
    }

    /// Position of the primary rank on a 0..=10 scale, used to place a hand
    /// inside its category's strength band.
    pub fn ordinal(&self) -> f64 {
        let primary = self.kickers.first().copied().unwrap_or(2).clamp(2, 14);
        f64::from(primary - 2) * 10.0 / 12.0
    }

    pub fn description(&self) -> String {
        let name = |i: usize| {
            self.kickers
                .get(i)
                .and_then(|&v| Rank::from_value(v))
                .unwrap_or(Rank::Two)
        };
        match self.category {
            HandCategory::HighCard => format!("{} high", name(0).name()),
            HandCategory::OnePair => format!("Pair of {}", name(0).plural()),
            HandCategory::TwoPair => {
                format!("Two Pair, {} and {}", name(0).plural(), name(1).plural())
            }
            HandCategory::ThreeOfAKind => format!("Three of a Kind, {}", name(0).plural()),
            HandCategory::Straight => format!("Straight, {} high", name(0).name()),
            HandCategory::Flush => format!("Flush, {} high", name(0).name()),
            HandCategory::FullHouse => {
                format!("Full House, {} over {}", name(0).plural(), name(1).plural())
            }
            HandCategory::FourOfAKind => format!("Four of a Kind, {}", name(0).plural()),
            HandCategory::StraightFlush => format!("Straight Flush, {} high", name(0).name()),
            HandCategory::RoyalFlush => "Royal Flush".to_string(),
        }
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.kickers == other.kickers
    }
}

impl Eq for HandResult {}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rank.cmp(&other.rank) {
            Ordering::Equal => self.kickers.cmp(&other.kickers),
            ord => ord,
        }
    }
}

fn is_flush(cards: &[Card]) -> bool {
    cards.len() == 5 && cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

fn is_straight(values: &[u8]) -> Option<u8> {
    let unique: Vec<u8> = values
        .iter()
        .copied()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .dedup()
        .collect();

    if unique.len() != 5 {
        return None;
    }

    if unique[0] - unique[4] == 4 {
        return Some(unique[0]);
    }

    // Wheel: A-2-3-4-5
    if unique == [14, 5, 4, 3, 2] {
        return Some(5);
    }

    None
}

/// Ranks up to five cards. Straights and flushes need all five.
fn evaluate_five(cards: &[Card]) -> HandResult {
    let values: Vec<u8> = cards
        .iter()
        .map(|c| c.value())
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect();

    let flush = is_flush(cards);
    let straight_high = is_straight(&values);

    match (flush, straight_high) {
        (true, Some(14)) => return HandResult::new(HandCategory::RoyalFlush, vec![14], cards),
        (true, Some(high)) => {
            return HandResult::new(HandCategory::StraightFlush, vec![high], cards)
        }
        _ => {}
    }

    // (count, value) sorted by count desc, then value desc
    let groups: Vec<(usize, u8)> = values
        .iter()
        .copied()
        .dedup_with_count()
        .sorted_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)))
        .collect();

    let rest = |excluded: &[u8]| -> Vec<u8> {
        values.iter().copied().filter(|v| !excluded.contains(v)).collect()
    };
    let with_rest = |lead: Vec<u8>| -> Vec<u8> {
        let mut kickers = lead.clone();
        kickers.extend(rest(&lead));
        kickers
    };

    let top = groups[0];
    let second = groups.get(1).copied().unwrap_or((0, 0));

    if top.0 == 4 {
        return HandResult::new(HandCategory::FourOfAKind, with_rest(vec![top.1]), cards);
    }

    if top.0 == 3 && second.0 >= 2 {
        return HandResult::new(HandCategory::FullHouse, vec![top.1, second.1], cards);
    }

    if flush {
        return HandResult::new(HandCategory::Flush, values.clone(), cards);
    }

    if let Some(high) = straight_high {
        return HandResult::new(HandCategory::Straight, vec![high], cards);
    }

    if top.0 == 3 {
        return HandResult::new(HandCategory::ThreeOfAKind, with_rest(vec![top.1]), cards);
    }

    if top.0 == 2 && second.0 == 2 {
        return HandResult::new(HandCategory::TwoPair, with_rest(vec![top.1, second.1]), cards);
    }

    if top.0 == 2 {
        return HandResult::new(HandCategory::OnePair, with_rest(vec![top.1]), cards);
    }

    HandResult::new(HandCategory::HighCard, values.clone(), cards)
}

/// Best hand made from 1 to 7 cards.
pub fn best_hand(cards: &[Card]) -> AdvisorResult<HandResult> {
    if cards.is_empty() || cards.len() > 7 {
        return Err(AdvisorError::Solver(format!(
            "cannot rank {} cards (expected 1 to 7)",
            cards.len()
        )));
    }

    if cards.len() <= 5 {
        return Ok(evaluate_five(cards));
    }

    cards
        .iter()
        .copied()
        .combinations(5)
        .map(|five| evaluate_five(&five))
        .max()
        .ok_or_else(|| AdvisorError::Solver("no five-card combination".to_string()))
}

pub fn compare_hands(hand1: &[Card], hand2: &[Card], board: &[Card]) -> AdvisorResult<i32> {
    let r1 = best_hand(&[hand1, board].concat())?;
    let r2 = best_hand(&[hand2, board].concat())?;
    Ok(match r1.cmp(&r2) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    })
}

/// What a hand-ranking primitive reports for a set of cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedHand {
    /// Category label, e.g. "Two Pair".
    pub name: String,
    /// Comparable position within the category, 0.0..=10.0.
    pub ordinal: f64,
    pub description: String,
    pub cards: Vec<Card>,
}

/// Capability that picks the best five-card hand out of 2..=7 cards.
pub trait HandSolver {
    fn solve(&self, cards: &[Card]) -> AdvisorResult<SolvedHand>;
}

/// Exhaustive best-of-five solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestHandSolver;

impl HandSolver for BestHandSolver {
    fn solve(&self, cards: &[Card]) -> AdvisorResult<SolvedHand> {
        let best = best_hand(cards)?;
        Ok(SolvedHand {
            name: best.category.to_string(),
            ordinal: best.ordinal(),
            description: best.description(),
            cards: best.cards,
        })
    }
}

pub static HAND_RANKS: [(&str, u8); 10] = [
    ("High Card", 1),
    ("Pair", 2),
    ("Two Pair", 3),
    ("Three of a Kind", 4),
    ("Straight", 5),
    ("Flush", 6),
    ("Full House", 7),
    ("Four of a Kind", 8),
    ("Straight Flush", 9),
    ("Royal Flush", 10),
];

/// `[min, max]` strength per hand rank; index 0 is the unknown sentinel.
pub static STRENGTH_BANDS: [(u8, u8); 11] = [
    (0, 0),
    (5, 20),
    (25, 40),
    (45, 60),
    (60, 72),
    (72, 80),
    (80, 85),
    (85, 92),
    (92, 96),
    (96, 99),
    (100, 100),
];

/// Unknown labels count as high card.
pub fn hand_rank_for(name: &str) -> u8 {
    HAND_RANKS
        .iter()
        .find(|(label, _)| *label == name)
        .map(|&(_, rank)| rank)
        .unwrap_or(1)
}

pub fn strength_for(hand_rank: u8, ordinal: f64) -> u8 {
    let (min, max) = STRENGTH_BANDS[usize::from(hand_rank.min(10))];
    let t = ordinal.clamp(0.0, 10.0) / 10.0;
    (f64::from(min) + f64::from(max - min) * t).round() as u8
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandEvaluation {
    pub hand_name: String,
    pub hand_rank: u8,
    pub strength: u8,
    pub description: String,
    pub best_cards: Vec<Card>,
}

impl HandEvaluation {
    pub fn unknown() -> Self {
        HandEvaluation {
            hand_name: "Unknown".to_string(),
            hand_rank: 0,
            strength: 0,
            description: "Need 2 hole cards".to_string(),
            best_cards: Vec::new(),
        }
    }

    pub fn category(&self) -> StrengthCategory {
        StrengthCategory::from_strength(self.strength)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthCategory {
    Weak,
    Medium,
    Strong,
    Monster,
}

impl StrengthCategory {
    pub fn from_strength(strength: u8) -> Self {
        match strength {
            70..=u8::MAX => StrengthCategory::Monster,
            50..=69 => StrengthCategory::Strong,
            30..=49 => StrengthCategory::Medium,
            _ => StrengthCategory::Weak,
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthCategory::Weak => write!(f, "weak"),
            StrengthCategory::Medium => write!(f, "medium"),
            StrengthCategory::Strong => write!(f, "strong"),
            StrengthCategory::Monster => write!(f, "monster"),
        }
    }
}

pub fn evaluate_hand(hole: &[Card], community: &[Card]) -> AdvisorResult<HandEvaluation> {
    evaluate_hand_with(&BestHandSolver, hole, community)
}

/// Evaluates hole + community cards through `solver`. Fewer than two hole
/// cards yields [`HandEvaluation::unknown`] so callers can evaluate mid-selection.
pub fn evaluate_hand_with<S: HandSolver + ?Sized>(
    solver: &S,
    hole: &[Card],
    community: &[Card],
) -> AdvisorResult<HandEvaluation> {
    match hole.len() {
        0 | 1 => return Ok(HandEvaluation::unknown()),
        2 => {}
        n => return Err(AdvisorError::InvalidHandSize(n)),
    }

    let all_cards = [hole, community].concat();
    let solved = solver.solve(&all_cards)?;
    let hand_rank = hand_rank_for(&solved.name);
    let description = if solved.description.is_empty() {
        solved.name.clone()
    } else {
        solved.description
    };

    Ok(HandEvaluation {
        hand_name: solved.name,
        hand_rank,
        strength: strength_for(hand_rank, solved.ordinal),
        description,
        best_cards: solved.cards.into_iter().take(5).collect(),
    })
}
