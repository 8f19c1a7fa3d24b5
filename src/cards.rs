use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn from_char(c: char) -> AdvisorResult<Rank> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(AdvisorError::InvalidRank(c)),
        }
    }

    /// Inverse of [`Rank::value`]. The low-ace alias 1 maps back to `Ace`.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1 | 14 => Some(Rank::Ace),
            2..=13 => Some(ALL_RANKS[(value - 2) as usize]),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Rank::Two => "Twos",
            Rank::Three => "Threes",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = AdvisorError;

    fn try_from(c: char) -> AdvisorResult<Rank> {
        Rank::from_char(c)
    }
}

impl From<Rank> for char {
    fn from(rank: Rank) -> char {
        rank.to_char()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub fn from_char(c: char) -> AdvisorResult<Suit> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            's' => Ok(Suit::Spades),
            _ => Err(AdvisorError::InvalidSuit(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
            Suit::Spades => "\u{2660}",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// A playing card, serialized as its two-character token (`"Ah"`, `"Tc"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = AdvisorError;

    fn from_str(s: &str) -> AdvisorResult<Card> {
        parse_card(s)
    }
}

impl TryFrom<String> for Card {
    type Error = AdvisorError;

    fn try_from(s: String) -> AdvisorResult<Card> {
        parse_card(&s)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.to_string()
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank).then(self.suit.cmp(&other.suit))
    }
}

pub type HoleCards = [Card; 2];

pub fn parse_card(notation: &str) -> AdvisorResult<Card> {
    let notation = notation.trim();
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() != 2 {
        return Err(AdvisorError::InvalidCardNotation(notation.to_string()));
    }
    let rank = Rank::from_char(chars[0].to_ascii_uppercase())?;
    let suit = Suit::from_char(chars[1])?;
    Ok(Card::new(rank, suit))
}

pub fn parse_board(notation: &str) -> AdvisorResult<Vec<Card>> {
    let notation = notation.trim().replace([' ', ','], "");
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(AdvisorError::InvalidBoardNotation(notation));
    }
    chars
        .chunks(2)
        .map(|pair| parse_card(&pair.iter().collect::<String>()))
        .collect()
}

pub fn parse_hole(notation: &str) -> AdvisorResult<HoleCards> {
    let cards = parse_board(notation)?;
    match cards.as_slice() {
        [a, b] if a == b => Err(AdvisorError::DuplicateCard(*a)),
        [a, b] => Ok([*a, *b]),
        _ => Err(AdvisorError::InvalidHandSize(cards.len())),
    }
}

/// Canonical starting-hand notation: `"QQ"`, `"AKs"`, `"T9o"`.
pub fn hand_notation(first: Card, second: Card) -> String {
    let (hi, lo) = if first.rank >= second.rank {
        (first, second)
    } else {
        (second, first)
    };

    if hi.rank == lo.rank {
        return format!("{}{}", hi.rank.to_char(), lo.rank.to_char());
    }

    let suffix = if hi.suit == lo.suit { 's' } else { 'o' };
    format!("{}{}{}", hi.rank.to_char(), lo.rank.to_char(), suffix)
}

/// Drops community cards that repeat a hole card or an earlier community
/// card, then keeps at most five. Returns the cleaned cards and what was dropped.
pub fn dedup_cards(hole: &[Card], community: &[Card]) -> (Vec<Card>, Vec<Card>) {
    let mut seen: HashSet<Card> = hole.iter().copied().collect();
    let mut kept = Vec::with_capacity(community.len().min(5));
    let mut dropped = Vec::new();
    for &card in community {
        if kept.len() < 5 && seen.insert(card) {
            kept.push(card);
        } else {
            dropped.push(card);
        }
    }
    (kept, dropped)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStage {
    Preflop,
    Flop,
    Turn,
    River,
}

impl GameStage {
    pub fn from_community_count(count: usize) -> AdvisorResult<GameStage> {
        match count {
            0 => Ok(GameStage::Preflop),
            3 => Ok(GameStage::Flop),
            4 => Ok(GameStage::Turn),
            5 => Ok(GameStage::River),
            n if n > 5 => Err(AdvisorError::TooManyCommunityCards(n)),
            n => Err(AdvisorError::InvalidCommunityCount(n)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStage::Preflop => "preflop",
            GameStage::Flop => "flop",
            GameStage::Turn => "turn",
            GameStage::River => "river",
        }
    }
}

impl fmt::Display for GameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameStage {
    type Err = AdvisorError;

    fn from_str(s: &str) -> AdvisorResult<GameStage> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preflop" | "pre-flop" => Ok(GameStage::Preflop),
            "flop" => Ok(GameStage::Flop),
            "turn" => Ok(GameStage::Turn),
            "river" => Ok(GameStage::River),
            _ => Err(AdvisorError::InvalidStage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Early,
    #[default]
    Middle,
    Late,
    Blinds,
}

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::Early => "Early",
            Position::Middle => "Middle",
            Position::Late => "Late",
            Position::Blinds => "Blinds",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Position::Early => "First to act - play tight",
            Position::Middle => "Middle position - moderate range",
            Position::Late => "Last to act - wider range",
            Position::Blinds => "Forced bets - defend selectively",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = AdvisorError;

    fn from_str(s: &str) -> AdvisorResult<Position> {
        match s.trim().to_ascii_lowercase().as_str() {
            "early" => Ok(Position::Early),
            "middle" => Ok(Position::Middle),
            "late" => Ok(Position::Late),
            "blinds" => Ok(Position::Blinds),
            _ => Err(AdvisorError::InvalidPosition(s.to_string())),
        }
    }
}
