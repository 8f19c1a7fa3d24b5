use std::collections::HashSet;

use holdem_advisor::cards::*;
use holdem_advisor::error::AdvisorError;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

#[test]
fn test_card_creation() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
    assert_eq!(c.value(), 14);
}

#[test]
fn test_invalid_rank() {
    assert!(matches!(Rank::from_char('X'), Err(AdvisorError::InvalidRank('X'))));
}

#[test]
fn test_invalid_suit() {
    assert!(Suit::from_char('x').is_err());
}

#[test]
fn test_card_str() {
    let c = Card::new(Rank::King, Suit::Diamonds);
    assert_eq!(format!("{}", c), "Kd");
}

#[test]
fn test_card_pretty() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).pretty(), "A\u{2660}");
    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).pretty(), "T\u{2665}");
}

#[test]
fn test_card_ordering() {
    let two = Card::new(Rank::Two, Suit::Spades);
    let ace = Card::new(Rank::Ace, Suit::Spades);
    assert!(two < ace);
    let king = Card::new(Rank::King, Suit::Hearts);
    let queen = Card::new(Rank::Queen, Suit::Diamonds);
    assert!(!(king < queen));
}

#[test]
fn test_card_equality() {
    let a1 = Card::new(Rank::Ace, Suit::Spades);
    let a2 = Card::new(Rank::Ace, Suit::Spades);
    let a3 = Card::new(Rank::Ace, Suit::Hearts);
    assert_eq!(a1, a2);
    assert_ne!(a1, a3);
}

#[test]
fn test_card_hashable() {
    let mut s = HashSet::new();
    s.insert(Card::new(Rank::Ace, Suit::Spades));
    s.insert(Card::new(Rank::Ace, Suit::Spades)); // duplicate
    s.insert(Card::new(Rank::King, Suit::Hearts));
    assert_eq!(s.len(), 2);
}

#[test]
fn test_parse_card_basic() {
    assert_eq!(parse_card("As").unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(parse_card("Td").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
}

#[test]
fn test_parse_card_case_insensitive() {
    assert_eq!(parse_card("AH").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(parse_card("kc").unwrap(), Card::new(Rank::King, Suit::Clubs));
}

#[test]
fn test_parse_card_invalid() {
    assert!(parse_card("ABC").is_err());
    assert!(parse_card("1s").is_err());
    assert!(parse_card("Ax").is_err());
}

#[test]
fn test_token_round_trip_every_card() {
    for &rank in &ALL_RANKS {
        for &suit in &ALL_SUITS {
            let card = Card::new(rank, suit);
            let token = card.to_string();
            assert_eq!(token.len(), 2);
            assert_eq!(token.parse::<Card>().unwrap(), card);
        }
    }
}

#[test]
fn test_card_serializes_as_token() {
    let json = serde_json::to_string(&c("Qh")).unwrap();
    assert_eq!(json, "\"Qh\"");
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c("Qh"));
    assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
}

#[test]
fn test_parse_board_flop() {
    let board = parse_board("AsKdQh").unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0], Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn test_parse_board_with_separators() {
    assert_eq!(parse_board("As Kd Qh").unwrap().len(), 3);
    assert_eq!(parse_board("As,Kd,Qh,5c").unwrap().len(), 4);
}

#[test]
fn test_parse_board_empty() {
    assert!(parse_board("").unwrap().is_empty());
}

#[test]
fn test_parse_board_odd_length() {
    assert!(matches!(parse_board("AsK"), Err(AdvisorError::InvalidBoardNotation(_))));
}

#[test]
fn test_parse_hole() {
    let hole = parse_hole("AsKd").unwrap();
    assert_eq!(hole, [c("As"), c("Kd")]);
    assert!(matches!(parse_hole("As"), Err(AdvisorError::InvalidHandSize(1))));
    assert!(matches!(parse_hole("AsKdQh"), Err(AdvisorError::InvalidHandSize(3))));
    assert!(matches!(parse_hole("AsAs"), Err(AdvisorError::DuplicateCard(_))));
}

#[test]
fn test_notation_pair() {
    assert_eq!(hand_notation(c("As"), c("Ah")), "AA");
}

#[test]
fn test_notation_suited() {
    assert_eq!(hand_notation(c("As"), c("Ks")), "AKs");
}

#[test]
fn test_notation_offsuit() {
    assert_eq!(hand_notation(c("As"), c("Kh")), "AKo");
}

#[test]
fn test_notation_ignores_argument_order() {
    assert_eq!(hand_notation(c("Ks"), c("As")), "AKs");
    assert_eq!(hand_notation(c("9h"), c("Td")), "T9o");
    assert_eq!(hand_notation(c("Td"), c("9h")), "T9o");
}

#[test]
fn test_rank_from_value() {
    assert_eq!(Rank::from_value(1), Some(Rank::Ace));
    assert_eq!(Rank::from_value(14), Some(Rank::Ace));
    assert_eq!(Rank::from_value(10), Some(Rank::Ten));
    assert_eq!(Rank::from_value(0), None);
    assert_eq!(Rank::from_value(15), None);
}

#[test]
fn test_rank_names() {
    assert_eq!(Rank::King.name(), "King");
    assert_eq!(Rank::Six.plural(), "Sixes");
}

#[test]
fn test_dedup_drops_repeats_of_hole_and_board() {
    let hole = [c("As"), c("Kd")];
    let community = vec![c("Qh"), c("As"), c("Qh"), c("2c")];
    let (kept, dropped) = dedup_cards(&hole, &community);
    assert_eq!(kept, vec![c("Qh"), c("2c")]);
    assert_eq!(dropped, vec![c("As"), c("Qh")]);
}

#[test]
fn test_dedup_caps_at_five() {
    let community = parse_board("2c3c4c5c6c7c").unwrap();
    let (kept, dropped) = dedup_cards(&[], &community);
    assert_eq!(kept.len(), 5);
    assert_eq!(dropped, vec![c("7c")]);
}

#[test]
fn test_stage_from_community_count() {
    assert_eq!(GameStage::from_community_count(0).unwrap(), GameStage::Preflop);
    assert_eq!(GameStage::from_community_count(3).unwrap(), GameStage::Flop);
    assert_eq!(GameStage::from_community_count(4).unwrap(), GameStage::Turn);
    assert_eq!(GameStage::from_community_count(5).unwrap(), GameStage::River);
    assert!(matches!(
        GameStage::from_community_count(2),
        Err(AdvisorError::InvalidCommunityCount(2))
    ));
    assert!(matches!(
        GameStage::from_community_count(6),
        Err(AdvisorError::TooManyCommunityCards(6))
    ));
}

#[test]
fn test_stage_and_position_parse() {
    assert_eq!("River".parse::<GameStage>().unwrap(), GameStage::River);
    assert_eq!("pre-flop".parse::<GameStage>().unwrap(), GameStage::Preflop);
    assert!("showdown".parse::<GameStage>().is_err());
    assert_eq!("late".parse::<Position>().unwrap(), Position::Late);
    assert!("button".parse::<Position>().is_err());
    assert_eq!(Position::default(), Position::Middle);
    assert_eq!(Position::Early.description(), "First to act - play tight");
}
