use approx::assert_relative_eq;

use holdem_advisor::cards::*;
use holdem_advisor::error::{AdvisorError, AdvisorResult};
use holdem_advisor::hand_evaluator::*;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

fn best(hole: &str, board: &str) -> HandResult {
    let cards = [parse_board(hole).unwrap(), parse_board(board).unwrap()].concat();
    best_hand(&cards).unwrap()
}

#[test]
fn test_royal_flush() {
    let result = best("AsKs", "QsTsJs2h3d");
    assert_eq!(result.category, HandCategory::RoyalFlush);
    assert_eq!(result.rank, 9);
}

#[test]
fn test_straight_flush() {
    let result = best("9h8h", "7h6h5hAcKd");
    assert_eq!(result.category, HandCategory::StraightFlush);
    assert_eq!(result.kickers, vec![9]);
}

#[test]
fn test_four_of_a_kind() {
    let result = best("KsKh", "KdKc5s2h3d");
    assert_eq!(result.category, HandCategory::FourOfAKind);
    assert_eq!(result.kickers, vec![13, 5]);
}

#[test]
fn test_full_house() {
    let result = best("AsAh", "AdKsKh2c3d");
    assert_eq!(result.category, HandCategory::FullHouse);
    assert_eq!(result.kickers, vec![14, 13]);
}

#[test]
fn test_flush() {
    let result = best("AsTs", "8s5s2sKdQh");
    assert_eq!(result.category, HandCategory::Flush);
}

#[test]
fn test_straight() {
    let result = best("9s8h", "7d6c5sAhKd");
    assert_eq!(result.category, HandCategory::Straight);
    assert_eq!(result.kickers, vec![9]);
}

#[test]
fn test_wheel() {
    let result = best("As2h", "3d4c5sKhQd");
    assert_eq!(result.category, HandCategory::Straight);
    assert_eq!(result.kickers, vec![5]);
}

#[test]
fn test_three_of_a_kind() {
    let result = best("QsQh", "Qd7s3h2cKd");
    assert_eq!(result.category, HandCategory::ThreeOfAKind);
}

#[test]
fn test_two_pair() {
    let result = best("AsKh", "AdKs5c2h3d");
    assert_eq!(result.category, HandCategory::TwoPair);
    assert_eq!(result.kickers, vec![14, 13, 5]);
}

#[test]
fn test_one_pair() {
    let result = best("AsAh", "Kd7s3c2h5d");
    assert_eq!(result.category, HandCategory::OnePair);
    assert_eq!(result.kickers, vec![14, 13, 7, 5]);
}

#[test]
fn test_high_card() {
    let result = best("AsKh", "Qd9s3c2h5d");
    assert_eq!(result.category, HandCategory::HighCard);
}

#[test]
fn test_fewer_than_five_cards() {
    assert_eq!(best("AsAh", "").category, HandCategory::OnePair);
    assert_eq!(best("AsKh", "").category, HandCategory::HighCard);
    assert_eq!(best("AsKh", "AdKd").category, HandCategory::TwoPair);
    assert_eq!(best("7s7h", "7d").category, HandCategory::ThreeOfAKind);
}

#[test]
fn test_too_many_cards() {
    let cards = parse_board("AsKhQdJc9s8h7d").unwrap();
    assert!(best_hand(&cards).is_ok());
    let cards = parse_board("AsKhQdJc9s8h7d6c").unwrap();
    assert!(matches!(best_hand(&cards), Err(AdvisorError::Solver(_))));
    assert!(best_hand(&[]).is_err());
}

#[test]
fn test_flush_beats_straight() {
    let board = parse_board("7s6s5s4dAh").unwrap();
    assert_eq!(
        compare_hands(&[c("As"), c("2s")], &[c("8h"), c("9h")], &board).unwrap(),
        1
    );
}

#[test]
fn test_higher_pair_wins() {
    let board = parse_board("2s5d8cTh3d").unwrap();
    assert_eq!(
        compare_hands(&[c("As"), c("Ah")], &[c("Ks"), c("Kh")], &board).unwrap(),
        1
    );
    assert_eq!(
        compare_hands(&[c("Ks"), c("Kh")], &[c("As"), c("Ah")], &board).unwrap(),
        -1
    );
}

#[test]
fn test_board_plays_split() {
    let board = parse_board("AsKsQsJsTs").unwrap();
    assert_eq!(
        compare_hands(&[c("2h"), c("3h")], &[c("4d"), c("5d")], &board).unwrap(),
        0
    );
}

#[test]
fn test_descriptions() {
    assert_eq!(best("KsKh", "2c5d9s").description(), "Pair of Kings");
    assert_eq!(best("AsKh", "AdKs5c").description(), "Two Pair, Aces and Kings");
    assert_eq!(best("AsAh", "AdKsKh").description(), "Full House, Aces over Kings");
    assert_eq!(best("As2h", "3d4c5s").description(), "Straight, Five high");
    assert_eq!(best("AsKs", "QsTsJs").description(), "Royal Flush");
    assert_eq!(best("Ah9c", "7s4d2c").description(), "Ace high");
}

#[test]
fn test_ordinal_scale() {
    assert_relative_eq!(best("2s2h", "").ordinal(), 0.0);
    assert_relative_eq!(best("AsAh", "").ordinal(), 10.0);
    assert_relative_eq!(best("8s8h", "").ordinal(), 5.0);
}

#[test]
fn test_hand_rank_table() {
    assert_eq!(hand_rank_for("High Card"), 1);
    assert_eq!(hand_rank_for("Pair"), 2);
    assert_eq!(hand_rank_for("Two Pair"), 3);
    assert_eq!(hand_rank_for("Full House"), 7);
    assert_eq!(hand_rank_for("Royal Flush"), 10);
    assert_eq!(hand_rank_for("Five of a Kind"), 1);
}

#[test]
fn test_strength_bands_are_ordered_and_disjoint() {
    for rank in 1..10usize {
        let (min, max) = STRENGTH_BANDS[rank];
        let (next_min, next_max) = STRENGTH_BANDS[rank + 1];
        assert!(min <= max);
        assert!(max <= next_min, "band {} overlaps band {}", rank, rank + 1);
        assert!(next_min <= next_max);
    }
}

#[test]
fn test_strength_interpolation() {
    assert_eq!(strength_for(1, 0.0), 5);
    assert_eq!(strength_for(1, 10.0), 20);
    assert_eq!(strength_for(2, 5.0), 33);
    assert_eq!(strength_for(10, 3.0), 100);
    // ordinal is clamped to 0..=10
    assert_eq!(strength_for(2, -4.0), 25);
    assert_eq!(strength_for(2, 42.0), 40);
}

#[test]
fn test_strength_monotonic_within_band() {
    for rank in 1..=10u8 {
        let mut previous = 0;
        for step in 0..=20 {
            let strength = strength_for(rank, f64::from(step) / 2.0);
            assert!(strength >= previous);
            previous = strength;
        }
    }
}

#[test]
fn test_evaluate_pair_of_kings() {
    let eval = evaluate_hand(&[c("Kh"), c("Kd")], &parse_board("2c5d9s").unwrap()).unwrap();
    assert_eq!(eval.hand_name, "Pair");
    assert_eq!(eval.hand_rank, 2);
    assert!((25..=40).contains(&eval.strength));
    assert_eq!(eval.description, "Pair of Kings");
    assert_eq!(eval.best_cards.len(), 5);
}

#[test]
fn test_evaluate_river_picks_best_five() {
    let eval = evaluate_hand(&[c("9h"), c("8h")], &parse_board("7h6h5hAcKd").unwrap()).unwrap();
    assert_eq!(eval.hand_rank, 9);
    assert_eq!(eval.best_cards.len(), 5);
    assert!(eval.best_cards.contains(&c("9h")));
    assert!(!eval.best_cards.contains(&c("Ac")));
}

#[test]
fn test_evaluate_preflop_hole_only() {
    let eval = evaluate_hand(&[c("As"), c("Ad")], &[]).unwrap();
    assert_eq!(eval.hand_rank, 2);
    assert_eq!(eval.strength, 40);
}

#[test]
fn test_evaluate_missing_hole_cards_is_unknown() {
    let eval = evaluate_hand(&[c("As")], &parse_board("KsQsJs").unwrap()).unwrap();
    assert_eq!(eval, HandEvaluation::unknown());
    assert_eq!(eval.hand_rank, 0);
    assert_eq!(eval.strength, 0);
    assert!(eval.best_cards.is_empty());

    assert_eq!(evaluate_hand(&[], &[]).unwrap().hand_rank, 0);
}

#[test]
fn test_evaluate_rejects_three_hole_cards() {
    let result = evaluate_hand(&[c("As"), c("Ks"), c("Qs")], &[]);
    assert!(matches!(result, Err(AdvisorError::InvalidHandSize(3))));
}

#[test]
fn test_rank_and_strength_climb_with_hand_quality() {
    let ladder = [
        ("Ac3h", "Ts9s2d"), // high card
        ("Tc4h", "Ts9s2d"), // pair
        ("Tc9c", "Ts9s2d"), // two pair
        ("TcTd", "Ts9s2d"), // trips
        ("QhJc", "Ts9s8d"), // straight
        ("As4s", "Ts9s2s"), // flush
        ("TcTd", "Ts9s9d"), // full house
        ("TcTd", "TsTh2d"), // quads
        ("QsJs", "Ts9s8s"), // straight flush
        ("AsKs", "QsJsTs"), // royal flush
    ];
    let evals: Vec<HandEvaluation> = ladder
        .iter()
        .map(|(hole, board)| {
            evaluate_hand(&parse_hole(hole).unwrap(), &parse_board(board).unwrap()).unwrap()
        })
        .collect();

    for (expected, eval) in (1..=10u8).zip(&evals) {
        assert_eq!(eval.hand_rank, expected, "{}", eval.description);
    }
    for pair in evals.windows(2) {
        assert!(pair[0].strength <= pair[1].strength);
    }
}

#[test]
fn test_strength_category() {
    assert_eq!(StrengthCategory::from_strength(10), StrengthCategory::Weak);
    assert_eq!(StrengthCategory::from_strength(30), StrengthCategory::Medium);
    assert_eq!(StrengthCategory::from_strength(55), StrengthCategory::Strong);
    assert_eq!(StrengthCategory::from_strength(70), StrengthCategory::Monster);
}

struct FixedSolver {
    name: &'static str,
    ordinal: f64,
}

impl HandSolver for FixedSolver {
    fn solve(&self, cards: &[Card]) -> AdvisorResult<SolvedHand> {
        Ok(SolvedHand {
            name: self.name.to_string(),
            ordinal: self.ordinal,
            description: String::new(),
            cards: cards.to_vec(),
        })
    }
}

struct BrokenSolver;

impl HandSolver for BrokenSolver {
    fn solve(&self, _cards: &[Card]) -> AdvisorResult<SolvedHand> {
        Err(AdvisorError::Solver("offline".to_string()))
    }
}

#[test]
fn test_evaluate_with_fake_solver() {
    let solver = FixedSolver {
        name: "Flush",
        ordinal: 10.0,
    };
    let board = parse_board("2s5s9sKdQh").unwrap();
    let eval = evaluate_hand_with(&solver, &[c("As"), c("Ts")], &board).unwrap();
    assert_eq!(eval.hand_rank, 6);
    assert_eq!(eval.strength, 85);
    assert_eq!(eval.description, "Flush");
    assert_eq!(eval.best_cards.len(), 5);
}

#[test]
fn test_unknown_label_falls_back_to_high_card() {
    let solver = FixedSolver {
        name: "Mystery",
        ordinal: 0.0,
    };
    let eval = evaluate_hand_with(&solver, &[c("As"), c("Ts")], &[]).unwrap();
    assert_eq!(eval.hand_rank, 1);
    assert_eq!(eval.strength, 5);
}

#[test]
fn test_solver_failure_propagates() {
    let result = evaluate_hand_with(&BrokenSolver, &[c("As"), c("Ts")], &[]);
    assert!(matches!(result, Err(AdvisorError::Solver(_))));
}
