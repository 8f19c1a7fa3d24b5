//! Rules-based verdict for one decision point.
//!
//! The verdict comes from [`RULES`], an ordered list of guarded rules; the
//! first rule whose predicate holds builds the [`Recommendation`]. Board
//! dangers come before hand category, hand category before draws.

use std::fmt;

use serde::Serialize;

use crate::board::{
    analyze_board_texture, completes_straight, count_overcards, holds_suit, kicker,
    kicker_strength, pair_position, pair_rank, BoardTexture, KickerStrength, PairPosition,
};
use crate::cards::{Card, GameStage, HoleCards, Position};
use crate::draws::{detect_draws, DrawInfo};
use crate::equity::{accurate_odds, odds_against, Street};
use crate::hand_evaluator::HandEvaluation;
use crate::preflop::{preflop_recommendation, tier_confidence};

/// Outs at which a draw is strong enough to keep a board-paired hand alive.
pub const STRONG_DRAW_OUTS: u8 = 8;

const FULL_HOUSE_RANK: u8 = 7;
const FLUSH_RANK: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call => write!(f, "CALL"),
            Action::Raise => write!(f, "RAISE"),
            Action::AllIn => write!(f, "ALL_IN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "HIGH"),
            Confidence::Medium => write!(f, "MEDIUM"),
            Confidence::Low => write!(f, "LOW"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: Action,
    pub confidence: Confidence,
    pub reasoning: String,
    pub hand_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outs_odds: Option<String>,
    /// Free-text commentary attached after the verdict; never changes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl Recommendation {
    pub fn new(
        action: Action,
        confidence: Confidence,
        hand_description: impl Into<String>,
        reasoning: impl Into<String>,
    ) -> Self {
        Recommendation {
            action,
            confidence,
            reasoning: reasoning.into(),
            hand_description: hand_description.into(),
            board_warning: None,
            draw_info: None,
            outs_odds: None,
            narrative: None,
        }
    }

    pub fn with_board_warning(mut self, warning: impl Into<String>) -> Self {
        self.board_warning = Some(warning.into());
        self
    }

    pub fn with_draw(mut self, draws: &DrawInfo, street: Street) -> Self {
        let pct = accurate_odds(draws.outs, street);
        self.draw_info = Some(format!("{} ({} outs)", draws.description, draws.outs));
        self.outs_odds = Some(format!(
            "{} outs, ~{}% to hit ({} against)",
            draws.outs,
            pct,
            odds_against(pct)
        ));
        self
    }
}

/// Everything the synthesizer needs for one decision.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub hole: &'a HoleCards,
    pub community: &'a [Card],
    pub stage: GameStage,
    pub evaluation: &'a HandEvaluation,
    /// Only consulted pre-flop.
    pub position: Position,
}

/// An [`AnalysisInput`] with the derived board texture and draws.
#[derive(Debug, Clone)]
pub struct Spot<'a> {
    pub hole: &'a HoleCards,
    pub community: &'a [Card],
    pub stage: GameStage,
    pub evaluation: &'a HandEvaluation,
    pub position: Position,
    pub texture: BoardTexture,
    pub draws: DrawInfo,
}

impl<'a> Spot<'a> {
    pub fn new(input: AnalysisInput<'a>) -> Self {
        Spot {
            hole: input.hole,
            community: input.community,
            stage: input.stage,
            evaluation: input.evaluation,
            position: input.position,
            texture: analyze_board_texture(input.community),
            draws: detect_draws(input.hole, input.community),
        }
    }

    fn street(&self) -> Street {
        Street::from_stage(self.stage).unwrap_or(Street::Flop)
    }

    fn hand_rank(&self) -> u8 {
        self.evaluation.hand_rank
    }

    /// Whether the hole cards take part in the made hand rather than the
    /// board playing by itself.
    pub fn hole_cards_contribute(&self) -> bool {
        let pairs_board = self
            .hole
            .iter()
            .any(|h| self.community.iter().any(|c| c.rank == h.rank));
        let pocket_pair = self.hole[0].rank == self.hole[1].rank;
        let flush_card = matches!(self.hand_rank(), 6 | 9 | 10)
            && holds_suit(self.hole, self.texture.flush_suit);
        let straight_card = matches!(self.hand_rank(), 5 | 9 | 10)
            && self
                .hole
                .iter()
                .any(|h| self.evaluation.best_cards.contains(h));
        pairs_board || pocket_pair || flush_card || straight_card
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleId {
    PreFlop,
    FourFlushDanger,
    FourStraightDanger,
    MadeHand,
    BoardPair,
    OwnPair,
    HighCard,
    Fallback,
}

pub struct Rule {
    pub id: RuleId,
    pub applies: fn(&Spot) -> bool,
    pub build: fn(&Spot) -> Recommendation,
}

pub static RULES: [Rule; 8] = [
    Rule {
        id: RuleId::PreFlop,
        applies: is_preflop,
        build: build_preflop,
    },
    Rule {
        id: RuleId::FourFlushDanger,
        applies: is_four_flush_danger,
        build: build_four_flush_danger,
    },
    Rule {
        id: RuleId::FourStraightDanger,
        applies: is_four_straight_danger,
        build: build_four_straight_danger,
    },
    Rule {
        id: RuleId::MadeHand,
        applies: is_made_hand,
        build: build_made_hand,
    },
    Rule {
        id: RuleId::BoardPair,
        applies: is_board_pair,
        build: build_board_pair,
    },
    Rule {
        id: RuleId::OwnPair,
        applies: is_own_pair,
        build: build_own_pair,
    },
    Rule {
        id: RuleId::HighCard,
        applies: is_high_card,
        build: build_high_card,
    },
    Rule {
        id: RuleId::Fallback,
        applies: always,
        build: build_fallback,
    },
];

pub fn synthesize(input: AnalysisInput) -> Recommendation {
    synthesize_traced(input).1
}

/// Like [`synthesize`], also reporting which rule produced the verdict.
pub fn synthesize_traced(input: AnalysisInput) -> (RuleId, Recommendation) {
    let spot = Spot::new(input);
    for rule in &RULES {
        if (rule.applies)(&spot) {
            log::debug!(
                "{:?} fired at {} for {} ({})",
                rule.id,
                spot.stage,
                spot.evaluation.description,
                spot.draws.description
            );
            return (rule.id, (rule.build)(&spot));
        }
    }
    (RuleId::Fallback, build_fallback(&spot))
}

fn is_preflop(spot: &Spot) -> bool {
    spot.stage == GameStage::Preflop || spot.community.is_empty()
}

fn build_preflop(spot: &Spot) -> Recommendation {
    let advice = preflop_recommendation(spot.hole, spot.position);
    Recommendation::new(
        advice.action,
        tier_confidence(advice.tier),
        advice.hand_description,
        advice.reasoning,
    )
}

fn is_four_flush_danger(spot: &Spot) -> bool {
    spot.texture.four_flush
        && !holds_suit(spot.hole, spot.texture.flush_suit)
        && spot.hand_rank() < FULL_HOUSE_RANK
}

fn build_four_flush_danger(spot: &Spot) -> Recommendation {
    let suit = spot.texture.flush_suit.map(|s| s.name()).unwrap_or("one suit");
    Recommendation::new(
        Action::Fold,
        Confidence::High,
        spot.evaluation.description.clone(),
        format!(
            "You have {} but no {}. Anyone holding a single {} card has a flush and beats you. Fold.",
            spot.evaluation.description, suit, suit
        ),
    )
    .with_board_warning(format!("Four {} on the board and you hold none of them", suit))
}

fn is_four_straight_danger(spot: &Spot) -> bool {
    spot.texture.four_straight
        && !completes_straight(spot.hole, &spot.texture.missing_straight_cards)
        && spot.hand_rank() < FLUSH_RANK
}

fn build_four_straight_danger(spot: &Spot) -> Recommendation {
    let needed = spot
        .texture
        .missing_straight_cards
        .iter()
        .map(|r| r.name())
        .collect::<Vec<_>>()
        .join(" or ");
    Recommendation::new(
        Action::Check,
        Confidence::Low,
        spot.evaluation.description.clone(),
        format!(
            "You have {}, but the board is four to a straight and any {} completes it for an opponent. Check and avoid building the pot.",
            spot.evaluation.description, needed
        ),
    )
    .with_board_warning(format!(
        "Four to a straight on the board; a {} makes it and you hold none",
        needed
    ))
}

fn is_made_hand(spot: &Spot) -> bool {
    spot.hand_rank() >= 3
}

fn build_made_hand(spot: &Spot) -> Recommendation {
    let description = spot.evaluation.description.clone();
    if !spot.hole_cards_contribute() {
        return Recommendation::new(
            Action::Check,
            Confidence::Low,
            format!("{} (on the board)", description),
            format!(
                "{} is entirely on the board, so every player still in shares it. You have no edge; check.",
                description
            ),
        )
        .with_board_warning("The board plays: your hole cards do not improve it");
    }

    let rec = Recommendation::new(
        Action::Raise,
        Confidence::High,
        description.clone(),
        format!("You have {}! This is a strong hand - raise to build the pot.", description),
    );
    if spot.texture.wet {
        rec.with_board_warning("Wet board: flush or straight draws are live, charge them to continue")
    } else {
        rec
    }
}

fn is_board_pair(spot: &Spot) -> bool {
    spot.hand_rank() == 2 && pair_rank(spot.hole, spot.community).is_none()
}

fn build_board_pair(spot: &Spot) -> Recommendation {
    let description = format!("{} (on the board)", spot.evaluation.description);
    if spot.draws.outs >= STRONG_DRAW_OUTS {
        return Recommendation::new(
            Action::Check,
            Confidence::Low,
            description,
            format!(
                "The pair is on the board and helps everyone, but you have a {}. Check and take a free card if you can.",
                spot.draws.description
            ),
        )
        .with_draw(&spot.draws, spot.street());
    }

    Recommendation::new(
        Action::Fold,
        Confidence::High,
        description,
        "The only pair is on the board and your hole cards add nothing to it. Fold.",
    )
}

fn is_own_pair(spot: &Spot) -> bool {
    spot.hand_rank() == 2
}

fn build_own_pair(spot: &Spot) -> Recommendation {
    let Some(pair) = pair_rank(spot.hole, spot.community) else {
        return build_fallback(spot);
    };
    let position = pair_position(pair, spot.community);
    let kicker = kicker(spot.hole, spot.community);
    let strength = kicker_strength(kicker);
    let overcards = count_overcards(spot.community, pair);
    let description = format!("{} ({})", spot.evaluation.description, position.label());

    let rec = match position {
        PairPosition::Over => Recommendation::new(
            Action::Raise,
            Confidence::High,
            description,
            format!(
                "Pocket {} beat every card on the board. Raise with your overpair.",
                pair.plural()
            ),
        ),
        PairPosition::Top if strength == KickerStrength::Strong && overcards == 0 => {
            Recommendation::new(
                Action::Raise,
                Confidence::High,
                description,
                format!(
                    "Top pair with a {} kicker and no overcards. Raise for value.",
                    kicker.name()
                ),
            )
        }
        PairPosition::Top if strength == KickerStrength::Weak || overcards >= 1 => {
            let mut issues = Vec::new();
            if strength == KickerStrength::Weak {
                issues.push(format!("weak kicker ({})", kicker.name()));
            }
            if overcards >= 1 {
                issues.push(format!("{} overcard(s) on the board", overcards));
            }
            Recommendation::new(
                Action::Call,
                Confidence::Medium,
                description,
                format!(
                    "Top pair, but watch out: {}. Call, and slow down if the betting gets heavy.",
                    issues.join(", ")
                ),
            )
        }
        PairPosition::Top => Recommendation::new(
            Action::Call,
            Confidence::Medium,
            description,
            format!(
                "Top pair with a {} kicker. Call and see how the hand develops.",
                kicker.name()
            ),
        ),
        _ if overcards >= 2 => Recommendation::new(
            Action::Check,
            Confidence::Low,
            description,
            format!(
                "{} with {} overcards on the board is easily beaten. Check and keep the pot small.",
                position.label(),
                overcards
            ),
        ),
        _ => Recommendation::new(
            Action::Call,
            Confidence::Low,
            description,
            format!(
                "{} has some showdown value. Call small bets, but be ready to let it go.",
                position.label()
            ),
        ),
    };

    if spot.draws.has_draw() {
        rec.with_draw(&spot.draws, spot.street())
    } else {
        rec
    }
}

fn is_high_card(spot: &Spot) -> bool {
    spot.hand_rank() == 1
}

fn build_high_card(spot: &Spot) -> Recommendation {
    let draws = &spot.draws;
    let description = spot.evaluation.description.clone();
    let street = spot.street();

    match (draws.flush_draw, draws.open_ended, draws.gutshot) {
        (true, true, _) => Recommendation::new(
            Action::Raise,
            Confidence::Medium,
            description,
            "Flush draw plus open-ended straight draw: a monster draw. Raise as a semi-bluff.",
        )
        .with_draw(draws, street),
        (true, false, _) => Recommendation::new(
            Action::Call,
            Confidence::Medium,
            description,
            "No pair yet, but a flush draw. Call to see the next card if the price is right.",
        )
        .with_draw(draws, street),
        (false, true, _) => Recommendation::new(
            Action::Call,
            Confidence::Medium,
            description,
            "No pair yet, but an open-ended straight draw. Call to see the next card if the price is right.",
        )
        .with_draw(draws, street),
        (false, false, true) => Recommendation::new(
            Action::Check,
            Confidence::Low,
            description,
            "Only a gutshot straight draw. Check and take a free card; do not pay much to chase it.",
        )
        .with_draw(draws, street),
        (false, false, false) => Recommendation::new(
            Action::Fold,
            Confidence::High,
            description.clone(),
            format!(
                "You have {}. With no pair and no draw, fold and wait for a better hand.",
                description
            ),
        ),
    }
}

fn always(_: &Spot) -> bool {
    true
}

fn build_fallback(spot: &Spot) -> Recommendation {
    Recommendation::new(
        Action::Check,
        Confidence::Low,
        spot.evaluation.description.clone(),
        format!("You have {}.", spot.evaluation.description),
    )
}
