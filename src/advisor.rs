use serde::Serialize;

use crate::board::{analyze_board_texture, BoardTexture};
use crate::cards::{dedup_cards, Card, GameStage, HoleCards, Position};
use crate::draws::{detect_draws, DrawInfo};
use crate::error::{AdvisorError, AdvisorResult};
use crate::hand_evaluator::{evaluate_hand_with, BestHandSolver, HandEvaluation, HandSolver};
use crate::narrative::{enrich, NarrativeAdvisor};
use crate::recommendation::{synthesize_traced, AnalysisInput, Recommendation, RuleId};

/// Full result of one analysis call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub hole: HoleCards,
    pub community: Vec<Card>,
    pub stage: GameStage,
    pub position: Position,
    pub evaluation: HandEvaluation,
    pub texture: BoardTexture,
    pub draws: DrawInfo,
    pub rule: RuleId,
    pub recommendation: Recommendation,
}

impl Analysis {
    fn input(&self) -> AnalysisInput<'_> {
        AnalysisInput {
            hole: &self.hole,
            community: &self.community,
            stage: self.stage,
            evaluation: &self.evaluation,
            position: self.position,
        }
    }
}

/// Boundary over the engine: cleans the cards, derives the stage and runs
/// every component in order.
#[derive(Debug, Clone, Default)]
pub struct Advisor<S = BestHandSolver> {
    solver: S,
}

impl Advisor<BestHandSolver> {
    pub fn new() -> Self {
        Advisor::default()
    }
}

impl<S: HandSolver> Advisor<S> {
    pub fn with_solver(solver: S) -> Self {
        Advisor { solver }
    }

    pub fn analyze(
        &self,
        hole: &[Card],
        community: &[Card],
        position: Position,
    ) -> AdvisorResult<Analysis> {
        self.analyze_at(hole, community, None, position)
    }

    /// Like [`Advisor::analyze`]; `stage` overrides the one derived from the
    /// community card count.
    pub fn analyze_at(
        &self,
        hole: &[Card],
        community: &[Card],
        stage: Option<GameStage>,
        position: Position,
    ) -> AdvisorResult<Analysis> {
        let hole: HoleCards = match hole {
            [a, b] if a == b => return Err(AdvisorError::DuplicateCard(*a)),
            [a, b] => [*a, *b],
            _ => return Err(AdvisorError::InvalidHandSize(hole.len())),
        };
        if community.len() > 5 {
            return Err(AdvisorError::TooManyCommunityCards(community.len()));
        }

        let (community, dropped) = dedup_cards(&hole, community);
        if !dropped.is_empty() {
            log::debug!(
                "dropped duplicate cards: {}",
                dropped.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
            );
        }

        let stage = match stage {
            Some(stage) => stage,
            None => GameStage::from_community_count(community.len())?,
        };

        let evaluation = evaluate_hand_with(&self.solver, &hole, &community)?;
        let texture = analyze_board_texture(&community);
        let draws = detect_draws(&hole, &community);
        let (rule, recommendation) = synthesize_traced(AnalysisInput {
            hole: &hole,
            community: &community,
            stage,
            evaluation: &evaluation,
            position,
        });

        Ok(Analysis {
            hole,
            community,
            stage,
            position,
            evaluation,
            texture,
            draws,
            rule,
            recommendation,
        })
    }

    /// Runs [`Advisor::analyze`], then asks `narrator` for commentary. The
    /// verdict is final before the narrator is consulted.
    pub fn analyze_with_narrative(
        &self,
        hole: &[Card],
        community: &[Card],
        position: Position,
        narrator: &dyn NarrativeAdvisor,
    ) -> AdvisorResult<Analysis> {
        let mut analysis = self.analyze(hole, community, position)?;
        let rec = enrich(analysis.recommendation.clone(), &analysis.input(), narrator);
        analysis.recommendation = rec;
        Ok(analysis)
    }
}
