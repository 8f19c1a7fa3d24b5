use thiserror::Error;

use crate::cards::Card;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Hole cards must be exactly 2 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("At most 5 community cards, got {0}")]
    TooManyCommunityCards(usize),

    #[error("{0} community cards do not match any street (expected 0, 3, 4 or 5)")]
    InvalidCommunityCount(usize),

    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),

    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Hand solver failed: {0}")]
    Solver(String),

    #[error("Narrative advice unavailable: {0}")]
    Narrative(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
