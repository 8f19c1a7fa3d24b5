//! Texas Hold'em decision engine.
//!
//! Given hole cards, community cards and table position, the engine
//! evaluates the made hand, reads the board texture, counts draws and
//! synthesizes a single [`recommendation::Recommendation`]. Every engine
//! function is pure; the only I/O lives in [`cli`].

pub mod advisor;
pub mod board;
pub mod cards;
pub mod cli;
pub mod display;
pub mod draws;
pub mod equity;
pub mod error;
pub mod hand_evaluator;
pub mod narrative;
pub mod preflop;
pub mod recommendation;

pub use advisor::{Advisor, Analysis};
pub use board::{analyze_board_texture, BoardTexture};
pub use cards::{Card, GameStage, HoleCards, Position, Rank, Suit};
pub use draws::{detect_draws, DrawInfo};
pub use equity::{accurate_odds, Street};
pub use error::{AdvisorError, AdvisorResult};
pub use hand_evaluator::{evaluate_hand, HandEvaluation, HandSolver};
pub use preflop::{preflop_recommendation, sklansky_tier, PreFlopAdvice};
pub use recommendation::{synthesize, Action, AnalysisInput, Confidence, Recommendation};
