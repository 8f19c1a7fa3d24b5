use crate::cards::Card;
use crate::error::AdvisorResult;
use crate::recommendation::{AnalysisInput, Recommendation};

/// Capability that turns a coaching prompt into a short piece of advice.
pub trait NarrativeAdvisor {
    fn advise(&self, prompt: &str) -> AdvisorResult<String>;
}

pub fn build_prompt(input: &AnalysisInput, rec: &Recommendation) -> String {
    let format_card = |c: &Card| {
        format!("{}{}", c.rank.to_char(), c.suit.to_char().to_ascii_uppercase())
    };
    let hole = input.hole.iter().map(format_card).collect::<Vec<_>>().join(", ");
    let community = if input.community.is_empty() {
        "none yet".to_string()
    } else {
        input.community.iter().map(format_card).collect::<Vec<_>>().join(", ")
    };

    format!(
        "You are a poker coach for beginners learning Texas Hold'em. Give ONE short sentence (max 20 words) of strategic advice.

Game Stage: {}
Your Hole Cards: {}
Community Cards: {}
Your Hand: {}
Suggested Action: {}

Focus on the \"why\" behind the action. Be encouraging but honest. No jargon.",
        input.stage, hole, community, input.evaluation.description, rec.action
    )
}

/// Attaches advice from `advisor` to `rec`. Failures and blank answers leave
/// `rec` as it was; action and confidence are never touched.
pub fn enrich(
    mut rec: Recommendation,
    input: &AnalysisInput,
    advisor: &dyn NarrativeAdvisor,
) -> Recommendation {
    let prompt = build_prompt(input, &rec);
    match advisor.advise(&prompt) {
        Ok(text) if !text.trim().is_empty() => rec.narrative = Some(text.trim().to_string()),
        Ok(_) => log::debug!("narrative advisor returned nothing"),
        Err(e) => log::warn!("narrative advice skipped: {}", e),
    }
    rec
}
