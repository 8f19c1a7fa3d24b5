use serde::Serialize;

use crate::board::{straight_values, suit_counts};
use crate::cards::Card;

pub const FLUSH_DRAW_OUTS: u8 = 9;
pub const OPEN_ENDED_OUTS: u8 = 8;
pub const GUTSHOT_OUTS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawInfo {
    pub flush_draw: bool,
    pub open_ended: bool,
    pub gutshot: bool,
    pub outs: u8,
    pub description: String,
}

impl DrawInfo {
    pub fn has_draw(&self) -> bool {
        self.flush_draw || self.open_ended || self.gutshot
    }

    pub fn has_straight_draw(&self) -> bool {
        self.open_ended || self.gutshot
    }
}

/// Detects flush and straight draws across hole + community cards.
///
/// Outs are summed per draw, so a card completing both a flush and a
/// straight is counted twice. The recommendation thresholds are tuned
/// against that count.
pub fn detect_draws(hole: &[Card], community: &[Card]) -> DrawInfo {
    let all_cards = [hole, community].concat();

    // Exactly four: five or more is a made flush.
    let flush_draw = suit_counts(&all_cards).values().any(|&n| n == 4);

    let values = straight_values(&all_cards);

    let mut open_ended = false;
    let mut blocked_run = false;
    for w in values.windows(4) {
        if w[3] - w[0] == 3 {
            if w[0] > 1 && w[3] < 14 {
                open_ended = true;
            } else {
                blocked_run = true;
            }
        }
    }

    let inside_gap = values.windows(4).any(|w| {
        w[3] - w[0] == 4 && w.windows(2).filter(|pair| pair[1] - pair[0] == 2).count() == 1
    });

    let gutshot = !open_ended && (blocked_run || inside_gap);

    let mut outs = 0;
    let mut draws = Vec::new();
    if flush_draw {
        outs += FLUSH_DRAW_OUTS;
        draws.push("flush draw");
    }
    if open_ended {
        outs += OPEN_ENDED_OUTS;
        draws.push("open-ended straight draw");
    } else if gutshot {
        outs += GUTSHOT_OUTS;
        draws.push("gutshot straight draw");
    }

    let description = if draws.is_empty() {
        "no draws".to_string()
    } else {
        draws.join(" + ")
    };

    DrawInfo {
        flush_draw,
        open_ended,
        gutshot,
        outs,
        description,
    }
}
