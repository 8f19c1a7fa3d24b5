use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::board::BoardTexture;
use crate::cards::{Card, Suit};
use crate::draws::DrawInfo;
use crate::equity::{accurate_odds, odds_against, Street};
use crate::hand_evaluator::HandEvaluation;
use crate::recommendation::{Action, Confidence, Recommendation};

pub fn board_display(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".dimmed().to_string();
    }
    cards
        .iter()
        .map(|card| {
            let text = card.pretty();
            match card.suit {
                Suit::Spades => text.white().to_string(),
                Suit::Hearts => text.red().to_string(),
                Suit::Diamonds => text.blue().to_string(),
                Suit::Clubs => text.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strength meter for a 0-100 score.
pub fn strength_bar(strength: u8, width: usize) -> String {
    let filled = usize::from(strength.min(100)) * width / 100;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{}/100", strength);

    if strength >= 70 {
        format!("{} {}", bar.green(), pct)
    } else if strength >= 30 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

pub fn styled_action(action: Action) -> String {
    let text = action.to_string();
    match action {
        Action::Raise | Action::AllIn => text.red().bold().to_string(),
        Action::Call => text.green().bold().to_string(),
        Action::Check => text.yellow().bold().to_string(),
        Action::Fold => text.dimmed().bold().to_string(),
    }
}

pub fn styled_confidence(confidence: Confidence) -> String {
    let text = confidence.to_string();
    match confidence {
        Confidence::High => text.bold().to_string(),
        Confidence::Medium => text.normal().to_string(),
        Confidence::Low => text.dimmed().to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn key_value_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for (key, value) in rows {
        table.add_row(vec![
            Cell::new(key.bold().to_string()),
            Cell::new(value).set_alignment(CellAlignment::Left),
        ]);
    }
    table
}

pub fn evaluation_table(evaluation: &HandEvaluation) -> String {
    key_value_table(vec![
        ("Hand", evaluation.description.clone()),
        ("Category", format!("{} (rank {})", evaluation.hand_name, evaluation.hand_rank)),
        ("Strength", strength_bar(evaluation.strength, 20)),
        ("Class", evaluation.category().to_string()),
        ("Best Cards", board_display(&evaluation.best_cards)),
    ])
    .to_string()
}

pub fn texture_table(texture: &BoardTexture) -> String {
    let missing = if texture.missing_straight_cards.is_empty() {
        "-".to_string()
    } else {
        texture
            .missing_straight_cards
            .iter()
            .map(|r| r.to_char().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    key_value_table(vec![
        ("Texture", texture.category()),
        ("Wet", yes_no(texture.wet).to_string()),
        (
            "Flush Suit",
            texture
                .flush_suit
                .map(|s| s.name().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Four Flush", yes_no(texture.four_flush).to_string()),
        ("Four Straight", yes_no(texture.four_straight).to_string()),
        ("Straight Cards", missing),
        ("Paired", yes_no(texture.is_paired).to_string()),
        ("High Card", texture.high_card.name().to_string()),
    ])
    .to_string()
}

pub fn draws_table(draws: &DrawInfo, street: Street) -> String {
    let pct = accurate_odds(draws.outs, street);
    key_value_table(vec![
        ("Draws", draws.description.clone()),
        ("Outs", draws.outs.to_string()),
        (
            "To Hit",
            format!("{}% from the {} ({} against)", pct, street, odds_against(pct)),
        ),
    ])
    .to_string()
}

pub fn print_recommendation(rec: &Recommendation) {
    println!(
        "\n  {}  {} confidence",
        styled_action(rec.action),
        styled_confidence(rec.confidence)
    );
    println!("  {}", rec.hand_description.bold());
    println!("  {}", rec.reasoning);
    if let Some(warning) = &rec.board_warning {
        println!("  {} {}", "Warning:".red().bold(), warning);
    }
    if let Some(draw) = &rec.draw_info {
        println!("  {} {}", "Draw:".cyan().bold(), draw);
    }
    if let Some(odds) = &rec.outs_odds {
        println!("  {} {}", "Odds:".cyan().bold(), odds);
    }
    if let Some(narrative) = &rec.narrative {
        println!("  {} {}", "Coach:".magenta().bold(), narrative.italic());
    }
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
