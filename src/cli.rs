use std::ffi::OsString;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::advisor::Advisor;
use crate::board::analyze_board_texture;
use crate::cards::{parse_board, parse_hole, GameStage, Position};
use crate::display::{
    board_display, draws_table, evaluation_table, print_error, print_recommendation,
    print_section, styled_action, texture_table,
};
use crate::draws::detect_draws;
use crate::equity::{accurate_odds, odds_against, rule_of_four_and_two, Street};
use crate::error::AdvisorResult;
use crate::hand_evaluator::evaluate_hand;
use crate::preflop::{preflop_recommendation, tier_confidence};

#[derive(Parser)]
#[command(
    name = "advise",
    version = "1.0.0",
    about = "Texas Hold'em decision advisor: hand strength, board texture, draws and a recommended action."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PositionArg {
    Early,
    Middle,
    Late,
    Blinds,
}

impl From<PositionArg> for Position {
    fn from(arg: PositionArg) -> Position {
        match arg {
            PositionArg::Early => Position::Early,
            PositionArg::Middle => Position::Middle,
            PositionArg::Late => Position::Late,
            PositionArg::Blinds => Position::Blinds,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StageArg {
    Preflop,
    Flop,
    Turn,
    River,
}

impl From<StageArg> for GameStage {
    fn from(arg: StageArg) -> GameStage {
        match arg {
            StageArg::Preflop => GameStage::Preflop,
            StageArg::Flop => GameStage::Flop,
            StageArg::Turn => GameStage::Turn,
            StageArg::River => GameStage::River,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StreetArg {
    Flop,
    Turn,
    River,
}

impl From<StreetArg> for Street {
    fn from(arg: StreetArg) -> Street {
        match arg {
            StreetArg::Flop => Street::Flop,
            StreetArg::Turn => Street::Turn,
            StreetArg::River => Street::River,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend an action for the current street
    Analyze {
        /// Hole cards, e.g. AsKd
        hole: String,
        /// Community cards, e.g. Ks7d2c
        #[arg(short, long, default_value = "")]
        board: String,
        #[arg(short, long, value_enum, default_value = "middle")]
        position: PositionArg,
        /// Override the stage derived from the board size
        #[arg(short, long, value_enum)]
        stage: Option<StageArg>,
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the best hand and its strength score
    Evaluate {
        hole: String,
        #[arg(short, long, default_value = "")]
        board: String,
        #[arg(long)]
        json: bool,
    },
    /// Analyze the texture of the community cards
    Board {
        cards: String,
        #[arg(long)]
        json: bool,
    },
    /// Detect flush and straight draws
    Draws {
        hole: String,
        #[arg(short, long)]
        board: String,
        #[arg(long)]
        json: bool,
    },
    /// Chance to hit a number of outs
    Odds {
        outs: u8,
        #[arg(short, long, value_enum, default_value = "flop")]
        street: StreetArg,
    },
    /// Pre-flop tier and action for a starting hand
    Preflop {
        hand: String,
        #[arg(short, long, value_enum, default_value = "middle")]
        position: PositionArg,
        #[arg(long)]
        json: bool,
    },
}

pub fn run() {
    if let Err(e) = execute(Cli::parse()) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Parses `args` (program name first) and runs the command, returning its
/// error instead of exiting.
pub fn run_with_args<I, T>(args: I) -> AdvisorResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    execute(Cli::parse_from(args))
}

fn execute(cli: Cli) -> AdvisorResult<()> {
    match cli.command {
        Commands::Analyze {
            hole,
            board,
            position,
            stage,
            json,
        } => cmd_analyze(&hole, &board, position.into(), stage.map(Into::into), json),
        Commands::Evaluate { hole, board, json } => cmd_evaluate(&hole, &board, json),
        Commands::Board { cards, json } => cmd_board(&cards, json),
        Commands::Draws { hole, board, json } => cmd_draws(&hole, &board, json),
        Commands::Odds { outs, street } => {
            cmd_odds(outs, street.into());
            Ok(())
        }
        Commands::Preflop {
            hand,
            position,
            json,
        } => cmd_preflop(&hand, position.into(), json),
    }
}

fn print_json<T: Serialize>(value: &T) -> AdvisorResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_analyze(
    hole: &str,
    board: &str,
    position: Position,
    stage: Option<GameStage>,
    json: bool,
) -> AdvisorResult<()> {
    let hole = parse_hole(hole)?;
    let community = parse_board(board)?;
    let analysis = Advisor::new().analyze_at(&hole, &community, stage, position)?;

    if json {
        return print_json(&analysis);
    }

    println!();
    println!("  Hole:  {}", board_display(&analysis.hole));
    println!("  Board: {}", board_display(&analysis.community));
    println!(
        "  {} | {} position",
        analysis.stage.as_str().to_uppercase().bold(),
        analysis.position.label()
    );
    print_section("Hand", &evaluation_table(&analysis.evaluation));
    if !analysis.community.is_empty() {
        print_section("Board", &texture_table(&analysis.texture));
    }
    print_section("Recommendation", "");
    print_recommendation(&analysis.recommendation);
    println!();
    Ok(())
}

fn cmd_evaluate(hole: &str, board: &str, json: bool) -> AdvisorResult<()> {
    let hole = parse_hole(hole)?;
    let community = parse_board(board)?;
    let evaluation = evaluate_hand(&hole, &community)?;

    if json {
        return print_json(&evaluation);
    }

    println!();
    println!("  {} | {}", board_display(&hole), board_display(&community));
    println!("{}", evaluation_table(&evaluation));
    Ok(())
}

fn cmd_board(cards: &str, json: bool) -> AdvisorResult<()> {
    let community = parse_board(cards)?;
    GameStage::from_community_count(community.len())?;
    let texture = analyze_board_texture(&community);

    if json {
        return print_json(&texture);
    }

    println!();
    println!("  Board: {}", board_display(&community));
    println!("{}", texture_table(&texture));
    Ok(())
}

fn cmd_draws(hole: &str, board: &str, json: bool) -> AdvisorResult<()> {
    let hole = parse_hole(hole)?;
    let community = parse_board(board)?;
    let stage = GameStage::from_community_count(community.len())?;
    let draws = detect_draws(&hole, &community);

    if json {
        return print_json(&draws);
    }

    let street = Street::from_stage(stage).unwrap_or(Street::Flop);
    println!();
    println!("  {} | {}", board_display(&hole), board_display(&community));
    println!("{}", draws_table(&draws, street));
    Ok(())
}

fn cmd_odds(outs: u8, street: Street) {
    let pct = accurate_odds(outs, street);
    println!();
    println!("  {} outs from the {}", outs.to_string().bold(), street);
    println!("  Table:        {}% ({} against)", pct, odds_against(pct));
    println!("  Rule of 4/2:  {}%", rule_of_four_and_two(outs, street));
    if street == Street::River {
        println!("  {}", "No cards to come on the river; read as the turn.".dimmed());
    }
}

fn cmd_preflop(hand: &str, position: Position, json: bool) -> AdvisorResult<()> {
    let hole = parse_hole(hand)?;
    let advice = preflop_recommendation(&hole, position);

    if json {
        return print_json(&advice);
    }

    println!();
    println!(
        "  {}  {} ({})",
        board_display(&hole),
        advice.notation.bold(),
        advice.hand_description
    );
    println!(
        "  Tier {} | {} position: {}",
        advice.tier,
        position.label(),
        position.description()
    );
    println!(
        "\n  {}  {} confidence",
        styled_action(advice.action),
        tier_confidence(advice.tier)
    );
    println!("  {}", advice.reasoning);
    Ok(())
}
