//! Display functions for command results

use super::formatters::{colored_keyboard, colored_tiles, create_progress_bar, round_end_message};
use crate::core::GuessResult;
use crate::game::{KeyboardState, RoundState, RoundStatus, Statistics};
use colored::Colorize;

/// Print one scored guess as tiles and emoji
pub fn print_guess_result(turn: usize, result: &GuessResult) {
    println!(
        "  {} {}  {}",
        format!("{turn}.").bright_black(),
        colored_tiles(result),
        result.to_emoji()
    );
}

/// Print the outcome of `score`: a single guess evaluated against a target
pub fn print_score_result(result: &GuessResult, target: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Scoring {} against {}",
        result.guess().text().bright_yellow().bold(),
        target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}  {}\n", colored_tiles(result), result.to_emoji());

    for (letter, verdict) in result.iter() {
        println!("  {}: {verdict}", char::from(letter));
    }
    println!();
}

/// Print the keyboard with best-known letter colors
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in colored_keyboard(keyboard).iter().enumerate() {
        println!("  {}{row}", " ".repeat(indent * 2));
    }
}

/// Print the end-of-round banner
pub fn print_round_end(round: &RoundState) {
    let Some((headline, detail)) = round_end_message(round) else {
        return;
    };

    println!("\n{}", "═".repeat(40).bright_cyan());
    if round.status() == RoundStatus::Won {
        println!("  {}", headline.bright_green().bold());
    } else {
        println!("  {}", headline.bright_red().bold());
    }
    println!("  {detail}");

    println!("\n  Guess history:");
    for (i, result) in round.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            result.guess().text().bright_white().bold(),
            result.to_emoji()
        );
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:         {}", stats.games_played);
    println!("   Win rate:       {:.0}%", stats.win_rate());
    println!(
        "   Streak:         {} (max {})",
        stats.current_streak, stats.max_streak
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}
