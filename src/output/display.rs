//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::game::{GameRecord, Turn};
use colored::Colorize;

/// Print one turn of narration
pub fn print_turn(number: usize, turn: &Turn, pegs: usize) {
    println!(
        "Turn {}: {} | {} {} | {} left",
        number,
        turn.guess.to_string().bright_yellow().bold(),
        feedback_pegs(turn.feedback, pegs),
        format!("({})", turn.feedback).bright_black(),
        turn.remaining
    );
}

/// Print a finished game: every turn, the final code and the move count
pub fn print_game_record(record: &GameRecord, detail: bool) {
    let pegs = record.answer().pegs();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Answer: {}", record.answer().to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in record.turns().iter().enumerate() {
        print_turn(i + 1, turn, pegs);
        if detail {
            println!("  Worst case: {} candidates", turn.worst_case);
        }
    }

    if let Some(last) = record.played().last() {
        println!("{}", last.to_string().green());
    }

    println!();
    println!(
        "{}",
        format!("✅ {} in {} moves", record.answer(), record.turn_count())
            .green()
            .bold()
    );
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    for &(feedback, size) in &result.cells {
        let bar = create_progress_bar(size as f64, result.worst_case as f64, 30);
        let label = feedback.to_string();
        println!("   {label:<18} [{}] {size:5}", bar.green());
    }

    println!(
        "\n   Worst case:  {}",
        format!("{} candidates", result.worst_case).bright_yellow()
    );
    println!(
        "   Best opening: {} ({} candidates)",
        result.best_guess, result.best_worst_case
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Mean turns:       {}",
        format!("{:.3}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    if let Some((answer, turns)) = &result.worst_answer {
        println!("   Hardest answer:   {answer} ({turns} turns)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns:2}: {bar} {count:5} ({pct:5.1}%)");
    }
}
