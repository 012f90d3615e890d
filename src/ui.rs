#![cfg(feature = "std")]

//! Terminal rendering of the board, scoreboard and round results.

use crate::board::{Board, Mark};
use crate::common::RoundOutcome;
use crate::scoreboard::Scoreboard;

/// Print the 3x3 grid. Empty cells show their 1-based number so the prompt
/// and the grid agree on addressing.
pub fn print_board(board: &Board) {
    println!();
    for row in 0..3 {
        let cell = |col: usize| {
            let index = row * 3 + col;
            match board.get(index) {
                Some(mark) => mark.as_char(),
                None => char::from(b'1' + index as u8),
            }
        };
        println!("  {} | {} | {}", cell(0), cell(1), cell(2));
        if row < 2 {
            println!(" ---+---+---");
        }
    }
    println!();
}

pub fn print_scoreboard(scores: &Scoreboard, human_mark: Mark) {
    println!(
        "  {} (YOU) {:>3}   TIES {:>3}   {} (CPU) {:>3}",
        human_mark,
        scores.player,
        scores.ties,
        human_mark.other(),
        scores.cpu
    );
}

/// Result banner after a round, including the winning line when there is one.
pub fn print_result(board: &Board, outcome: RoundOutcome, human_mark: Mark) {
    match outcome {
        RoundOutcome::Win(mark) => {
            if let Some(pattern) = board.winning_pattern(mark) {
                println!(
                    "{} takes the round on cells {}-{}-{}",
                    mark,
                    pattern[0] + 1,
                    pattern[1] + 1,
                    pattern[2] + 1
                );
            }
            if mark == human_mark {
                println!("Hurray! YOU WON");
            } else {
                println!("OH NO, YOU LOST...");
            }
        }
        RoundOutcome::Draw => println!("ROUND TIED"),
        RoundOutcome::InProgress => {}
    }
}
