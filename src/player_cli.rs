#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::board::{Board, Mark};
use crate::player::Player;
use rand::rngs::SmallRng;

/// Human player reading cell numbers from stdin. Re-prompts until the input
/// names an empty cell; returns `None` only when stdin closes.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_cell(input: &str) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    if (1..=9).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}

impl Player for CliPlayer {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        own: Mark,
        _foe: Mark,
    ) -> Option<usize> {
        if board.is_full() {
            return None;
        }
        loop {
            print!("Your move ({}), cell 1-9: ", own);
            let _ = io::stdout().flush();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match parse_cell(&line) {
                Some(index) if board.get(index).is_none() => return Some(index),
                Some(_) => println!("That cell is already taken."),
                None => println!("Enter a number from 1 to 9."),
            }
        }
    }
}
