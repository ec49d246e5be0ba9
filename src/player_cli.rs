#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{Game, GameStatus};

/// Parse a move entered as two whitespace-separated integers, "row col".
///
/// Returns `None` for the wrong token count or non-integer tokens
/// (negative coordinates included; they never reach the board).
pub fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut tokens = input.split_whitespace();
    let row = tokens.next()?.parse().ok()?;
    let col = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Interactive two-player loop on stdin: prompt, parse, apply, reprint.
///
/// Malformed input and illegal moves get distinct messages and a
/// re-prompt; the board is reprinted after every attempt. The acting
/// player alternates only after a successful move. EOF quits gracefully.
pub fn run_cli(mut game: Game) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();
    std::println!("{}", game.board());
    loop {
        std::print!("Enter move for {}.\nrow col: ", game.current_player());
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            std::println!("\nQuitting...");
            return Ok(());
        }
        match parse_move(&input) {
            None => std::println!("Invalid input!"),
            Some((row, col)) => {
                let mover = game.current_player();
                match game.play(row, col) {
                    Err(err) => {
                        log::debug!("rejected move by {} at ({}, {}): {}", mover, row, col, err);
                        std::println!("Illegal move!");
                    }
                    Ok(_) => {
                        log::info!("{} played ({}, {})", mover, row, col);
                    }
                }
            }
        }
        std::println!("{}", game.board());
        match game.status() {
            GameStatus::Won(player) => {
                std::println!("The winner is {}!", player);
                return Ok(());
            }
            GameStatus::Drawn => {
                std::println!("Draw: the board is full.");
                return Ok(());
            }
            GameStatus::InProgress => {}
        }
    }
}
