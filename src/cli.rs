//! Terminal front-end: an interactive game against the engine and a one-shot solver.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::{debug, info, instrument};

use crate::board::{Action, Board, Player};
use crate::min_max::stats::{NullStats, SimpleStats};
use crate::min_max::{format_3_by_3, minimax_with_stats, score_actions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    /// The side the human plays; the engine takes the other.
    pub human: Player,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { human: Player::X }
    }
}

pub fn outcome_message(board: &Board) -> String {
    match board.winner() {
        Some(player) => format!("Game over: {player} wins"),
        None => "Game over: tie".to_string(),
    }
}

/// Plays one game on `input`/`output` and returns the final board.
#[instrument(skip(input, output))]
pub fn run_game<R: BufRead, W: Write>(config: &PlayConfig, mut input: R, mut output: W) -> Result<Board> {
    let mut board = Board::initial_state();
    writeln!(output, "You play {}.\n{board}\n", config.human)?;

    while !board.terminal() {
        let player = board.player();
        let action = if player == config.human {
            read_human_move(&board, &mut input, &mut output)?
        } else {
            let mut stats = SimpleStats::default();
            let action = minimax_with_stats(&board, &mut stats)
                .context("engine found no move on an unfinished board")?;
            debug!(states = stats.states_visited, terminals = stats.terminal_count, "engine search");
            writeln!(output, "Computer ({player}) plays {action}")?;
            action
        };
        board = board.result(action)?;
        writeln!(output, "{board}\n")?;
    }

    let message = outcome_message(&board);
    info!(result = %message, "game finished");
    writeln!(output, "{message}")?;
    Ok(board)
}

fn read_human_move<R: BufRead, W: Write>(board: &Board, input: &mut R, output: &mut W) -> Result<Action> {
    let legal = board.actions();
    loop {
        write!(output, "Your move ({}), enter row and column: ", board.player())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read move")? == 0 {
            bail!("input closed before the game finished");
        }

        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };
        if !legal.contains(&action) {
            writeln!(output, "Cell {action} is already taken")?;
            continue;
        }
        return Ok(action);
    }
}

fn parse_action(line: &str) -> std::result::Result<Action, String> {
    let numbers = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| format!("Could not read '{}', expected two numbers like '1 2'", line.trim()))?;
    match numbers[..] {
        [row, column] => Action::new(row, column).map_err(|e| e.to_string()),
        _ => Err(format!("Expected a row and a column, got '{}'", line.trim())),
    }
}

/// Prints the player to move and the optimal move for `board`, optionally with every move's value.
#[instrument(skip(output))]
pub fn solve<W: Write>(board: &Board, scores: bool, mut output: W) -> Result<()> {
    writeln!(output, "{board}\n")?;
    if board.terminal() {
        writeln!(output, "{}", outcome_message(board))?;
        return Ok(());
    }

    let mut stats = SimpleStats::default();
    if let Some(action) = minimax_with_stats(board, &mut stats) {
        writeln!(output, "{} to move, best move: {action}", board.player())?;
    }
    debug!(states = stats.states_visited, terminals = stats.terminal_count, "solve search");

    if scores {
        let scored = score_actions(board, &mut NullStats);
        writeln!(output, "\nMove values (X wins = 1, O wins = -1):")?;
        write!(output, "{}", format_3_by_3(&scored))?;
    }
    Ok(())
}
