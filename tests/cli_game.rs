use ttt_solver::cli::{run_game, solve, PlayConfig};
use ttt_solver::{Board, Player};

fn play(human: Player, script: &str) -> (anyhow::Result<Board>, String) {
    let mut output = Vec::new();
    let result = run_game(&PlayConfig { human }, script.as_bytes(), &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn engine_punishes_weak_play_as_o() {
    let (result, output) = play(Player::X, "abc\n0 0\n1 1\n0 1\n9 9\n1 0\n");
    let board = result.unwrap();

    assert_eq!(board, "XXO/XO./O..".parse::<Board>().unwrap());
    assert_eq!(board.winner(), Some(Player::O));
    assert!(output.contains("Could not read 'abc'"));
    assert!(output.contains("Cell (1, 1) is already taken"));
    assert!(output.contains("outside the 3x3 board"));
    assert!(output.contains("Computer (O) plays (2, 0)"));
    assert!(output.trim_end().ends_with("Game over: O wins"));
}

#[test]
fn engine_opens_as_x() {
    let (result, output) = play(Player::O, "0 1\n0 2\n1 2\n");
    let board = result.unwrap();

    assert_eq!(board.winner(), Some(Player::X));
    assert!(output.contains("Computer (X) plays (0, 0)"));
    assert!(output.trim_end().ends_with("Game over: X wins"));
}

#[test]
fn closed_input_aborts_the_game() {
    let (result, _) = play(Player::X, "");
    assert!(result.unwrap_err().to_string().contains("input closed"));
}

#[test]
fn solve_reports_best_move_and_scores() {
    let mut output = Vec::new();
    solve(&"XX./OO./...".parse().unwrap(), true, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("X to move, best move: (0, 2)"));
    assert!(output.contains("  .   .   1\n  .   .   0\n -1  -1  -1\n"));
}

#[test]
fn solve_reports_finished_game() {
    let mut output = Vec::new();
    solve(&"XOX/XOO/OXX".parse().unwrap(), false, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Game over: tie"));
    assert!(!output.contains("best move"));
}
