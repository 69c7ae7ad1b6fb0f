//! Exhaustive minimax over tic-tac-toe positions.
//!
//! X maximizes the utility and O minimizes it. Moves are tried in row-major
//! order and the running best is only replaced by a strictly better value, so
//! among equally good moves the first one in that order wins.

pub mod stats;

use tracing::{debug, trace};

use crate::board::{Action, Board, Player, SIZE};
use crate::min_max::stats::{NullStats, Stats};

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct ScoredMove<M> {
    pub score: i32,
    pub min_max_move: M,
}

impl<M> ScoredMove<M> {
    pub fn new(score: i32, min_max_move: M) -> ScoredMove<M> {
        ScoredMove { score, min_max_move }
    }
}

/// The optimal move for the player to move, or `None` if the game is over.
pub fn minimax(board: &Board) -> Option<Action> {
    minimax_with_stats(board, &mut NullStats)
}

pub fn minimax_with_stats<S: Stats>(board: &Board, stats: &mut S) -> Option<Action> {
    if board.terminal() {
        debug!("board is terminal, no move to make");
        return None;
    }

    let player = board.player();
    let (value, best_move) = match player {
        Player::X => max_value(board, stats),
        Player::O => min_value(board, stats),
    };
    debug!(%player, value, best_move = ?best_move, "search finished");
    best_move
}

pub fn max_value<S: Stats>(board: &Board, stats: &mut S) -> (i32, Option<Action>) {
    stats.record_state_visited();
    if board.terminal() {
        stats.record_terminal_scored();
        return (board.utility(), None);
    }

    let mut value = i32::MIN;
    let mut best_move = None;
    for action in board.empty_cells() {
        let (min_val, _) = min_value(&board.placed(action), stats);
        if min_val > value {
            value = min_val;
            best_move = Some(action);
        }
    }
    (value, best_move)
}

pub fn min_value<S: Stats>(board: &Board, stats: &mut S) -> (i32, Option<Action>) {
    stats.record_state_visited();
    if board.terminal() {
        stats.record_terminal_scored();
        return (board.utility(), None);
    }

    let mut value = i32::MAX;
    let mut best_move = None;
    for action in board.empty_cells() {
        let (max_val, _) = max_value(&board.placed(action), stats);
        if max_val < value {
            value = max_val;
            best_move = Some(action);
        }
    }
    (value, best_move)
}

/// The minimax value of `board` from X's point of view.
pub fn value<S: Stats>(board: &Board, stats: &mut S) -> i32 {
    match board.player() {
        Player::X => max_value(board, stats).0,
        Player::O => min_value(board, stats).0,
    }
}

/// Scores every legal move, in row-major order, by the value of the resulting position.
pub fn score_actions<S: Stats>(board: &Board, stats: &mut S) -> Vec<ScoredMove<Action>> {
    if board.terminal() {
        return Vec::new();
    }
    board
        .empty_cells()
        .map(|action| {
            let score = value(&board.placed(action), stats);
            trace!(%action, score, "scored move");
            ScoredMove::new(score, action)
        })
        .collect()
}

pub fn to_score_board(scored_moves: &[ScoredMove<Action>]) -> [[Option<i32>; SIZE]; SIZE] {
    let mut scores = [[None; SIZE]; SIZE];
    for m in scored_moves {
        scores[m.min_max_move.row()][m.min_max_move.column()] = Some(m.score);
    }
    scores
}

/// Renders move scores as a grid; occupied cells show as `.`.
pub fn format_3_by_3(scored_moves: &[ScoredMove<Action>]) -> String {
    let mut out = String::new();
    for row in to_score_board(scored_moves) {
        let cells = row.map(|score| score.map_or_else(|| ".".to_string(), |s| s.to_string()));
        out.push_str(&format!("{:>3} {:>3} {:>3}\n", cells[0], cells[1], cells[2]));
    }
    out
}

#[cfg(test)]
mod test {
    use std::time::Instant;

    use super::*;
    use crate::min_max::stats::SimpleStats;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn action(row: usize, column: usize) -> Action {
        Action::new(row, column).unwrap()
    }

    #[test]
    fn empty_board() {
        let start = Instant::now();
        let mut stats = SimpleStats::default();
        let best = minimax_with_stats(&Board::initial_state(), &mut stats);
        println!("search on empty board took {}ms", start.elapsed().as_millis());

        // every opening draws, so the first cell is kept
        assert_eq!(best, Some(action(0, 0)));
        assert_eq!(stats.states_visited, 549_946);
        assert_eq!(stats.terminal_count, 255_168);
    }

    #[test]
    fn every_opening_draws() {
        let scored = score_actions(&Board::initial_state(), &mut NullStats);
        assert_eq!(scored.len(), 9);
        assert!(scored.iter().all(|m| m.score == 0));
    }

    #[test]
    fn takes_immediate_win() {
        assert_eq!(minimax(&board("XX./OO./...")), Some(action(0, 2)));
        assert_eq!(minimax(&board("XX./OO./X..")), Some(action(1, 2)));
    }

    #[test]
    fn scores_follow_row_major_order() {
        let scored = score_actions(&board("XX./OO./..."), &mut NullStats);
        let scores: Vec<_> = scored.iter().map(|m| (m.min_max_move.index(), m.score)).collect();
        assert_eq!(scores, vec![(2, 1), (5, 0), (6, -1), (7, -1), (8, -1)]);
    }

    #[test]
    fn first_of_equal_moves_is_kept() {
        // (1, 0) and (2, 0) both force a win for X
        let b = board("XO./.X./..O");
        assert_eq!(max_value(&b, &mut NullStats), (1, Some(action(1, 0))));
    }

    #[test]
    fn terminal_boards() {
        assert_eq!(minimax(&board("XXX/OO./...")), None);
        assert_eq!(minimax(&board("XOX/XOO/OXX")), None);
        assert_eq!(max_value(&board("XOX/XOO/OXX"), &mut NullStats), (0, None));
        assert_eq!(min_value(&board("XXX/OO./..."), &mut NullStats), (1, None));
        assert!(score_actions(&board("XXX/OO./..."), &mut NullStats).is_empty());
    }

    #[test]
    fn score_grid() {
        let scored = score_actions(&board("XX./OO./..."), &mut NullStats);
        assert_eq!(format_3_by_3(&scored), "  .   .   1\n  .   .   0\n -1  -1  -1\n");
    }
}
