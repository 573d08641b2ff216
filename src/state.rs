use serde::Serialize;

use crate::board::{Board, P1_START, P2_START};
use crate::types::{GameResult, GameView, Outcome, Player};

/// Everything a game needs to continue or be redrawn.
///
/// Only [`crate::game::TurnController`] mutates a live game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) positions: [usize; 2],
    pub(crate) last_moves: [Option<usize>; 2],
    pub(crate) active: Player,
    pub(crate) turn_count: u32,
    pub(crate) winner: Option<Outcome>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            positions: [P1_START, P2_START],
            last_moves: [None, None],
            active: Player::One,
            turn_count: 0,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn position(&self, player: Player) -> usize {
        self.positions[player.index()]
    }

    /// The node `player` occupied before their most recent move.
    pub fn last_move(&self, player: Player) -> Option<usize> {
        self.last_moves[player.index()]
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn to_view(&self) -> GameView {
        let (p1_total, p2_total) = self.board.totals();
        let (p1_confirmed, p2_confirmed) = self.board.confirmed_counts();
        GameView {
            board: self.board.to_array().to_vec(),
            positions: [self.positions[0] as u8, self.positions[1] as u8],
            last_moves: [
                self.last_moves[0].map(|node| node as u8),
                self.last_moves[1].map(|node| node as u8),
            ],
            current_player: self.active.as_u8(),
            turn_count: self.turn_count,
            p1_total,
            p2_total,
            p1_confirmed,
            p2_confirmed,
            is_game_over: self.is_over(),
            winner: self.winner.map_or(0, Outcome::code),
            win_reason: self.winner.map(Outcome::reason),
        }
    }

    pub fn to_result(&self) -> GameResult {
        let (p1_total, p2_total) = self.board.totals();
        let (p1_confirmed, p2_confirmed) = self.board.confirmed_counts();
        GameResult {
            winner: self.winner.map_or(0, Outcome::code),
            reason: self.winner.map(Outcome::reason),
            p1_total,
            p2_total,
            p1_confirmed,
            p2_confirmed,
        }
    }

    #[cfg(test)]
    pub(crate) fn for_test(board: Board, p1: usize, p2: usize, active: Player) -> Self {
        Self {
            board,
            positions: [p1, p2],
            last_moves: [None, None],
            active,
            turn_count: 0,
            winner: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
