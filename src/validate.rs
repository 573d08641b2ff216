use crate::error::MoveError;
use crate::grid::{self, NUM_NODES};
use crate::state::GameState;
use crate::types::{NodeState, Player};

/// Checks whether `player` may move to `target`. Never mutates `state`.
///
/// Rules run in a fixed order and the first failure is reported. Submitting
/// the node the player already stands on is a stay move: it skips the
/// adjacency rule and is instead limited by the repeat and
/// no-confirmed-territory rules.
pub fn validate(state: &GameState, player: Player, target: usize) -> Result<(), MoveError> {
    if target >= NUM_NODES {
        return Err(MoveError::OutOfRange);
    }

    let current = state.position(player);
    let is_stay = target == current;
    if !is_stay && !grid::is_adjacent(current, target) {
        return Err(MoveError::NotAdjacent);
    }

    if is_stay && state.last_move(player) == Some(target) {
        return Err(MoveError::RepeatNode);
    }

    if state.board().get(target) == Some(NodeState::Confirmed(player.opponent())) {
        return Err(MoveError::OpponentConfirmedNode);
    }

    if is_stay && state.board().confirmed(player) == 0 {
        return Err(MoveError::NoConfirmedNodesStay);
    }

    Ok(())
}

/// Every target `player` could submit right now, ascending.
pub fn legal_moves(state: &GameState, player: Player) -> Vec<usize> {
    let current = state.position(player);
    let mut moves: Vec<usize> = std::iter::once(current)
        .chain(grid::neighbors(current).iter().copied())
        .filter(|&target| validate(state, player, target).is_ok())
        .collect();
    moves.sort_unstable();
    moves
}
