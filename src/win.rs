use std::cmp::Ordering;

use crate::config::Rules;
use crate::grid;
use crate::state::GameState;
use crate::types::{NodeState, Outcome, Player, WinReason};

/// Decides whether the move just made by the active player ended the game.
///
/// Checked in order: isolation, majority, turn limit.
pub fn evaluate(state: &GameState, rules: &Rules) -> Option<Outcome> {
    let mover = state.active_player();
    if is_isolated(state, mover.opponent()) {
        return Some(Outcome::Won {
            player: mover,
            reason: WinReason::Isolation,
        });
    }

    let board = state.board();
    let (p1_total, p2_total) = board.totals();
    if p1_total >= rules.majority() {
        return Some(won(Player::One, WinReason::Majority));
    }
    if p2_total >= rules.majority() {
        return Some(won(Player::Two, WinReason::Majority));
    }

    if state.turn_count() >= rules.turn_limit() {
        let (p1_confirmed, p2_confirmed) = board.confirmed_counts();
        let order = p1_total
            .cmp(&p2_total)
            .then_with(|| p1_confirmed.cmp(&p2_confirmed));
        return Some(match order {
            Ordering::Greater => won(Player::One, WinReason::TurnLimit),
            Ordering::Less => won(Player::Two, WinReason::TurnLimit),
            Ordering::Equal => Outcome::Draw,
        });
    }

    None
}

/// True when no on-grid neighbor of `player` is neutral or their own temp node.
///
/// Only the direct neighborhood is inspected; a stay move or a path through
/// the player's own confirmed nodes does not count as an escape.
pub fn is_isolated(state: &GameState, player: Player) -> bool {
    let position = state.position(player);
    grid::neighbors(position)
        .iter()
        .all(|&node| match state.board().get(node) {
            Some(NodeState::Neutral) => false,
            Some(NodeState::Temp(owner)) => owner != player,
            _ => true,
        })
}

fn won(player: Player, reason: WinReason) -> Outcome {
    Outcome::Won { player, reason }
}
