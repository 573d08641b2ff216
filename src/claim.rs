use crate::state::GameState;
use crate::types::{Claim, ClaimKind, NodeState, Player};

/// Claims `target` for `player` and moves them onto it.
///
/// Caller contract: `validate(state, player, target)` succeeded.
pub fn resolve(state: &mut GameState, player: Player, target: usize) -> Claim {
    let before = state.board.get(target).unwrap_or_default();
    let (after, kind) = transition(before, player);
    state.board.set(target, after);

    let slot = player.index();
    state.last_moves[slot] = Some(state.positions[slot]);
    state.positions[slot] = target;

    Claim {
        node: target as u8,
        before,
        after,
        kind,
    }
}

fn transition(before: NodeState, player: Player) -> (NodeState, ClaimKind) {
    match before {
        NodeState::Neutral => (NodeState::Temp(player), ClaimKind::Claimed),
        NodeState::Temp(owner) if owner == player => {
            (NodeState::Confirmed(player), ClaimKind::Confirmed)
        }
        NodeState::Temp(_) => (NodeState::Confirmed(player), ClaimKind::Stolen),
        // Opponent-confirmed targets are rejected before resolution.
        NodeState::Confirmed(_) => (before, ClaimKind::Unchanged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn neutral_becomes_temp() {
        let mut state = GameState::new();

        let claim = resolve(&mut state, Player::One, 1);

        assert_eq!(claim.kind, ClaimKind::Claimed);
        assert_eq!(state.board().get(1), Some(NodeState::Temp(Player::One)));
        assert_eq!(state.position(Player::One), 1);
        assert_eq!(state.last_move(Player::One), Some(0));
    }

    #[test]
    fn own_temp_is_confirmed_on_revisit() {
        let mut state = GameState::new();
        resolve(&mut state, Player::One, 1);

        let claim = resolve(&mut state, Player::One, 0);

        assert_eq!(claim.kind, ClaimKind::Confirmed);
        assert_eq!(claim.before, NodeState::Temp(Player::One));
        assert_eq!(state.board().get(0), Some(NodeState::Confirmed(Player::One)));
        assert_eq!(state.last_move(Player::One), Some(1));
    }

    #[test]
    fn opponent_temp_is_stolen_and_confirmed() {
        let mut board = Board::new();
        board.set(7, NodeState::Temp(Player::Two));
        let mut state = GameState::for_test(board, 1, 35, Player::One);

        let claim = resolve(&mut state, Player::One, 7);

        assert_eq!(claim.kind, ClaimKind::Stolen);
        assert_eq!(state.board().get(7), Some(NodeState::Confirmed(Player::One)));
        assert_eq!(state.board().total(Player::Two), 1);
    }

    #[test]
    fn own_confirmed_is_left_unchanged() {
        let mut board = Board::new();
        board.set(1, NodeState::Confirmed(Player::Two));
        let mut state = GameState::for_test(board, 0, 2, Player::Two);

        let claim = resolve(&mut state, Player::Two, 1);

        assert_eq!(claim.kind, ClaimKind::Unchanged);
        assert_eq!(state.board().get(1), Some(NodeState::Confirmed(Player::Two)));
        assert_eq!(state.position(Player::Two), 1);
        assert_eq!(state.last_move(Player::Two), Some(2));
    }
}
