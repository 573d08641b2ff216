use serde::Serialize;

use crate::grid::NUM_NODES;
use crate::types::{NodeState, Player};

pub const P1_START: usize = 0;
pub const P2_START: usize = NUM_NODES - 1;

/// Ownership state of all 36 nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<NodeState>")]
pub struct Board {
    nodes: [NodeState; NUM_NODES],
}

impl Board {
    /// Creates the initial board:
    /// node 0 = P1 temp, node 35 = P2 temp, the rest neutral.
    pub fn new() -> Self {
        let mut nodes = [NodeState::Neutral; NUM_NODES];
        nodes[P1_START] = NodeState::Temp(Player::One);
        nodes[P2_START] = NodeState::Temp(Player::Two);
        Self { nodes }
    }

    pub fn from_states(nodes: [NodeState; NUM_NODES]) -> Self {
        Self { nodes }
    }

    pub fn get(&self, node: usize) -> Option<NodeState> {
        self.nodes.get(node).copied()
    }

    pub(crate) fn set(&mut self, node: usize, state: NodeState) {
        if let Some(slot) = self.nodes.get_mut(node) {
            *slot = state;
        }
    }

    pub fn states(&self) -> &[NodeState; NUM_NODES] {
        &self.nodes
    }

    /// Temp plus confirmed nodes owned by `player`.
    pub fn total(&self, player: Player) -> u8 {
        self.nodes
            .iter()
            .filter(|state| state.owner() == Some(player))
            .count() as u8
    }

    pub fn confirmed(&self, player: Player) -> u8 {
        self.nodes
            .iter()
            .filter(|&&state| state == NodeState::Confirmed(player))
            .count() as u8
    }

    /// Returns `(p1_total, p2_total)`.
    pub fn totals(&self) -> (u8, u8) {
        (self.total(Player::One), self.total(Player::Two))
    }

    /// Returns `(p1_confirmed, p2_confirmed)`.
    pub fn confirmed_counts(&self) -> (u8, u8) {
        (self.confirmed(Player::One), self.confirmed(Player::Two))
    }

    /// Converts the board to node codes, see [`NodeState::code`].
    pub fn to_array(&self) -> [u8; NUM_NODES] {
        let mut cells = [0u8; NUM_NODES];
        for (cell, state) in cells.iter_mut().zip(self.nodes.iter()) {
            *cell = state.code();
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Vec<NodeState> {
    fn from(board: Board) -> Self {
        board.nodes.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_has_two_temp_corners() {
        let board = Board::new();
        let cells = board.to_array();

        assert_eq!(cells[0], 1);
        assert_eq!(cells[35], 3);
        assert_eq!(cells.iter().filter(|&&c| c == 0).count(), 34);
        assert_eq!(board.totals(), (1, 1));
        assert_eq!(board.confirmed_counts(), (0, 0));
    }

    #[test]
    fn counts_split_temp_and_confirmed() {
        let mut board = Board::new();
        board.set(1, NodeState::Confirmed(Player::One));
        board.set(2, NodeState::Temp(Player::One));
        board.set(34, NodeState::Confirmed(Player::Two));

        assert_eq!(board.totals(), (3, 2));
        assert_eq!(board.confirmed_counts(), (1, 1));
    }

    #[test]
    fn serializes_as_flat_node_list() {
        let json = serde_json::to_value(Board::new()).unwrap();
        let nodes = json.as_array().expect("board serializes as an array");

        assert_eq!(nodes.len(), NUM_NODES);
        assert_eq!(nodes[0], serde_json::json!({ "Temp": "One" }));
        assert_eq!(nodes[1], serde_json::json!("Neutral"));
        assert_eq!(nodes[35], serde_json::json!({ "Temp": "Two" }));
    }

    #[test]
    fn out_of_range_access_is_ignored() {
        let mut board = Board::new();
        let before = board;

        board.set(36, NodeState::Confirmed(Player::One));

        assert_eq!(board, before);
        assert_eq!(board.get(36), None);
    }
}
