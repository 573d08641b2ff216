//! Compact binary encoding of a [`GameState`] for storage collaborators.
//!
//! ```text
//! Header (12 bytes):
//!   0..4   magic "TCGS"
//!   4..8   version, u32 LE
//!   8..12  CRC32 of the payload, u32 LE
//! Payload (47 bytes):
//!   36     node codes (see NodeState::code)
//!   2      P1 position, P2 position
//!   2      P1 last move, P2 last move (0xFF = none)
//!   1      active player (1 or 2)
//!   4      turn count, u32 LE
//!   1      winner (0 none, 1, 2, 3 draw)
//!   1      win reason (0 none, 1 isolation, 2 majority, 3 turn limit)
//! ```
//!
//! Besides the per-field checks, `decode` rejects a player standing on a
//! neutral node: every node a player has stood on stays claimed. The turn
//! count is not bounded here since rules travel separately; a count already
//! past the turn limit ends the game on the next accepted move.

use crate::board::Board;
use crate::error::SnapshotError;
use crate::grid::NUM_NODES;
use crate::state::GameState;
use crate::types::{NodeState, Outcome, Player, WinReason};

const MAGIC: &[u8; 4] = b"TCGS";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 12;
const PAYLOAD_SIZE: usize = NUM_NODES + 2 + 2 + 1 + 4 + 1 + 1;
const NO_NODE: u8 = 0xFF;

pub fn encode(state: &GameState) -> Vec<u8> {
    let mut payload = Vec::with_capacity(PAYLOAD_SIZE);
    payload.extend_from_slice(&state.board.to_array());
    payload.extend(state.positions.iter().map(|&node| node as u8));
    payload.extend(
        state
            .last_moves
            .iter()
            .map(|last| last.map_or(NO_NODE, |node| node as u8)),
    );
    payload.push(state.active.as_u8());
    payload.extend_from_slice(&state.turn_count.to_le_bytes());
    payload.push(state.winner.map_or(0, Outcome::code));
    payload.push(state.winner.map_or(0, |outcome| outcome.reason().code()));

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    out.extend_from_slice(&payload);
    out
}

pub fn decode(data: &[u8]) -> Result<GameState, SnapshotError> {
    if data.len() < HEADER_SIZE + PAYLOAD_SIZE {
        return Err(SnapshotError::TooShort {
            expected: HEADER_SIZE + PAYLOAD_SIZE,
            got: data.len(),
        });
    }

    if &data[0..4] != MAGIC {
        return Err(SnapshotError::BadMagic);
    }

    let version = read_u32_le(data, 4);
    if version != VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            expected: VERSION,
            got: version,
        });
    }

    let expected_crc = read_u32_le(data, 8);
    let payload = &data[HEADER_SIZE..];
    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(SnapshotError::CrcMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    if payload.len() != PAYLOAD_SIZE {
        return Err(SnapshotError::TrailingBytes(payload.len() - PAYLOAD_SIZE));
    }

    let mut nodes = [NodeState::Neutral; NUM_NODES];
    for (node, (slot, &code)) in nodes.iter_mut().zip(&payload[..NUM_NODES]).enumerate() {
        *slot =
            NodeState::from_code(code).ok_or(SnapshotError::InvalidNodeCode { node, code })?;
    }

    let mut offset = NUM_NODES;
    let positions = [
        read_node(payload[offset], "P1 position")?,
        read_node(payload[offset + 1], "P2 position")?,
    ];
    offset += 2;

    let last_moves = [
        read_last_move(payload[offset], "P1 last move")?,
        read_last_move(payload[offset + 1], "P2 last move")?,
    ];
    offset += 2;

    let active = Player::from_u8(payload[offset]).ok_or(SnapshotError::InvalidField {
        field: "active player",
        value: payload[offset] as u32,
    })?;
    offset += 1;

    let turn_count = read_u32_le(payload, offset);
    offset += 4;

    let winner = read_outcome(payload[offset], payload[offset + 1])?;

    for (player, &node) in [Player::One, Player::Two].into_iter().zip(&positions) {
        if nodes[node] == NodeState::Neutral {
            return Err(SnapshotError::UnclaimedPosition {
                player: player.as_u8(),
                node,
            });
        }
    }

    Ok(GameState {
        board: Board::from_states(nodes),
        positions,
        last_moves,
        active,
        turn_count,
        winner,
    })
}

/// Caller contract: `offset + 4 <= data.len()`.
fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

fn read_node(value: u8, field: &'static str) -> Result<usize, SnapshotError> {
    if (value as usize) < NUM_NODES {
        Ok(value as usize)
    } else {
        Err(SnapshotError::InvalidField {
            field,
            value: value as u32,
        })
    }
}

fn read_last_move(value: u8, field: &'static str) -> Result<Option<usize>, SnapshotError> {
    if value == NO_NODE {
        return Ok(None);
    }
    read_node(value, field).map(Some)
}

fn read_outcome(winner: u8, reason: u8) -> Result<Option<Outcome>, SnapshotError> {
    let invalid = || SnapshotError::InvalidField {
        field: "winner",
        value: (u32::from(winner) << 8) | u32::from(reason),
    };
    match (winner, reason) {
        (0, 0) => Ok(None),
        (3, 3) => Ok(Some(Outcome::Draw)),
        (1 | 2, _) => {
            let player = Player::from_u8(winner).ok_or_else(invalid)?;
            let reason = WinReason::from_code(reason).ok_or_else(invalid)?;
            Ok(Some(Outcome::Won { player, reason }))
        }
        _ => Err(invalid()),
    }
}
