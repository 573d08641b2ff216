use serde::Serialize;
use thiserror::Error;

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum MoveError {
    #[error("node out of range")]
    OutOfRange,
    #[error("target is not adjacent to the current node")]
    NotAdjacent,
    #[error("cannot stay in the same node on consecutive turns")]
    RepeatNode,
    #[error("cannot move onto the opponent's confirmed node")]
    OpponentConfirmedNode,
    #[error("must move to a new node while owning no confirmed nodes")]
    NoConfirmedNodesStay,
    #[error("game is already over")]
    GameAlreadyOver,
    #[error("no legal move available")]
    NoLegalMove,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("turn limit must be at least 1")]
    ZeroTurnLimit,
    #[error("majority must be between {min} and {max} nodes, got {got}")]
    MajorityOutOfRange { min: u8, max: u8, got: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot too short: expected {expected} bytes, got {got}")]
    TooShort { expected: usize, got: usize },
    #[error("invalid snapshot magic (expected TCGS)")]
    BadMagic,
    #[error("unsupported snapshot version: expected {expected}, got {got}")]
    UnsupportedVersion { expected: u32, got: u32 },
    #[error("CRC32 mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },
    #[error("invalid node code {code} at node {node}")]
    InvalidNodeCode { node: usize, code: u8 },
    #[error("invalid {field}: {value}")]
    InvalidField { field: &'static str, value: u32 },
    #[error("player {player} stands on unclaimed node {node}")]
    UnclaimedPosition { player: u8, node: usize },
    #[error("snapshot payload has {0} trailing bytes")]
    TrailingBytes(usize),
}
