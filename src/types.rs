use serde::Serialize;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Converts `1` or `2`; anything else is `None`.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Ownership of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum NodeState {
    #[default]
    Neutral,
    /// Claimed, but the opponent can still steal it.
    Temp(Player),
    /// Permanent and impassable to the opponent.
    Confirmed(Player),
}

impl NodeState {
    /// Display/snapshot code:
    /// 0=neutral, 1=P1 temp, 2=P1 confirmed, 3=P2 temp, 4=P2 confirmed.
    pub fn code(self) -> u8 {
        match self {
            NodeState::Neutral => 0,
            NodeState::Temp(Player::One) => 1,
            NodeState::Confirmed(Player::One) => 2,
            NodeState::Temp(Player::Two) => 3,
            NodeState::Confirmed(Player::Two) => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(NodeState::Neutral),
            1 => Some(NodeState::Temp(Player::One)),
            2 => Some(NodeState::Confirmed(Player::One)),
            3 => Some(NodeState::Temp(Player::Two)),
            4 => Some(NodeState::Confirmed(Player::Two)),
            _ => None,
        }
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            NodeState::Neutral => None,
            NodeState::Temp(player) | NodeState::Confirmed(player) => Some(player),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WinReason {
    Isolation,
    Majority,
    TurnLimit,
}

impl WinReason {
    pub fn code(self) -> u8 {
        match self {
            WinReason::Isolation => 1,
            WinReason::Majority => 2,
            WinReason::TurnLimit => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(WinReason::Isolation),
            2 => Some(WinReason::Majority),
            3 => Some(WinReason::TurnLimit),
            _ => None,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Won { player: Player, reason: WinReason },
    /// Only reachable through the turn limit.
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(player),
            Outcome::Draw => None,
        }
    }

    /// 1 or 2 for a winner, 3 for a draw.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Won { player, .. } => player.as_u8(),
            Outcome::Draw => 3,
        }
    }

    pub fn reason(self) -> WinReason {
        match self {
            Outcome::Won { reason, .. } => reason,
            Outcome::Draw => WinReason::TurnLimit,
        }
    }
}

/// What a successful move did to its target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClaimKind {
    /// Neutral node taken as temp.
    Claimed,
    /// Own temp node revisited.
    Confirmed,
    /// Opponent's temp node taken and confirmed.
    Stolen,
    /// Own confirmed node revisited.
    Unchanged,
}

/// Record of one node transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Claim {
    pub node: u8,
    pub before: NodeState,
    pub after: NodeState,
    pub kind: ClaimKind,
}

/// Returned for every accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub player: u8,
    pub from: u8,
    pub to: u8,
    pub claim: Claim,
    /// Set when this move ended the game.
    pub outcome: Option<Outcome>,
    /// Player to move next; equals `player` once the game is over.
    pub next_player: u8,
    pub turn_count: u32,
}

/// Read-only board view for render collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// 36 node codes, see [`NodeState::code`].
    pub board: Vec<u8>,
    pub positions: [u8; 2],
    pub last_moves: [Option<u8>; 2],
    pub current_player: u8,
    pub turn_count: u32,
    pub p1_total: u8,
    pub p2_total: u8,
    pub p1_confirmed: u8,
    pub p2_confirmed: u8,
    pub is_game_over: bool,
    /// 0 while in progress, 1 or 2 for a winner, 3 for a draw.
    pub winner: u8,
    pub win_reason: Option<WinReason>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: u8,
    pub reason: Option<WinReason>,
    pub p1_total: u8,
    pub p2_total: u8,
    pub p1_confirmed: u8,
    pub p2_confirmed: u8,
}
