use wasm_bindgen::prelude::*;

pub mod board;
pub mod claim;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod snapshot;
pub mod state;
pub mod types;
pub mod validate;
pub mod wasm;
pub mod win;

pub use config::Rules;
pub use error::{MoveError, RulesError, SnapshotError};
pub use game::{FirstLegalMoveSelector, MoveSelector, TurnController};
pub use state::GameState;
pub use types::{NodeState, Outcome, Player, WinReason};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
