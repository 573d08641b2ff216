use tracing::{debug, info};

use crate::claim;
use crate::config::Rules;
use crate::error::MoveError;
use crate::state::GameState;
use crate::types::{GameResult, GameView, Outcome, TurnReport};
use crate::validate;
use crate::win;

/// Picks a target node for the active player, e.g. for a computer opponent.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, state: &GameState, legal: &[usize]) -> Option<usize>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, _state: &GameState, legal: &[usize]) -> Option<usize> {
        legal.first().copied()
    }
}

/// Owns one game and drives it one move at a time.
pub struct TurnController {
    state: GameState,
    rules: Rules,
    selector: Box<dyn MoveSelector>,
}

impl TurnController {
    pub fn new(rules: Rules, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            state: GameState::new(),
            rules,
            selector,
        }
    }

    pub fn new_with_default_selector(rules: Rules) -> Self {
        Self::new(rules, Box::new(FirstLegalMoveSelector))
    }

    /// Continues a game from a previously saved state.
    pub fn resume(state: GameState, rules: Rules, selector: Box<dyn MoveSelector>) -> Self {
        info!(
            turn = state.turn_count(),
            active = state.active_player().as_u8(),
            over = state.is_over(),
            "resumed game"
        );
        Self {
            state,
            rules,
            selector,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.winner()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Starts a fresh game with the same rules.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        info!("game reset");
    }

    /// Plays `target` for the active player.
    ///
    /// A rejected move leaves the state untouched and does not use up a turn.
    pub fn submit_move(&mut self, target: usize) -> Result<TurnReport, MoveError> {
        if self.state.is_over() {
            debug!(node = target, "move after game over");
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.state.active_player();
        if let Err(err) = validate::validate(&self.state, player, target) {
            debug!(player = player.as_u8(), node = target, reason = %err, "move rejected");
            return Err(err);
        }

        let from = self.state.position(player);
        let claim = claim::resolve(&mut self.state, player, target);
        debug!(
            player = player.as_u8(),
            from,
            to = target,
            kind = ?claim.kind,
            "move accepted"
        );

        let outcome = win::evaluate(&self.state, &self.rules);
        match outcome {
            Some(outcome) => {
                self.state.winner = Some(outcome);
                info!(?outcome, turn = self.state.turn_count, "game finished");
            }
            None => {
                self.state.active = player.opponent();
                self.state.turn_count += 1;
            }
        }

        Ok(TurnReport {
            player: player.as_u8(),
            from: from as u8,
            to: target as u8,
            claim,
            outcome,
            next_player: self.state.active.as_u8(),
            turn_count: self.state.turn_count,
        })
    }

    /// Lets the configured selector play for the active player.
    pub fn auto_move(&mut self) -> Result<TurnReport, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let legal = self.legal_moves();
        let selected = self
            .selector
            .select_move(&self.state, &legal)
            .ok_or(MoveError::NoLegalMove)?;
        self.submit_move(selected)
    }

    /// Targets the active player could submit now. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.state.is_over() {
            return Vec::new();
        }
        validate::legal_moves(&self.state, self.state.active_player())
    }

    pub fn to_game_view(&self) -> GameView {
        self.state.to_view()
    }

    pub fn to_game_result(&self) -> GameResult {
        self.state.to_result()
    }

    #[cfg(test)]
    fn set_state_for_test(&mut self, state: GameState) {
        self.state = state;
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new_with_default_selector(Rules::default())
    }
}
