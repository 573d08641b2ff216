//! JavaScript API over [`TurnController`].

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::Rules;
use crate::error::MoveError;
use crate::game::{FirstLegalMoveSelector, TurnController};
use crate::snapshot;
use crate::types::TurnReport;

/// Reply to `submitMove` / `autoMove`. Rejections are data, not exceptions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveReply {
    accepted: bool,
    reason: Option<MoveError>,
    message: Option<String>,
    report: Option<TurnReport>,
}

impl From<Result<TurnReport, MoveError>> for MoveReply {
    fn from(result: Result<TurnReport, MoveError>) -> Self {
        match result {
            Ok(report) => Self {
                accepted: true,
                reason: None,
                message: None,
                report: Some(report),
            },
            Err(err) => Self {
                accepted: false,
                reason: Some(err),
                message: Some(err.to_string()),
                report: None,
            },
        }
    }
}

#[wasm_bindgen]
pub struct WasmGame {
    inner: TurnController,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            inner: TurnController::default(),
        }
    }

    /// Accepts a partial `{ turnLimit, majority }` object.
    #[wasm_bindgen(js_name = withRules)]
    pub fn with_rules(rules: JsValue) -> Result<WasmGame, JsError> {
        Ok(WasmGame {
            inner: TurnController::new_with_default_selector(parse_rules(rules)?),
        })
    }

    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(bytes: &[u8], rules: JsValue) -> Result<WasmGame, JsError> {
        let rules = parse_rules(rules)?;
        let state = snapshot::decode(bytes)?;
        Ok(WasmGame {
            inner: TurnController::resume(state, rules, Box::new(FirstLegalMoveSelector)),
        })
    }

    /// Negative or oversized indices are rejected as out of range.
    #[wasm_bindgen(js_name = submitMove)]
    pub fn submit_move(&mut self, node: i32) -> Result<JsValue, JsError> {
        let result = match usize::try_from(node) {
            Ok(target) => self.inner.submit_move(target),
            Err(_) => Err(MoveError::OutOfRange),
        };
        to_js(&MoveReply::from(result))
    }

    #[wasm_bindgen(js_name = autoMove)]
    pub fn auto_move(&mut self) -> Result<JsValue, JsError> {
        to_js(&MoveReply::from(self.inner.auto_move()))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_view())
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_result())
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Vec<u8> {
        self.inner
            .legal_moves()
            .into_iter()
            .map(|node| node as u8)
            .collect()
    }

    pub fn snapshot(&self) -> Vec<u8> {
        snapshot::encode(self.inner.state())
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_rules(rules: JsValue) -> Result<Rules, JsError> {
    if rules.is_undefined() || rules.is_null() {
        return Ok(Rules::default());
    }
    Ok(serde_wasm_bindgen::from_value(rules)?)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
