#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use territory::wasm::WasmGame;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

fn ok<T>(result: Result<T, JsError>) -> T {
    result.map_err(JsValue::from).expect("binding call must succeed")
}

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).expect("property must exist")
}

#[wasm_bindgen_test]
fn wasm_ready_reports_true() {
    assert!(territory::wasm_ready());
}

#[wasm_bindgen_test]
fn submit_move_reports_acceptance_and_rejection() {
    let mut game = WasmGame::new();

    let accepted = ok(game.submit_move(1));
    assert_eq!(get(&accepted, "accepted").as_bool(), Some(true));

    let rejected = ok(game.submit_move(-1));
    assert_eq!(get(&rejected, "accepted").as_bool(), Some(false));
    assert_eq!(get(&rejected, "reason").as_string().as_deref(), Some("OutOfRange"));

    let state = ok(game.state());
    assert_eq!(get(&state, "current_player").as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn with_rules_rejects_invalid_majority() {
    let rules = Object::new();
    Reflect::set(&rules, &JsValue::from_str("majority"), &JsValue::from(10)).unwrap();

    assert!(WasmGame::with_rules(rules.into()).is_err());
    assert!(WasmGame::with_rules(JsValue::UNDEFINED).is_ok());
}

#[wasm_bindgen_test]
fn snapshot_restores_game() {
    let mut game = WasmGame::new();
    ok(game.submit_move(6));
    let bytes = game.snapshot();

    let restored = ok(WasmGame::from_snapshot(&bytes, JsValue::NULL));

    assert_eq!(restored.legal_moves(), game.legal_moves());
    assert_eq!(restored.legal_moves(), vec![29, 34]);
}
