//! WASM bindings for the browser scoreboard

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{get_score, get_score_named, score_match, Match, POINT_NAMES};

/// Score a game between `player1` and `player2`
///
/// Throws on negative input or a tie above Forty.
#[wasm_bindgen(js_name = getScore)]
pub fn get_score_js(score1: i32, score2: i32) -> Result<String, JsError> {
    get_score(score1.into(), score2.into())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Score a game with display names for both players
#[wasm_bindgen(js_name = getScoreNamed)]
pub fn get_score_named_js(
    name1: &str,
    score1: i32,
    name2: &str,
    score2: i32,
) -> Result<String, JsError> {
    get_score_named(name1, score1.into(), name2, score2.into())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Describe a JSON snapshot
///
/// # Arguments
/// * `snapshot_json` - `{"player1": {"name", "score"}, "player2": {"name", "score"}}`
///
/// # Returns
/// `{category, score, leader}` object
#[wasm_bindgen(js_name = describeSnapshot)]
pub fn describe_snapshot(snapshot_json: &str) -> Result<JsValue, JsError> {
    let game = Match::from_json(snapshot_json)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let report = score_match(&game)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Spoken point names, indexed by point count
#[wasm_bindgen(js_name = getPointNames)]
pub fn get_point_names() -> js_sys::Array {
    POINT_NAMES.iter().map(|name| JsValue::from_str(name)).collect()
}
