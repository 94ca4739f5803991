//! WebAssembly bindings for rollodds
//!
//! JavaScript-friendly wrappers so the browser calculator can call the
//! engine directly.

use crate::engine::{
    compute_distribution as rust_compute, gold_required_for_expected_value as rust_gold,
    OddsEngine, RollQuery,
};
use crate::markov::StateVector;
use crate::search::GoldSearch;
use crate::tables::PoolVariant;
use wasm_bindgen::prelude::*;

fn to_js_array(values: &StateVector) -> js_sys::Array {
    values.iter().map(|&v| JsValue::from_f64(v)).collect()
}

fn search_to_js(result: GoldSearch) -> JsValue {
    match result {
        GoldSearch::Found(gold) => JsValue::from_f64(f64::from(gold)),
        GoldSearch::LimitReached => JsValue::from_str(&result.to_string()),
    }
}

fn set_field(obj: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(obj, &JsValue::from_str(key), value)?;
    Ok(())
}

/// Copy distribution after rolling `gold`
///
/// # Returns
/// `{ exact: number[], cumulative: number[], cumulativeRounded: number[], expectedValue: number }`
#[wasm_bindgen(js_name = computeDistribution)]
pub fn compute_distribution(
    tier: u8,
    level: u8,
    owned_copies: u32,
    owned_same_tier: u32,
    gold: u32,
    set: u32,
) -> Result<js_sys::Object, JsValue> {
    let dist = rust_compute(tier, level, owned_copies, owned_same_tier, gold, set)
        .map_err(|e| JsValue::from_str(&format!("Calculation failed: {}", e)))?;

    let obj = js_sys::Object::new();
    set_field(&obj, "exact", &to_js_array(&dist.exact))?;
    set_field(&obj, "cumulative", &to_js_array(&dist.cumulative))?;
    set_field(
        &obj,
        "cumulativeRounded",
        &to_js_array(&dist.cumulative_rounded()),
    )?;
    set_field(
        &obj,
        "expectedValue",
        &JsValue::from_f64(dist.expected_value),
    )?;
    Ok(obj)
}

/// Smallest gold reaching `target` expected copies
///
/// # Returns
/// The gold amount, or the string "Gold limit reached"
#[wasm_bindgen(js_name = goldRequiredForExpectedValue)]
pub fn gold_required_for_expected_value(
    target: f64,
    tier: u8,
    level: u8,
    owned_copies: u32,
    owned_same_tier: u32,
    set: u32,
) -> Result<JsValue, JsValue> {
    rust_gold(target, tier, level, owned_copies, owned_same_tier, set)
        .map(search_to_js)
        .map_err(|e| JsValue::from_str(&format!("Search failed: {}", e)))
}

/// Gold required for an expected 1..=9 copies, one entry per target
#[wasm_bindgen(js_name = goldTable)]
pub fn gold_table(
    tier: u8,
    level: u8,
    owned_copies: u32,
    owned_same_tier: u32,
    set: u32,
) -> Result<js_sys::Array, JsValue> {
    let variant =
        PoolVariant::from_set(set).map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    let query = RollQuery::new(tier, level, owned_copies, owned_same_tier)
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    let table = OddsEngine::for_variant(variant)
        .gold_table(&query)
        .map_err(|e| JsValue::from_str(&format!("Search failed: {}", e)))?;
    Ok(table.iter().map(|&entry| search_to_js(entry)).collect())
}
