//! WebAssembly bindings for the keypad calculator.
//!
//! Buttons are addressed by their test identifiers, so a web page can wire
//! each element's `data-testid` straight to [`WasmCalculator::press`].

use wasm_bindgen::prelude::*;
use crate::{Calculator, Key};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly calculator wrapper.
#[wasm_bindgen]
pub struct WasmCalculator {
    calc: Calculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
        }
    }

    /// Press a button by test id (`number-5`) or label (`×`).
    /// Returns the updated display.
    #[wasm_bindgen]
    pub fn press(&mut self, id: &str) -> Result<String, JsError> {
        let key: Key = id.parse()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(self.calc.press(key.event()).to_string())
    }

    /// Current display text.
    #[wasm_bindgen]
    pub fn display(&self) -> String {
        self.calc.display().to_string()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.calc.clear();
    }

    /// Machine fields as a JSON object.
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.calc.snapshot())
            .map_err(|e| JsError::new(&format!("{}", e)))
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Test identifiers of every button, in keypad order.
#[wasm_bindgen]
pub fn key_ids() -> js_sys::Array {
    Key::ALL
        .iter()
        .map(|k| JsValue::from_str(&k.test_id()))
        .collect()
}

/// Test identifier of the display region.
#[wasm_bindgen]
pub fn display_id() -> String {
    crate::keypad::DISPLAY_TEST_ID.to_string()
}
