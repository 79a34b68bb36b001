//! Identity Provider Binding
//!
//! The hosting page exposes `window.taskboardIdentity.signIn()`, wrapping
//! its identity provider's popup flow and resolving to
//! `{ displayName, email, uid }`.

use taskboard_core::api::GoogleIdentity;
use taskboard_core::{ClientError, ClientResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "taskboardIdentity"], js_name = signIn)]
    async fn identity_sign_in() -> Result<JsValue, JsValue>;
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "identity provider failed".to_string())
}

/// Run the provider sign-in flow and read back the identity
pub async fn google_identity() -> ClientResult<GoogleIdentity> {
    let value = identity_sign_in()
        .await
        .map_err(|err| ClientError::auth(js_error_message(&err)))?;
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| ClientError::auth(format!("unexpected identity shape: {}", err)))
}
