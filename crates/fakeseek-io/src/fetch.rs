//! JSON helpers over the browser Fetch API.
//!
//! Every HTTP-backed adapter goes through these two functions, which
//! map transport and decode failures onto [`AdapterError`] so the
//! service layer's fallback policy applies uniformly.

use fakeseek_api::AdapterError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// GET a JSON document.
///
/// # Errors
///
/// Returns [`AdapterError::Transport`] on network or browser API
/// failure and [`AdapterError::MalformedResponse`] when the body does
/// not parse as `R` or the server answered with a non-2xx status.
pub async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, AdapterError> {
    let init = RequestInit::new();
    init.set_method("GET");
    execute::<R>(url, &init).await
}

/// POST a JSON body and parse a JSON response.
///
/// # Errors
///
/// Returns [`AdapterError::Transport`] on network or browser API
/// failure and [`AdapterError::MalformedResponse`] when the body does
/// not parse as `R` or the server answered with a non-2xx status.
pub async fn post_json<T: Serialize, R: DeserializeOwned>(
    url: &str,
    body: &T,
) -> Result<R, AdapterError> {
    let payload = serde_json::to_string(body)
        .map_err(|e| AdapterError::Transport(format!("request encode: {e}")))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&payload));

    let headers = web_sys::Headers::new().map_err(transport)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(transport)?;
    init.set_headers(&headers);

    execute::<R>(url, &init).await
}

async fn execute<R: DeserializeOwned>(url: &str, init: &RequestInit) -> Result<R, AdapterError> {
    let request = Request::new_with_str_and_init(url, init).map_err(transport)?;
    let window =
        web_sys::window().ok_or_else(|| AdapterError::Transport("no global window".into()))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| AdapterError::Transport("fetch did not yield a Response".into()))?;

    let text_promise = response.text().map_err(transport)?;
    let text = JsFuture::from(text_promise).await.map_err(transport)?;
    let text = text.as_string().unwrap_or_default();

    if !response.ok() {
        return Err(AdapterError::MalformedResponse(format!(
            "status {}: {text}",
            response.status()
        )));
    }

    serde_json::from_str(&text)
        .map_err(|e| AdapterError::MalformedResponse(format!("response decode: {e}")))
}

fn transport(value: JsValue) -> AdapterError {
    AdapterError::Transport(format!("{value:?}"))
}
