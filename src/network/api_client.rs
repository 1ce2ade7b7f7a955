use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::DeleteOutcome;

// Client for the chat deletion endpoints. Both endpoints share one wire
// shape, so each call resolves to a `DeleteOutcome` rather than raw JSON and
// callers never inspect response bodies themselves.
pub struct ApiClient;

impl ApiClient {
    /// Delete a single thread. Never rejects: transport failures become
    /// `DeleteOutcome::TransportError`.
    pub async fn delete_thread(thread_id: &str) -> DeleteOutcome {
        Self::post_delete(&super::delete_thread_url(thread_id)).await
    }

    /// Delete every thread for the current session, server-side scoped.
    pub async fn clear_chats() -> DeleteOutcome {
        Self::post_delete(&super::clear_chats_url()).await
    }

    async fn post_delete(url: &str) -> DeleteOutcome {
        match Self::post_form(url).await {
            Ok(body) => DeleteOutcome::from_body(&body),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Delete request to {} failed: {:?}", url, e).into(),
                );
                DeleteOutcome::TransportError
            }
        }
    }

    // POST the CSRF token form-encoded and hand back the 2xx body text.
    // Non-2xx statuses land in the error branch like a dropped connection
    // would; the caller treats both as transport failures.
    async fn post_form(url: &str) -> Result<String, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");

        let headers = Headers::new()?;
        headers.append("Content-Type", "application/x-www-form-urlencoded")?;
        headers.append("X-Requested-With", "XMLHttpRequest")?;
        opts.set_headers(&headers);

        let token: String = js_sys::encode_uri_component(&super::csrf_token()).into();
        let body = format!("csrfmiddlewaretoken={}", token);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!(
                "request failed: {} {}",
                resp.status(),
                resp.status_text()
            )));
        }

        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}
