//! Cookie-backed TokenStore for the browser.
//!
//! The bearer token lives in the `auth_token` cookie (path `/`, max-age 24 h,
//! SameSite Lax, `secure` in release builds); the advisory `lastAuthCheck`
//! timestamp lives in local storage. Both are best-effort: a missing window or
//! a storage error degrades to "no token", never to a panic.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

use crate::session::{TokenStore, AUTH_TOKEN_COOKIE, LAST_AUTH_CHECK_KEY, TOKEN_MAX_AGE_SECS};

/// Browser cookie jar + local storage.
#[derive(Clone, Debug, Default)]
pub struct CookieTokenStore;

impl CookieTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn html_document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        let cookies = Self::html_document()?.cookie().ok()?;
        let prefix = format!("{AUTH_TOKEN_COOKIE}=");
        cookies.split(';').find_map(|part| {
            part.trim()
                .strip_prefix(prefix.as_str())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
    }

    fn set(&self, token: &str) {
        let secure = if cfg!(debug_assertions) { "" } else { "; secure" };
        let cookie = format!(
            "{AUTH_TOKEN_COOKIE}={token}; path=/; max-age={TOKEN_MAX_AGE_SECS}; samesite=lax{secure}"
        );
        if let Some(doc) = Self::html_document() {
            let _ = doc.set_cookie(&cookie);
        }
    }

    fn remove(&self) {
        if let Some(doc) = Self::html_document() {
            let _ = doc.set_cookie(&format!("{AUTH_TOKEN_COOKIE}=; path=/; max-age=0"));
        }
    }

    fn set_last_check(&self, millis: f64) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(LAST_AUTH_CHECK_KEY, &millis.to_string());
        }
    }

    fn clear_last_check(&self) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(LAST_AUTH_CHECK_KEY);
        }
    }
}
