//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the [`Signal<AuthState>`] plus the shared [`ApiClient`]
//! and [`Enricher`], and runs the initial token check on mount. Views grab them
//! with [`use_auth`], [`use_api`] and [`use_enricher`].

use api::{ApiClient, ApiConfig, Enricher, LlmClient};
use dioxus::prelude::*;
use store::{AuthState, Session, TokenStore};

/// Build a session against the platform's token store.
///
/// In the browser the token lives in the cookie jar so it survives reloads;
/// everywhere else a process-wide in-memory store stands in.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_session(api: ApiClient) -> Session<impl TokenStore, ApiClient> {
    Session::new(store::CookieTokenStore::new(), api)
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_session(api: ApiClient) -> Session<impl TokenStore, ApiClient> {
    use std::sync::OnceLock;
    static TOKENS: OnceLock<store::MemoryTokenStore> = OnceLock::new();
    Session::new(TOKENS.get_or_init(store::MemoryTokenStore::new).clone(), api)
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Get the shared draft enricher.
pub fn use_enricher() -> Enricher<LlmClient> {
    use_context::<Enricher<LlmClient>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = ApiConfig::default();
    let api = use_context_provider(|| ApiClient::new(config.clone()));
    use_context_provider(|| Enricher::new(LlmClient::new(&config)));

    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Resolve any persisted token on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let state = make_session(api).check_auth().await;
            auth_state.set(state);
        }
    });

    rsx! {
        {children}
    }
}

/// Button that starts the GitHub OAuth flow.
#[component]
pub fn LoginButton(
    #[props(default = "Login with GitHub".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let mut loading = use_signal(|| false);

    let onclick = move |_| {
        let api = api.clone();
        async move {
            loading.set(true);
            match api.github_login_url().await {
                Ok(url) => {
                    // Redirect to GitHub
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        tracing::info!("open {url} in a browser to continue");
                        loading.set(false);
                    }
                }
                Err(e) => {
                    tracing::error!("failed to get login URL: {e}");
                    loading.set(false);
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Loading..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let api = api.clone();
        async move {
            auth_state.set(make_session(api).logout());
            // Back to the public listing
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/display-jobs");
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
