use dioxus::prelude::*;

use store::now_millis;
use ui::{make_session, use_api, use_auth};

use crate::Route;

/// Landing page for the GitHub OAuth redirect.
///
/// Exchanges the code for a token and profile, runs the session login (which
/// persists and re-verifies the pair), then moves on. Any failure falls back
/// to the public listing with a clean logged-out state.
#[component]
pub fn GitHubCallback(code: String) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let nav = use_navigator();

    let _exchange = use_resource(move || {
        let api = api.clone();
        let code = code.clone();
        async move {
            let session = make_session(api.clone());
            let outcome = match api.github_callback(&code).await {
                Ok((token, user)) => session.login(user, token, now_millis()).await,
                Err(e) => Err(e.to_string()),
            };
            match outcome {
                Ok(state) => {
                    auth.set(state);
                    nav.replace(Route::MyJobs {});
                }
                Err(e) => {
                    tracing::error!("GitHub login failed: {e}");
                    auth.set(session.logout());
                    nav.replace(Route::DisplayJobs {});
                }
            }
        }
    });

    rsx! {
        div { class: "login-page",
            p { "Signing you in..." }
        }
    }
}
