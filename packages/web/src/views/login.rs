use dioxus::prelude::*;

use ui::{use_auth, LoginButton};

use crate::Route;

/// Login page; already-authenticated users go straight to their listings.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::MyJobs {});
        }
    });

    rsx! {
        div { class: "login-page",
            h2 { "Welcome to JobHub" }
            p { "Sign in with GitHub to post jobs and manage your listings." }
            LoginButton { class: "primary".to_string() }
        }
    }
}
