use dioxus::prelude::*;

use ui::{make_session, use_api, use_auth};

use crate::Route;

/// Clears the session and returns to the public listing.
#[component]
pub fn Logout() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        auth.set(make_session(api.clone()).logout());
        nav.replace(Route::DisplayJobs {});
    });

    rsx! {}
}
