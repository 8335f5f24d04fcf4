//! Top navigation bar shared by every page.

use dioxus::prelude::*;

use crate::auth::{use_auth, LoginButton, LogoutButton};
use crate::icons;
use crate::Icon;

/// Navigation shell: brand, the routing links passed in as children, and the
/// login/logout corner driven by the auth state.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-brand",
                Icon { icon: icons::FaBriefcase, width: 18, height: 18 }
                span { "JobHub" }
            }
            div { class: "navbar-links", {children} }
            div { class: "navbar-auth",
                if auth().loading {
                    span { class: "navbar-loading", "..." }
                } else if let Some(user) = auth().user {
                    span { class: "navbar-user", "{user.display_name()}" }
                    LogoutButton { class: "navbar-button".to_string() }
                } else {
                    LoginButton { class: "navbar-button".to_string() }
                }
            }
        }
    }
}
