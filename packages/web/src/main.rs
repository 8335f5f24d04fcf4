use dioxus::prelude::*;

use ui::{AuthProvider, Navbar};
use views::{DisplayJobs, GitHubCallback, Hire, Login, Logout, MyJobs};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavShell)]
        #[route("/")]
        Root {},
        #[route("/display-jobs")]
        DisplayJobs {},
        #[route("/jobs")]
        MyJobs {},
        #[route("/hire")]
        Hire {},
        #[route("/login")]
        Login {},
        #[route("/logout")]
        Logout {},
        #[route("/auth/github/callback?:code")]
        GitHubCallback { code: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn NavShell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::DisplayJobs {}, "Browse jobs" }
            Link { to: Route::MyJobs {}, "My jobs" }
            Link { to: Route::Hire {}, "Post a job" }
        }
        Outlet::<Route> {}
    }
}

/// Redirect `/` to the public listing
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::DisplayJobs {});
    rsx! {}
}
