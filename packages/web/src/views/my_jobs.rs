use api::{AuthRetry, RetryDecision};
use dioxus::prelude::*;

use store::{sort_newest_first, visible_jobs, FilterState, Job};
use ui::{
    make_session, use_api, use_auth, FilterBar, FilterSidebar, Icon, JobCard, JobDetailsOverlay,
    LoginButton,
};

use crate::Route;

const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// Listings posted by the signed-in user, newest first, with the same filter
/// controls as the public page.
///
/// A 401 on the fetch re-runs the auth check and retries, but only within the
/// retry budget; once that is spent the user is sent back to login.
#[component]
pub fn MyJobs() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut jobs = use_signal(Vec::<Job>::new);
    let filters = use_signal(FilterState::new);
    let mut selected = use_signal(|| Option::<Job>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let state = auth();
            if state.loading {
                return;
            }
            let (Some(user), Some(mut token)) = (state.user, state.token) else {
                loading.set(false);
                return;
            };
            loading.set(true);
            let mut retry = AuthRetry::default();
            loop {
                match api.fetch_my_jobs(&user.id, &token).await {
                    Ok(fetched) => {
                        jobs.set(sort_newest_first(fetched));
                        error.set(None);
                        break;
                    }
                    Err(e) if e.is_unauthorized() => match retry.on_unauthorized() {
                        RetryDecision::Retry => {
                            let refreshed = make_session(api.clone()).check_auth().await;
                            match refreshed.token.clone() {
                                Some(fresh) => {
                                    token = fresh;
                                    auth.set(refreshed);
                                }
                                None => {
                                    auth.set(refreshed);
                                    error.set(Some(SESSION_EXPIRED.to_string()));
                                    nav.push(Route::Login {});
                                    break;
                                }
                            }
                        }
                        RetryDecision::Expired => {
                            auth.set(make_session(api.clone()).logout());
                            error.set(Some(SESSION_EXPIRED.to_string()));
                            nav.push(Route::Login {});
                            break;
                        }
                    },
                    Err(e) => {
                        error.set(Some(format!("Could not load your jobs: {e}")));
                        break;
                    }
                }
            }
            loading.set(false);
        }
    });

    let state = auth();
    if !state.loading && state.user.is_none() {
        return rsx! {
            div { class: "jobs-page",
                div { class: "login-prompt",
                    h2 { "Sign in to see your listings" }
                    LoginButton { class: "primary".to_string() }
                }
            }
        };
    }

    let mine = jobs();
    let visible: Vec<Job> = visible_jobs(&mine, &filters())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "jobs-page",
            h2 { "My listings" }
            FilterBar { filters }
            div { class: "jobs-layout",
                FilterSidebar { filters }
                main { class: "jobs-main",
                    if loading() {
                        p { class: "jobs-status", "Loading your jobs..." }
                    } else if let Some(message) = error() {
                        p { class: "jobs-error", "{message}" }
                    } else if visible.is_empty() {
                        p { class: "jobs-status", "No listings to show." }
                    } else {
                        div { class: "jobs-grid",
                            for job in visible {
                                JobCard {
                                    key: "{job.id}",
                                    job: job.clone(),
                                    on_select: move |picked| selected.set(Some(picked)),
                                }
                            }
                        }
                    }
                }
            }
            Link { class: "hire-fab", to: Route::Hire {},
                Icon { icon: ui::icons::FaPlus, width: 14, height: 14 }
                "Post a job"
            }
            if let Some(job) = selected() {
                JobDetailsOverlay { job, on_close: move |_| selected.set(None) }
            }
        }
    }
}
