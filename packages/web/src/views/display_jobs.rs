use dioxus::prelude::*;

use store::{visible_jobs, FilterState, Job};
use ui::{use_api, FilterBar, FilterSidebar, JobCard, JobDetailsOverlay};

/// Public listing: no authentication, filterable client-side.
#[component]
pub fn DisplayJobs() -> Element {
    let api = use_api();
    let mut jobs = use_signal(Vec::<Job>::new);
    let filters = use_signal(FilterState::new);
    let mut selected = use_signal(|| Option::<Job>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut latest_req = use_signal(|| 0u64);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            // A response from a superseded fetch must never overwrite newer data
            let req = latest_req() + 1;
            latest_req.set(req);
            loading.set(true);
            match api.fetch_public_jobs().await {
                Ok(fetched) => {
                    if latest_req() == req {
                        jobs.set(fetched);
                        error.set(None);
                        loading.set(false);
                    }
                }
                Err(e) => {
                    if latest_req() == req {
                        error.set(Some(format!("Could not load jobs: {e}")));
                        loading.set(false);
                    }
                }
            }
        }
    });

    let all = jobs();
    let visible: Vec<Job> = visible_jobs(&all, &filters())
        .into_iter()
        .cloned()
        .collect();
    let shown = visible.len();
    let total = all.len();

    rsx! {
        div { class: "jobs-page",
            FilterBar { filters }
            div { class: "jobs-layout",
                FilterSidebar { filters }
                main { class: "jobs-main",
                    if loading() {
                        p { class: "jobs-status", "Loading jobs..." }
                    } else if let Some(message) = error() {
                        p { class: "jobs-error", "{message}" }
                    } else if shown == 0 {
                        p { class: "jobs-status", "No jobs match the current filters." }
                    } else {
                        p { class: "jobs-count", "Showing {shown} of {total} jobs" }
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
            if let Some(job) = selected() {
                JobDetailsOverlay { job, on_close: move |_| selected.set(None) }
            }
        }
    }
}
