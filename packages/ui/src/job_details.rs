//! Full-screen overlay with the complete details of one job.

use dioxus::prelude::*;
use store::Job;

use crate::icons;
use crate::Icon;

/// Details overlay for a selected job.
///
/// Shows the spam warning banner when the AI flagged the posting, the full
/// description, a metadata grid, and the AI company summary when one exists.
/// The apply button opens the external link in a new tab.
#[component]
pub fn JobDetailsOverlay(job: Job, on_close: EventHandler<()>) -> Element {
    let apply_link = job.apply_link.clone();

    let on_apply = move |_| {
        if let Some(link) = &apply_link {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(link, "_blank");
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            tracing::info!("apply at {link}");
        }
    };

    rsx! {
        div { class: "overlay-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "job-details",
                // Keep clicks inside the panel from closing the overlay
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "overlay-close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: icons::FaXmark, width: 16, height: 16 }
                }
                if job.is_spam == Some(true) {
                    div { class: "spam-banner",
                        Icon { icon: icons::FaTriangleExclamation, width: 16, height: 16 }
                        "This posting was flagged as potentially fraudulent. Proceed with caution."
                    }
                }
                h2 { "{job.title}" }
                if let Some(company) = &job.company_name {
                    p { class: "job-details-company", "{company}" }
                }
                div { class: "job-details-meta",
                    MetaRow { label: "Location", value: Some(job.location.clone()) }
                    MetaRow { label: "Domain", value: job.domain.clone() }
                    MetaRow { label: "Employment", value: job.employment_type.clone() }
                    MetaRow { label: "Work type", value: job.work_type.clone() }
                    MetaRow { label: "Salary", value: job.salary_text().map(String::from) }
                    MetaRow { label: "Skills", value: job.skills_required.clone() }
                }
                if let Some(description) = &job.description {
                    section { class: "job-details-description",
                        h3 { "About this role" }
                        p { "{description}" }
                    }
                }
                if let Some(summary) = &job.company_summary {
                    section { class: "job-details-summary",
                        h3 { "Working at this company" }
                        p { "{summary}" }
                    }
                }
                if job.apply_link.is_some() {
                    button { class: "apply-button", onclick: on_apply, "Apply now" }
                }
            }
        }
    }
}

#[component]
fn MetaRow(label: &'static str, value: Option<String>) -> Element {
    let Some(value) = value else {
        return rsx! {};
    };
    rsx! {
        div { class: "meta-row",
            span { class: "meta-label", "{label}" }
            span { class: "meta-value", "{value}" }
        }
    }
}
