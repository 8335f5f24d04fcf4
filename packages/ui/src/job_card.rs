//! Card summary of a single job listing.

use dioxus::prelude::*;
use store::Job;

use crate::icons;
use crate::Icon;

/// Compact card shown in the listing grid; clicking it opens the details
/// overlay for this job.
#[component]
pub fn JobCard(job: Job, on_select: EventHandler<Job>) -> Element {
    let selected = job.clone();

    rsx! {
        article {
            class: "job-card",
            onclick: move |_| on_select.call(selected.clone()),
            h3 { class: "job-card-title", "{job.title}" }
            if let Some(company) = &job.company_name {
                p { class: "job-card-company",
                    Icon { icon: icons::FaBuilding, width: 14, height: 14 }
                    "{company}"
                }
            }
            p { class: "job-card-location",
                Icon { icon: icons::FaLocationDot, width: 14, height: 14 }
                "{job.location}"
            }
            div { class: "job-card-tags",
                if let Some(domain) = &job.domain {
                    span { class: "job-tag", "{domain}" }
                }
                if let Some(employment) = &job.employment_type {
                    span { class: "job-tag", "{employment}" }
                }
                if let Some(work) = &job.work_type {
                    span { class: "job-tag", "{work}" }
                }
            }
            if let Some(salary) = job.salary_text() {
                p { class: "job-card-salary", "{salary}" }
            }
        }
    }
}
