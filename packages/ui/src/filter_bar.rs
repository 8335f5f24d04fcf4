//! Filter controls for the job listings.
//!
//! All controls share one `Signal<FilterState>`; every interaction replaces the
//! whole state through the pure operations on [`FilterState`], so the listing
//! recomputes from a single source of truth.

use std::time::Duration;

use dioxus::prelude::*;
use store::{
    sanitize, FilterField, FilterState, SetField, TextField, DOMAINS, EMPLOYMENT_TYPES, USER_TYPES,
    WORK_TYPES,
};

use crate::icons;
use crate::Icon;

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Text input that strips disallowed characters before reporting a change.
///
/// When a keystroke gets stripped, a notice appears under the field for three
/// seconds. The generation counter keeps an old timer from clearing a notice
/// raised by a later keystroke.
#[component]
pub fn ValidatedSearchInput(
    value: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] class: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut notice = use_signal(|| None::<&'static str>);
    let mut generation = use_signal(|| 0u64);

    let oninput = move |evt: FormEvent| {
        let raw = evt.value();
        let clean = sanitize(&raw);
        if clean != raw {
            notice.set(Some("Only letters, spaces and slashes are allowed"));
            let current = generation() + 1;
            generation.set(current);
            spawn(async move {
                sleep(Duration::from_secs(3)).await;
                if generation() == current {
                    notice.set(None);
                }
            });
        }
        on_change.call(clean);
    };

    rsx! {
        div { class: "validated-input {class}",
            input {
                r#type: "text",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: oninput,
            }
            if let Some(text) = notice() {
                span { class: "input-notice", "{text}" }
            }
        }
    }
}

/// Top filter bar: search, location, poster type and domain.
#[component]
pub fn FilterBar(filters: Signal<FilterState>) -> Element {
    rsx! {
        div { class: "filter-bar",
            ValidatedSearchInput {
                value: filters().search.clone(),
                placeholder: "Search jobs...".to_string(),
                class: "filter-search".to_string(),
                on_change: move |text: String| {
                    filters.set(filters().set_text(TextField::Search, &text))
                },
            }
            ValidatedSearchInput {
                value: filters().location.clone(),
                placeholder: "Location".to_string(),
                class: "filter-location".to_string(),
                on_change: move |text: String| {
                    filters.set(filters().set_text(TextField::Location, &text))
                },
            }
            UserTypeDropdown { filters }
            DomainDropdown { filters }
            button {
                class: "filter-clear",
                onclick: move |_| filters.set(filters().clear_all()),
                Icon { icon: icons::FaXmark, width: 14, height: 14 }
                "Clear filters"
            }
        }
    }
}

/// Radio group over who posted the job; a single choice or none.
#[component]
fn UserTypeDropdown(filters: Signal<FilterState>) -> Element {
    rsx! {
        div { class: "filter-dropdown",
            span { class: "filter-dropdown-title", "Posted by" }
            label {
                input {
                    r#type: "radio",
                    name: "user-type",
                    checked: filters().user_type.is_empty(),
                    onchange: move |_| filters.set(filters().clear_field(FilterField::UserType)),
                }
                "All"
            }
            for (wire, display) in USER_TYPES {
                label { key: "{wire}",
                    input {
                        r#type: "radio",
                        name: "user-type",
                        checked: filters().user_type.contains(wire),
                        onchange: move |_| {
                            filters.set(filters().set_exclusive_choice(SetField::UserType, wire))
                        },
                    }
                    "{display}"
                }
            }
        }
    }
}

/// Checkbox group over domains plus a free-text domain to match by substring.
#[component]
fn DomainDropdown(filters: Signal<FilterState>) -> Element {
    rsx! {
        div { class: "filter-dropdown",
            span { class: "filter-dropdown-title", "Domain" }
            for domain in DOMAINS {
                label { key: "{domain}",
                    input {
                        r#type: "checkbox",
                        checked: filters().domain.contains(domain),
                        onchange: move |evt: FormEvent| {
                            filters
                                .set(filters().toggle_in_set(SetField::Domain, domain, evt.checked()))
                        },
                    }
                    "{domain}"
                }
            }
            ValidatedSearchInput {
                value: filters().custom_domain.clone(),
                placeholder: "Other domain".to_string(),
                on_change: move |text: String| {
                    filters.set(filters().set_text(TextField::CustomDomain, &text))
                },
            }
        }
    }
}

/// Side panel: employment type and work arrangement checkboxes.
#[component]
pub fn FilterSidebar(filters: Signal<FilterState>) -> Element {
    rsx! {
        aside { class: "filter-sidebar",
            div { class: "filter-group",
                h3 { "Employment type" }
                for value in EMPLOYMENT_TYPES {
                    label { key: "{value}",
                        input {
                            r#type: "checkbox",
                            checked: filters().employment_type.contains(&value.to_lowercase()),
                            onchange: move |evt: FormEvent| {
                                filters
                                    .set(
                                        filters()
                                            .toggle_in_set(
                                                SetField::EmploymentType,
                                                value,
                                                evt.checked(),
                                            ),
                                    )
                            },
                        }
                        "{value}"
                    }
                }
            }
            div { class: "filter-group",
                h3 { "Work type" }
                for value in WORK_TYPES {
                    label { key: "{value}",
                        input {
                            r#type: "checkbox",
                            checked: filters().work_type.contains(&value.to_lowercase()),
                            onchange: move |evt: FormEvent| {
                                filters
                                    .set(
                                        filters()
                                            .toggle_in_set(SetField::WorkType, value, evt.checked()),
                                    )
                            },
                        }
                        "{value}"
                    }
                }
            }
        }
    }
}
