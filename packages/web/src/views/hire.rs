use api::{AuthRetry, RetryDecision};
use dioxus::prelude::*;

use store::{JobDraft, DOMAINS, EMPLOYMENT_TYPES, USER_TYPES, WORK_TYPES};
use ui::{make_session, use_api, use_auth, use_enricher, LoginButton};

use crate::Route;

const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// Job creation form.
///
/// On submit the draft is stamped with the poster's identity, enriched
/// best-effort (company summary and spam check, grounded by the proxied career
/// page when a link was given), then POSTed. Enrichment failures never block
/// the submission.
#[component]
pub fn Hire() -> Element {
    let api = use_api();
    let enricher = use_enricher();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut draft = use_signal(JobDraft::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let edit = move |apply: fn(&mut JobDraft, String)| {
        move |evt: FormEvent| {
            let mut d = draft();
            apply(&mut d, evt.value());
            draft.set(d);
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let enricher = enricher.clone();
        async move {
            let state = auth();
            let (Some(user), Some(token)) = (state.user, state.token) else {
                error.set(Some("Sign in before posting a job.".to_string()));
                return;
            };

            let mut d = draft();
            if d.title.trim().is_empty()
                || d.company_name.trim().is_empty()
                || d.location.trim().is_empty()
                || d.description.trim().is_empty()
            {
                error.set(Some(
                    "Title, company, location and description are required.".to_string(),
                ));
                return;
            }

            submitting.set(true);
            error.set(None);
            d.user_id = user.id.clone();
            d.created_by = user.display_name().to_string();

            // Extra context for the summary prompt, best-effort like the rest
            let career_page = if d.career_link.trim().is_empty() {
                None
            } else {
                api.fetch_career_page(&d.career_link, &token).await.ok()
            };
            let enrichment = enricher.enrich(&d, career_page.as_deref()).await;
            d.company_summary = enrichment.company_summary;
            d.is_spam = enrichment.is_spam;

            let mut token = token;
            let mut retry = AuthRetry::default();
            loop {
                match api.create_job(&d, &token).await {
                    Ok(_) => {
                        draft.set(JobDraft::default());
                        nav.push(Route::MyJobs {});
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
                        error.set(Some(format!("Could not create the job: {e}")));
                        break;
                    }
                }
            }
            submitting.set(false);
        }
    };

    let state = auth();
    if !state.loading && state.user.is_none() {
        return rsx! {
            div { class: "jobs-page",
                div { class: "login-prompt",
                    h2 { "Sign in to post a job" }
                    LoginButton { class: "primary".to_string() }
                }
            }
        };
    }

    rsx! {
        div { class: "hire-page",
            h2 { "Post a job" }
            form { class: "hire-form", onsubmit: on_submit,
                div { class: "form-field",
                    label { "Job title" }
                    input {
                        r#type: "text",
                        value: "{draft().title}",
                        oninput: edit(|d, v| d.title = v),
                    }
                }
                div { class: "form-field",
                    label { "Company name" }
                    input {
                        r#type: "text",
                        value: "{draft().company_name}",
                        oninput: edit(|d, v| d.company_name = v),
                    }
                }
                div { class: "form-field",
                    label { "Location" }
                    input {
                        r#type: "text",
                        value: "{draft().location}",
                        oninput: edit(|d, v| d.location = v),
                    }
                }
                div { class: "form-field",
                    label { "Description" }
                    textarea {
                        value: "{draft().description}",
                        oninput: edit(|d, v| d.description = v),
                    }
                }
                div { class: "form-row",
                    div { class: "form-field",
                        label { "Domain" }
                        select {
                            value: "{draft().domain}",
                            onchange: edit(|d, v| d.domain = v),
                            option { value: "", "Select a domain" }
                            for domain in DOMAINS {
                                option { key: "{domain}", value: "{domain}", "{domain}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { "Employment type" }
                        select {
                            value: "{draft().employment_type}",
                            onchange: edit(|d, v| d.employment_type = v),
                            option { value: "", "Select a type" }
                            for value in EMPLOYMENT_TYPES {
                                option { key: "{value}", value: "{value}", "{value}" }
                            }
                        }
                    }
                }
                div { class: "form-row",
                    div { class: "form-field",
                        label { "Work type" }
                        select {
                            value: "{draft().work_type}",
                            onchange: edit(|d, v| d.work_type = v),
                            option { value: "", "Select a type" }
                            for value in WORK_TYPES {
                                option { key: "{value}", value: "{value}", "{value}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { "Looking for" }
                        select {
                            value: "{draft().user_type}",
                            onchange: edit(|d, v| d.user_type = v),
                            option { value: "", "Anyone" }
                            for (wire, display) in USER_TYPES {
                                option { key: "{wire}", value: "{wire}", "{display}" }
                            }
                        }
                    }
                }
                div { class: "form-field",
                    label { "Salary range" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. 60-80k EUR",
                        value: "{draft().salary_range}",
                        oninput: edit(|d, v| d.salary_range = v),
                    }
                }
                div { class: "form-field",
                    label { "Application link" }
                    input {
                        r#type: "url",
                        value: "{draft().apply_link}",
                        oninput: edit(|d, v| d.apply_link = v),
                    }
                }
                div { class: "form-field",
                    label { "Career page (optional)" }
                    input {
                        r#type: "url",
                        value: "{draft().career_link}",
                        oninput: edit(|d, v| d.career_link = v),
                    }
                }
                if let Some(message) = error() {
                    p { class: "jobs-error", "{message}" }
                }
                button { class: "primary", r#type: "submit", disabled: submitting(),
                    if submitting() {
                        "Publishing..."
                    } else {
                        "Publish job"
                    }
                }
            }
        }
    }
}
