//! # Domain models for jobs and users
//!
//! Defines the data structures exchanged with the remote job API. All types are
//! `Serialize + Deserialize` with camelCase field names matching the wire format.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Job`] | A published listing as returned by the job API. `title` and `location` are always present; everything else is optional, including the AI-derived `company_summary` and `is_spam`. |
//! | [`JobDraft`] | The mutable form state for job creation. Mirrors [`Job`]'s writable fields, stamped with `user_id`/`created_by` at submission and optionally augmented by enrichment. |
//! | [`UserInfo`] | The client-safe GitHub profile subset returned by `/auth/verify` and the OAuth callback. |
//!
//! The canonical option lists ([`DOMAINS`], [`EMPLOYMENT_TYPES`], [`WORK_TYPES`],
//! [`USER_TYPES`]) are shared between the filter dropdowns and the hire form so the
//! two surfaces can never drift apart.

use serde::{Deserialize, Serialize};

/// Canonical domain list offered in filters and the hire form.
pub const DOMAINS: [&str; 8] = [
    "Frontend",
    "Backend",
    "Full Stack",
    "DevOps",
    "Mobile",
    "UI/UX",
    "Data Science",
    "Machine Learning",
];

/// Employment types as they appear on the wire (stored lower-cased in filters).
pub const EMPLOYMENT_TYPES: [&str; 3] = ["Full time", "Internship", "Part time"];

/// Work types as they appear on the wire (stored lower-cased in filters).
pub const WORK_TYPES: [&str; 4] = ["On site", "Remote", "Hybrid", "Field Work"];

/// User types as (wire value, display label) pairs.
pub const USER_TYPES: [(&str, &str); 3] = [
    ("fresher", "Fresher"),
    ("professional", "Professional"),
    ("student", "College Student"),
];

/// A job listing as returned by the remote API.
///
/// `title` and `location` are guaranteed by the server; every other field may
/// be absent and must never cause a panic downstream.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub skills_required: Option<String>,
    #[serde(default)]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub career_link: Option<String>,
    /// AI-derived summary of what working at the company might be like.
    #[serde(default)]
    pub company_summary: Option<String>,
    /// AI-derived spam flag; `Some(true)` surfaces a warning banner.
    #[serde(default)]
    pub is_spam: Option<bool>,
    #[serde(default)]
    pub created_by: Option<String>,
    /// RFC 3339 creation timestamp. Lexicographic order equals chronological
    /// order for this format, which `sort_newest_first` relies on.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Job {
    /// Salary text for display, preferring the single figure over the range.
    pub fn salary_text(&self) -> Option<&str> {
        self.salary.as_deref().or(self.salary_range.as_deref())
    }
}

/// Mutable form state for job creation, discarded after a successful POST.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub company_name: String,
    pub location: String,
    pub domain: String,
    pub work_type: String,
    pub employment_type: String,
    pub user_type: String,
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub apply_link: String,
    pub career_link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_spam: Option<bool>,
}

/// User information safe to hold on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserInfo {
    /// Display name, falling back to the GitHub login and then the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or(&self.id)
    }
}
