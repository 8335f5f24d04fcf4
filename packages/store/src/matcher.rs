//! # Job predicate evaluation and the filtered collection view
//!
//! [`matches`] decides whether one job satisfies the current [`FilterState`]:
//! six independent predicates combined with logical AND, so a job is shown only
//! when every non-empty dimension passes. [`visible_jobs`] applies the predicate
//! across the full job list in one pass, preserving the original order.
//!
//! Missing optional job fields are treated as non-matching for that
//! sub-condition, never as an error.

use crate::filters::FilterState;
use crate::models::Job;

/// Case-insensitive substring test.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn opt_contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.map(|h| contains_ci(h, needle)).unwrap_or(false)
}

/// Lower-cased set membership for an optional job-side value.
fn opt_in_set(value: Option<&str>, set: &std::collections::BTreeSet<String>) -> bool {
    value
        .map(|v| set.contains(&v.to_lowercase()))
        .unwrap_or(false)
}

/// Evaluate all six filter dimensions against one job.
pub fn matches(job: &Job, filters: &FilterState) -> bool {
    let search_match = filters.search.is_empty()
        || contains_ci(&job.title, &filters.search)
        || opt_contains_ci(job.company_name.as_deref(), &filters.search)
        || opt_contains_ci(job.skills_required.as_deref(), &filters.search);

    // An empty location filter substring-matches trivially. Kept that way on
    // purpose rather than adding an empty-set style short-circuit.
    let location_match = contains_ci(&job.location, &filters.location);

    let user_type_match =
        filters.user_type.is_empty() || opt_in_set(job.user_type.as_deref(), &filters.user_type);

    // Two routes in: exact membership in the checkbox set, or a
    // case-insensitive substring hit on the free-text custom domain.
    let domain_match = (filters.domain.is_empty() && filters.custom_domain.is_empty())
        || job
            .domain
            .as_deref()
            .map(|d| filters.domain.contains(d))
            .unwrap_or(false)
        || (!filters.custom_domain.is_empty()
            && opt_contains_ci(job.domain.as_deref(), &filters.custom_domain));

    let employment_type_match = filters.employment_type.is_empty()
        || opt_in_set(job.employment_type.as_deref(), &filters.employment_type);

    let work_type_match =
        filters.work_type.is_empty() || opt_in_set(job.work_type.as_deref(), &filters.work_type);

    search_match
        && location_match
        && user_type_match
        && domain_match
        && employment_type_match
        && work_type_match
}

/// Full-pass filtered view over `all_jobs`, preserving relative order.
pub fn visible_jobs<'a>(all_jobs: &'a [Job], filters: &FilterState) -> Vec<&'a Job> {
    all_jobs.iter().filter(|job| matches(job, filters)).collect()
}

/// Sort descending by creation timestamp (newest first). Jobs without a
/// timestamp sink to the end; ties keep their relative order.
pub fn sort_newest_first(mut jobs: Vec<Job>) -> Vec<Job> {
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{SetField, TextField};

    fn job(title: &str) -> Job {
        Job {
            title: title.to_string(),
            location: "Berlin".to_string(),
            ..Job::default()
        }
    }

    fn backend_job() -> Job {
        Job {
            domain: Some("Backend".to_string()),
            employment_type: Some("full time".to_string()),
            ..job("Backend Engineer")
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let jobs = [job("Anything"), backend_job(), Job::default()];
        for j in &jobs {
            assert!(matches(j, &FilterState::default()));
        }
    }

    #[test]
    fn domain_membership_includes_and_excludes() {
        let filters = FilterState::new().toggle_in_set(SetField::Domain, "Backend", true);
        let jobs = [backend_job()];
        assert_eq!(visible_jobs(&jobs, &filters).len(), 1);

        let filters = FilterState::new().toggle_in_set(SetField::Domain, "Frontend", true);
        assert!(visible_jobs(&jobs, &filters).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filters = FilterState::new().set_text(TextField::Search, "eng");
        assert!(matches(&job("Backend Engineer"), &filters));
        assert!(!matches(&job("Data Analyst"), &filters));
    }

    #[test]
    fn search_also_hits_company_and_skills() {
        let mut j = job("Analyst");
        j.company_name = Some("EngineCo".to_string());
        let filters = FilterState::new().set_text(TextField::Search, "engine");
        assert!(matches(&j, &filters));

        let mut j = job("Analyst");
        j.skills_required = Some("Rust/SQL engineering".to_string());
        assert!(matches(&j, &filters));
    }

    #[test]
    fn custom_domain_matches_by_substring() {
        let mut j = job("Web Dev");
        j.domain = Some("Frontend".to_string());
        let filters = FilterState::new().set_text(TextField::CustomDomain, "front");
        assert!(matches(&j, &filters));

        let filters = FilterState::new().set_text(TextField::CustomDomain, "data");
        assert!(!matches(&j, &filters));
    }

    #[test]
    fn domain_set_and_custom_domain_combine_with_or() {
        let mut j = job("Web Dev");
        j.domain = Some("Frontend".to_string());
        let filters = FilterState::new()
            .toggle_in_set(SetField::Domain, "Backend", true)
            .set_text(TextField::CustomDomain, "front");
        // Fails the set, passes the substring route.
        assert!(matches(&j, &filters));
    }

    #[test]
    fn conjunctive_across_dimensions() {
        let filters = FilterState::new()
            .toggle_in_set(SetField::Domain, "Backend", true)
            .toggle_in_set(SetField::EmploymentType, "Part time", true);
        // Domain passes but employment type fails, so the whole job fails.
        assert!(!matches(&backend_job(), &filters));
    }

    #[test]
    fn lowercased_dimensions_ignore_job_side_casing() {
        let mut j = backend_job();
        j.employment_type = Some("Full Time".to_string());
        let filters = FilterState::new().toggle_in_set(SetField::EmploymentType, "Full time", true);
        assert!(matches(&j, &filters));
    }

    #[test]
    fn missing_fields_do_not_panic_and_do_not_match() {
        let bare = Job {
            title: "Bare".to_string(),
            location: "Remote".to_string(),
            ..Job::default()
        };
        let filters = FilterState::new().set_exclusive_choice(SetField::UserType, "fresher");
        assert!(!matches(&bare, &filters));
    }

    #[test]
    fn empty_location_filter_is_match_all() {
        let filters = FilterState::default();
        assert!(matches(&job("Any"), &filters));
    }

    #[test]
    fn visible_jobs_preserves_order() {
        let jobs = [job("A"), job("B"), job("C")];
        let titles: Vec<_> = visible_jobs(&jobs, &FilterState::default())
            .into_iter()
            .map(|j| j.title.as_str())
            .collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn sort_newest_first_orders_descending() {
        let mut a = job("old");
        a.created_at = Some("2024-01-01T00:00:00Z".to_string());
        let mut b = job("new");
        b.created_at = Some("2025-06-01T12:00:00Z".to_string());
        let mut c = job("undated");
        c.created_at = None;

        let sorted = sort_newest_first(vec![a, c, b]);
        let titles: Vec<_> = sorted.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["new", "old", "undated"]);
    }

    #[test]
    fn sort_is_stable_for_equal_timestamps() {
        let mut a = job("first");
        a.created_at = Some("2025-01-01T00:00:00Z".to_string());
        let mut b = job("second");
        b.created_at = Some("2025-01-01T00:00:00Z".to_string());

        let sorted = sort_newest_first(vec![a, b]);
        let titles: Vec<_> = sorted.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }
}
