//! # Filter state for the job listings
//!
//! [`FilterState`] holds the active criteria for one listing page: two free-text
//! fields, a custom-domain text supplement, and four selection sets. Every update
//! operation is pure — it consumes the current state and returns the next one, so
//! a UI signal can swap states atomically and no caller ever observes a partial
//! mutation.
//!
//! Set semantics:
//! - user type is an exclusive choice (radio): the set holds at most one value,
//!   most recent wins.
//! - domain, employment type and work type are inclusive (checkboxes).
//!
//! An empty text field or empty set means "no filter on this dimension", never
//! "match nothing". Values for the lower-cased dimensions (user type, employment
//! type, work type) are normalised to lower case at insertion time; domain values
//! keep their canonical casing from [`crate::models::DOMAINS`].

use std::collections::BTreeSet;

use crate::sanitize::sanitize;

/// Free-text filter fields. All of them pass through the sanitizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Search,
    Location,
    CustomDomain,
}

/// Set-valued filter fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetField {
    UserType,
    Domain,
    EmploymentType,
    WorkType,
}

/// Any single filter field, for targeted clearing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Location,
    CustomDomain,
    UserType,
    Domain,
    EmploymentType,
    WorkType,
}

/// The active filter criteria for a job listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub location: String,
    /// Free-text supplement to the `domain` set; a job matches the domain
    /// dimension when its domain contains this value case-insensitively.
    pub custom_domain: String,
    /// Radio semantics: at most one element.
    pub user_type: BTreeSet<String>,
    pub domain: BTreeSet<String>,
    pub employment_type: BTreeSet<String>,
    pub work_type: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a text field, sanitising the raw input first.
    #[must_use]
    pub fn set_text(mut self, field: TextField, raw: &str) -> Self {
        let value = sanitize(raw);
        match field {
            TextField::Search => self.search = value,
            TextField::Location => self.location = value,
            TextField::CustomDomain => self.custom_domain = value,
        }
        self
    }

    /// Replace the field's set with exactly `{value}` (radio, most recent wins).
    #[must_use]
    pub fn set_exclusive_choice(mut self, field: SetField, value: &str) -> Self {
        let value = normalize(field, value);
        let set = self.set_mut(field);
        set.clear();
        set.insert(value);
        self
    }

    /// Insert `value` when `included`, remove it otherwise. Removing an absent
    /// value is a no-op, so repeated un-toggles are idempotent.
    #[must_use]
    pub fn toggle_in_set(mut self, field: SetField, value: &str, included: bool) -> Self {
        let value = normalize(field, value);
        let set = self.set_mut(field);
        if included {
            set.insert(value);
        } else {
            set.remove(&value);
        }
        self
    }

    /// Reset a single field to its empty default.
    #[must_use]
    pub fn clear_field(mut self, field: FilterField) -> Self {
        match field {
            FilterField::Search => self.search.clear(),
            FilterField::Location => self.location.clear(),
            FilterField::CustomDomain => self.custom_domain.clear(),
            FilterField::UserType => self.user_type.clear(),
            FilterField::Domain => self.domain.clear(),
            FilterField::EmploymentType => self.employment_type.clear(),
            FilterField::WorkType => self.work_type.clear(),
        }
        self
    }

    /// Reset every field to its empty default in one step.
    #[must_use]
    pub fn clear_all(self) -> Self {
        Self::default()
    }

    fn set_mut(&mut self, field: SetField) -> &mut BTreeSet<String> {
        match field {
            SetField::UserType => &mut self.user_type,
            SetField::Domain => &mut self.domain,
            SetField::EmploymentType => &mut self.employment_type,
            SetField::WorkType => &mut self.work_type,
        }
    }
}

/// Domain values keep their canonical casing so exact membership against
/// `job.domain` works; the other dimensions compare lower-cased on both sides.
fn normalize(field: SetField, value: &str) -> String {
    match field {
        SetField::Domain => value.to_string(),
        _ => value.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let state = FilterState::new();
        assert!(state.search.is_empty());
        assert!(state.location.is_empty());
        assert!(state.custom_domain.is_empty());
        assert!(state.user_type.is_empty());
        assert!(state.domain.is_empty());
        assert!(state.employment_type.is_empty());
        assert!(state.work_type.is_empty());
    }

    #[test]
    fn set_text_sanitises() {
        let state = FilterState::new().set_text(TextField::Search, "eng1neer!");
        assert_eq!(state.search, "engneer");
    }

    #[test]
    fn exclusive_choice_always_yields_singleton() {
        let state = FilterState::new()
            .set_exclusive_choice(SetField::UserType, "Fresher")
            .set_exclusive_choice(SetField::UserType, "Professional");
        assert_eq!(state.user_type.len(), 1);
        assert!(state.user_type.contains("professional"));
    }

    #[test]
    fn toggle_inserts_and_removes() {
        let state = FilterState::new()
            .toggle_in_set(SetField::Domain, "Backend", true)
            .toggle_in_set(SetField::Domain, "Frontend", true);
        assert_eq!(state.domain.len(), 2);

        let state = state.toggle_in_set(SetField::Domain, "Backend", false);
        assert_eq!(state.domain.len(), 1);
        assert!(state.domain.contains("Frontend"));
    }

    #[test]
    fn untoggle_is_idempotent() {
        let once = FilterState::new()
            .toggle_in_set(SetField::WorkType, "Remote", true)
            .toggle_in_set(SetField::WorkType, "Remote", false);
        let twice = once.clone().toggle_in_set(SetField::WorkType, "Remote", false);
        assert_eq!(once, twice);
        assert!(once.work_type.is_empty());
    }

    #[test]
    fn lowercases_all_but_domain_at_insertion() {
        let state = FilterState::new()
            .toggle_in_set(SetField::EmploymentType, "Full time", true)
            .toggle_in_set(SetField::Domain, "Data Science", true);
        assert!(state.employment_type.contains("full time"));
        assert!(state.domain.contains("Data Science"));
    }

    #[test]
    fn clear_field_resets_one_dimension() {
        let state = FilterState::new()
            .set_text(TextField::Location, "Berlin")
            .toggle_in_set(SetField::Domain, "Backend", true)
            .clear_field(FilterField::Domain);
        assert!(state.domain.is_empty());
        assert_eq!(state.location, "Berlin");
    }

    #[test]
    fn clear_all_resets_everything() {
        let state = FilterState::new()
            .set_text(TextField::Search, "rust")
            .set_exclusive_choice(SetField::UserType, "student")
            .toggle_in_set(SetField::Domain, "Backend", true)
            .clear_all();
        assert_eq!(state, FilterState::default());
    }
}
