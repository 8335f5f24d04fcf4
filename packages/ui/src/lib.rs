//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    make_session, use_api, use_auth, use_enricher, AuthProvider, LoginButton, LogoutButton,
};

mod filter_bar;
pub use filter_bar::{FilterBar, FilterSidebar, ValidatedSearchInput};

mod job_card;
pub use job_card::JobCard;

mod job_details;
pub use job_details::JobDetailsOverlay;

mod navbar;
pub use navbar::Navbar;

pub use store::AuthState;
