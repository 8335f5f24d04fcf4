pub mod filters;
pub mod matcher;
pub mod models;
pub mod sanitize;
pub mod session;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod cookie;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use cookie::CookieTokenStore;

pub use filters::{FilterField, FilterState, SetField, TextField};
pub use matcher::{matches, sort_newest_first, visible_jobs};
pub use models::{Job, JobDraft, UserInfo, DOMAINS, EMPLOYMENT_TYPES, USER_TYPES, WORK_TYPES};
pub use sanitize::sanitize;
pub use session::{now_millis, AuthState, Session, TokenStore, VerifyAuth};
