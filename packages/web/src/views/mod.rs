mod display_jobs;
pub use display_jobs::DisplayJobs;

mod my_jobs;
pub use my_jobs::MyJobs;

mod hire;
pub use hire::Hire;

mod login;
pub use login::Login;

mod callback;
pub use callback::GitHubCallback;

mod logout;
pub use logout::Logout;
