pub mod application;
pub mod job;
pub mod user;

pub use application::{Application, ApplicationSummary};
pub use job::Job;
pub use user::{Role, User, UserProfile};
