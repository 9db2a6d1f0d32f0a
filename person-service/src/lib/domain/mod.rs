pub mod auth;
pub mod email;
pub mod git;
pub mod person;
