pub mod person;
pub mod user;

pub use person::InMemoryPersonRepository;
pub use user::InMemoryRevokedTokenRepository;
pub use user::InMemoryUserRepository;
