pub mod lifecycle;
pub mod query;
pub mod registration;

pub use lifecycle::LifecycleService;
pub use query::QueryService;
pub use registration::RegistrationService;
