//! Handlers wired into the chain, in order: logging, registration, relay.

mod logging;
mod registration;
mod relay;

pub use logging::LoggingHandler;
pub use registration::RegistrationHandler;
pub use relay::RelayHandler;
