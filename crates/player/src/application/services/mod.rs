//! Application services - use cases the UI calls into.

pub mod game_service;
pub mod registration_service;
pub mod session_service;
pub mod user_service;

pub use game_service::GameService;
pub use registration_service::RegistrationService;
pub use session_service::SessionService;
pub use user_service::UserService;
