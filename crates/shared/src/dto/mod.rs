//! Wire-format DTOs
//!
//! Field names match the API's JSON exactly.

mod game;
mod registration;
mod session;
mod user;

pub use game::{CreateGameRequest, GameDto};
pub use registration::RegistrationDto;
pub use session::LoginRequest;
pub use user::UserDto;
