//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity (minted client-side until the server assigns one)
//! - Holds value objects that are valid by construction
//! - Exposes its properties through accessors, not public fields
//!
//! Two constructors are provided throughout: `new()` for objects created in
//! the client, and `from_parts()` for objects rebuilt from server data.

pub mod game;
pub mod registration;
pub mod session;
pub mod user;

pub use game::Game;
pub use registration::Registration;
pub use session::Session;
pub use user::User;
