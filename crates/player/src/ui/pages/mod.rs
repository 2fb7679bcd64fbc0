//! Route pages

mod games;
mod not_found;
mod profile;
mod sign_in;
mod sign_up;
mod users;

pub use games::{GameList, Home};
pub use not_found::NotFound;
pub use profile::Profile;
pub use sign_in::SignIn;
pub use sign_up::SignUp;
pub use users::UserList;

/// Shown under both sign-in and sign-up forms.
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");
