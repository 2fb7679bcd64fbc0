extern crate self as tabletop_domain;

pub mod aggregates;
pub mod common;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Game, Registration, Session, User};
pub use error::DomainError;
pub use ids::{GameId, RegistrationId, SessionId, UserId};
pub use value_objects::{Email, FullName, Page, MAX_PAGE_VALUE};
