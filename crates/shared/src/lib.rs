//! Tabletop Shared - Wire types exchanged with the Tabletop API
//!
//! This crate contains the types that cross the HTTP boundary:
//! - The generic request/response shapes used by the HTTP client contract
//! - The server's response envelope and per-endpoint payloads
//! - Wire-format DTOs for users, games, registrations and logins
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets
//! 4. **No domain types** - DTO <-> domain mapping lives in the player gateways

pub mod dto;
pub mod http;
pub mod responses;

pub use dto::{CreateGameRequest, GameDto, LoginRequest, RegistrationDto, UserDto};
pub use http::{status, HttpMethod, HttpRequest, HttpResponse};
pub use responses::{GamesPayload, ResponseEnvelope, TokenPayload, UsersPayload};
