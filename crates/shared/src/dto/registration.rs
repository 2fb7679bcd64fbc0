use serde::{Deserialize, Serialize};

/// Body of `POST /registration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDto {
    pub id: String,
    pub email: String,
    pub password: String,
}
