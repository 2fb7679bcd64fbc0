use serde::{Deserialize, Serialize};

/// A user as returned by `GET /user` and `GET /user/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub middlename: String,
}
