//! User profile and account payloads.

use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// The signed-in user's profile, as returned by `POST /sessions`.
///
/// This is also the record persisted in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar file reference, resolved against the API's `/avatar` route.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Body of `POST /sessions`.
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /sessions`.
///
/// Both fields are optional on the wire; a session is only established
/// when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<UserDto>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT /users`.
///
/// Password fields are only sent when the user is changing the password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl ProfileUpdate {
    /// Start an update pre-filled with the user's current name and email.
    pub fn from_user(user: &UserDto) -> Self {
        Self {
            name: user.name.clone(),
            email: Some(user.email.clone()),
            ..Default::default()
        }
    }
}
