use serde::{Deserialize, Serialize};

/// Request body for user registration. Required fields are `Option` so that
/// a missing field is reported as our own 400 with a descriptive message
/// instead of a body-deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_type: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_location: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub accepted_privacy_policy: Option<bool>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response returned after a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

/// Response returned after a successful login. No token is issued; the
/// caller treats this response itself as proof of authentication.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user_data: UserData,
}

/// Non-sensitive profile fields returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user_id: i64,
    pub first_name: String,
    pub email: String,
    pub user_type: String,
}
