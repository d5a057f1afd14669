use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub user_type: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub company_location: String,
    pub email: String,
    pub industry: String,
    pub phone_number: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt digest, not exposed in JSON
    pub accepted_privacy_policy: bool,
    pub created_at: OffsetDateTime,
}
