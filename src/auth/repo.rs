use sqlx::PgPool;

pub use crate::auth::repo_types::User;

/// Fields of a registration that end up in the `users` table. The hash is
/// computed by the handler before this struct is built.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub user_type: &'a str,
    pub first_name: &'a str,
    pub last_name: Option<&'a str>,
    pub company_location: &'a str,
    pub email: &'a str,
    pub industry: &'a str,
    pub phone_number: Option<&'a str>,
    pub password_hash: &'a str,
    pub accepted_privacy_policy: bool,
}

impl User {
    /// Find a user by email. Exact match, emails are stored as submitted.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_type, first_name, last_name, company_location, email,
                   industry, phone_number, password_hash, accepted_privacy_policy,
                   created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user row and return it with its assigned id.
    pub async fn create(db: &PgPool, new: NewUser<'_>) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_type, first_name, last_name, company_location,
                               email, industry, phone_number, password_hash,
                               accepted_privacy_policy)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_type, first_name, last_name, company_location, email,
                      industry, phone_number, password_hash, accepted_privacy_policy,
                      created_at
            "#,
        )
        .bind(new.user_type)
        .bind(new.first_name)
        .bind(new.last_name)
        .bind(new.company_location)
        .bind(new.email)
        .bind(new.industry)
        .bind(new.phone_number)
        .bind(new.password_hash)
        .bind(new.accepted_privacy_policy)
        .fetch_one(db)
        .await
    }
}
