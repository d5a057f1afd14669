use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserData},
        password::{hash_password, verify_password},
        repo::{NewUser, User},
    },
    error::ApiError,
    state::AppState,
};

/// Same body for "unknown email" and "wrong password" so callers cannot
/// probe which accounts exist.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

const MISSING_FIELDS: &str = "Missing or invalid required fields (user type, first name, \
     email, password, company location, industry, privacy policy acceptance)";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// A concurrent registration can slip past the advisory pre-check; the
/// unique constraint on email then reports the loser, which must get the
/// same conflict as the pre-check instead of a generic fault.
fn insert_user_error(e: sqlx::Error) -> ApiError {
    if e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        ApiError::conflict("Email already used")
    } else {
        e.into()
    }
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let RegisterRequest {
        user_type,
        first_name,
        last_name,
        company_location,
        email,
        industry,
        phone_number,
        password,
        accepted_privacy_policy,
    } = payload;

    // Every required field present and non-empty, policy strictly accepted.
    let (
        Some(user_type),
        Some(first_name),
        Some(email),
        Some(password),
        Some(company_location),
        Some(industry),
        Some(true),
    ) = (
        non_empty(user_type),
        non_empty(first_name),
        non_empty(email),
        non_empty(password),
        non_empty(company_location),
        non_empty(industry),
        accepted_privacy_policy,
    )
    else {
        warn!("registration rejected: missing or invalid required fields");
        return Err(ApiError::bad_request(MISSING_FIELDS));
    };

    if user_type != "merchant" && user_type != "agent" {
        warn!(user_type = %user_type, "registration rejected: invalid user type");
        return Err(ApiError::bad_request("Invalid user type"));
    }

    if !is_valid_email(&email) {
        warn!(email = %email, "registration rejected: invalid email format");
        return Err(ApiError::bad_request("Invalid email format"));
    }

    // Characters, not bytes: a multibyte password must not pass on byte length.
    if password.chars().count() < 6 {
        warn!("registration rejected: password too short");
        return Err(ApiError::bad_request(
            "Password must be at least 6 characters long",
        ));
    }

    // Advisory pre-check; the unique constraint on email is what actually
    // closes the check-then-insert race.
    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "registration rejected: email already used");
        return Err(ApiError::conflict("Email already used"));
    }

    let hash = hash_password(&password, state.config.bcrypt_cost)?;

    let user = User::create(
        &state.db,
        NewUser {
            user_type: &user_type,
            first_name: &first_name,
            last_name: last_name.as_deref(),
            company_location: &company_location,
            email: &email,
            industry: &industry,
            phone_number: phone_number.as_deref(),
            password_hash: &hash,
            accepted_privacy_policy: true,
        },
    )
    .await
    .map_err(insert_user_error)?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".into(),
            user_id: user.id,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (non_empty(payload.email), non_empty(payload.password))
    else {
        return Err(ApiError::bad_request("Email and password are required"));
    };

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(email = %email, "login failed: email not found");
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(&password, &user.password_hash)? {
        warn!(email = %email, user_id = user.id, "login failed: incorrect password");
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        user_data: UserData {
            user_id: user.id,
            first_name: user.first_name,
            email: user.email,
            user_type: user.user_type,
        },
    }))
}
