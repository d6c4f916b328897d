//! Auth routes: demo-grade login/register/logout/me.
//!
//! Any credentials are accepted. Unknown emails get a fresh mock session;
//! the only hard failure is registering an email that already exists.

use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::response::{created, success, success_with_message, ApiError, ErrorCode};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// A demo account, password hash never checked.
#[derive(Debug, Clone)]
struct MockUser {
    id: &'static str,
    email: &'static str,
    wallet_address: &'static str,
    display_name: &'static str,
    avatar_url: String,
    created_at: &'static str,
}

/// User projection returned to clients; no password material.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SafeUser {
    id: String,
    email: String,
    wallet_address: Option<String>,
    display_name: String,
    avatar_url: String,
    created_at: DateTime<Utc>,
}

static MOCK_USERS: Lazy<Vec<MockUser>> = Lazy::new(|| {
    vec![
        MockUser {
            id: "user-1",
            email: "demo@paperdex.app",
            wallet_address: "7xKXaB...3nPq",
            display_name: "DemoTrader",
            avatar_url: avatar_for("demo"),
            created_at: "2024-01-15T10:30:00Z",
        },
        MockUser {
            id: "user-2",
            email: "alice@example.com",
            wallet_address: "3mKL9x...RtYu",
            display_name: "AliceTrader",
            avatar_url: avatar_for("alice"),
            created_at: "2024-02-20T14:45:00Z",
        },
    ]
});

fn avatar_for(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/identicon/svg?seed={seed}")
}

fn find_user_by_email(email: &str) -> Option<&'static MockUser> {
    MOCK_USERS
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email))
}

fn to_safe_user(user: &MockUser) -> SafeUser {
    SafeUser {
        id: user.id.to_string(),
        email: user.email.to_string(),
        wallet_address: Some(user.wallet_address.to_string()),
        display_name: user.display_name.to_string(),
        avatar_url: user.avatar_url.clone(),
        created_at: user
            .created_at
            .parse()
            .unwrap_or_else(|_| Utc::now()),
    }
}

fn mock_session_user(email: &str) -> SafeUser {
    let display_name = email
        .split('@')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("User");

    SafeUser {
        id: format!("user-{}", Utc::now().timestamp_millis()),
        email: email.to_string(),
        wallet_address: None,
        display_name: display_name.to_string(),
        avatar_url: avatar_for(email),
        created_at: Utc::now(),
    }
}

fn generate_tokens() -> serde_json::Value {
    let short = |prefix: &str| format!("{prefix}-{}", &Uuid::new_v4().to_string()[..8]);
    json!({
        "accessToken": short("access"),
        "refreshToken": short("refresh"),
        "expiresIn": 3600,
    })
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
struct LoginBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody {
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
}

async fn login(Json(body): Json<LoginBody>) -> Result<impl IntoResponse, ApiError> {
    let mut missing = Vec::new();
    if body.email.is_none() {
        missing.push("email");
    }
    if body.password.is_none() {
        missing.push("password");
    }
    if !missing.is_empty() {
        return Err(ApiError::validation("Missing required fields")
            .with_details(json!({ "fields": missing })));
    }

    let email = body.email.unwrap();
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email format"));
    }

    // Demo mode: any password passes, unknown emails get a fresh session.
    let user = match find_user_by_email(&email) {
        Some(user) => to_safe_user(user),
        None => {
            tracing::debug!(email = %email, "Unknown email, creating mock session");
            mock_session_user(&email)
        }
    };

    tracing::info!(email = %user.email, "Login successful");

    Ok(success(json!({
        "user": user,
        "tokens": generate_tokens(),
    })))
}

async fn register(Json(body): Json<RegisterBody>) -> Result<impl IntoResponse, ApiError> {
    let mut missing = Vec::new();
    if body.email.is_none() {
        missing.push("email");
    }
    if body.password.is_none() {
        missing.push("password");
    }
    if body.confirm_password.is_none() {
        missing.push("confirmPassword");
    }
    if !missing.is_empty() {
        return Err(ApiError::validation("Missing required fields")
            .with_details(json!({ "fields": missing })));
    }

    let email = body.email.unwrap();
    let password = body.password.unwrap();
    let confirm = body.confirm_password.unwrap();

    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email format"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password != confirm {
        return Err(ApiError::validation("Passwords do not match"));
    }
    if find_user_by_email(&email).is_some() {
        return Err(ApiError::new(
            ErrorCode::Conflict,
            "Email already registered",
        ));
    }

    let user = mock_session_user(&email);
    tracing::info!(email = %user.email, "Registration successful");

    Ok(created(json!({
        "user": user,
        "tokens": generate_tokens(),
    })))
}

async fn logout() -> impl IntoResponse {
    success_with_message(serde_json::Value::Null, "Logged out successfully")
}

async fn me(
    State(_state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| v.starts_with("Bearer "));

    if bearer.is_none() {
        return Err(ApiError::new(ErrorCode::AuthError, "No token provided"));
    }

    // Demo mode: every token resolves to the demo account.
    let user = to_safe_user(&MOCK_USERS[0]);
    Ok(success(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("demo@paperdex.app"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn mock_session_derives_display_name() {
        let user = mock_session_user("carol@example.com");
        assert_eq!(user.display_name, "carol");
        assert!(user.wallet_address.is_none());
    }

    #[test]
    fn known_email_resolves_to_mock_account() {
        assert!(find_user_by_email("DEMO@paperdex.app").is_some());
        assert!(find_user_by_email("nobody@example.com").is_none());
    }
}
