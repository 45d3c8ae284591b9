//! Authentication handler implementations

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
    Json,
};
use validator::Validate;

use crate::{
    constants::{paths, MIN_PASSWORD_LENGTH},
    error::{AppError, AppResult},
    middleware::session::{clear_session_cookie, session_cookie, session_token},
    services::AuthService,
    state::AppState,
    utils::validate_university_email,
};

use super::{
    request::LoginRequest,
    response::{LoginPageResponse, LoginResponse, LoginUserResponse, UnauthorizedPageResponse},
};

/// Send visitors of the bare root to the login page
pub async fn redirect_to_login() -> Redirect {
    Redirect::to(paths::LOGIN)
}

/// Login page
pub async fn login_page(State(state): State<AppState>) -> Json<LoginPageResponse> {
    Json(LoginPageResponse {
        title: "Admin Login",
        description: "Enter your university email to access the dashboard",
        email_domain: state.config().access.university_email_domain.clone(),
        min_password_length: MIN_PASSWORD_LENGTH,
    })
}

/// Log in with a university email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let payload = payload.normalized();
    payload.validate()?;
    validate_university_email(&payload.email, &state.config().access.university_email_domain)
        .map_err(AppError::Validation)?;

    let session = AuthService::login(state.api(), &payload.email, &payload.password).await?;

    // The next guarded request must see this session fresh
    state.identity().invalidate(&session.access_token).await;

    let cookie = session_cookie(&state.config().session, &session.access_token);
    let response = LoginResponse {
        message: "Login Successful",
        redirect_to: paths::ADMIN_ROOT,
        user: LoginUserResponse {
            id: session.user.id,
            name: session.user.name,
            email: session.user.email,
            role: session.user.active_role,
        },
    };

    Ok(([(SET_COOKIE, cookie)], Json(response)))
}

/// End the session and return to the login page
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let session = &state.config().session;

    if let Some(token) = session_token(&headers, &session.cookie_name) {
        AuthService::logout(state.api(), &token).await;
        state.identity().invalidate(&token).await;
    }

    (
        [(SET_COOKIE, clear_session_cookie(session))],
        Redirect::to(paths::LOGIN),
    )
}

/// Landing page for authenticated accounts without console access
pub async fn unauthorized_page() -> Json<UnauthorizedPageResponse> {
    Json(UnauthorizedPageResponse {
        title: "Unauthorized",
        message: "You do not have permission to access the admin console",
        login_path: paths::LOGIN,
    })
}
