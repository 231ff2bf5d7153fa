//! Session gate extractors and the login/logout flow
//!
//! Every protected route group gets a guard extractor backed by the one
//! parameterized gate in staffdesk-session. A rejected check is always the
//! same temporary redirect to the login entry point; the response never says
//! whether the session was missing, malformed, or the wrong role.

use crate::{templates::LoginTemplate, AppState, WebResult};
use askama::Template;
use axum::{
    extract::{FromRef, FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use staffdesk_core::{log_operation_start, log_operation_success};
use staffdesk_session::{AccessDecision, RouteGroup, Session, SessionToken};
use tracing::{debug, info};

/// Extract the session token from the request cookies
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<SessionToken> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    extract_cookie_value(cookie_header, cookie_name).map(SessionToken::from_raw)
}

fn extract_cookie_value(cookie_str: &str, name: &str) -> Option<String> {
    for cookie in cookie_str.split(';') {
        let cookie = cookie.trim();
        if let Some(rest) = cookie.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn session_cookie(name: &str, token: &SessionToken) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", name, token)
}

fn expired_cookie(name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name)
}

/// Gate rejection: navigate to the login entry point instead of rendering
#[derive(Debug)]
pub struct AuthRedirect(String);

impl AuthRedirect {
    pub fn to(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::temporary(&self.0).into_response()
    }
}

/// Optional session extractor - does not fail when no session exists
pub struct CurrentSession(pub Option<Session>);

impl<S> FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = extract_session_token(&parts.headers, &app_state.config.cookie_name);
        let session = token.as_ref().and_then(|t| app_state.gate.current_session(t));
        Ok(CurrentSession(session))
    }
}

/// Run the gate for one route group; shared by every guard extractor
fn check_group<S>(parts: &Parts, state: &S, group: RouteGroup) -> Result<Session, AuthRedirect>
where
    AppState: FromRef<S>,
{
    let app_state = AppState::from_ref(state);
    let token = extract_session_token(&parts.headers, &app_state.config.cookie_name);

    match app_state.gate.check_group(token.as_ref(), group) {
        AccessDecision::Allow => token
            .as_ref()
            .and_then(|t| app_state.gate.current_session(t))
            .ok_or_else(|| AuthRedirect::to(app_state.gate.login_path())),
        AccessDecision::Redirect(login_path) => {
            debug!(group = group.prefix(), "Access denied, redirecting to login");
            Err(AuthRedirect::to(login_path))
        }
    }
}

macro_rules! route_group_guard {
    ($(#[$doc:meta])* $name:ident, $group:expr) => {
        $(#[$doc])*
        pub struct $name(pub Session);

        impl<S> FromRequestParts<S> for $name
        where
            AppState: FromRef<S>,
            S: Send + Sync,
        {
            type Rejection = AuthRedirect;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                check_group(parts, state, $group).map($name)
            }
        }
    };
}

route_group_guard!(
    /// Guard for the `/admin` route group
    RequireAdmin,
    RouteGroup::Admin
);
route_group_guard!(
    /// Guard for the `/admin/data-manager` route group
    RequireAdminDataDesk,
    RouteGroup::AdminDataManager
);
route_group_guard!(
    /// Guard for the `/admin/finance-manager` route group
    RequireAdminFinanceDesk,
    RouteGroup::AdminFinanceManager
);
route_group_guard!(
    /// Guard for the `/data-manager` route group
    RequireDataManager,
    RouteGroup::DataManager
);
route_group_guard!(
    /// Guard for the `/store` route group
    RequireStore,
    RouteGroup::Store
);
route_group_guard!(
    /// Guard for the `/finance` route group
    RequireFinance,
    RouteGroup::Finance
);
route_group_guard!(
    /// Guard for the `/employee` route group
    RequireEmployee,
    RouteGroup::Employee
);

/// Login form fields
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Render the login page.
/// A live session skips the form and goes straight to its landing page.
pub async fn login_page(CurrentSession(session): CurrentSession) -> WebResult<Response> {
    if let Some(session) = session {
        return Ok(Redirect::to(RouteGroup::home_for(session.role).prefix()).into_response());
    }

    Ok(Html(LoginTemplate::new(None).render()?).into_response())
}

/// Verify credentials and establish the session.
/// Both session fields are written together by the session manager; the
/// response sets the cookie and lands on the role's dashboard.
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> WebResult<Response> {
    log_operation_start!("login", username = %form.username);

    match state.directory.authenticate(&form.username, &form.password) {
        Some(member) => {
            let token = state.sessions.login(member.role)?;
            let home = RouteGroup::home_for(member.role).prefix();
            log_operation_success!("login", role = %member.role);

            Ok((
                [(
                    header::SET_COOKIE,
                    session_cookie(&state.config.cookie_name, &token),
                )],
                Redirect::to(home),
            )
                .into_response())
        }
        None => {
            info!(username = %form.username, "Login rejected");
            let page = LoginTemplate::new(Some("Invalid username or password".to_string()));
            Ok((StatusCode::UNAUTHORIZED, Html(page.render()?)).into_response())
        }
    }
}

/// Clear the session and navigate back to login.
/// Idempotent: without a cookie, or with an already-cleared token, it still
/// succeeds and still redirects.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> WebResult<Response> {
    log_operation_start!("logout");

    if let Some(token) = extract_session_token(&headers, &state.config.cookie_name) {
        state.sessions.logout(&token)?;
    }
    log_operation_success!("logout");

    Ok((
        [(
            header::SET_COOKIE,
            expired_cookie(&state.config.cookie_name),
        )],
        Redirect::to(&state.config.login_path),
    )
        .into_response())
}
