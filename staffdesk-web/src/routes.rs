//! Route definitions for the Staffdesk web server
//!
//! Each protected route group is nested under the prefix recorded in the
//! `RouteGroup` policy table; the handlers' guard extractors enforce it.

use crate::{auth, handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};

/// Login and logout entry points, reachable without a session
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", post(auth::logout))
}

/// `/admin` group, including the data and finance desks
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::admin_dashboard))
        .route("/attendance", get(handlers::admin_attendance))
        .route("/assets", get(handlers::admin_assets))
        .route("/assets/{kind}", get(handlers::admin_asset_detail))
        .route("/asset-categories", get(handlers::admin_asset_categories))
        .nest(
            "/data-manager",
            Router::new()
                .route("/", get(handlers::admin_data_desk))
                .route("/inventory", get(handlers::admin_data_desk_inventory)),
        )
        .nest(
            "/finance-manager",
            Router::new()
                .route("/", get(handlers::admin_finance_desk))
                .route(
                    "/reimbursements",
                    get(handlers::admin_finance_desk_reimbursements),
                ),
        )
}

/// `/data-manager` group
pub fn data_manager_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::data_manager_dashboard))
        .route("/inventory", get(handlers::data_manager_inventory))
        .route("/categories", get(handlers::data_manager_categories))
}

/// `/store` group
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::store_dashboard))
        .route("/stock", get(handlers::store_stock))
        .route("/goods-inward", get(handlers::store_goods_inward))
}

/// `/finance` group
pub fn finance_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::finance_dashboard))
        .route("/reimbursements", get(handlers::finance_reimbursements))
}

/// `/employee` group
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::employee_dashboard))
        .route("/attendance", get(handlers::employee_attendance))
        .route("/leave", get(handlers::employee_leave))
}

/// Create all routes combined
pub fn all_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::health_check))
        .merge(auth_routes())
        .nest("/admin", admin_routes())
        .nest("/data-manager", data_manager_routes())
        .nest("/store", store_routes())
        .nest("/finance", finance_routes())
        .nest("/employee", employee_routes())
        .fallback(handlers::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppState, WebConfig};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check_route() {
        let state = AppState::new(WebConfig::default()).unwrap();
        let app = all_routes().with_state(state);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/healthz")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found() {
        let state = AppState::new(WebConfig::default()).unwrap();
        let app = all_routes().with_state(state);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/no-such-page")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
