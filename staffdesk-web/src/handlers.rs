//! HTTP request handlers for the content pages
//!
//! Each page builds its fixed record set and renders it into the chrome
//! shell. The route-group guards run before any handler body, so handlers
//! never re-check roles.

use crate::auth::{
    CurrentSession, RequireAdmin, RequireAdminDataDesk, RequireAdminFinanceDesk,
    RequireDataManager, RequireEmployee, RequireFinance, RequireStore,
};
use crate::records::{self, AssetKind, TableRecord};
use crate::templates::{DashboardTemplate, DetailField, DetailTemplate, RecordsTemplate};
use crate::{WebError, WebResult};
use askama::Template;
use axum::{
    extract::Path,
    response::{Html, Json, Redirect},
};
use serde::Serialize;
use staffdesk_session::RouteGroup;

fn page<T: Template>(template: T) -> WebResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: String,
}

/// Health check endpoint, unauthenticated
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Root route: live sessions land on their dashboard, everyone else on login
pub async fn root(CurrentSession(session): CurrentSession) -> Redirect {
    match session {
        Some(session) => Redirect::to(RouteGroup::home_for(session.role).prefix()),
        None => Redirect::temporary("/login"),
    }
}

/// Fallback for unknown paths
pub async fn not_found() -> WebError {
    WebError::NotFound("The requested page does not exist".to_string())
}

// ---------------------------------------------------------------------------
// /admin
// ---------------------------------------------------------------------------

pub async fn admin_dashboard(RequireAdmin(session): RequireAdmin) -> WebResult<Html<String>> {
    page(DashboardTemplate::new(
        session.role,
        "Administration",
        "Attendance, asset assignments, and the data and finance desks.",
    ))
}

pub async fn admin_attendance(RequireAdmin(session): RequireAdmin) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Staff attendance",
        &records::staff_attendance(),
    ))
}

pub async fn admin_assets(RequireAdmin(session): RequireAdmin) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Asset assignments",
        &records::asset_assignments(),
    ))
}

pub async fn admin_asset_detail(
    RequireAdmin(session): RequireAdmin,
    Path(kind): Path<String>,
) -> WebResult<Html<String>> {
    let kind: AssetKind = kind
        .parse()
        .map_err(|_| WebError::NotFound(format!("No asset type named '{}'", kind)))?;

    let assignments = records::assets_of_kind(kind);
    let cycle = records::asset_categories()
        .into_iter()
        .find(|c| c.name.starts_with(kind.label()))
        .map(|c| c.replacement_cycle.to_string())
        .unwrap_or_else(|| "—".to_string());

    let fields = vec![
        DetailField::new("Asset type", kind.label()),
        DetailField::new("Assignments", assignments.len().to_string()),
        DetailField::new("Replacement cycle", cycle),
    ];

    page(DetailTemplate::new(
        session.role,
        &format!("{} assets", kind.label()),
        fields,
        records::AssetAssignment::columns(),
        assignments.iter().map(|a| a.row()).collect(),
    ))
}

pub async fn admin_asset_categories(
    RequireAdmin(session): RequireAdmin,
) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Asset categories",
        &records::asset_categories(),
    ))
}

// ---------------------------------------------------------------------------
// /admin/data-manager
// ---------------------------------------------------------------------------

pub async fn admin_data_desk(
    RequireAdminDataDesk(session): RequireAdminDataDesk,
) -> WebResult<Html<String>> {
    page(DashboardTemplate::new(
        session.role,
        "Data desk",
        "Administrator view of the inventory records kept by the data manager.",
    ))
}

pub async fn admin_data_desk_inventory(
    RequireAdminDataDesk(session): RequireAdminDataDesk,
) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Inventory overview",
        &records::inventory_items(),
    ))
}

// ---------------------------------------------------------------------------
// /admin/finance-manager
// ---------------------------------------------------------------------------

pub async fn admin_finance_desk(
    RequireAdminFinanceDesk(session): RequireAdminFinanceDesk,
) -> WebResult<Html<String>> {
    page(DashboardTemplate::new(
        session.role,
        "Finance desk",
        "Administrator view of the reimbursement ledger.",
    ))
}

pub async fn admin_finance_desk_reimbursements(
    RequireAdminFinanceDesk(session): RequireAdminFinanceDesk,
) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Reimbursement ledger",
        &records::reimbursement_ledger(),
    ))
}

// ---------------------------------------------------------------------------
// /data-manager
// ---------------------------------------------------------------------------

pub async fn data_manager_dashboard(
    RequireDataManager(session): RequireDataManager,
) -> WebResult<Html<String>> {
    page(DashboardTemplate::new(
        session.role,
        "Data management",
        "Inventory items and their categories.",
    ))
}

pub async fn data_manager_inventory(
    RequireDataManager(session): RequireDataManager,
) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Inventory items",
        &records::inventory_items(),
    ))
}

pub async fn data_manager_categories(
    RequireDataManager(session): RequireDataManager,
) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Item categories",
        &records::item_categories(),
    ))
}

// ---------------------------------------------------------------------------
// /store
// ---------------------------------------------------------------------------

pub async fn store_dashboard(RequireStore(session): RequireStore) -> WebResult<Html<String>> {
    page(DashboardTemplate::new(
        session.role,
        "Store",
        "Stock levels and the goods-inward register.",
    ))
}

pub async fn store_stock(RequireStore(session): RequireStore) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Stock levels",
        &records::stock_levels(),
    ))
}

pub async fn store_goods_inward(RequireStore(session): RequireStore) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Goods inward register",
        &records::goods_inward_register(),
    ))
}

// ---------------------------------------------------------------------------
// /finance
// ---------------------------------------------------------------------------

pub async fn finance_dashboard(RequireFinance(session): RequireFinance) -> WebResult<Html<String>> {
    page(DashboardTemplate::new(
        session.role,
        "Finance",
        "Reimbursement claims awaiting review.",
    ))
}

pub async fn finance_reimbursements(
    RequireFinance(session): RequireFinance,
) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Reimbursement ledger",
        &records::reimbursement_ledger(),
    ))
}

// ---------------------------------------------------------------------------
// /employee
// ---------------------------------------------------------------------------

pub async fn employee_dashboard(
    RequireEmployee(session): RequireEmployee,
) -> WebResult<Html<String>> {
    page(DashboardTemplate::new(
        session.role,
        "Employee home",
        "Your attendance summary and the available leave options.",
    ))
}

pub async fn employee_attendance(
    RequireEmployee(session): RequireEmployee,
) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "My attendance",
        &records::own_attendance(),
    ))
}

pub async fn employee_leave(RequireEmployee(session): RequireEmployee) -> WebResult<Html<String>> {
    page(RecordsTemplate::from_records(
        session.role,
        "Leave options",
        &records::leave_options(),
    ))
}
