//! Template system for server-side rendering
//!
//! The chrome shell (`shell.html`) carries branding, the role-appropriate
//! navigation, and the logout action; every content page extends it. Pages
//! only ever render beneath an already-checked gate, so templates never
//! re-check access.

use crate::WebError;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use staffdesk_session::Role;

/// A navigation entry in the chrome shell
#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Everything the chrome shell renders around a content page
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub title: String,
    pub role_label: String,
    pub nav: Vec<NavItem>,
    pub logout_path: String,
}

impl ShellContext {
    /// Shell for a page inside a role's route group.
    ///
    /// The session carries only the role, so the shell identifies the user
    /// by role label.
    pub fn for_role(role: Role, title: &str) -> Self {
        Self {
            title: format!("Staffdesk - {}", title),
            role_label: role.label().to_string(),
            nav: nav_for_role(role),
            logout_path: "/logout".to_string(),
        }
    }
}

/// Navigation items shown to each role
pub fn nav_for_role(role: Role) -> Vec<NavItem> {
    match role {
        Role::Admin => vec![
            NavItem::new("Dashboard", "/admin"),
            NavItem::new("Attendance", "/admin/attendance"),
            NavItem::new("Assets", "/admin/assets"),
            NavItem::new("Asset categories", "/admin/asset-categories"),
            NavItem::new("Data desk", "/admin/data-manager"),
            NavItem::new("Finance desk", "/admin/finance-manager"),
        ],
        Role::DataManager => vec![
            NavItem::new("Dashboard", "/data-manager"),
            NavItem::new("Inventory", "/data-manager/inventory"),
            NavItem::new("Categories", "/data-manager/categories"),
        ],
        Role::Store => vec![
            NavItem::new("Dashboard", "/store"),
            NavItem::new("Stock levels", "/store/stock"),
            NavItem::new("Goods inward", "/store/goods-inward"),
        ],
        Role::FinanceManager => vec![
            NavItem::new("Dashboard", "/finance"),
            NavItem::new("Reimbursements", "/finance/reimbursements"),
        ],
        Role::Employee => vec![
            NavItem::new("Dashboard", "/employee"),
            NavItem::new("My attendance", "/employee/attendance"),
            NavItem::new("Leave options", "/employee/leave"),
        ],
    }
}

/// Login page template
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub title: String,
    pub error: Option<String>,
}

impl LoginTemplate {
    pub fn new(error: Option<String>) -> Self {
        Self {
            title: "Staffdesk - Sign in".to_string(),
            error,
        }
    }
}

/// Role dashboard template
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub shell: ShellContext,
    pub heading: String,
    pub blurb: String,
}

impl DashboardTemplate {
    pub fn new(role: Role, heading: &str, blurb: &str) -> Self {
        Self {
            shell: ShellContext::for_role(role, heading),
            heading: heading.to_string(),
            blurb: blurb.to_string(),
        }
    }
}

/// Listing page template: a fixed set of records rendered as a table
#[derive(Template)]
#[template(path = "records.html")]
pub struct RecordsTemplate {
    pub shell: ShellContext,
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordsTemplate {
    pub fn new(role: Role, heading: &str, columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            shell: ShellContext::for_role(role, heading),
            heading: heading.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Build a listing page from typed records
    pub fn from_records<R: crate::records::TableRecord>(
        role: Role,
        heading: &str,
        records: &[R],
    ) -> Self {
        Self::new(
            role,
            heading,
            R::columns(),
            records.iter().map(|r| r.row()).collect(),
        )
    }
}

/// One field of a detail grid
#[derive(Debug, Clone)]
pub struct DetailField {
    pub name: String,
    pub value: String,
}

impl DetailField {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Detail page template: a summary grid above a filtered record table
#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub shell: ShellContext,
    pub heading: String,
    pub fields: Vec<DetailField>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DetailTemplate {
    pub fn new(
        role: Role,
        heading: &str,
        fields: Vec<DetailField>,
        columns: &[&str],
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self {
            shell: ShellContext::for_role(role, heading),
            heading: heading.to_string(),
            fields,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

/// Error page template
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub error_code: u16,
    pub error_message: String,
}

impl ErrorTemplate {
    pub fn new(error_code: u16, error_message: String) -> Self {
        Self {
            title: format!("Error {} - Staffdesk", error_code),
            error_code,
            error_message,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::NotFound(resource) => (StatusCode::NOT_FOUND, resource.clone()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let page = ErrorTemplate::new(status.as_u16(), message);
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, "error page unavailable").into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{leave_options, LeaveOption, TableRecord};

    #[test]
    fn shell_nav_matches_role() {
        let shell = ShellContext::for_role(Role::Store, "Stock levels");
        assert_eq!(shell.role_label, "Store");
        assert!(shell.nav.iter().any(|n| n.href == "/store/stock"));
        assert!(shell.nav.iter().all(|n| !n.href.starts_with("/admin")));
    }

    #[test]
    fn records_template_renders_rows() {
        let options = leave_options();
        let page = RecordsTemplate::from_records(Role::Employee, "Leave options", &options);
        assert_eq!(page.columns.len(), LeaveOption::columns().len());

        let html = page.render().unwrap();
        assert!(html.contains("Casual leave"));
        assert!(html.contains("Leave options"));
    }

    #[test]
    fn login_template_renders_error_when_present() {
        let html = LoginTemplate::new(Some("Invalid credentials".to_string()))
            .render()
            .unwrap();
        assert!(html.contains("Invalid credentials"));

        let html = LoginTemplate::new(None).render().unwrap();
        assert!(!html.contains("Invalid credentials"));
    }
}
