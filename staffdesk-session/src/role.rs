//! Role classification
//!
//! Defines the fixed set of user categories that determine which route
//! groups a session may reach.

use serde::{Deserialize, Serialize};

/// User role classification
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Portal administrator
    Admin,
    /// Inventory data manager
    DataManager,
    /// Store operator
    Store,
    /// Finance manager
    FinanceManager,
    /// Regular employee
    Employee,
}

impl Role {
    /// All roles, in navigation order
    pub fn all() -> [Role; 5] {
        [
            Role::Admin,
            Role::DataManager,
            Role::Store,
            Role::FinanceManager,
            Role::Employee,
        ]
    }

    /// Human-readable label for navigation and page headers
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::DataManager => "Data Manager",
            Role::Store => "Store",
            Role::FinanceManager => "Finance Manager",
            Role::Employee => "Employee",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::DataManager => write!(f, "datamanager"),
            Role::Store => write!(f, "store"),
            Role::FinanceManager => write!(f, "financemanager"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "datamanager" => Ok(Role::DataManager),
            "store" => Ok(Role::Store),
            "financemanager" => Ok(Role::FinanceManager),
            "employee" => Ok(Role::Employee),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}
