//! Static staff directory backing the login flow
//!
//! The portal ships with a fixed set of staff accounts in the same
//! hard-coded style as the content page datasets. Credential handling is a
//! plain comparison; token schemes and password policies are out of scope.

use serde::Serialize;
use staffdesk_session::Role;
use tracing::debug;

/// A staff account
#[derive(Debug, Clone, Serialize)]
pub struct StaffMember {
    pub username: String,
    pub display_name: String,
    pub role: Role,
    #[serde(skip_serializing)]
    password: String,
}

impl StaffMember {
    fn new(username: &str, display_name: &str, role: Role, password: &str) -> Self {
        Self {
            username: username.to_string(),
            display_name: display_name.to_string(),
            role,
            password: password.to_string(),
        }
    }

    /// Plain credential comparison; see module docs
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}

/// Fixed lookup table of staff accounts
#[derive(Debug, Clone)]
pub struct StaffDirectory {
    staff: Vec<StaffMember>,
}

impl StaffDirectory {
    /// Directory pre-seeded with one account per role
    pub fn with_sample_staff() -> Self {
        Self {
            staff: vec![
                StaffMember::new("meera", "Meera Pillai", Role::Admin, "admin123"),
                StaffMember::new("ravi", "Ravi Narayan", Role::DataManager, "data123"),
                StaffMember::new("sunita", "Sunita Rao", Role::Store, "store123"),
                StaffMember::new("arjun", "Arjun Menon", Role::FinanceManager, "finance123"),
                StaffMember::new("kavya", "Kavya Iyer", Role::Employee, "employee123"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    /// Look up a member by username
    pub fn find(&self, username: &str) -> Option<&StaffMember> {
        self.staff.iter().find(|m| m.username == username)
    }

    /// Verify credentials, returning the member on success
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&StaffMember> {
        match self.find(username) {
            Some(member) if member.verify_password(password) => Some(member),
            Some(_) => {
                debug!(username, "Password mismatch");
                None
            }
            None => {
                debug!(username, "Unknown username");
                None
            }
        }
    }
}
