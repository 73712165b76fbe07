use std::fmt;

use serde::{Deserialize, Serialize};

/// What a credential is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can view and save schedules.
    Admin,
    /// Can only view schedules.
    User,
}

impl Role {
    pub fn can_edit(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

/// The two shared secrets the server compares credentials against.
///
/// A key that is not configured never matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessKeys {
    pub admin: Option<String>,
    pub user: Option<String>,
}

impl AccessKeys {
    pub fn new(admin: Option<String>, user: Option<String>) -> Self {
        Self {
            admin: admin.filter(|key| !key.is_empty()),
            user: user.filter(|key| !key.is_empty()),
        }
    }

    /// Returns true if neither key is configured.
    pub fn is_empty(&self) -> bool {
        self.admin.is_none() && self.user.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"user\"").unwrap(),
            Role::User
        );
    }

    #[test]
    fn test_only_admin_can_edit() {
        assert!(Role::Admin.can_edit());
        assert!(!Role::User.can_edit());
    }

    #[test]
    fn test_empty_keys_are_unset() {
        let keys = AccessKeys::new(Some(String::new()), None);
        assert!(keys.is_empty());
    }
}
