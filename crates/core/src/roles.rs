//! User roles and the canonical authorization predicates.
//!
//! Role names must match the CHECK constraint on `users.role` in the
//! `create_users_table` migration. Every role comparison in the system goes
//! through [`Role`] and the predicates below; handlers never compare raw
//! strings.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_FRANCHISEE: &str = "franchisee";
pub const ROLE_CLIENT: &str = "client";

/// A user's role as stored on the `users` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Franchisee,
    Client,
}

impl Role {
    /// Parse a stored role name. Unknown names yield `None` so callers fail
    /// closed (treated as no role at all).
    pub fn parse(name: &str) -> Option<Role> {
        match name {
            ROLE_ADMIN => Some(Role::Admin),
            ROLE_FRANCHISEE => Some(Role::Franchisee),
            ROLE_CLIENT => Some(Role::Client),
            _ => None,
        }
    }

    /// The stored string form of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Franchisee => ROLE_FRANCHISEE,
            Role::Client => ROLE_CLIENT,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True for the admin role only.
pub fn is_admin(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin))
}

/// Operators are the back-office roles: admin and franchisee.
pub fn is_operator(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin | Role::Franchisee))
}

/// Whether a viewer may edit or delete a resource owned by `owner_id`.
///
/// Admins may manage anything. Franchisees manage only their own stores and
/// the vehicles attached to them. Clients and anonymous viewers manage
/// nothing.
pub fn can_manage_owned(role: Option<Role>, viewer_id: DbId, owner_id: DbId) -> bool {
    match role {
        Some(Role::Admin) => true,
        Some(Role::Franchisee) => viewer_id == owner_id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_roles() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("franchisee"), Some(Role::Franchisee));
        assert_eq!(Role::parse("client"), Some(Role::Client));
    }

    #[test]
    fn parse_unknown_role_fails_closed() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn roundtrip_as_str() {
        for role in [Role::Admin, Role::Franchisee, Role::Client] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn admin_manages_everything() {
        assert!(can_manage_owned(Some(Role::Admin), 1, 99));
    }

    #[test]
    fn franchisee_manages_only_own() {
        assert!(can_manage_owned(Some(Role::Franchisee), 7, 7));
        assert!(!can_manage_owned(Some(Role::Franchisee), 7, 8));
    }

    #[test]
    fn client_and_anonymous_manage_nothing() {
        assert!(!can_manage_owned(Some(Role::Client), 7, 7));
        assert!(!can_manage_owned(None, 7, 7));
    }

    #[test]
    fn operator_predicate() {
        assert!(is_operator(Some(Role::Admin)));
        assert!(is_operator(Some(Role::Franchisee)));
        assert!(!is_operator(Some(Role::Client)));
        assert!(!is_operator(None));
    }
}
