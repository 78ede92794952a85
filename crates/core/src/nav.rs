//! Role-scoped navigation.
//!
//! A single table maps the viewer's role to the ordered set of navigation
//! sections the UI may show. Handlers fetch it once per request via
//! `GET /nav`; nothing else decides what a role can see in the menu.

use serde::Serialize;

use crate::roles::Role;

/// One navigation entry: a route the viewer may visit and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const NAV_CATEGORIES: NavLink = NavLink { href: "/category/all", label: "Categories" };
const NAV_MAKES: NavLink = NavLink { href: "/make/all", label: "Makes" };
const NAV_MODELS: NavLink = NavLink { href: "/model/all", label: "Models" };
const NAV_STORES: NavLink = NavLink { href: "/store/all", label: "Stores" };
const NAV_TAGS: NavLink = NavLink { href: "/tag/all", label: "Tags" };
const NAV_USERS: NavLink = NavLink { href: "/user/all", label: "Users" };
const NAV_VEHICLES: NavLink = NavLink { href: "/vehicle/all", label: "Vehicles" };
const NAV_LOGIN: NavLink = NavLink { href: "/user/login", label: "Login" };
const NAV_REGISTER_CLIENT: NavLink = NavLink { href: "/user/client", label: "Register" };
const NAV_REGISTER_FRANCHISEE: NavLink = NavLink { href: "/user/franchisee", label: "Work with us" };

/// The ordered navigation sections visible to a viewer.
///
/// `None` is an anonymous visitor. Unknown stored roles never reach this
/// function: [`Role::parse`] fails closed and the caller passes `None`.
pub fn nav_for(viewer: Option<Role>) -> Vec<NavLink> {
    match viewer {
        None => vec![
            NAV_STORES,
            NAV_CATEGORIES,
            NAV_MODELS,
            NAV_LOGIN,
            NAV_REGISTER_CLIENT,
            NAV_REGISTER_FRANCHISEE,
        ],
        Some(Role::Admin) => vec![
            NAV_USERS,
            NAV_STORES,
            NAV_CATEGORIES,
            NAV_MAKES,
            NAV_MODELS,
            NAV_TAGS,
            NAV_VEHICLES,
        ],
        Some(Role::Franchisee) => vec![
            NAV_STORES,
            NAV_CATEGORIES,
            NAV_MAKES,
            NAV_MODELS,
            NAV_TAGS,
            NAV_VEHICLES,
        ],
        Some(Role::Client) => vec![NAV_STORES, NAV_CATEGORIES, NAV_MODELS],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(viewer: Option<Role>) -> Vec<&'static str> {
        nav_for(viewer).iter().map(|l| l.label).collect()
    }

    #[test]
    fn anonymous_nav() {
        assert_eq!(
            labels(None),
            vec!["Stores", "Categories", "Models", "Login", "Register", "Work with us"]
        );
    }

    #[test]
    fn admin_nav() {
        assert_eq!(
            labels(Some(Role::Admin)),
            vec!["Users", "Stores", "Categories", "Makes", "Models", "Tags", "Vehicles"]
        );
    }

    #[test]
    fn franchisee_nav() {
        assert_eq!(
            labels(Some(Role::Franchisee)),
            vec!["Stores", "Categories", "Makes", "Models", "Tags", "Vehicles"]
        );
    }

    #[test]
    fn client_nav() {
        assert_eq!(labels(Some(Role::Client)), vec!["Stores", "Categories", "Models"]);
    }

    #[test]
    fn unknown_role_string_yields_anonymous_nav() {
        // An unparsable stored role reaches nav_for as None via Role::parse.
        let viewer = Role::parse("manager");
        assert_eq!(viewer, None);
        assert_eq!(labels(viewer), labels(None));
    }

    #[test]
    fn hrefs_are_rooted() {
        for role in [None, Some(Role::Admin), Some(Role::Franchisee), Some(Role::Client)] {
            for link in nav_for(role) {
                assert!(link.href.starts_with('/'), "bad href {}", link.href);
            }
        }
    }
}
