//! Role-derived navigation
//!
//! The sidebar and the protected page routes come from the same table: the
//! router registers exactly the entries [`sidebar_items`] returns for a
//! privileged role, and the layout renders the entries returned for the
//! caller's role.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::models::Role;

/// Pages a navigation entry can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Analytics,
    ManageUsers,
    ManageItems,
    Profile,
}

/// A single sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub path: &'static str,
    #[serde(skip)]
    pub view: View,
}

/// A titled group of sidebar links, rendered in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationGroup {
    pub title: &'static str,
    pub entries: &'static [NavigationEntry],
}

static ADMIN_SIDEBAR: [NavigationGroup; 3] = [
    NavigationGroup {
        title: "Dashboard",
        entries: &[NavigationEntry {
            title: "Analytics",
            path: "/admin/analytics",
            view: View::Analytics,
        }],
    },
    NavigationGroup {
        title: "Management",
        entries: &[
            NavigationEntry {
                title: "Users",
                path: "/admin/users",
                view: View::ManageUsers,
            },
            NavigationEntry {
                title: "Items",
                path: "/admin/items",
                view: View::ManageItems,
            },
        ],
    },
    NavigationGroup {
        title: "Settings",
        entries: &[NavigationEntry {
            title: "Profile",
            path: "/admin/profile",
            view: View::Profile,
        }],
    },
];

/// Sidebar for a role. Empty for every role outside the console,
/// including an unresolved one.
pub fn sidebar_items(role: Option<Role>) -> Vec<NavigationGroup> {
    match role {
        Some(Role::Admin | Role::SuperAdmin) => ADMIN_SIDEBAR.to_vec(),
        Some(Role::Unknown) => {
            warn!("Unrecognized role, rendering empty navigation");
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Entries of all groups in render order
pub fn entries(groups: &[NavigationGroup]) -> impl Iterator<Item = &NavigationEntry> {
    groups.iter().flat_map(|group| group.entries.iter())
}

/// Set of paths the groups link to
pub fn paths(groups: &[NavigationGroup]) -> BTreeSet<&'static str> {
    entries(groups).map(|entry| entry.path).collect()
}
