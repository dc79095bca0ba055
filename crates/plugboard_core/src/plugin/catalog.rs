//! Extension-point catalog.
//!
//! # Responsibility
//! - Define the fixed set of insertion points plugins may target.
//! - Provide lookup by stable string id.
//!
//! # Invariants
//! - Point ids are globally unique and stable across the process lifetime.
//! - `display_name`/`description` are documentation only, never behavioral.
//! - Adding a point is additive; looking up a removed or unknown id resolves
//!   to `None`, never an error.

use serde::Serialize;

/// One named insertion point in the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtensionPoint {
    /// Stable string id used as the registry bucket key.
    pub id: &'static str,
    /// Human-readable name for tooling and docs.
    pub display_name: &'static str,
    /// Short description of what contributions to this point do.
    pub description: &'static str,
}

/// Main dashboard content area.
pub const DASHBOARD_CONTENT: ExtensionPoint = ExtensionPoint {
    id: "dashboardContent",
    display_name: "Dashboard Content",
    description: "Add content to the main dashboard",
};

/// User edit form region.
pub const USER_EDIT_FORM: ExtensionPoint = ExtensionPoint {
    id: "userEditForm",
    display_name: "User Edit Form",
    description: "Add fields to the user edit form",
};

/// Main navigation region.
pub const NAVIGATION_ITEMS: ExtensionPoint = ExtensionPoint {
    id: "navigationItems",
    display_name: "Navigation Items",
    description: "Add items to the main navigation",
};

const ALL_POINTS: &[ExtensionPoint] = &[DASHBOARD_CONTENT, USER_EDIT_FORM, NAVIGATION_ITEMS];

/// Returns every catalogued extension point.
pub fn all() -> &'static [ExtensionPoint] {
    ALL_POINTS
}

/// Returns one catalogued point by stable id.
pub fn by_id(id: &str) -> Option<&'static ExtensionPoint> {
    ALL_POINTS.iter().find(|point| point.id == id)
}
