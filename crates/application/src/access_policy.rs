use tracing::debug;
use workpax_core::{AppError, AppResult, UserIdentity};
use workpax_domain::{
    Action, Capability, Permission, PermissionTable, Resource, Role, RoleSet, Team, TeamId,
};

mod capabilities;
mod context;
mod predicates;


pub use context::AccessContext;

/// Client-side authorization checks against the static permission table.
///
/// Every check is pure and infallible. A `false` answer means "hide or
/// disable the control"; the task API enforces authorization on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates the access policy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Normalises a raw role claim, logging claims that name no known role.
    #[must_use]
    pub fn normalize_role(&self, role: Option<&str>) -> Role {
        match Role::recognize(role) {
            Some(known) => known,
            None => {
                if let Some(claim) = role.filter(|value| !value.is_empty()) {
                    debug!(claim, "unrecognized role claim, treating as member");
                }
                Role::Member
            }
        }
    }

    /// Returns whether the role may perform `action` on `resource`.
    #[must_use]
    pub fn has_permission(&self, role: Option<&str>, resource: Resource, action: Action) -> bool {
        PermissionTable::allows(self.normalize_role(role), resource, action)
    }

    /// Same as [`AccessPolicy::has_permission`] for untyped input.
    ///
    /// Unknown resource or action names are denied.
    #[must_use]
    pub fn has_permission_str(&self, role: Option<&str>, resource: &str, action: &str) -> bool {
        match (resource.parse::<Resource>(), action.parse::<Action>()) {
            (Ok(resource), Ok(action)) => self.has_permission(role, resource, action),
            _ => {
                debug!(resource, action, "unknown permission pair, denying");
                false
            }
        }
    }

    /// Returns whether the role is one of `allowed`.
    #[must_use]
    pub fn has_role(&self, role: Option<&str>, allowed: impl Into<RoleSet>) -> bool {
        allowed.into().contains(self.normalize_role(role))
    }

    /// Ensures the role holds a permission.
    pub fn require_permission(
        &self,
        role: Option<&str>,
        resource: Resource,
        action: Action,
    ) -> AppResult<()> {
        let normalized = self.normalize_role(role);
        if PermissionTable::allows(normalized, resource, action) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "role '{normalized}' is missing permission '{}'",
            Permission::new(resource, action)
        )))
    }
}
