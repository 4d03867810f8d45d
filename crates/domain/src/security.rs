use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use workpax_core::AppError;

/// Role held by a user in an organization or a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control over organizations, projects, tasks and users.
    Admin,
    /// Runs projects and tasks inside an organization.
    Manager,
    /// Reads shared work and updates tasks they own.
    Member,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Member => "member",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::Admin, Role::Manager, Role::Member];

        ALL
    }

    /// Normalises a raw role claim.
    ///
    /// The value is lower-cased before matching. Missing, blank and
    /// unrecognised values all resolve to [`Role::Member`].
    #[must_use]
    pub fn normalize(value: Option<&str>) -> Self {
        Self::recognize(value).unwrap_or(Self::Member)
    }

    /// Returns the role named by a raw claim, if it names one.
    ///
    /// Matching is case-insensitive. Surrounding whitespace is not trimmed.
    #[must_use]
    pub fn recognize(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| Self::from_str(raw.to_lowercase().as_str()).ok())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "member" => Ok(Self::Member),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Resource family guarded by the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Organizations and their membership.
    Organizations,
    /// Projects inside an organization.
    Projects,
    /// Tasks inside a project.
    Tasks,
    /// User accounts and invitations.
    Users,
}

impl Resource {
    /// Returns a stable storage value for this resource.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organizations => "organizations",
            Self::Projects => "projects",
            Self::Tasks => "tasks",
            Self::Users => "users",
        }
    }

    /// Returns all known resources.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Resource] = &[
            Resource::Organizations,
            Resource::Projects,
            Resource::Tasks,
            Resource::Users,
        ];

        ALL
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "organizations" => Ok(Self::Organizations),
            "projects" => Ok(Self::Projects),
            "tasks" => Ok(Self::Tasks),
            "users" => Ok(Self::Users),
            _ => Err(AppError::Validation(format!(
                "unknown resource value '{value}'"
            ))),
        }
    }
}

/// Operation a role may perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create new records.
    Create,
    /// Read records.
    Read,
    /// Update any record.
    Update,
    /// Delete records.
    Delete,
    /// Administer the resource as a whole.
    Manage,
    /// Invite new users.
    Invite,
    /// Change another user's role.
    AssignRole,
    /// Remove users from the organization.
    Remove,
    /// Add users to a project.
    AddToProject,
    /// Assign tasks to users.
    Assign,
    /// Change a project's lifecycle status.
    ChangeStatus,
    /// Switch between organizations.
    Switch,
    /// Update records owned by the caller.
    UpdateOwn,
}

impl Action {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Manage => "manage",
            Self::Invite => "invite",
            Self::AssignRole => "assign_role",
            Self::Remove => "remove",
            Self::AddToProject => "add_to_project",
            Self::Assign => "assign",
            Self::ChangeStatus => "change_status",
            Self::Switch => "switch",
            Self::UpdateOwn => "update_own",
        }
    }

    /// Returns all known actions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Action] = &[
            Action::Create,
            Action::Read,
            Action::Update,
            Action::Delete,
            Action::Manage,
            Action::Invite,
            Action::AssignRole,
            Action::Remove,
            Action::AddToProject,
            Action::Assign,
            Action::ChangeStatus,
            Action::Switch,
            Action::UpdateOwn,
        ];

        ALL
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown action value '{value}'")))
    }
}

/// A single (resource, action) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// Guarded resource.
    pub resource: Resource,
    /// Operation on the resource.
    pub action: Action,
}

impl Permission {
    /// Creates a permission pair.
    #[must_use]
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    /// Returns a stable storage value such as `tasks.update_own`.
    #[must_use]
    pub fn storage_value(&self) -> String {
        format!("{}.{}", self.resource.as_str(), self.action.as_str())
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((resource, action)) = value.split_once('.') else {
            return Err(AppError::Validation(format!(
                "permission value '{value}' must look like 'resource.action'"
            )));
        };

        Ok(Self::new(
            Resource::from_str(resource)?,
            Action::from_str(action)?,
        ))
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}.{}",
            self.resource.as_str(),
            self.action.as_str()
        )
    }
}

/// One or many roles accepted by a role check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// Returns whether the set contains the role.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Returns the roles in stable order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl From<Role> for RoleSet {
    fn from(value: Role) -> Self {
        Self(BTreeSet::from([value]))
    }
}

impl From<&[Role]> for RoleSet {
    fn from(value: &[Role]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(value: [Role; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<Vec<Role>> for RoleSet {
    fn from(value: Vec<Role>) -> Self {
        Self(value.into_iter().collect())
    }
}
