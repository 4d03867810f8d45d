//! Static role to permission mapping.
//!
//! Every (role, resource) pair is an arm of one exhaustive `match`, so a
//! role without an entry for some resource cannot be written.

use serde::{Deserialize, Serialize};

use crate::security::{Action, Permission, Resource, Role};

/// Build-time permission table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionTable;

impl PermissionTable {
    /// Returns the actions a role may perform on a resource.
    #[must_use]
    pub const fn actions(role: Role, resource: Resource) -> &'static [Action] {
        use Action::{
            AddToProject, Assign, AssignRole, ChangeStatus, Create, Delete, Invite, Manage, Read,
            Remove, Switch, Update, UpdateOwn,
        };

        match (role, resource) {
            (Role::Admin, Resource::Organizations) => &[Create, Read, Update, Delete, Manage],
            (Role::Admin, Resource::Projects) => &[Create, Read, Update, Delete, Manage],
            (Role::Admin, Resource::Tasks) => &[Create, Read, Update, Delete, Assign],
            (Role::Admin, Resource::Users) => &[Invite, AssignRole, Remove, Read, Update],
            (Role::Manager, Resource::Organizations) => &[Read, Switch],
            (Role::Manager, Resource::Projects) => &[Read, Update, Manage, ChangeStatus],
            (Role::Manager, Resource::Tasks) => &[Create, Read, Update, Delete, Assign],
            (Role::Manager, Resource::Users) => &[AddToProject, Read],
            (Role::Member, Resource::Organizations) => &[Read],
            (Role::Member, Resource::Projects) => &[Read],
            (Role::Member, Resource::Tasks) => &[Read, UpdateOwn],
            (Role::Member, Resource::Users) => &[Read],
        }
    }

    /// Returns whether the role may perform the action on the resource.
    #[must_use]
    pub fn allows(role: Role, resource: Resource, action: Action) -> bool {
        Self::actions(role, resource).contains(&action)
    }

    /// Lists every permission granted to a role, grouped by resource.
    #[must_use]
    pub fn grants(role: Role) -> Vec<Permission> {
        Resource::all()
            .iter()
            .flat_map(|resource| {
                Self::actions(role, *resource)
                    .iter()
                    .map(|action| Permission::new(*resource, *action))
            })
            .collect()
    }
}

/// Client affordance that is enabled by a single permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Organization settings and deletion.
    ManageOrganizations,
    /// Organization switcher.
    SwitchOrganizations,
    /// New project form.
    CreateProjects,
    /// Project status selector.
    ChangeProjectStatus,
    /// Task assignee picker.
    AssignTasks,
    /// Invite user form.
    InviteUsers,
    /// Role selector on member rows.
    AssignRoles,
    /// Remove member control.
    RemoveUsers,
    /// Add member to project control.
    AddUsersToProject,
}

impl Capability {
    /// Returns all capabilities in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Capability] = &[
            Capability::ManageOrganizations,
            Capability::SwitchOrganizations,
            Capability::CreateProjects,
            Capability::ChangeProjectStatus,
            Capability::AssignTasks,
            Capability::InviteUsers,
            Capability::AssignRoles,
            Capability::RemoveUsers,
            Capability::AddUsersToProject,
        ];

        ALL
    }

    /// Returns a stable storage value for this capability.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageOrganizations => "manage_organizations",
            Self::SwitchOrganizations => "switch_organizations",
            Self::CreateProjects => "create_projects",
            Self::ChangeProjectStatus => "change_project_status",
            Self::AssignTasks => "assign_tasks",
            Self::InviteUsers => "invite_users",
            Self::AssignRoles => "assign_roles",
            Self::RemoveUsers => "remove_users",
            Self::AddUsersToProject => "add_users_to_project",
        }
    }

    /// Returns the permission that enables this capability.
    #[must_use]
    pub const fn required_permission(&self) -> Permission {
        match self {
            Self::ManageOrganizations => Permission::new(Resource::Organizations, Action::Manage),
            Self::SwitchOrganizations => Permission::new(Resource::Organizations, Action::Switch),
            Self::CreateProjects => Permission::new(Resource::Projects, Action::Create),
            Self::ChangeProjectStatus => Permission::new(Resource::Projects, Action::ChangeStatus),
            Self::AssignTasks => Permission::new(Resource::Tasks, Action::Assign),
            Self::InviteUsers => Permission::new(Resource::Users, Action::Invite),
            Self::AssignRoles => Permission::new(Resource::Users, Action::AssignRole),
            Self::RemoveUsers => Permission::new(Resource::Users, Action::Remove),
            Self::AddUsersToProject => Permission::new(Resource::Users, Action::AddToProject),
        }
    }

    /// Returns whether a role enables this capability.
    #[must_use]
    pub fn enabled_for(&self, role: Role) -> bool {
        let permission = self.required_permission();
        PermissionTable::allows(role, permission.resource, permission.action)
    }
}
