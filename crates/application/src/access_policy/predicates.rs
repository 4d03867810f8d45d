use super::*;

impl AccessPolicy {
    /// Returns whether the role is admin.
    #[must_use]
    pub fn is_admin(&self, role: Option<&str>) -> bool {
        self.has_role(role, Role::Admin)
    }

    /// Returns whether the role is manager.
    #[must_use]
    pub fn is_manager(&self, role: Option<&str>) -> bool {
        self.has_role(role, Role::Manager)
    }

    /// Returns whether the role is member, including unrecognised claims.
    #[must_use]
    pub fn is_member(&self, role: Option<&str>) -> bool {
        self.has_role(role, Role::Member)
    }

    /// Returns whether the role is manager or admin.
    #[must_use]
    pub fn is_manager_or_admin(&self, role: Option<&str>) -> bool {
        self.has_role(role, [Role::Manager, Role::Admin])
    }

    /// `organizations.manage`
    #[must_use]
    pub fn can_manage_organizations(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Organizations, Action::Manage)
    }

    /// `organizations.switch`
    #[must_use]
    pub fn can_switch_organizations(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Organizations, Action::Switch)
    }

    /// `projects.create`
    #[must_use]
    pub fn can_create_projects(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Projects, Action::Create)
    }

    /// `projects.change_status`
    #[must_use]
    pub fn can_change_project_status(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Projects, Action::ChangeStatus)
    }

    /// `tasks.assign`
    #[must_use]
    pub fn can_assign_tasks(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Tasks, Action::Assign)
    }

    /// `users.invite`
    #[must_use]
    pub fn can_invite_users(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Users, Action::Invite)
    }

    /// `users.assign_role`
    #[must_use]
    pub fn can_assign_roles(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Users, Action::AssignRole)
    }

    /// `users.remove`
    #[must_use]
    pub fn can_remove_users(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Users, Action::Remove)
    }

    /// `users.add_to_project`
    #[must_use]
    pub fn can_add_users_to_project(&self, role: Option<&str>) -> bool {
        self.has_permission(role, Resource::Users, Action::AddToProject)
    }
}
