use super::*;

/// Roles in effect for one request or render pass.
///
/// Built from the session identity and the currently selected team. It is
/// recomputed whenever the selection changes and is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessContext {
    subject: String,
    base_role: Role,
    team_role: Option<Role>,
    selected_team_id: Option<TeamId>,
}

impl AccessContext {
    /// Layers the selected team's role over the organization role.
    ///
    /// The team role wins when a team is selected and the user's membership
    /// record in it defines a non-blank role.
    #[must_use]
    pub fn resolve(identity: &UserIdentity, selected_team: Option<&Team>) -> Self {
        let base_role = Role::normalize(identity.role());
        let team_role = selected_team.and_then(|team| team.role_of(identity.subject()));

        Self {
            subject: identity.subject().to_owned(),
            base_role,
            team_role,
            selected_team_id: selected_team.map(|team| team.id().clone()),
        }
    }

    /// Returns the user id the context was resolved for.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the organization-level role.
    #[must_use]
    pub fn base_role(&self) -> Role {
        self.base_role
    }

    /// Returns the role held in the selected team, if any.
    #[must_use]
    pub fn team_role(&self) -> Option<Role> {
        self.team_role
    }

    /// Returns the selected team, if any.
    #[must_use]
    pub fn selected_team_id(&self) -> Option<&TeamId> {
        self.selected_team_id.as_ref()
    }

    /// Returns the role used for permission decisions.
    #[must_use]
    pub fn effective_role(&self) -> Role {
        self.team_role.unwrap_or(self.base_role)
    }
}

impl AccessPolicy {
    /// Resolves the effective role for a signed-in user and team selection.
    #[must_use]
    pub fn resolve_context(
        &self,
        identity: &UserIdentity,
        selected_team: Option<&Team>,
    ) -> AccessContext {
        let context = AccessContext::resolve(identity, selected_team);
        debug!(
            subject = identity.subject(),
            base_role = %context.base_role(),
            team_role = ?context.team_role(),
            effective_role = %context.effective_role(),
            "resolved access context"
        );
        context
    }

    /// Returns whether the context may perform `action` on `resource`.
    #[must_use]
    pub fn context_has_permission(
        &self,
        context: &AccessContext,
        resource: Resource,
        action: Action,
    ) -> bool {
        PermissionTable::allows(context.effective_role(), resource, action)
    }

    /// Returns whether the user may edit a project's details.
    ///
    /// Admins always may. Managers only when the project belongs to the
    /// selected team and they are a manager of that team.
    #[must_use]
    pub fn can_edit_project(&self, context: &AccessContext, project_team: Option<&TeamId>) -> bool {
        match context.effective_role() {
            Role::Admin => true,
            Role::Manager => match (context.selected_team_id(), project_team) {
                (Some(selected), Some(owner)) => {
                    selected == owner && context.team_role() == Some(Role::Manager)
                }
                _ => false,
            },
            Role::Member => false,
        }
    }
}
