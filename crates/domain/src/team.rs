use serde::{Deserialize, Serialize};

use crate::ids::{TeamId, UserId};
use crate::security::Role;

/// Membership record of one user inside a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    user_id: UserId,
    #[serde(default)]
    role: Option<String>,
}

impl TeamMember {
    /// Creates a membership record with a raw role claim.
    #[must_use]
    pub fn new(user_id: UserId, role: Option<String>) -> Self {
        Self { user_id, role }
    }

    /// Returns the member's user id.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the raw role stored on the membership.
    #[must_use]
    pub fn raw_role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns the normalised role, or `None` when the record defines none.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(|value| Role::normalize(Some(value)))
    }
}

/// Team selected as the current working context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    #[serde(default)]
    members: Vec<TeamMember>,
}

impl Team {
    /// Creates a team snapshot.
    #[must_use]
    pub fn new(id: TeamId, name: impl Into<String>, members: Vec<TeamMember>) -> Self {
        Self {
            id,
            name: name.into(),
            members,
        }
    }

    /// Returns the team id.
    #[must_use]
    pub fn id(&self) -> &TeamId {
        &self.id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the membership records.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Returns the role the user holds in this team, if the record defines one.
    #[must_use]
    pub fn role_of(&self, user_id: &str) -> Option<Role> {
        self.members
            .iter()
            .find(|member| member.user_id().as_str() == user_id)
            .and_then(TeamMember::role)
    }
}
