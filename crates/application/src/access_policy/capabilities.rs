use super::*;

impl AccessPolicy {
    /// Lists the capabilities a role enables, in display order.
    ///
    /// A capability is enabled when the role holds the one permission it
    /// requires.
    #[must_use]
    pub fn capabilities(&self, role: Option<&str>) -> Vec<Capability> {
        let normalized = self.normalize_role(role);
        Capability::all()
            .iter()
            .copied()
            .filter(|capability| capability.enabled_for(normalized))
            .collect()
    }

    /// Lists every permission the role holds.
    #[must_use]
    pub fn grants(&self, role: Option<&str>) -> Vec<Permission> {
        PermissionTable::grants(self.normalize_role(role))
    }
}
