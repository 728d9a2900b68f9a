//! Account Options

/// One account to create
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRequest {
    pub alias: String,
    pub email: String,
    /// Target OU name; empty keeps the account at the root
    pub ou: String,
    /// Refresh the shared group stack after the account's policies deploy
    pub update_groups: bool,
}

impl AccountRequest {
    pub fn new(alias: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn in_ou(mut self, ou: impl Into<String>) -> Self {
        self.ou = ou.into();
        self
    }

    pub fn with_update_groups(mut self, update_groups: bool) -> Self {
        self.update_groups = update_groups;
        self
    }
}
