//! Organization tree entities
//!
//! The tree mirrors the manifest: a root holding organizational units (one
//! level deep) and the accounts that stay at the root. Remote identifiers are
//! the source of truth; the tree is a cache refreshed before every mutation.

use std::path::PathBuf;

/// An account recorded in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Account {
    /// Remote id, empty until the account has been created
    pub id: String,
    /// Organization-wide unique alias
    pub alias: String,
    pub email: String,
    /// Rendered policy template for this account
    pub template: PathBuf,
}

impl Account {
    pub fn new(alias: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            alias: alias.into(),
            email: email.into(),
            template: PathBuf::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = template.into();
        self
    }
}

/// An organizational unit and the accounts placed in it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrganizationalUnit {
    pub id: String,
    pub name: String,
    /// Parent OU name; empty means the organization root
    pub parent: String,
    pub accounts: Vec<Account>,
}

impl OrganizationalUnit {
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            parent: parent.into(),
            accounts: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Where a new account lands in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Root-level account list
    Root,
    /// Named OU; the id records the OU if the manifest does not know it yet
    Unit { name: String, id: String },
}

/// A single mutation of the manifest tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestChange {
    NewOu(OrganizationalUnit),
    NewAccount {
        account: Account,
        placement: Placement,
    },
}

/// Root of the manifest tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Organization {
    pub organizational_units: Vec<OrganizationalUnit>,
    /// Accounts that stay at the organization root
    pub accounts: Vec<Account>,
}

impl Organization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one change in place
    pub fn apply(&mut self, change: ManifestChange) {
        match change {
            ManifestChange::NewOu(ou) => match self.unit_mut(&ou.name) {
                // A recreated unit keeps its recorded accounts under the new id
                Some(existing) => {
                    existing.id = ou.id;
                    existing.parent = ou.parent;
                }
                None => self.organizational_units.push(ou),
            },
            ManifestChange::NewAccount { account, placement } => match placement {
                Placement::Root => self.accounts.push(account),
                Placement::Unit { name, id } => {
                    if let Some(ou) = self.unit_mut(&name) {
                        ou.accounts.push(account);
                    } else {
                        let mut ou = OrganizationalUnit::new(name, "").with_id(id);
                        ou.accounts.push(account);
                        self.organizational_units.push(ou);
                    }
                }
            },
        }
    }

    pub fn unit(&self, name: &str) -> Option<&OrganizationalUnit> {
        self.organizational_units.iter().find(|ou| ou.name == name)
    }

    fn unit_mut(&mut self, name: &str) -> Option<&mut OrganizationalUnit> {
        self.organizational_units
            .iter_mut()
            .find(|ou| ou.name == name)
    }

    /// All accounts, OU members first in manifest order, then root-level ones
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.organizational_units
            .iter()
            .flat_map(|ou| ou.accounts.iter())
            .chain(self.accounts.iter())
    }

    pub fn find_account(&self, alias: &str) -> Option<&Account> {
        self.accounts().find(|a| a.alias == alias)
    }

    pub fn aliases(&self) -> Vec<String> {
        self.accounts().map(|a| a.alias.clone()).collect()
    }
}
