//! Account Result

use crate::application::policy::PolicyReport;
use crate::domain::entities::Account;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOutcome {
    /// Created, placed, recorded and its policies deployed
    Created {
        account: Account,
        policies: PolicyReport,
    },
    /// Created and recorded at the root, but the move into its OU failed.
    /// Policies were not deployed.
    CreatedButUnplaced {
        account: Account,
        ou: String,
        reason: String,
    },
    /// Requested OU does not exist; nothing was done
    SkippedMissingOu { ou: String },
}

impl AccountOutcome {
    pub fn account(&self) -> Option<&Account> {
        match self {
            AccountOutcome::Created { account, .. }
            | AccountOutcome::CreatedButUnplaced { account, .. } => Some(account),
            AccountOutcome::SkippedMissingOu { .. } => None,
        }
    }
}
