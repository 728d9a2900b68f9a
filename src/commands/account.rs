//! Create-account command handler
//!
//! An account that was created but could not be moved into its unit is
//! reported and then turned into an error, so the process exits non-zero.

use anyhow::{Context, Result};

use orgov::application::{AccountOutcome, AccountRequest};
use orgov::config::Config;
use orgov::error::OrgovError;
use orgov::presentation::factory::create_account_use_case;

pub fn cmd_create_account(
    config: &Config,
    name: &str,
    email: &str,
    ou: &str,
    update_groups: bool,
) -> Result<()> {
    let use_case = create_account_use_case(config)?;
    let request = AccountRequest::new(name, email)
        .in_ou(ou)
        .with_update_groups(update_groups);

    let outcome = use_case
        .execute(&request)
        .with_context(|| format!("failed to create account '{name}'"))?;

    print!("{}", super::renderer().account(&outcome));

    if let AccountOutcome::CreatedButUnplaced {
        account,
        ou,
        reason,
    } = outcome
    {
        return Err(OrgovError::PlacementFailed {
            alias: account.alias,
            account_id: account.id,
            ou,
            reason,
        }
        .into());
    }
    Ok(())
}
