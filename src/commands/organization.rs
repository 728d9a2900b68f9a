//! Create-organization command handler

use anyhow::{Context, Result};

use orgov::config::Config;
use orgov::presentation::factory::create_organization_use_case;

pub fn cmd_create_organization(config: &Config) -> Result<()> {
    let use_case = create_organization_use_case(config)?;
    let id = use_case
        .execute()
        .context("failed to create the organization")?;

    print!("{}", super::renderer().organization(&id));
    Ok(())
}
