//! Create-ou command handler

use anyhow::{Context, Result};

use orgov::config::Config;
use orgov::presentation::factory::create_ou_use_case;

pub fn cmd_create_ou(config: &Config, name: &str, parent: &str) -> Result<()> {
    let use_case = create_ou_use_case(config)?;
    let outcome = use_case
        .ensure(name, parent)
        .with_context(|| format!("failed to create organizational unit '{name}'"))?;

    print!("{}", super::renderer().ou(name, &outcome));
    Ok(())
}
