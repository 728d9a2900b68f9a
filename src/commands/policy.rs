//! Update-policy command handler

use anyhow::{Context, Result};

use orgov::application::PolicyRequest;
use orgov::config::Config;
use orgov::domain::ports::ManifestStore;
use orgov::infrastructure::YamlManifestStore;
use orgov::presentation::factory::create_policy_use_case;

/// Aliases to deploy: the given list, or every recorded account
fn target_aliases(config: &Config, accounts: &[String]) -> Result<Vec<String>> {
    let requested: Vec<String> = accounts
        .iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();
    if !requested.is_empty() {
        return Ok(requested);
    }

    let store = YamlManifestStore::new(&config.manifest.path);
    let organization = store
        .load()
        .with_context(|| format!("failed to read {}", store.path().display()))?;
    Ok(organization.aliases())
}

pub fn cmd_update_policy(config: &Config, accounts: &[String], update_groups: bool) -> Result<()> {
    let aliases = target_aliases(config, accounts)?;
    if aliases.is_empty() {
        tracing::info!("no accounts recorded, nothing to deploy");
        return Ok(());
    }

    let use_case = create_policy_use_case(config)?;
    let request = PolicyRequest::new(aliases).with_update_groups(update_groups);
    let report = use_case
        .execute(&request)
        .context("policy deployment failed")?;

    let renderer = super::renderer();
    print!("{}", renderer.policies(&report));
    if !report.has_changes() {
        println!("No changes");
    }
    Ok(())
}
