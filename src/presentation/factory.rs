//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application: the resolved
//! [`Config`] is threaded into every adapter constructor.

use crate::application::{
    AccountUseCase, GroupParametersUseCase, OrganizationUseCase, OuUseCase, PolicySettings,
    PolicyUseCase,
};
use crate::config::Config;
use crate::error::{OrgovError, OrgovResult};
use crate::infrastructure::{
    AwsCli, AwsDirectory, AwsObjectStore, AwsStackConnector, FsPolicyTemplates, SystemClock,
    YamlManifestStore,
};

pub type ConcreteOrganizationUseCase = OrganizationUseCase<AwsDirectory>;

pub type ConcreteOuUseCase = OuUseCase<AwsDirectory, YamlManifestStore>;

/// Shared group stack refresher
pub type ConcreteGroupsUseCase =
    GroupParametersUseCase<YamlManifestStore, AwsObjectStore, FsPolicyTemplates, AwsStackConnector>;

pub type ConcretePolicyUseCase = PolicyUseCase<
    YamlManifestStore,
    AwsObjectStore,
    FsPolicyTemplates,
    AwsStackConnector,
    ConcreteGroupsUseCase,
>;

pub type ConcreteAccountUseCase = AccountUseCase<
    AwsDirectory,
    YamlManifestStore,
    FsPolicyTemplates,
    SystemClock,
    ConcretePolicyUseCase,
>;

/// Client for organization and bucket calls.
///
/// Acts through `aws.role` when one is configured.
pub fn organization_cli(config: &Config) -> OrgovResult<AwsCli> {
    let cli = AwsCli::new(&config.aws.cli, &config.aws.profile, &config.aws.region);
    match config.aws.role.as_deref() {
        Some(role) => cli
            .assume_role(role)
            .map_err(|e| OrgovError::remote("assume-role", role, e)),
        None => Ok(cli),
    }
}

fn manifest_store(config: &Config) -> YamlManifestStore {
    YamlManifestStore::new(&config.manifest.path)
}

fn policy_templates(config: &Config) -> FsPolicyTemplates {
    FsPolicyTemplates::new(&config.templates.source, &config.templates.output_dir)
}

fn stack_connector(cli: &AwsCli, config: &Config) -> AwsStackConnector {
    AwsStackConnector::new(cli.clone(), config.stack.capabilities.clone())
}

pub fn create_organization_use_case(config: &Config) -> OrgovResult<ConcreteOrganizationUseCase> {
    let cli = organization_cli(config)?;
    Ok(OrganizationUseCase::new(
        AwsDirectory::new(cli),
        &config.organization.feature_set,
    ))
}

pub fn create_ou_use_case(config: &Config) -> OrgovResult<ConcreteOuUseCase> {
    let cli = organization_cli(config)?;
    Ok(OuUseCase::new(AwsDirectory::new(cli), manifest_store(config)))
}

fn build_policy_use_case(cli: &AwsCli, config: &Config) -> OrgovResult<ConcretePolicyUseCase> {
    let settings = PolicySettings::from_config(config)?;
    let groups = GroupParametersUseCase::new(
        manifest_store(config),
        AwsObjectStore::new(cli.clone()),
        policy_templates(config),
        stack_connector(cli, config),
        settings.clone(),
    );

    Ok(PolicyUseCase::new(
        manifest_store(config),
        AwsObjectStore::new(cli.clone()),
        policy_templates(config),
        stack_connector(cli, config),
        groups,
        settings,
    ))
}

/// Create a policy use case
///
/// Fails when no template bucket is configured.
pub fn create_policy_use_case(config: &Config) -> OrgovResult<ConcretePolicyUseCase> {
    let cli = organization_cli(config)?;
    build_policy_use_case(&cli, config)
}

/// Create an account use case whose new accounts receive their policies
/// through [`create_policy_use_case`]'s wiring.
pub fn create_account_use_case(config: &Config) -> OrgovResult<ConcreteAccountUseCase> {
    let cli = organization_cli(config)?;
    let policies = build_policy_use_case(&cli, config)?;

    Ok(AccountUseCase::new(
        AwsDirectory::new(cli),
        manifest_store(config),
        policy_templates(config),
        SystemClock,
        policies,
        &config.accounts.billing_access,
    ))
}
