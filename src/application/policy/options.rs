//! Policy Options
//!
//! Request and settings types for policy deployment.

use crate::config::Config;
use crate::domain::value_objects::StackParameter;
use crate::error::OrgovResult;

/// Which accounts to deploy and whether to refresh the group stack afterwards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyRequest {
    /// Aliases in processing order, without repeats
    pub aliases: Vec<String>,
    pub update_groups: bool,
}

impl PolicyRequest {
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = alias.into();
            if !unique.contains(&alias) {
                unique.push(alias);
            }
        }
        Self {
            aliases: unique,
            update_groups: false,
        }
    }

    pub fn with_update_groups(mut self, update_groups: bool) -> Self {
        self.update_groups = update_groups;
        self
    }
}

/// Fixed inputs of every policy stack deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySettings {
    pub bucket: String,
    pub region: String,
    /// Role name assumed inside each member account
    pub access_role: String,
    pub identity_alias: String,
    pub production_alias: String,
    pub identity_parameter: String,
    pub production_parameter: String,
}

impl PolicySettings {
    pub fn from_config(config: &Config) -> OrgovResult<Self> {
        Ok(Self {
            bucket: config.templates.require_bucket()?.to_string(),
            region: config.aws.region.clone(),
            access_role: config.accounts.access_role.clone(),
            identity_alias: config.accounts.identity_alias.clone(),
            production_alias: config.accounts.production_alias.clone(),
            identity_parameter: config.stack.identity_parameter.clone(),
            production_parameter: config.stack.production_parameter.clone(),
        })
    }

    /// The two account id parameters every policy stack takes
    pub fn account_parameters(&self, identity_id: &str, production_id: &str) -> Vec<StackParameter> {
        vec![
            StackParameter::new(&self.identity_parameter, identity_id),
            StackParameter::new(&self.production_parameter, production_id),
        ]
    }
}
