//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OrgovError, OrgovResult};

use super::loader::{self, ConfigWarning};

/// Cloud provider access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Role assumed for directory and object-store calls
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default = "default_region")]
    pub region: String,

    /// Command line executable driving the provider APIs
    #[serde(default = "default_cli")]
    pub cli: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            role: None,
            region: default_region(),
            cli: default_cli(),
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_region() -> String {
    "us-west-2".to_string()
}

fn default_cli() -> String {
    "aws".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
        }
    }
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("organization.yaml")
}

/// Policy template locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Bucket templates are published to
    #[serde(default)]
    pub bucket: Option<String>,

    /// Shared template copied for every new account
    #[serde(default = "default_template_source")]
    pub source: PathBuf,

    /// Directory rendered templates are written to
    #[serde(default = "default_template_dir")]
    pub output_dir: PathBuf,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            bucket: None,
            source: default_template_source(),
            output_dir: default_template_dir(),
        }
    }
}

impl TemplatesConfig {
    pub fn require_bucket(&self) -> OrgovResult<&str> {
        self.bucket.as_deref().filter(|b| !b.is_empty()).ok_or_else(|| {
            OrgovError::Config {
                file: PathBuf::from("orgov.toml"),
                message: "templates.bucket is not set (or set ORGOV_TEMPLATE_BUCKET)".to_string(),
            }
        })
    }
}

fn default_template_source() -> PathBuf {
    PathBuf::from("policies/template_policy.json")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("policies")
}

/// Well-known accounts and member account access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    /// Role assumed inside member accounts
    #[serde(default = "default_access_role")]
    pub access_role: String,

    #[serde(default = "default_billing_access")]
    pub billing_access: String,

    /// Alias of the shared identity account holding the group stack
    #[serde(default = "default_identity_alias")]
    pub identity_alias: String,

    #[serde(default = "default_production_alias")]
    pub production_alias: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            access_role: default_access_role(),
            billing_access: default_billing_access(),
            identity_alias: default_identity_alias(),
            production_alias: default_production_alias(),
        }
    }
}

fn default_access_role() -> String {
    "OrganizationAccountAccessRole".to_string()
}

fn default_billing_access() -> String {
    "ALLOW".to_string()
}

fn default_identity_alias() -> String {
    "iam".to_string()
}

fn default_production_alias() -> String {
    "prod".to_string()
}

/// Parameters and capabilities of the policy stacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    #[serde(default = "default_identity_parameter")]
    pub identity_parameter: String,

    #[serde(default = "default_production_parameter")]
    pub production_parameter: String,

    #[serde(default = "default_capabilities")]
    pub capabilities: Vec<String>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            identity_parameter: default_identity_parameter(),
            production_parameter: default_production_parameter(),
            capabilities: default_capabilities(),
        }
    }
}

fn default_identity_parameter() -> String {
    "IamAccountID".to_string()
}

// Deployed templates declare this exact key.
fn default_production_parameter() -> String {
    "ProdccountID".to_string()
}

fn default_capabilities() -> Vec<String> {
    vec!["CAPABILITY_NAMED_IAM".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationConfig {
    #[serde(default = "default_feature_set")]
    pub feature_set: String,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            feature_set: default_feature_set(),
        }
    }
}

fn default_feature_set() -> String {
    "ALL".to_string()
}

/// Command line values that take precedence over files and environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub profile: Option<String>,
    pub role: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub aws: AwsConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub accounts: AccountsConfig,

    #[serde(default)]
    pub stack: StackConfig,

    #[serde(default)]
    pub organization: OrganizationConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> OrgovResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> OrgovResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(profile) = &overrides.profile {
            self.aws.profile = profile.clone();
        }
        if let Some(role) = &overrides.role {
            self.aws.role = Some(role.clone()).filter(|r| !r.is_empty());
        }
        self
    }
}
