//! Configuration module for orgov
//!
//! Resolution order:
//! 1. CLI flags (`--profile`, `--role`)
//! 2. Environment variables (ORGOV_*)
//! 3. `--config <path>`, else `./orgov.toml`, else `~/.config/orgov/config.toml`
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_env, discover, with_env_overrides, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    AccountsConfig, AwsConfig, CliOverrides, Config, ManifestConfig, OrganizationConfig,
    StackConfig, TemplatesConfig,
};
