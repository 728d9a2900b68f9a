use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// orgov - AWS Organizations governor
#[derive(Parser, Debug)]
#[command(name = "orgov")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Named profile of the management account
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Role ARN assumed for organization and bucket calls
    #[arg(long, global = true)]
    pub role: Option<String>,

    /// Configuration file (defaults to ./orgov.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn the calling account into an organization root
    #[command(visible_alias = "co")]
    CreateOrganization,

    /// Create an organizational unit under the root
    #[command(visible_alias = "cr-ou")]
    CreateOu {
        /// Name of the new unit
        #[arg(long)]
        name: String,

        /// Parent name, empty or the root's name
        #[arg(long, default_value = "")]
        parent: String,
    },

    /// Create an account, place it in a unit and deploy its policies
    #[command(visible_alias = "cr-acc")]
    CreateAccount {
        /// Account alias
        #[arg(long)]
        name: String,

        /// Owner email address
        #[arg(long)]
        email: String,

        /// Target unit name (defaults to the root)
        #[arg(long, default_value = "")]
        ou: String,

        /// Refresh the shared group stack afterwards
        #[arg(long)]
        updateiam: bool,
    },

    /// Deploy policy stacks to recorded accounts
    #[command(visible_alias = "up-pol")]
    UpdatePolicy {
        /// Comma separated aliases (defaults to every recorded account)
        #[arg(long, visible_alias = "acc", value_delimiter = ',')]
        accounts: Vec<String>,

        /// Refresh the shared group stack afterwards
        #[arg(long)]
        updateiam: bool,
    },
}
