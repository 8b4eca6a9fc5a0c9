use crate::{
    account_commands::AccountCommands, auth_commands::AuthCommands,
    profile_commands::ProfileCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Authentication operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Account operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// Open a role dashboard (access-gated)
    Dashboard {
        /// Dashboard role: student, teacher or admin
        role: String,
    },
}
