use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ProfileCommands {
    /// Show the profile, refreshed from the server
    Show,

    /// Update profile fields
    Update {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Change the account password
    ChangePassword {
        /// Current password
        #[arg(long)]
        current: String,

        /// New password (at least 6 characters)
        #[arg(long)]
        new: String,

        /// Repeat the new password
        #[arg(long)]
        confirm: String,
    },
}
