use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AccountCommands {
    /// Permanently delete the account
    Delete {
        /// Type DELETE to confirm
        #[arg(long)]
        confirm: String,
    },
}
