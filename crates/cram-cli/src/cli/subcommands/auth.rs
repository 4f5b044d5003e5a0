use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an account.
    Register(AuthRegisterArgs),
    /// Clear the stored token.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email (prompted when omitted).
    #[arg(long)]
    pub email: Option<String>,
    /// Account password (prompted when omitted).
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    /// Display name (prompted when omitted).
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
}
