use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with an email address or username
    Login {
        /// Email or username
        #[arg(long)]
        login: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in as it
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// WhatsApp-capable phone number
        #[arg(long)]
        phone: String,

        /// Account type: vendor or client
        #[arg(long, default_value = "client")]
        role: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        password_confirmation: String,
    },

    /// Sign out (always succeeds locally)
    Logout,

    /// Print the signed-in identity, or null
    Whoami,

    /// Print whether a session is active and where the landing page would send you
    Status,

    /// Resolve a page path through the route guard for the current session
    Navigate {
        /// Page path, e.g. /dashboard
        path: String,
    },

    /// Update profile fields of the signed-in account
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        whatsapp_number: Option<String>,
    },
}
