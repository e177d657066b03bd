use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "houseflow")]
#[command(about = "Shared-house chore tracker with TUI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a scripted session headlessly and print each screen visited
    Walkthrough {
        /// Enter the house through this invite code instead of creating one
        #[arg(long, value_name = "CODE")]
        join: Option<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the invite codes accepted by the join screen
    Codes,

    /// Generate fresh invite codes
    Invite {
        /// How many codes to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Show members ranked by points
    Leaderboard,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
