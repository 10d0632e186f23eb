use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "uploadpulse-cli", version, about = "Uploadpulse CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Channel snapshot and milestones
    Channel {
        #[command(subcommand)]
        action: commands::channel::ChannelAction,
    },
    /// Upload history analytics
    Analytics,
    /// Suggested next upload dates
    Forecast,
    /// Current urgency banner
    Urgency,
    /// Run one reminder evaluation (cron trigger)
    Evaluate,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// API credential management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Channel { action } => commands::channel::run(action),
        Commands::Analytics => commands::analytics::run(),
        Commands::Forecast => commands::forecast::run(),
        Commands::Urgency => commands::urgency::run(),
        Commands::Evaluate => commands::evaluate::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
