mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use fairdice_core::GameError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fairdice")]
#[command(about = "Provably fair non-transitive dice game")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play {
        /// Dice as comma-separated faces, e.g. 2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7
        #[arg(required = true)]
        dice: Vec<String>,
        /// Print every revealed round as JSON
        #[arg(long)]
        json: bool,
        /// Draws per dice pair for the help table
        #[arg(long)]
        trials: Option<u32>,
    },
    /// Check a disclosed round against its HMAC
    Verify {
        /// HMAC shown before your move (hex)
        #[arg(long)]
        tag: String,
        /// Value revealed by the computer
        #[arg(long)]
        value: u32,
        /// Key revealed by the computer (hex)
        #[arg(long)]
        secret: String,
    },
    /// Show win probabilities for the preset dice
    Odds {
        /// Enumerate face pairs instead of sampling
        #[arg(long)]
        exact: bool,
        /// Draws per dice pair
        #[arg(long)]
        trials: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "fairdice={},fairdice_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Play { dice, json, trials } => {
            let config = CliConfig::new(cli.verbose, json, trials);
            commands::play(&dice, &config)
        }
        Commands::Verify { tag, value, secret } => commands::verify(&tag, value, &secret),
        Commands::Odds { exact, trials } => {
            let config = CliConfig::new(cli.verbose, false, trials);
            commands::odds(exact, &config)
        }
    };

    if let Err(e) = result {
        match e.downcast_ref::<GameError>() {
            Some(GameError::Validation(_)) | Some(GameError::Configuration(_)) => {
                eprintln!("Error: {:#}", e);
                eprintln!("Example: fairdice play 2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7");
            }
            Some(GameError::IntegrityFault { round }) => {
                eprintln!("Error: the computer's reveal for the {} does not match its HMAC", round);
                eprintln!("The game was stopped, its result cannot be trusted");
            }
            _ => {
                eprintln!("Error: {:#}", e);
            }
        }
        std::process::exit(1);
    }
}
