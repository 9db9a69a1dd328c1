//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use signin_core::config;
use signin_core::{interrupt, logging};

mod commands;

pub use commands::login::SignInRejected;

#[derive(Parser)]
#[command(name = "signin")]
#[command(version)]
#[command(about = "Email and password sign-in form for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pre-fill the email field of the interactive form
    #[arg(long, value_name = "EMAIL")]
    email: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Submit credentials without the interactive form
    Login {
        /// Email address to sign in with
        #[arg(long)]
        email: String,

        /// Password to sign in with
        #[arg(long, env = "SIGNIN_PASSWORD", hide_env_values = true)]
        password: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check field validity without calling the authenticator
    Validate {
        /// Email value to check
        #[arg(long, default_value = "")]
        email: String,

        /// Password value to check
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init()?;

    let config = config::Config::load().context("load config")?;
    let _log_guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli, config).await })
}

async fn dispatch(cli: Cli, config: config::Config) -> Result<()> {
    let Cli { command, email } = cli;

    // default to the interactive form
    let Some(command) = command else {
        return commands::form::run(&config, email.as_deref());
    };

    match command {
        Commands::Login {
            email,
            password,
            json,
        } => {
            commands::login::run(
                &config,
                commands::login::LoginOptions {
                    email: &email,
                    password: &password,
                    json,
                },
            )
            .await
        }
        Commands::Validate { email, password } => {
            commands::validate::run(&email, &password);
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}
